use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::product::errors::ProductFieldError;

/// Product aggregate entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub number: ProductNumber,
    pub name: ProductName,
    pub price: i32,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Rename the product, touching its update timestamp.
    pub fn rename(&mut self, name: ProductName, at: DateTime<Utc>) {
        self.name = name;
        self.updated_at = at;
    }
}

/// Product not yet persisted; the store assigns its number.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: ProductName,
    pub price: i32,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
}

/// Store-owned product number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductNumber(pub i64);

impl fmt::Display for ProductNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Non-blank product name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductName(String);

impl ProductName {
    pub fn new(name: String) -> Result<Self, ProductFieldError> {
        if name.trim().is_empty() {
            Err(ProductFieldError::BlankName)
        } else {
            Ok(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new product
#[derive(Debug)]
pub struct CreateProductCommand {
    pub name: ProductName,
    pub price: i32,
    pub stock: i32,
}

impl CreateProductCommand {
    /// Construct a validated create command.
    ///
    /// # Errors
    /// * `NegativePrice` - Price below zero
    /// * `NegativeStock` - Stock below zero
    pub fn new(name: ProductName, price: i32, stock: i32) -> Result<Self, ProductFieldError> {
        if price < 0 {
            return Err(ProductFieldError::NegativePrice(price));
        }
        if stock < 0 {
            return Err(ProductFieldError::NegativeStock(stock));
        }
        Ok(Self { name, price, stock })
    }
}
