use async_trait::async_trait;

use crate::domain::product::models::CreateProductCommand;
use crate::domain::product::models::NewProduct;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductName;
use crate::domain::product::models::ProductNumber;
use crate::product::errors::ProductError;

/// Port for product domain service operations.
#[async_trait]
pub trait ProductServicePort: Send + Sync + 'static {
    /// Retrieve a product by number.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_product(&self, number: ProductNumber) -> Result<Product, ProductError>;

    /// Register a new product.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn save_product(&self, command: CreateProductCommand) -> Result<Product, ProductError>;

    /// Rename an existing product.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    /// * `DatabaseError` - Database operation failed
    async fn change_product_name(
        &self,
        number: ProductNumber,
        name: ProductName,
    ) -> Result<Product, ProductError>;

    /// Remove a product.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_product(&self, number: ProductNumber) -> Result<(), ProductError>;
}

/// Persistence operations for products.
#[async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    /// Persist a new product, returning it with its assigned number.
    async fn insert(&self, product: NewProduct) -> Result<Product, ProductError>;

    /// Retrieve product by number (None if not found).
    async fn find_by_number(&self, number: ProductNumber) -> Result<Option<Product>, ProductError>;

    /// Overwrite the stored product.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    async fn update(&self, product: Product) -> Result<Product, ProductError>;

    /// Remove product from storage.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    async fn delete(&self, number: ProductNumber) -> Result<(), ProductError>;
}
