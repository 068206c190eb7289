use thiserror::Error;

/// Error for product field validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductFieldError {
    #[error("Product name must not be blank")]
    BlankName,

    #[error("Product price must not be negative, got {0}")]
    NegativePrice(i32),

    #[error("Product stock must not be negative, got {0}")]
    NegativeStock(i32),
}

/// Top-level error for all product operations
#[derive(Debug, Clone, Error)]
pub enum ProductError {
    #[error("Invalid product: {0}")]
    InvalidField(#[from] ProductFieldError),

    #[error("Product not found: {0}")]
    NotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
