use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::product::models::Product;

pub mod change_product_name;
pub mod create_product;
pub mod delete_product;
pub mod get_product;

pub use change_product_name::change_product_name;
pub use create_product::create_product;
pub use delete_product::delete_product;
pub use get_product::get_product;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProductResponseData {
    pub number: i64,
    pub name: String,
    pub price: i32,
    pub stock: i32,
}

impl From<&Product> for ProductResponseData {
    fn from(product: &Product) -> Self {
        Self {
            number: product.number.0,
            name: product.name.as_str().to_string(),
            price: product.price,
            stock: product.stock,
        }
    }
}
