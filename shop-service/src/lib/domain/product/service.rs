use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::product::models::CreateProductCommand;
use crate::domain::product::models::NewProduct;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductName;
use crate::domain::product::models::ProductNumber;
use crate::product::errors::ProductError;
use crate::product::ports::ProductRepository;
use crate::product::ports::ProductServicePort;

/// Domain service implementation for product operations.
pub struct ProductService<PR>
where
    PR: ProductRepository,
{
    repository: Arc<PR>,
}

impl<PR> ProductService<PR>
where
    PR: ProductRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<PR> ProductServicePort for ProductService<PR>
where
    PR: ProductRepository,
{
    async fn get_product(&self, number: ProductNumber) -> Result<Product, ProductError> {
        let product = self
            .repository
            .find_by_number(number)
            .await?
            .ok_or(ProductError::NotFound(number.0))?;

        tracing::info!(number = %product.number, name = %product.name, "Product loaded");
        Ok(product)
    }

    async fn save_product(&self, command: CreateProductCommand) -> Result<Product, ProductError> {
        let saved = self
            .repository
            .insert(NewProduct {
                name: command.name,
                price: command.price,
                stock: command.stock,
                created_at: Utc::now(),
            })
            .await?;

        tracing::info!(number = %saved.number, price = saved.price, stock = saved.stock, "Product saved");
        Ok(saved)
    }

    async fn change_product_name(
        &self,
        number: ProductNumber,
        name: ProductName,
    ) -> Result<Product, ProductError> {
        let mut product = self
            .repository
            .find_by_number(number)
            .await?
            .ok_or(ProductError::NotFound(number.0))?;

        product.rename(name, Utc::now());

        let updated = self.repository.update(product).await?;
        tracing::info!(number = %updated.number, name = %updated.name, "Product renamed");
        Ok(updated)
    }

    async fn delete_product(&self, number: ProductNumber) -> Result<(), ProductError> {
        self.repository.delete(number).await?;

        tracing::info!(number = %number, "Product deleted");
        Ok(())
    }
}
