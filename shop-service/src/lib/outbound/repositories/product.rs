use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::product::models::NewProduct;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductName;
use crate::domain::product::models::ProductNumber;
use crate::domain::product::ports::ProductRepository;
use crate::product::errors::ProductError;

pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProductRow {
    number: i64,
    name: String,
    price: i32,
    stock: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = ProductError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(Product {
            number: ProductNumber(row.number),
            name: ProductName::new(row.name)?,
            price: row.price,
            stock: row.stock,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn database_error(e: sqlx::Error) -> ProductError {
    ProductError::DatabaseError(e.to_string())
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn insert(&self, product: NewProduct) -> Result<Product, ProductError> {
        sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO product (name, price, stock, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            RETURNING number, name, price, stock, created_at, updated_at
            "#,
        )
        .bind(product.name.as_str())
        .bind(product.price)
        .bind(product.stock)
        .bind(product.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?
        .try_into()
    }

    async fn find_by_number(&self, number: ProductNumber) -> Result<Option<Product>, ProductError> {
        sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT number, name, price, stock, created_at, updated_at
            FROM product
            WHERE number = $1
            "#,
        )
        .bind(number.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .map(Product::try_from)
        .transpose()
    }

    async fn update(&self, product: Product) -> Result<Product, ProductError> {
        let result = sqlx::query(
            r#"
            UPDATE product
            SET name = $2, price = $3, stock = $4, updated_at = $5
            WHERE number = $1
            "#,
        )
        .bind(product.number.0)
        .bind(product.name.as_str())
        .bind(product.price)
        .bind(product.stock)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(ProductError::NotFound(product.number.0));
        }

        Ok(product)
    }

    async fn delete(&self, number: ProductNumber) -> Result<(), ProductError> {
        let result = sqlx::query(
            r#"
            DELETE FROM product
            WHERE number = $1
            "#,
        )
        .bind(number.0)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(ProductError::NotFound(number.0));
        }

        Ok(())
    }
}
