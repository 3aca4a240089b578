use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::cart::model::{CartHeader, CartId, LineItemView};
use business::domain::cart::repository::{CartRepository, CartUnitOfWork};
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::OwnerPhone;

use super::entity::{CartEntity, CartLineEntity};
use super::unit_of_work::PgCartUnitOfWork;
use crate::error::map_sqlx_error;

pub struct CartRepositoryPostgres {
    pool: PgPool,
}

impl CartRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryPostgres {
    async fn find_id_by_owner(&self, owner: &OwnerPhone) -> Result<Option<CartId>, RepositoryError> {
        sqlx::query_scalar::<_, i64>("SELECT id FROM carts WHERE owner_phone = $1")
            .bind(owner.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn get_header(&self, cart_id: CartId) -> Result<CartHeader, RepositoryError> {
        let entity = sqlx::query_as::<_, CartEntity>(
            "SELECT id, owner_phone, created_at, updated_at FROM carts WHERE id = $1",
        )
        .bind(cart_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn list_lines(&self, cart_id: CartId) -> Result<Vec<LineItemView>, RepositoryError> {
        let entities = sqlx::query_as::<_, CartLineEntity>(
            r#"SELECT ci.product_id, p.name, ci.qty, p.price_50, p.price_100, p.price_200
            FROM cart_items ci
            JOIN products p ON ci.product_id = p.id
            WHERE ci.cart_id = $1
            ORDER BY ci.product_id"#,
        )
        .bind(cart_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn begin(&self) -> Result<Box<dyn CartUnitOfWork>, RepositoryError> {
        let uow = PgCartUnitOfWork::begin(&self.pool).await?;
        Ok(Box::new(uow))
    }
}
