use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use business::domain::cart::model::{CartHeader, CartId, LineItem};
use business::domain::cart::repository::{
    CartStore, CartUnitOfWork, InventoryLedger, StockReservation,
};
use business::domain::errors::RepositoryError;
use business::domain::product::model::ProductId;
use business::domain::shared::value_objects::OwnerPhone;

use super::entity::{CartEntity, CartItemEntity};
use crate::error::map_sqlx_error;

/// A cart mutation running inside one PostgreSQL transaction.
///
/// The transaction rolls back when this value is dropped before `commit`.
pub struct PgCartUnitOfWork {
    tx: Option<Transaction<'static, Postgres>>,
}

impl PgCartUnitOfWork {
    pub async fn begin(pool: &PgPool) -> Result<Self, RepositoryError> {
        let tx = pool.begin().await.map_err(map_sqlx_error)?;
        Ok(Self { tx: Some(tx) })
    }

    fn tx(&mut self) -> Result<&mut Transaction<'static, Postgres>, RepositoryError> {
        self.tx.as_mut().ok_or_else(|| {
            tracing::error!("Cart transaction used after commit");
            RepositoryError::DatabaseError
        })
    }

    async fn touch_cart(&mut self, cart_id: CartId) -> Result<(), RepositoryError> {
        let tx = self.tx()?;
        sqlx::query("UPDATE carts SET updated_at = NOW() WHERE id = $1")
            .bind(cart_id)
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }
}

#[async_trait]
impl InventoryLedger for PgCartUnitOfWork {
    async fn reserve(
        &mut self,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<StockReservation, RepositoryError> {
        let tx = self.tx()?;
        let remaining = sqlx::query_scalar::<_, i32>(
            "UPDATE products SET stock = stock - $2 WHERE id = $1 AND stock >= $2 RETURNING stock",
        )
        .bind(product_id)
        .bind(quantity)
        .fetch_optional(&mut **tx)
        .await
        .map_err(map_sqlx_error)?;

        if let Some(remaining) = remaining {
            return Ok(StockReservation::Reserved { remaining });
        }

        let available = sqlx::query_scalar::<_, i32>("SELECT stock FROM products WHERE id = $1")
            .bind(product_id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(map_sqlx_error)?
            .ok_or(RepositoryError::NotFound)?;

        Ok(StockReservation::Insufficient { available })
    }

    async fn release(
        &mut self,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<i32, RepositoryError> {
        let tx = self.tx()?;
        sqlx::query_scalar::<_, i32>(
            "UPDATE products SET stock = stock + $2 WHERE id = $1 RETURNING stock",
        )
        .bind(product_id)
        .bind(quantity)
        .fetch_optional(&mut **tx)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl CartStore for PgCartUnitOfWork {
    async fn create_header(&mut self, owner: &OwnerPhone) -> Result<CartHeader, RepositoryError> {
        let tx = self.tx()?;
        let entity = sqlx::query_as::<_, CartEntity>(
            r#"INSERT INTO carts (owner_phone)
            VALUES ($1)
            RETURNING id, owner_phone, created_at, updated_at"#,
        )
        .bind(owner.as_str())
        .fetch_one(&mut **tx)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.into_domain())
    }

    async fn get_or_fail(&mut self, cart_id: CartId) -> Result<CartHeader, RepositoryError> {
        let tx = self.tx()?;
        let entity = sqlx::query_as::<_, CartEntity>(
            "SELECT id, owner_phone, created_at, updated_at FROM carts WHERE id = $1",
        )
        .bind(cart_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn find_line(
        &mut self,
        cart_id: CartId,
        product_id: ProductId,
    ) -> Result<Option<LineItem>, RepositoryError> {
        let tx = self.tx()?;
        let entity = sqlx::query_as::<_, CartItemEntity>(
            r#"SELECT cart_id, product_id, qty FROM cart_items
            WHERE cart_id = $1 AND product_id = $2
            FOR UPDATE"#,
        )
        .bind(cart_id)
        .bind(product_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn upsert_line(
        &mut self,
        cart_id: CartId,
        product_id: ProductId,
        delta: i32,
    ) -> Result<LineItem, RepositoryError> {
        let tx = self.tx()?;
        let entity = sqlx::query_as::<_, CartItemEntity>(
            r#"INSERT INTO cart_items (cart_id, product_id, qty)
            VALUES ($1, $2, $3)
            ON CONFLICT (cart_id, product_id)
            DO UPDATE SET qty = cart_items.qty + EXCLUDED.qty
            RETURNING cart_id, product_id, qty"#,
        )
        .bind(cart_id)
        .bind(product_id)
        .bind(delta)
        .fetch_one(&mut **tx)
        .await
        .map_err(map_sqlx_error)?;

        self.touch_cart(cart_id).await?;
        Ok(entity.into_domain())
    }

    async fn decrement_line(
        &mut self,
        cart_id: CartId,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<LineItem, RepositoryError> {
        let tx = self.tx()?;
        let entity = sqlx::query_as::<_, CartItemEntity>(
            r#"UPDATE cart_items SET qty = qty - $3
            WHERE cart_id = $1 AND product_id = $2
            RETURNING cart_id, product_id, qty"#,
        )
        .bind(cart_id)
        .bind(product_id)
        .bind(quantity)
        .fetch_optional(&mut **tx)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        self.touch_cart(cart_id).await?;
        Ok(entity.into_domain())
    }

    async fn delete_line(
        &mut self,
        cart_id: CartId,
        product_id: ProductId,
    ) -> Result<Option<LineItem>, RepositoryError> {
        let tx = self.tx()?;
        let entity = sqlx::query_as::<_, CartItemEntity>(
            r#"DELETE FROM cart_items
            WHERE cart_id = $1 AND product_id = $2
            RETURNING cart_id, product_id, qty"#,
        )
        .bind(cart_id)
        .bind(product_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(map_sqlx_error)?;

        if entity.is_some() {
            self.touch_cart(cart_id).await?;
        }
        Ok(entity.map(|e| e.into_domain()))
    }
}

#[async_trait]
impl CartUnitOfWork for PgCartUnitOfWork {
    async fn commit(&mut self) -> Result<(), RepositoryError> {
        let tx = self.tx.take().ok_or(RepositoryError::DatabaseError)?;
        tx.commit().await.map_err(map_sqlx_error)
    }
}
