use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::product::model::ProductId;
use crate::domain::shared::value_objects::OwnerPhone;

use super::model::{CartHeader, CartId, LineItem, LineItemView};

/// Result of an atomic conditional stock decrement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockReservation {
    Reserved { remaining: i32 },
    Insufficient { available: i32 },
}

/// Owns product stock counters.
///
/// `reserve` must check and decrement in one atomic step against the stock
/// seen by the enclosing transaction. Both operations answer
/// `RepositoryError::NotFound` for an unknown product.
#[async_trait]
pub trait InventoryLedger: Send {
    async fn reserve(
        &mut self,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<StockReservation, RepositoryError>;

    /// Returns the stock after the release. No upper bound is enforced.
    async fn release(
        &mut self,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<i32, RepositoryError>;
}

/// Owns cart headers and their line items.
///
/// Every line mutation touches the cart's `updated_at`.
#[async_trait]
pub trait CartStore: Send {
    /// Fails with `RepositoryError::Duplicated` when the owner already has a cart.
    async fn create_header(&mut self, owner: &OwnerPhone) -> Result<CartHeader, RepositoryError>;

    async fn get_or_fail(&mut self, cart_id: CartId) -> Result<CartHeader, RepositoryError>;

    /// Reads a line and locks it for the rest of the transaction.
    async fn find_line(
        &mut self,
        cart_id: CartId,
        product_id: ProductId,
    ) -> Result<Option<LineItem>, RepositoryError>;

    /// Adds `delta` to the line, creating it when missing.
    async fn upsert_line(
        &mut self,
        cart_id: CartId,
        product_id: ProductId,
        delta: i32,
    ) -> Result<LineItem, RepositoryError>;

    /// Raw subtraction; the caller collapses non-positive results.
    async fn decrement_line(
        &mut self,
        cart_id: CartId,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<LineItem, RepositoryError>;

    /// Idempotent; returns the deleted line if there was one.
    async fn delete_line(
        &mut self,
        cart_id: CartId,
        product_id: ProductId,
    ) -> Result<Option<LineItem>, RepositoryError>;
}

/// One transactional scope over both the ledger and the cart store.
///
/// Dropping it without `commit` discards every change made through it.
#[async_trait]
pub trait CartUnitOfWork: InventoryLedger + CartStore {
    async fn commit(&mut self) -> Result<(), RepositoryError>;
}

/// Entry point to cart storage: read paths plus transaction factory.
#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn find_id_by_owner(&self, owner: &OwnerPhone) -> Result<Option<CartId>, RepositoryError>;
    async fn get_header(&self, cart_id: CartId) -> Result<CartHeader, RepositoryError>;
    async fn list_lines(&self, cart_id: CartId) -> Result<Vec<LineItemView>, RepositoryError>;
    async fn begin(&self) -> Result<Box<dyn CartUnitOfWork>, RepositoryError>;
}
