use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CartChange, CartRef};
use crate::domain::product::model::ProductId;

pub struct ApplyCartDeltaParams {
    pub cart: CartRef,
    pub product_id: ProductId,
    /// Positive adds, negative decreases, zero removes the line.
    pub quantity: i32,
}

#[async_trait]
pub trait ApplyCartDeltaUseCase: Send + Sync {
    async fn execute(&self, params: ApplyCartDeltaParams) -> Result<CartChange, CartError>;
}
