use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CartChange, CartId, CartItemDelta};
use crate::domain::shared::value_objects::OwnerPhone;

pub struct UpdateCartParams {
    pub cart_id: CartId,
    pub owner: OwnerPhone,
    pub items: Vec<CartItemDelta>,
}

#[async_trait]
pub trait UpdateCartUseCase: Send + Sync {
    async fn execute(&self, params: UpdateCartParams) -> Result<Vec<CartChange>, CartError>;
}
