use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CartId, NewCartItem};
use crate::domain::shared::value_objects::OwnerPhone;

pub struct CreateCartParams {
    pub owner: OwnerPhone,
    pub items: Vec<NewCartItem>,
}

#[async_trait]
pub trait CreateCartUseCase: Send + Sync {
    async fn execute(&self, params: CreateCartParams) -> Result<CartId, CartError>;
}
