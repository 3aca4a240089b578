use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartId;
use crate::domain::shared::value_objects::OwnerPhone;

pub struct GetCartIdParams {
    pub owner: OwnerPhone,
}

#[async_trait]
pub trait GetCartIdUseCase: Send + Sync {
    async fn execute(&self, params: GetCartIdParams) -> Result<CartId, CartError>;
}
