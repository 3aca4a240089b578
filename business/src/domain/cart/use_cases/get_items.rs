use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CartId, LineItemView};

pub struct GetCartItemsParams {
    pub cart_id: CartId,
}

#[async_trait]
pub trait GetCartItemsUseCase: Send + Sync {
    async fn execute(&self, params: GetCartItemsParams) -> Result<Vec<LineItemView>, CartError>;
}
