use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::orchestrator::cart_not_found;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::LineItemView;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get_items::{GetCartItemsParams, GetCartItemsUseCase};
use crate::domain::logger::Logger;

pub struct GetCartItemsUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartItemsUseCase for GetCartItemsUseCaseImpl {
    async fn execute(&self, params: GetCartItemsParams) -> Result<Vec<LineItemView>, CartError> {
        self.logger
            .debug(&format!("Fetching items of cart {}", params.cart_id));

        self.repository
            .get_header(params.cart_id)
            .await
            .map_err(cart_not_found)?;

        Ok(self.repository.list_lines(params.cart_id).await?)
    }
}
