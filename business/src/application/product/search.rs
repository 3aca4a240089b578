use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::search::{SearchProductsParams, SearchProductsUseCase};

pub struct SearchProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchProductsUseCase for SearchProductsUseCaseImpl {
    async fn execute(&self, params: SearchProductsParams) -> Result<Vec<Product>, ProductError> {
        if params.filter.is_empty() {
            self.logger.info("Listing the whole catalog");
        } else {
            self.logger
                .info(&format!("Searching products with filters: {}", params.filter));
        }

        let products = self.repository.search(&params.filter).await?;

        self.logger
            .debug(&format!("Product search returned {} result(s)", products.len()));
        Ok(products)
    }
}
