use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::filter::ProductFilter;
use super::model::{Product, ProductId};

/// Read-only access to the catalog.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
    async fn search(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError>;
}
