use crate::domain::pricing::lot::TierPrices;

pub type ProductId = i64;

/// A catalog product.
///
/// Stock is only ever changed through the inventory ledger; read paths
/// never mutate it.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub size: Option<String>,
    pub color: Option<String>,
    pub stock: i32,
    pub prices: TierPrices,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: ProductId,
        name: String,
        description: Option<String>,
        category: Option<String>,
        size: Option<String>,
        color: Option<String>,
        stock: i32,
        prices: TierPrices,
    ) -> Self {
        Self {
            id,
            name,
            description,
            category,
            size,
            color,
            stock,
            prices,
        }
    }
}
