use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;

/// Catalog product with its three lot prices.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub size: Option<String>,
    pub color: Option<String>,
    pub stock: i32,
    /// Unit price for lines under 100 units
    pub price_50: String,
    /// Unit price for lines of 100 to 199 units
    pub price_100: String,
    /// Unit price for lines of 200 units or more
    pub price_200: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            category: product.category,
            size: product.size,
            color: product.color,
            stock: product.stock,
            price_50: product.prices.tier_a.with_scale(2).to_string(),
            price_100: product.prices.tier_b.with_scale(2).to_string(),
            price_200: product.prices.tier_c.with_scale(2).to_string(),
        }
    }
}
