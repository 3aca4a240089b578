use bigdecimal::BigDecimal;
use sqlx::FromRow;

use business::domain::pricing::lot::TierPrices;
use business::domain::product::model::Product;

pub(crate) const PRODUCT_COLUMNS: &str =
    "id, name, description, category, size, color, stock, price_50, price_100, price_200";

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub size: Option<String>,
    pub color: Option<String>,
    pub stock: i32,
    pub price_50: BigDecimal,
    pub price_100: BigDecimal,
    pub price_200: BigDecimal,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.description,
            self.category,
            self.size,
            self.color,
            self.stock,
            TierPrices {
                tier_a: self.price_50,
                tier_b: self.price_100,
                tier_c: self.price_200,
            },
        )
    }
}
