use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::cart::model::{CartHeader, LineItem, LineItemView};
use business::domain::pricing::lot::TierPrices;
use business::domain::shared::value_objects::OwnerPhone;

#[derive(Debug, FromRow)]
pub struct CartEntity {
    pub id: i64,
    pub owner_phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CartEntity {
    pub fn into_domain(self) -> CartHeader {
        CartHeader {
            id: self.id,
            owner: OwnerPhone::from_repository(self.owner_phone),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct CartItemEntity {
    pub cart_id: i64,
    pub product_id: i64,
    pub qty: i32,
}

impl CartItemEntity {
    pub fn into_domain(self) -> LineItem {
        LineItem {
            cart_id: self.cart_id,
            product_id: self.product_id,
            quantity: self.qty,
        }
    }
}

/// A cart line joined with the product columns needed to price it.
#[derive(Debug, FromRow)]
pub struct CartLineEntity {
    pub product_id: i64,
    pub name: String,
    pub qty: i32,
    pub price_50: BigDecimal,
    pub price_100: BigDecimal,
    pub price_200: BigDecimal,
}

impl CartLineEntity {
    pub fn into_domain(self) -> LineItemView {
        let prices = TierPrices {
            tier_a: self.price_50,
            tier_b: self.price_100,
            tier_c: self.price_200,
        };
        LineItemView::resolve(self.product_id, self.name, self.qty, &prices)
    }
}
