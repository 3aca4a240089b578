use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};

use crate::domain::pricing::lot::{PriceTier, TierPrices};
use crate::domain::product::model::ProductId;
use crate::domain::shared::value_objects::OwnerPhone;

pub type CartId = i64;

#[derive(Debug, Clone, PartialEq)]
pub struct CartHeader {
    pub id: CartId,
    pub owner: OwnerPhone,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Addresses a cart either through its owner or directly by id.
#[derive(Debug, Clone, PartialEq)]
pub enum CartRef {
    Owner(OwnerPhone),
    Id(CartId),
}

impl std::fmt::Display for CartRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartRef::Owner(owner) => write!(f, "owner {}", owner),
            CartRef::Id(id) => write!(f, "cart {}", id),
        }
    }
}

/// Raw stored line. A persisted line always has a positive quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineItem {
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub quantity: i32,
}

impl LineItem {
    pub fn tier(&self) -> PriceTier {
        PriceTier::for_quantity(self.quantity)
    }
}

/// A line item joined with its product, priced by tier.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItemView {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: i32,
    pub tier: PriceTier,
    pub unit_price: BigDecimal,
    pub subtotal: BigDecimal,
}

impl LineItemView {
    pub fn resolve(product_id: ProductId, name: String, quantity: i32, prices: &TierPrices) -> Self {
        let tier = PriceTier::for_quantity(quantity);
        let unit_price = prices.unit_price_for_quantity(quantity).clone();
        let subtotal = &unit_price * BigDecimal::from(quantity);
        Self {
            product_id,
            name,
            quantity,
            tier,
            unit_price,
            subtotal,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub header: CartHeader,
    pub items: Vec<LineItemView>,
}

impl Cart {
    pub fn total(&self) -> BigDecimal {
        self.items
            .iter()
            .fold(BigDecimal::from(0), |acc, item| acc + &item.subtotal)
    }
}

/// Requested initial item when creating a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewCartItem {
    pub product_id: ProductId,
    pub quantity: i32,
}

/// Signed quantity change for one product of a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartItemDelta {
    pub product_id: ProductId,
    pub quantity: i32,
}

/// Outcome of one applied cart mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    Added {
        product_id: ProductId,
        added: i32,
        line_quantity: i32,
    },
    Decreased {
        product_id: ProductId,
        removed: i32,
        line_quantity: i32,
    },
    Removed {
        product_id: ProductId,
        released: i32,
    },
}

impl CartChange {
    pub fn product_id(&self) -> ProductId {
        match self {
            CartChange::Added { product_id, .. }
            | CartChange::Decreased { product_id, .. }
            | CartChange::Removed { product_id, .. } => *product_id,
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            CartChange::Added { .. } => "added",
            CartChange::Decreased { line_quantity: 0, .. } => "removed",
            CartChange::Decreased { .. } => "decreased",
            CartChange::Removed { .. } => "removed",
        }
    }

    /// Quantity left on the line after the change (0 when the line is gone).
    pub fn line_quantity(&self) -> i32 {
        match self {
            CartChange::Added { line_quantity, .. } | CartChange::Decreased { line_quantity, .. } => {
                *line_quantity
            }
            CartChange::Removed { .. } => 0,
        }
    }
}
