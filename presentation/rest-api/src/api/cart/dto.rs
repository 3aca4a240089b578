use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::cart::model::{Cart, CartChange, CartItemDelta, LineItemView, NewCartItem};

/// One product quantity in a request. Positive adds, negative removes,
/// zero drops the line.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CartItemRequest {
    pub product_id: i64,
    pub qty: i32,
}

impl From<&CartItemRequest> for NewCartItem {
    fn from(item: &CartItemRequest) -> Self {
        NewCartItem {
            product_id: item.product_id,
            quantity: item.qty,
        }
    }
}

impl From<&CartItemRequest> for CartItemDelta {
    fn from(item: &CartItemRequest) -> Self {
        CartItemDelta {
            product_id: item.product_id,
            quantity: item.qty,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CreateCartRequest {
    pub phone_number: String,
    #[oai(default)]
    #[serde(default)]
    pub items: Vec<CartItemRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CreateCartResponse {
    pub message: String,
    pub cart_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CartIdResponse {
    pub cart_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct UpdateCartRequest {
    /// Must be the owner of the cart being updated
    pub phone_number: String,
    pub items: Vec<CartItemRequest>,
}

/// Outcome of one applied delta.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CartChangeResponse {
    pub product_id: i64,
    /// "added", "decreased" or "removed"
    pub status: String,
    /// Units on the line after the change
    pub qty: i32,
}

impl From<CartChange> for CartChangeResponse {
    fn from(change: CartChange) -> Self {
        Self {
            product_id: change.product_id(),
            status: change.status().to_string(),
            qty: change.line_quantity(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct UpdateCartResponse {
    pub status: String,
    pub changes: Vec<CartChangeResponse>,
}

impl UpdateCartResponse {
    pub fn updated(changes: Vec<CartChange>) -> Self {
        Self {
            status: "updated".to_string(),
            changes: changes.into_iter().map(|c| c.into()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CartItemResponse {
    pub product_id: i64,
    pub name: String,
    pub qty: i32,
    /// Price tier applied to the line: "a", "b" or "c"
    pub tier: String,
    pub unit_price: String,
    pub subtotal: String,
}

impl From<LineItemView> for CartItemResponse {
    fn from(item: LineItemView) -> Self {
        Self {
            product_id: item.product_id,
            name: item.name,
            qty: item.quantity,
            tier: item.tier.to_string(),
            unit_price: item.unit_price.with_scale(2).to_string(),
            subtotal: item.subtotal.with_scale(2).to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CartResponse {
    pub cart_id: i64,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub items: Vec<CartItemResponse>,
    pub total: String,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        let total = cart.total().with_scale(2).to_string();
        Self {
            cart_id: cart.header.id,
            phone_number: cart.header.owner.as_str().to_string(),
            created_at: cart.header.created_at,
            updated_at: cart.header.updated_at,
            items: cart.items.into_iter().map(|i| i.into()).collect(),
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use business::domain::cart::model::CartHeader;
    use business::domain::pricing::lot::TierPrices;
    use business::domain::shared::value_objects::OwnerPhone;

    fn prices() -> TierPrices {
        TierPrices {
            tier_a: BigDecimal::from(12),
            tier_b: BigDecimal::from(11),
            tier_c: BigDecimal::from(10),
        }
    }

    #[test]
    fn should_render_cart_with_tiers_and_total() {
        let now = Utc::now();
        let cart = Cart {
            header: CartHeader {
                id: 3,
                owner: OwnerPhone::parse("555").unwrap(),
                created_at: now,
                updated_at: now,
            },
            items: vec![
                LineItemView::resolve(1, "Shirt".to_string(), 50, &prices()),
                LineItemView::resolve(2, "Cap".to_string(), 200, &prices()),
            ],
        };

        let response = CartResponse::from(cart);

        assert_eq!(response.phone_number, "555");
        assert_eq!(response.items[0].tier, "a");
        assert_eq!(response.items[0].subtotal, "600.00");
        assert_eq!(response.items[1].tier, "c");
        assert_eq!(response.total, "2600.00");
    }

    #[test]
    fn should_report_line_quantity_for_each_change() {
        let response = UpdateCartResponse::updated(vec![
            CartChange::Added {
                product_id: 1,
                added: 50,
                line_quantity: 150,
            },
            CartChange::Removed {
                product_id: 2,
                released: 100,
            },
        ]);

        assert_eq!(response.status, "updated");
        assert_eq!(response.changes[0].status, "added");
        assert_eq!(response.changes[0].qty, 150);
        assert_eq!(response.changes[1].status, "removed");
        assert_eq!(response.changes[1].qty, 0);
    }

    #[test]
    fn should_serialize_create_response_with_cart_id() {
        let response = CreateCartResponse {
            message: "Cart created".to_string(),
            cart_id: 12,
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "message": "Cart created", "cart_id": 12 })
        );
    }

    #[test]
    fn should_default_missing_items_to_empty_list() {
        let request: CreateCartRequest =
            serde_json::from_str(r#"{"phone_number": "555"}"#).unwrap();

        assert!(request.items.is_empty());
    }
}
