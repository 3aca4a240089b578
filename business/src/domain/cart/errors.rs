use crate::domain::errors::RepositoryError;
use crate::domain::pricing::errors::PricingError;
use crate::domain::product::model::ProductId;
use crate::domain::shared::value_objects::InvalidOwnerPhone;

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.invalid_lot_size")]
    InvalidLotSize(i32),
    #[error("cart.invalid_owner")]
    InvalidOwner,
    #[error("cart.insufficient_stock")]
    InsufficientStock {
        product_id: ProductId,
        requested: i32,
        available: i32,
    },
    #[error("cart.item_not_in_cart")]
    ItemNotInCart { product_id: ProductId },
    #[error("cart.insufficient_cart_quantity")]
    InsufficientCartQuantity {
        product_id: ProductId,
        requested: i32,
        in_cart: i32,
    },
    #[error("cart.not_found")]
    CartNotFound,
    #[error("cart.already_exists")]
    CartAlreadyExists,
    #[error("cart.owner_mismatch")]
    CartOwnerMismatch,
    #[error("product.not_found")]
    ProductNotFound(ProductId),
    #[error("repository.unavailable")]
    StorageUnavailable(#[from] RepositoryError),
}

impl From<PricingError> for CartError {
    fn from(err: PricingError) -> Self {
        match err {
            PricingError::InvalidLotSize(quantity) => CartError::InvalidLotSize(quantity),
        }
    }
}

impl From<InvalidOwnerPhone> for CartError {
    fn from(_: InvalidOwnerPhone) -> Self {
        CartError::InvalidOwner
    }
}

impl CartError {
    /// Human readable detail for logs and API responses.
    pub fn detail(&self) -> String {
        match self {
            CartError::InvalidLotSize(quantity) => format!(
                "quantity must be 50, 100 or 200 units, received {}",
                quantity
            ),
            CartError::InvalidOwner => "owner phone is not valid".to_string(),
            CartError::InsufficientStock {
                product_id,
                requested,
                available,
            } => format!(
                "product {} has {} units available, requested {}",
                product_id, available, requested
            ),
            CartError::ItemNotInCart { product_id } => {
                format!("product {} is not in the cart", product_id)
            }
            CartError::InsufficientCartQuantity {
                product_id,
                requested,
                in_cart,
            } => format!(
                "cannot remove {} units of product {}, only {} in the cart",
                requested, product_id, in_cart
            ),
            CartError::CartNotFound => "cart not found".to_string(),
            CartError::CartAlreadyExists => "owner already has a cart".to_string(),
            CartError::CartOwnerMismatch => {
                "cart id does not belong to the given owner".to_string()
            }
            CartError::ProductNotFound(product_id) => {
                format!("product {} not found", product_id)
            }
            CartError::StorageUnavailable(err) => err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_pricing_rejection() {
        let err: CartError = PricingError::InvalidLotSize(75).into();
        assert!(matches!(err, CartError::InvalidLotSize(75)));
        assert_eq!(err.to_string(), "cart.invalid_lot_size");
    }

    #[test]
    fn should_describe_insufficient_cart_quantity() {
        let err = CartError::InsufficientCartQuantity {
            product_id: 1,
            requested: 200,
            in_cart: 50,
        };
        assert_eq!(
            err.detail(),
            "cannot remove 200 units of product 1, only 50 in the cart"
        );
    }
}
