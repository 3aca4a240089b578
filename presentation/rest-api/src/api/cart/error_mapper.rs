use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;
use business::domain::errors::RepositoryError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            CartError::InvalidLotSize(_) | CartError::InvalidOwner => {
                (StatusCode::BAD_REQUEST, "ValidationError")
            }
            CartError::CartOwnerMismatch => (StatusCode::BAD_REQUEST, "OwnerMismatch"),
            CartError::CartNotFound | CartError::ProductNotFound(_) => {
                (StatusCode::NOT_FOUND, "NotFound")
            }
            CartError::ItemNotInCart { .. } => (StatusCode::NOT_FOUND, "ItemNotInCart"),
            CartError::CartAlreadyExists => (StatusCode::CONFLICT, "Conflict"),
            CartError::InsufficientStock { .. } => (StatusCode::CONFLICT, "InsufficientStock"),
            CartError::InsufficientCartQuantity { .. } => {
                (StatusCode::CONFLICT, "InsufficientCartQuantity")
            }
            CartError::StorageUnavailable(RepositoryError::Timeout) => {
                (StatusCode::SERVICE_UNAVAILABLE, "StorageUnavailable")
            }
            CartError::StorageUnavailable(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "StorageUnavailable")
            }
        };

        (
            status,
            Json(ErrorResponse::new(
                name,
                &self.to_string(),
                Some(self.detail()),
            )),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_stock_conflicts_to_409() {
        let (status, body) = CartError::InsufficientStock {
            product_id: 1,
            requested: 50,
            available: 20,
        }
        .into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.0.message, "cart.insufficient_stock");
        assert_eq!(
            body.0.detail.as_deref(),
            Some("product 1 has 20 units available, requested 50")
        );
    }

    #[test]
    fn should_map_validation_errors_to_400() {
        let (status, _) = CartError::InvalidLotSize(75).into_error_response();
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = CartError::CartOwnerMismatch.into_error_response();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_missing_entities_to_404() {
        let (status, _) = CartError::CartNotFound.into_error_response();
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = CartError::ProductNotFound(9).into_error_response();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.0.message, "product.not_found");
    }

    #[test]
    fn should_map_timeout_to_503_and_other_storage_failures_to_500() {
        let (status, _) =
            CartError::StorageUnavailable(RepositoryError::Timeout).into_error_response();
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

        let (status, _) =
            CartError::StorageUnavailable(RepositoryError::DatabaseError).into_error_response();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
