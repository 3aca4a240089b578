use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::errors::RepositoryError;
use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            ProductError::Repository(RepositoryError::Timeout) => {
                (StatusCode::SERVICE_UNAVAILABLE, "StorageUnavailable")
            }
            ProductError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (status, Json(ErrorResponse::new(name, &self.to_string(), None)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_missing_product_to_404() {
        let (status, body) = ProductError::NotFound.into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.0.message, "product.not_found");
    }

    #[test]
    fn should_map_timeout_to_503() {
        let (status, _) = ProductError::Repository(RepositoryError::Timeout).into_error_response();

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
