use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    /// Stable error code, e.g. `cart.insufficient_stock`
    pub message: String,
    /// Human readable context when the code alone is not enough
    pub detail: Option<String>,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str, detail: Option<String>) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
            detail,
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
