use poem::http::StatusCode;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self, context: &str) -> (StatusCode, ErrorResponse) {
        let status = match &self {
            ProductError::InvalidDeactivationDate(_) | ProductError::InvalidPrice => {
                StatusCode::BAD_REQUEST
            }
            ProductError::SaveReturnedEmpty
            | ProductError::UpdateReturnedEmpty
            | ProductError::Rpc(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            ErrorResponse::new(format!("{}: {}", context, self)),
        )
    }
}
