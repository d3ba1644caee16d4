use http::StatusCode;

use lion_connect_session::{ApiError, CoordinationError};

/// Helper trait for converting errors to a standard response error format
pub(super) trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)>;
}

/// Implementation for CoordinationError to map variants to appropriate status codes
impl<T> IntoResponseError<T> for Result<T, CoordinationError> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| {
            let status = match &e {
                CoordinationError::Api(ApiError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
                CoordinationError::Api(ApiError::NoSession) => StatusCode::UNAUTHORIZED,
                CoordinationError::Api(ApiError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
                CoordinationError::Api(ApiError::Timeout) => StatusCode::GATEWAY_TIMEOUT,
                CoordinationError::Api(ApiError::Network(_)) => StatusCode::BAD_GATEWAY,
                CoordinationError::Api(ApiError::Status(_)) => StatusCode::BAD_GATEWAY,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };

            // Field-level rejections keep their structure for the caller
            let message = match e {
                CoordinationError::Api(ApiError::Validation(errors)) => {
                    serde_json::to_string(&errors).unwrap_or_else(|_| join_field_errors(&errors))
                }
                other => other.to_string(),
            };
            (status, message)
        })
    }
}

fn join_field_errors(errors: &[lion_connect_session::FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}
