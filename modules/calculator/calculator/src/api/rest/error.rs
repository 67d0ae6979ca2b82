//! Mapping of calculator failures onto HTTP responses.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use calculator_sdk::{CalculatorError, ErrorKind};
use http::StatusCode;

use super::dto::ErrorResponse;

/// Failure of a `/calculate` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Rejected by the arithmetic core or the operation lookup.
    Calculation(CalculatorError),
    /// An operand string that does not parse as a number.
    InvalidNumber(String),
    /// Request body over the configured size limit.
    PayloadTooLarge(String),
    /// Anything else: missing fields, wrong JSON types, unreadable body.
    Internal(String),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Calculation(e) if e.kind() == ErrorKind::MissingOperand => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Calculation(_) | Self::InvalidNumber(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Calculation(e) if e.kind() == ErrorKind::MissingOperand => {
                format!("Calculation error: {e}")
            }
            Self::Calculation(e) => e.to_string(),
            Self::InvalidNumber(s) => format!("could not convert string to float: '{s}'"),
            Self::PayloadTooLarge(detail) => detail.clone(),
            Self::Internal(detail) => format!("Calculation error: {detail}"),
        }
    }
}

impl From<CalculatorError> for ApiError {
    fn from(e: CalculatorError) -> Self {
        Self::Calculation(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge(rejection.body_text())
        } else {
            Self::Internal(rejection.body_text())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = self.message();
        if status.is_server_error() {
            tracing::warn!(status = status.as_u16(), %error, "calculation failed");
        } else {
            tracing::debug!(status = status.as_u16(), %error, "calculation rejected");
        }
        (status, Json(ErrorResponse { error })).into_response()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn domain_and_type_errors_are_bad_requests() {
        let e = ApiError::from(CalculatorError::domain("ln domain error: x must be > 0"));
        assert_eq!(e.status(), StatusCode::BAD_REQUEST);
        assert_eq!(e.message(), "ln domain error: x must be > 0");

        let e = ApiError::from(CalculatorError::type_error("factorial requires an integer"));
        assert_eq!(e.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unknown_operation_message() {
        let e = ApiError::from(CalculatorError::UnknownOperation("cbrt".to_owned()));
        assert_eq!(e.status(), StatusCode::BAD_REQUEST);
        assert_eq!(e.message(), "Unknown operation");
    }

    #[test]
    fn invalid_number_message() {
        let e = ApiError::InvalidNumber("abc".to_owned());
        assert_eq!(e.status(), StatusCode::BAD_REQUEST);
        assert_eq!(e.message(), "could not convert string to float: 'abc'");
    }

    #[test]
    fn internal_errors_are_wrapped() {
        let e = ApiError::Internal("missing field 'x'".to_owned());
        assert_eq!(e.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.message(), "Calculation error: missing field 'x'");

        let e = ApiError::from(CalculatorError::MissingOperand("b"));
        assert_eq!(e.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.message(), "Calculation error: missing operand 'b'");
    }

    #[test]
    fn oversized_body_keeps_its_status() {
        let e = ApiError::PayloadTooLarge("length limit exceeded".to_owned());
        assert_eq!(e.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(e.message(), "length limit exceeded");
    }
}
