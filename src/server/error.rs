//! Errors raised while handling a sort request.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::input::InvalidInput;
use crate::render::EXAMPLE_INPUT;

/// Reasons a submission is rejected before it reaches the engine.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The number list could not be parsed.
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),

    /// The list is longer than the configured limit.
    #[error("Too many numbers ({count}). At most {max} can be sorted at once.")]
    TooManyNumbers { count: usize, max: usize },

    /// The JSON body is malformed or has fields of the wrong shape, such as
    /// an unknown sort order.
    #[error("{}", .0.body_text())]
    Body(#[from] JsonRejection),
}

impl RequestError {
    pub fn status(&self) -> StatusCode {
        match self {
            RequestError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            RequestError::TooManyNumbers { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            RequestError::Body(rejection) => rejection.status(),
        }
    }
}

/// JSON body returned for rejected API requests.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub example: &'static str,
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
            example: EXAMPLE_INPUT,
        };

        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_is_bad_request() {
        let err = RequestError::from(InvalidInput::Empty);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), InvalidInput::Empty.to_string());
    }

    #[test]
    fn too_many_numbers_is_payload_too_large() {
        let err = RequestError::TooManyNumbers { count: 300, max: 200 };
        assert_eq!(err.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(
            err.to_string(),
            "Too many numbers (300). At most 200 can be sorted at once."
        );
    }

    #[test]
    fn response_carries_status() {
        let response = RequestError::from(InvalidInput::NoNumbers).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
