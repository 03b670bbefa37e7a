// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorResponse;

pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
pub const PROMPT_REQUIRED: &str = "Prompt is required";
pub const FETCH_FAILED: &str = "Failed to fetch response from AI.";
pub const NO_RESPONSE: &str = "No response from AI.";
pub const INTERNAL_ERROR: &str = "An internal error occurred.";

/// Failures of the single upstream call. The details are for server logs only.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("credential variable {0} is not set")]
    MissingApiKey(String),

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("upstream returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("malformed upstream body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("upstream reply carried no text")]
    NoText,
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        UpstreamError::Transport(err.without_url())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("prompt is required")]
    PromptRequired,

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::PromptRequired => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The fixed message shown to the caller. Never derived from the inner error.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::MethodNotAllowed => METHOD_NOT_ALLOWED,
            AppError::PromptRequired => PROMPT_REQUIRED,
            AppError::Upstream(UpstreamError::NoText) => NO_RESPONSE,
            AppError::Upstream(_) => FETCH_FAILED,
            AppError::Internal(_) => INTERNAL_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.public_message().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_details_stay_out_of_public_message() {
        let err = AppError::from(UpstreamError::Status {
            status: reqwest::StatusCode::BAD_GATEWAY,
            body: "quota exceeded for key abc".to_string(),
        });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), FETCH_FAILED);
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[test]
    fn empty_upstream_reply_has_its_own_message() {
        let err = AppError::from(UpstreamError::NoText);
        assert_eq!(err.public_message(), NO_RESPONSE);
    }

    #[test]
    fn client_errors_map_to_4xx() {
        assert_eq!(AppError::MethodNotAllowed.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(AppError::PromptRequired.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::Internal("boom".into()).public_message(), INTERNAL_ERROR);
    }
}
