use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;

pub const INTERNAL_ERROR_MESSAGE: &str = "Intern server error";

/// `{"message": ...}` body used by every response that is not product data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("Route not found")]
    RouteNotFound,

    /// Never shown to the client; logged when the response is built
    #[error("{0:#}")]
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn internal<E>(context: &'static str, error: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        ApiError::Internal(error.into().context(context))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            ApiError::Internal(error) => {
                log::error!("{:#}", error);
                MessageResponse::new(INTERNAL_ERROR_MESSAGE)
            }
            other => MessageResponse::new(other.to_string()),
        };
        (status, Json(body)).into_response()
    }
}
