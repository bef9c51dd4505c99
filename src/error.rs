//! Error types for the spread alerts service

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{error, warn};

/// Service errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Client input was missing, had the wrong type, or named an unknown market
    #[error("{0}")]
    Validation(String),

    #[error("Alert not found for {0} market")]
    AlertNotFound(String),

    #[error("Failed to get market ids: {0}")]
    MarketIds(String),

    #[error("Failed to get the spread for {market_id}: {reason}")]
    Spread { market_id: String, reason: String },

    #[error("Failed to get spreads for all markets: {0}")]
    AllSpreads(String),

    #[error("REST API error: {0}")]
    RestApiError(String),

    #[error("Order book error: {0}")]
    OrderBookError(String),

    #[error("Metrics error: {0}")]
    MetricsError(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::AlertNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::RestApiError(err.to_string())
    }
}

impl From<prometheus::Error> for AppError {
    fn from(err: prometheus::Error) -> Self {
        AppError::MetricsError(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            error!(status = status.as_u16(), error = %message, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %message, "Request rejected");
        }

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
