//! HTTP routes
//!
//! Handlers validate their input, delegate to the alert store or the spread
//! calculator, and return `AppError` for every failure so the status code and
//! `{ "error": ... }` body are decided in one place.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::alert::{Alert, AlertView, SpreadComparison};
use crate::error::{AppError, Result};
use crate::orderbook::Spread;
use crate::validation::{parse_number_param, validate_is_a_number, validate_known_market, validate_market_id};
use crate::AppState;

/// Spread of one market as returned to clients
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSpread {
    pub market_id: String,
    pub value: Spread,
}

#[derive(Debug, Deserialize)]
pub struct AlertQuery {
    pub spread: Option<String>,
}

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/alert", post(create_alert))
        .route("/alert/:market_id", get(get_alert))
        .route("/spread", get(get_spreads))
        .route("/spread/:market_id", get(get_spread))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .layer(middleware::from_fn_with_state(state.clone(), track_responses))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn create_alert(
    State(state): State<Arc<AppState>>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Alert>)> {
    let Json(body) = body.map_err(|rejection| AppError::validation(rejection.body_text()))?;

    let market_id = validate_market_id(state.markets.as_ref(), body.get("marketId")).await?;
    let value = validate_is_a_number("value", body.get("value"))?;

    let alert = state.alerts.upsert(&market_id, value).await;
    state.metrics.alerts_created.inc();

    Ok((StatusCode::CREATED, Json(alert)))
}

async fn get_alert(
    State(state): State<Arc<AppState>>,
    Path(market_id): Path<String>,
    query: std::result::Result<Query<AlertQuery>, QueryRejection>,
) -> Result<Json<AlertView>> {
    let Query(query) = query.map_err(|rejection| AppError::validation(rejection.body_text()))?;

    validate_known_market(state.markets.as_ref(), &market_id).await?;

    // existence is reported before a malformed spread parameter
    if state.alerts.find(&market_id).await.is_none() {
        return Err(AppError::AlertNotFound(market_id));
    }

    let text = query.spread.as_deref().map(str::trim).filter(|t| !t.is_empty());
    let comparison = parse_number_param("spread", text)?
        .zip(text)
        .map(|(value, text)| SpreadComparison { text, value });
    let view = state.alerts.read(&market_id, comparison).await?;

    Ok(Json(view))
}

async fn get_spread(
    State(state): State<Arc<AppState>>,
    Path(market_id): Path<String>,
) -> Result<Json<MarketSpread>> {
    validate_known_market(state.markets.as_ref(), &market_id).await?;
    state.metrics.spread_requests.with_label_values(&["market"]).inc();

    let value = state.spreads.spread_for_market(&market_id).await?;

    Ok(Json(MarketSpread { market_id, value }))
}

async fn get_spreads(State(state): State<Arc<AppState>>) -> Result<Json<Vec<MarketSpread>>> {
    state.metrics.spread_requests.with_label_values(&["all"]).inc();

    let spreads = state.spreads.spread_for_all_markets().await?;
    info!(markets = spreads.len(), "Serving spreads for all markets");

    Ok(Json(
        spreads
            .into_iter()
            .map(|(market_id, value)| MarketSpread { market_id, value })
            .collect(),
    ))
}

async fn health_check() -> Json<Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "component": "spread-alerts",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn metrics(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse> {
    let body = state.metrics.encode()?;
    Ok(([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body))
}

async fn track_responses(State(state): State<Arc<AppState>>, request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    state
        .metrics
        .http_responses
        .with_label_values(&[response.status().as_str()])
        .inc();
    response
}
