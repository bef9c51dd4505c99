//! In-memory alert store
//!
//! Holds at most one alert per market. Creating an alert for a market that
//! already has one replaces it.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::info;

use crate::error::{AppError, Result};

/// A user-registered threshold for one market
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub market_id: String,
    pub value: f64,
    pub created_at: DateTime<Utc>,
}

/// An alert as returned to clients, optionally compared against a spread
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertView {
    #[serde(flatten)]
    pub alert: Alert,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub observation: Option<String>,
}

/// A spread supplied by the client, kept as written for echoing back
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpreadComparison<'a> {
    pub text: &'a str,
    pub value: f64,
}

impl Alert {
    /// Describe how `spread` compares to this alert's value
    pub fn observe(&self, spread: SpreadComparison<'_>) -> String {
        let status = if spread.value >= self.value {
            "greater or equal"
        } else {
            "lower"
        };
        format!(
            "Spread {} is {} than the current alert value",
            spread.text, status
        )
    }
}

/// Alerts keyed by market identifier
#[derive(Debug, Default)]
pub struct AlertStore {
    alerts: RwLock<HashMap<String, Alert>>,
}

impl AlertStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or replace the alert for `market_id`
    pub async fn upsert(&self, market_id: &str, value: f64) -> Alert {
        let alert = Alert {
            market_id: market_id.to_string(),
            value,
            created_at: Utc::now(),
        };

        let replaced = self
            .alerts
            .write()
            .await
            .insert(market_id.to_string(), alert.clone());

        info!(
            market_id = %market_id,
            value,
            replaced = replaced.is_some(),
            "Alert stored"
        );
        alert
    }

    pub async fn find(&self, market_id: &str) -> Option<Alert> {
        self.alerts.read().await.get(market_id).cloned()
    }

    /// Look up the alert for `market_id`, attaching an observation when a spread is given
    pub async fn read(
        &self,
        market_id: &str,
        spread: Option<SpreadComparison<'_>>,
    ) -> Result<AlertView> {
        let alert = self
            .find(market_id)
            .await
            .ok_or_else(|| AppError::AlertNotFound(market_id.to_string()))?;

        let observation = spread.map(|s| alert.observe(s));
        Ok(AlertView { alert, observation })
    }

    pub async fn len(&self) -> usize {
        self.alerts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.alerts.read().await.is_empty()
    }
}
