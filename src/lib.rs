//! Spread Alerts - Market Spread Service Library
//!
//! This crate computes bid/ask spreads from order books served by an upstream
//! market data API and keeps one user-defined alert threshold per market.

use std::sync::Arc;

pub mod alert;
pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod orderbook;
pub mod parser;
pub mod spread;
pub mod upstream;
pub mod validation;

pub use alert::{Alert, AlertStore, AlertView, SpreadComparison};
pub use config::Config;
pub use error::{AppError, Result};
pub use metrics::Metrics;
pub use orderbook::{OrderBook, Spread, SpreadStatus};
pub use parser::{Market, MarketsResponse, OrderBookResponse, PriceLevel};
pub use spread::SpreadCalculator;
pub use upstream::{MarketClient, MarketSource};

/// Application state shared across request handlers
pub struct AppState {
    pub markets: Arc<dyn MarketSource>,
    pub alerts: AlertStore,
    pub spreads: SpreadCalculator,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(markets: Arc<dyn MarketSource>) -> Result<Self> {
        Ok(Self {
            spreads: SpreadCalculator::new(markets.clone()),
            markets,
            alerts: AlertStore::new(),
            metrics: Metrics::new()?,
        })
    }
}
