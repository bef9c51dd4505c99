//! Upstream market data API access

mod client;

pub use client::MarketClient;

use async_trait::async_trait;

use crate::error::Result;
use crate::orderbook::OrderBook;

/// Source of market identifiers and order book snapshots
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketSource: Send + Sync {
    /// All known market identifiers
    async fn market_ids(&self) -> Result<Vec<String>>;

    /// A fresh order book snapshot for one market
    async fn order_book(&self, market_id: &str) -> Result<OrderBook>;
}
