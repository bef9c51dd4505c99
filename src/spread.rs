//! Spread calculation over upstream order books

use std::collections::BTreeMap;
use std::sync::Arc;

use futures_util::future::try_join_all;
use tracing::{debug, info};

use crate::error::{AppError, Result};
use crate::orderbook::Spread;
use crate::upstream::MarketSource;

/// Computes spreads from freshly fetched order books
#[derive(Clone)]
pub struct SpreadCalculator {
    source: Arc<dyn MarketSource>,
}

impl SpreadCalculator {
    pub fn new(source: Arc<dyn MarketSource>) -> Self {
        Self { source }
    }

    /// Spread for a single market
    pub async fn spread_for_market(&self, market_id: &str) -> Result<Spread> {
        let spread = self
            .source
            .order_book(market_id)
            .await
            .and_then(|book| book.spread())
            .map_err(|e| AppError::Spread {
                market_id: market_id.to_string(),
                reason: e.to_string(),
            })?;

        debug!(market_id = %market_id, spread = %spread, "Spread computed");
        Ok(spread)
    }

    /// Spreads for every known market, fetched concurrently.
    ///
    /// Fails as a whole if the market list or any single order book cannot be fetched.
    pub async fn spread_for_all_markets(&self) -> Result<BTreeMap<String, Spread>> {
        let market_ids = self
            .source
            .market_ids()
            .await
            .map_err(|e| AppError::AllSpreads(e.to_string()))?;

        let spreads = try_join_all(market_ids.iter().map(|id| self.spread_for_market(id)))
            .await
            .map_err(|e| AppError::AllSpreads(e.to_string()))?;

        info!(markets = market_ids.len(), "Spreads computed for all markets");
        Ok(market_ids.into_iter().zip(spreads).collect())
    }
}
