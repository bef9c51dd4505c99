//! Order book snapshot and spread computation

use rust_decimal::Decimal;
use serde::Deserialize;

use super::{Spread, SpreadStatus};
use crate::error::{AppError, Result};
use crate::parser::{deserialize_price_levels, PriceLevel};

/// Order book snapshot for a single market.
///
/// Levels are kept in the order the upstream API sent them; only the extremes matter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderBook {
    #[serde(deserialize_with = "deserialize_price_levels")]
    pub bids: Vec<PriceLevel>,

    #[serde(deserialize_with = "deserialize_price_levels")]
    pub asks: Vec<PriceLevel>,
}

impl OrderBook {
    pub fn new(bids: Vec<PriceLevel>, asks: Vec<PriceLevel>) -> Self {
        Self { bids, asks }
    }

    /// Get best bid price
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.iter().map(|level| level.price).max()
    }

    /// Get best ask price
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.iter().map(|level| level.price).min()
    }

    /// Lowest ask minus highest bid. A crossed book yields a negative value.
    ///
    /// Fails when the difference does not fit in a `Decimal`.
    pub fn spread(&self) -> Result<Spread> {
        let spread = match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Spread::Value(ask.checked_sub(bid).ok_or_else(|| {
                AppError::OrderBookError(format!("spread between ask {} and bid {} is out of range", ask, bid))
            })?),
            (None, None) => Spread::Status(SpreadStatus::Empty),
            (None, Some(_)) => Spread::Status(SpreadStatus::NoBids),
            (Some(_), None) => Spread::Status(SpreadStatus::NoAsks),
        };
        Ok(spread)
    }
}
