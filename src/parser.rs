//! Parser module for upstream market data responses
//!
//! Handles deserialization of the market list and order book payloads.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

use crate::orderbook::OrderBook;

/// A market as listed by the upstream API
#[derive(Debug, Clone, Deserialize)]
pub struct Market {
    pub id: String,

    /// Identifier used by every downstream call
    pub name: String,
}

/// `GET /markets` response body
#[derive(Debug, Clone, Deserialize)]
pub struct MarketsResponse {
    pub markets: Vec<Market>,
}

impl MarketsResponse {
    /// Market identifiers in upstream order
    pub fn market_ids(self) -> Vec<String> {
        self.markets.into_iter().map(|market| market.name).collect()
    }
}

/// `GET /markets/{id}/order_book` response body
#[derive(Debug, Clone, Deserialize)]
pub struct OrderBookResponse {
    pub order_book: OrderBook,
}

/// Price level (price, quantity pair)
#[derive(Debug, Clone, PartialEq)]
pub struct PriceLevel {
    pub price: Decimal,
    pub quantity: Decimal,
}

/// Custom deserializer for price levels from array of string pairs
pub(crate) fn deserialize_price_levels<'de, D>(deserializer: D) -> Result<Vec<PriceLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<Vec<String>> = Deserialize::deserialize(deserializer)?;
    raw.into_iter()
        .map(|pair| {
            if pair.len() != 2 {
                return Err(serde::de::Error::custom("Invalid price level format"));
            }
            Ok(PriceLevel {
                price: Decimal::from_str(pair[0].trim()).map_err(serde::de::Error::custom)?,
                quantity: Decimal::from_str(pair[1].trim()).map_err(serde::de::Error::custom)?,
            })
        })
        .collect()
}
