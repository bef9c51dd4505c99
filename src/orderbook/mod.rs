//! Order book module
//!
//! Order book snapshots fetched from the upstream API and the spread derived from them.

mod book;

pub use book::OrderBook;

use rust_decimal::Decimal;
use serde::Serialize;

/// Why a spread could not be computed for a one-sided or empty book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpreadStatus {
    #[serde(rename = "order book is empty")]
    Empty,
    #[serde(rename = "order book does not have bids")]
    NoBids,
    #[serde(rename = "order book does not have asks")]
    NoAsks,
}

impl SpreadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpreadStatus::Empty => "order book is empty",
            SpreadStatus::NoBids => "order book does not have bids",
            SpreadStatus::NoAsks => "order book does not have asks",
        }
    }
}

/// Spread of a market: a price difference, or a status for books missing a side.
///
/// Serializes as a bare JSON number or string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Spread {
    Value(#[serde(with = "rust_decimal::serde::float")] Decimal),
    Status(SpreadStatus),
}

impl std::fmt::Display for Spread {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Spread::Value(v) => write!(f, "{}", v),
            Spread::Status(status) => f.write_str(status.as_str()),
        }
    }
}
