//! REST client for the upstream market data API

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use super::MarketSource;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::orderbook::OrderBook;
use crate::parser::{MarketsResponse, OrderBookResponse};

/// HTTP client for `GET /markets` and `GET /markets/{id}/order_book`
#[derive(Clone)]
pub struct MarketClient {
    http: Client,
    endpoint: String,
}

impl MarketClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.upstream_timeout())
            .build()?;

        Ok(Self {
            http,
            endpoint: config.upstream_endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch_markets(&self) -> Result<MarketsResponse> {
        let url = format!("{}/markets", self.endpoint);

        let response = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<MarketsResponse>()
            .await?;

        Ok(response)
    }
}

#[async_trait]
impl MarketSource for MarketClient {
    #[instrument(skip(self), level = "debug")]
    async fn market_ids(&self) -> Result<Vec<String>> {
        let markets = self
            .fetch_markets()
            .await
            .map_err(|e| AppError::MarketIds(e.to_string()))?;

        let ids = markets.market_ids();
        debug!(count = ids.len(), "Market list fetched");
        Ok(ids)
    }

    #[instrument(skip(self), level = "debug")]
    async fn order_book(&self, market_id: &str) -> Result<OrderBook> {
        let url = format!("{}/markets/{}/order_book", self.endpoint, market_id);

        let response = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<OrderBookResponse>()
            .await?;

        debug!(
            bid_levels = response.order_book.bids.len(),
            ask_levels = response.order_book.asks.len(),
            "Order book fetched"
        );

        Ok(response.order_book)
    }
}
