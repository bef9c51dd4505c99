//! Prometheus metrics for the HTTP surface

use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

use crate::error::{AppError, Result};

/// Service counters, registered on a registry owned by this instance
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,

    /// Alerts created or replaced
    pub alerts_created: IntCounter,

    /// Spread requests by scope ("market" or "all")
    pub spread_requests: IntCounterVec,

    /// HTTP responses by status code
    pub http_responses: IntCounterVec,
}

impl Metrics {
    pub fn new() -> Result<Self> {
        let registry = Registry::new();

        let alerts_created = IntCounter::new("alerts_created_total", "Alerts created or replaced")?;
        let spread_requests = IntCounterVec::new(
            Opts::new("spread_requests_total", "Spread computations requested"),
            &["scope"],
        )?;
        let http_responses = IntCounterVec::new(
            Opts::new("http_responses_total", "HTTP responses sent"),
            &["status"],
        )?;

        registry.register(Box::new(alerts_created.clone()))?;
        registry.register(Box::new(spread_requests.clone()))?;
        registry.register(Box::new(http_responses.clone()))?;

        Ok(Self {
            registry,
            alerts_created,
            spread_requests,
            http_responses,
        })
    }

    /// Render all metrics in the Prometheus text format
    pub fn encode(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| AppError::MetricsError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_counters() {
        let metrics = Metrics::new().unwrap();
        metrics.alerts_created.inc();
        metrics.spread_requests.with_label_values(&["all"]).inc();

        let text = metrics.encode().unwrap();
        assert!(text.contains("alerts_created_total 1"));
        assert!(text.contains("spread_requests_total{scope=\"all\"} 1"));
    }
}
