//! Request input validation
//!
//! Every failure here is an `AppError::Validation` and reaches the client as a 400.
//! Market ids are checked against the live upstream market list on every call.

use serde_json::Value;

use crate::error::{AppError, Result};
use crate::upstream::MarketSource;

pub fn validate_is_defined<'a>(name: &str, value: Option<&'a Value>) -> Result<&'a Value> {
    value.ok_or_else(|| AppError::validation(format!("{} is required", name)))
}

/// Check a JSON field holds a market id known upstream
pub async fn validate_market_id(source: &dyn MarketSource, value: Option<&Value>) -> Result<String> {
    let market_id = validate_is_defined("marketId", value)?
        .as_str()
        .ok_or_else(|| AppError::validation("marketId must be a string"))?;

    validate_known_market(source, market_id).await?;
    Ok(market_id.to_string())
}

/// Check a market id taken from the request path is known upstream
pub async fn validate_known_market(source: &dyn MarketSource, market_id: &str) -> Result<()> {
    let market_ids = source.market_ids().await?;

    if !market_ids.iter().any(|id| id == market_id) {
        return Err(AppError::validation(format!(
            "{} is not a valid marketId",
            market_id
        )));
    }

    Ok(())
}

/// Check a JSON field holds a finite number
pub fn validate_is_a_number(name: &str, value: Option<&Value>) -> Result<f64> {
    validate_is_defined(name, value)?
        .as_f64()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AppError::validation(format!("{} must be a number", name)))
}

/// Parse an optional numeric query parameter. Empty input counts as absent.
pub fn parse_number_param(name: &str, raw: Option<&str>) -> Result<Option<f64>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Some)
            .ok_or_else(|| AppError::validation(format!("{} must be a number", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::MockMarketSource;
    use serde_json::json;
    use tokio_test::{assert_err, assert_ok};

    fn source_with(ids: &'static [&'static str]) -> MockMarketSource {
        let mut source = MockMarketSource::new();
        source
            .expect_market_ids()
            .returning(move || Ok(ids.iter().map(|id| id.to_string()).collect()));
        source
    }

    #[tokio::test]
    async fn test_validate_market_id() {
        let source = source_with(&["dummyId"]);
        let body = json!({ "marketId": "dummyId" });

        let id = assert_ok!(validate_market_id(&source, body.get("marketId")).await);
        assert_eq!(id, "dummyId");
    }

    #[tokio::test]
    async fn test_validate_market_id_required() {
        let mut source = MockMarketSource::new();
        source.expect_market_ids().never();

        let err = assert_err!(validate_market_id(&source, None).await);
        assert_eq!(err.to_string(), "marketId is required");
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_validate_market_id_must_be_string() {
        let mut source = MockMarketSource::new();
        source.expect_market_ids().never();

        let value = json!(20);
        let err = assert_err!(validate_market_id(&source, Some(&value)).await);
        assert_eq!(err.to_string(), "marketId must be a string");
    }

    #[tokio::test]
    async fn test_validate_market_id_unknown() {
        let source = source_with(&["dummyId"]);
        let value = json!("fakeId");

        let err = assert_err!(validate_market_id(&source, Some(&value)).await);
        assert_eq!(err.to_string(), "fakeId is not a valid marketId");
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_validate_known_market_upstream_failure_is_not_validation() {
        let mut source = MockMarketSource::new();
        source
            .expect_market_ids()
            .returning(|| Err(AppError::MarketIds("Service error".to_string())));

        let err = assert_err!(validate_known_market(&source, "dummyId").await);
        assert!(matches!(err, AppError::MarketIds(_)));
    }

    #[test]
    fn test_validate_is_a_number() {
        assert_eq!(assert_ok!(validate_is_a_number("value", Some(&json!(20)))), 20.0);
        assert_eq!(assert_ok!(validate_is_a_number("value", Some(&json!(2.5)))), 2.5);

        let err = assert_err!(validate_is_a_number("value", None));
        assert_eq!(err.to_string(), "value is required");

        for invalid in [json!("dummyValue"), json!(null), json!([1]), json!("20")] {
            let err = assert_err!(validate_is_a_number("value", Some(&invalid)));
            assert_eq!(err.to_string(), "value must be a number");
        }
    }

    #[test]
    fn test_parse_number_param() {
        assert_eq!(assert_ok!(parse_number_param("spread", None)), None);
        assert_eq!(assert_ok!(parse_number_param("spread", Some(""))), None);
        assert_eq!(assert_ok!(parse_number_param("spread", Some("21"))), Some(21.0));
        assert_eq!(assert_ok!(parse_number_param("spread", Some("-0.5"))), Some(-0.5));

        for invalid in ["abc", "NaN", "inf"] {
            let err = assert_err!(parse_number_param("spread", Some(invalid)));
            assert_eq!(err.to_string(), "spread must be a number");
        }
    }
}
