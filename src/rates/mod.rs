//! Ingestion of exchange-rate tables from the remote rate source.

use std::{fs, path::PathBuf};

use serde::Deserialize;

use crate::{
    currency::ExchangeRate,
    errors::{PlannerError, Result},
};

/// Anything that can supply a full exchange-rate table. The store replaces
/// its table wholesale with whatever a source returns; there is no
/// incremental merge or diffing.
pub trait RateSource {
    fn fetch(&self) -> Result<Vec<ExchangeRate>>;
}

/// One raw rate document as stored remotely. Documents written by the admin
/// screens use long-form keys (`"Currency code"`, `"Exchange rate (per 1
/// EUR)"`, ...); the aliases also accept the short forms.
#[derive(Debug, Clone, Deserialize)]
pub struct RateDocument {
    #[serde(default, alias = "Currency code")]
    pub code: Option<String>,
    #[serde(default, alias = "Currency name")]
    pub name: Option<String>,
    #[serde(default, alias = "Currency symbol")]
    pub symbol: Option<String>,
    #[serde(default, alias = "Exchange rate (per 1 EUR)")]
    pub rate: Option<f64>,
}

impl RateDocument {
    /// Converts the document into an [`ExchangeRate`]; documents without a
    /// numeric rate are unusable and yield `None`.
    pub fn into_rate(self) -> Option<ExchangeRate> {
        let rate = self.rate?;
        Some(ExchangeRate {
            code: self.code,
            name: self.name.unwrap_or_default(),
            symbol: self.symbol.unwrap_or_default(),
            rate,
        })
    }
}

/// Rate source reading an array of rate documents from a JSON file. Stands in
/// for the remote document database; the crate has no network surface.
#[derive(Debug, Clone)]
pub struct JsonRateSource {
    path: PathBuf,
}

impl JsonRateSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RateSource for JsonRateSource {
    fn fetch(&self) -> Result<Vec<ExchangeRate>> {
        let data = fs::read_to_string(&self.path)
            .map_err(|err| PlannerError::RateSource(err.to_string()))?;
        let documents: Vec<RateDocument> = serde_json::from_str(&data)
            .map_err(|err| PlannerError::RateSource(err.to_string()))?;
        Ok(documents
            .into_iter()
            .filter_map(RateDocument::into_rate)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_form_keys_deserialize() {
        let raw = r#"{
            "Currency name": "Dollar",
            "Currency symbol": "$",
            "Currency code": "USD",
            "Exchange rate (per 1 EUR)": 1.1
        }"#;
        let document: RateDocument = serde_json::from_str(raw).expect("parse");
        let rate = document.into_rate().expect("usable rate");
        assert_eq!(rate.resolved_code(), Some("USD"));
        assert!((rate.rate - 1.1).abs() < f64::EPSILON);
    }

    #[test]
    fn document_without_rate_is_dropped() {
        let raw = r#"{ "name": "Dollar (USD)" }"#;
        let document: RateDocument = serde_json::from_str(raw).expect("parse");
        assert!(document.into_rate().is_none());
    }
}
