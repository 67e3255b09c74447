//! # Estimator Settings
//!
//! Constants that shape a new estimate and its report. Defaults reproduce the
//! standard StructCalc behavior; a JSON document can override them.
//!
//! ```rust
//! use calc_core::settings::EstimatorSettings;
//!
//! let settings = EstimatorSettings::from_json(r#"{ "default_unit_price": 31.5 }"#).unwrap();
//! assert_eq!(settings.default_unit_price, 31.5);
//! assert_eq!(settings.currency_symbol, "$");
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Default steel price (currency units per kg)
pub const DEFAULT_UNIT_PRICE: f64 = 28.0;

/// Title line of the text report
pub const DEFAULT_REPORT_TITLE: &str = "REPORTE ESTRUCTURA METÁLICA";

/// Report file names are `<prefix>_<unix millis>.txt`
pub const DEFAULT_REPORT_FILE_PREFIX: &str = "estructura";

/// Settings applied when an estimate is created and reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorSettings {
    /// Unit price a new estimate starts with (currency per kg)
    pub default_unit_price: f64,

    /// Symbol printed before money amounts
    pub currency_symbol: String,

    /// First line of the report
    pub report_title: String,

    /// File name prefix for report artifacts
    pub report_file_prefix: String,
}

impl Default for EstimatorSettings {
    fn default() -> Self {
        EstimatorSettings {
            default_unit_price: DEFAULT_UNIT_PRICE,
            currency_symbol: "$".to_string(),
            report_title: DEFAULT_REPORT_TITLE.to_string(),
            report_file_prefix: DEFAULT_REPORT_FILE_PREFIX.to_string(),
        }
    }
}

impl EstimatorSettings {
    /// Parse and validate a settings document.
    ///
    /// Missing fields take their default value.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let settings: EstimatorSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Make out-of-range fields safe: a bad price becomes 0 (as the price
    /// input does) and a bad report prefix falls back to the default.
    ///
    /// Used where settings arrive without going through `from_json`.
    pub fn sanitized(self) -> Self {
        let price_ok = self.default_unit_price.is_finite() && self.default_unit_price >= 0.0;
        let prefix_ok = is_valid_prefix(&self.report_file_prefix);
        if !price_ok || !prefix_ok {
            tracing::warn!(price_ok, prefix_ok, "invalid estimator settings replaced by defaults");
        }

        EstimatorSettings {
            default_unit_price: if price_ok { self.default_unit_price } else { 0.0 },
            report_file_prefix: if prefix_ok { self.report_file_prefix } else { DEFAULT_REPORT_FILE_PREFIX.to_string() },
            ..self
        }
    }

    /// Check value ranges.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.default_unit_price.is_finite() || self.default_unit_price < 0.0 {
            return Err(CalcError::invalid_input(
                "default_unit_price",
                self.default_unit_price.to_string(),
                "Unit price must be a finite, non-negative number",
            ));
        }

        if !is_valid_prefix(&self.report_file_prefix) {
            return Err(CalcError::invalid_input(
                "report_file_prefix",
                self.report_file_prefix.clone(),
                "Prefix must be a non-empty file name without path separators",
            ));
        }

        Ok(())
    }
}

/// Non-empty file name component without path separators
fn is_valid_prefix(prefix: &str) -> bool {
    !prefix.is_empty() && prefix != "." && prefix != ".." && !prefix.contains(['/', '\\', ':'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = EstimatorSettings::default();
        assert_eq!(settings.default_unit_price, 28.0);
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.report_title, "REPORTE ESTRUCTURA METÁLICA");
        assert_eq!(settings.report_file_prefix, "estructura");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let settings = EstimatorSettings::from_json(r#"{ "currency_symbol": "MXN " }"#).unwrap();
        assert_eq!(settings.currency_symbol, "MXN ");
        assert_eq!(settings.default_unit_price, DEFAULT_UNIT_PRICE);
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = EstimatorSettings::from_json(r#"{ "default_unit_price": -1 }"#).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_bad_prefix_rejected() {
        let err = EstimatorSettings::from_json(r#"{ "report_file_prefix": "../x" }"#).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_sanitized_replaces_invalid_fields() {
        let settings = EstimatorSettings {
            default_unit_price: f64::NAN,
            currency_symbol: "MXN ".to_string(),
            report_file_prefix: "a/b".to_string(),
            ..EstimatorSettings::default()
        }
        .sanitized();
        assert_eq!(settings.default_unit_price, 0.0);
        assert_eq!(settings.report_file_prefix, DEFAULT_REPORT_FILE_PREFIX);
        assert_eq!(settings.currency_symbol, "MXN ");
        assert!(settings.validate().is_ok());

        let valid = EstimatorSettings::default();
        assert_eq!(valid.clone().sanitized(), valid);
    }

    #[test]
    fn test_malformed_json() {
        let err = EstimatorSettings::from_json("{ nope").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
