//! Cart configuration module.
//!
//! Default tax percentages are loaded from environment variables with
//! fallback to zero.
//!
//! | Variable                    | Default |
//! |-----------------------------|---------|
//! | `TALLY_FEDERAL_TAX_PERCENT` | `0.0`   |
//! | `TALLY_STATE_TAX_PERCENT`   | `0.0`   |

use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{ConfigError, ConfigResult};
use crate::tax::TaxRates;

pub const FEDERAL_TAX_PERCENT_VAR: &str = "TALLY_FEDERAL_TAX_PERCENT";
pub const STATE_TAX_PERCENT_VAR: &str = "TALLY_STATE_TAX_PERCENT";

/// Cart configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CartConfig {
    /// Federal tax percentage applied when the caller supplies none.
    pub federal_tax_percent: f64,

    /// State tax percentage applied when the caller supplies none.
    pub state_tax_percent: f64,
}

impl CartConfig {
    /// Load configuration from environment variables.
    pub fn load() -> ConfigResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value (or `None` when unset).
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(CartConfig {
            federal_tax_percent: parse_percent(&lookup, FEDERAL_TAX_PERCENT_VAR)?,
            state_tax_percent: parse_percent(&lookup, STATE_TAX_PERCENT_VAR)?,
        })
    }

    /// Tax rates to hand to [`ShoppingCart::calculate_final_total`](crate::ShoppingCart::calculate_final_total).
    pub fn tax_rates(&self) -> TaxRates {
        TaxRates::new(self.federal_tax_percent, self.state_tax_percent)
    }
}

/// Unset or blank means zero. Any value `f64` can parse is accepted.
fn parse_percent<F>(lookup: &F, key: &str) -> ConfigResult<f64>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: raw,
                })
        }
        _ => Ok(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = CartConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, CartConfig::default());
        assert_eq!(config.tax_rates(), TaxRates::default());
    }

    #[test]
    fn test_reads_both_percentages() {
        let config = CartConfig::from_lookup(lookup_from(&[
            (FEDERAL_TAX_PERCENT_VAR, "6"),
            (STATE_TAX_PERCENT_VAR, " 10.5 "),
        ]))
        .unwrap();

        assert_eq!(config.tax_rates(), TaxRates::new(6.0, 10.5));
    }

    #[test]
    fn test_blank_value_means_zero() {
        let config =
            CartConfig::from_lookup(lookup_from(&[(STATE_TAX_PERCENT_VAR, "  ")])).unwrap();
        assert_eq!(config.state_tax_percent, 0.0);
    }

    #[test]
    fn test_negative_percent_is_accepted() {
        let config =
            CartConfig::from_lookup(lookup_from(&[(FEDERAL_TAX_PERCENT_VAR, "-2")])).unwrap();
        assert_eq!(config.federal_tax_percent, -2.0);
    }

    #[test]
    fn test_invalid_value() {
        let err = CartConfig::from_lookup(lookup_from(&[(STATE_TAX_PERCENT_VAR, "ten")]))
            .unwrap_err();

        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: STATE_TAX_PERCENT_VAR.to_string(),
                value: "ten".to_string(),
            }
        );
    }

    #[test]
    fn test_deserialize_partial_json() {
        let config: CartConfig = serde_json::from_str(r#"{"federalTaxPercent":6.0}"#).unwrap();
        assert_eq!(config.tax_rates(), TaxRates::federal(6.0));
    }
}
