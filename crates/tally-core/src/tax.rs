//! # Tax Module
//!
//! Federal and state tax percentages and the arithmetic they share.
//!
//! ## Default Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  TaxRates::default()                                                    │
//! │                                                                         │
//! │    federal_percent: 0.0  →  no federal tax applied                      │
//! │    state_percent:   0.0  →  no state tax applied                        │
//! │                                                                         │
//! │  calculate_final_total(TaxRates::default()) == calculate_sub_total()   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Tax percentages applied to a cart's sub total.
///
/// Percentages are plain `f64` values (6.0 = 6%). They are not range
/// checked; a negative percentage yields a negative tax.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct TaxRates {
    pub federal_percent: f64,
    pub state_percent: f64,
}

impl TaxRates {
    pub const fn new(federal_percent: f64, state_percent: f64) -> Self {
        TaxRates {
            federal_percent,
            state_percent,
        }
    }

    /// Federal tax only.
    pub const fn federal(percent: f64) -> Self {
        TaxRates::new(percent, 0.0)
    }

    /// State tax only.
    pub const fn state(percent: f64) -> Self {
        TaxRates::new(0.0, percent)
    }

    pub const fn with_federal(self, percent: f64) -> Self {
        TaxRates {
            federal_percent: percent,
            ..self
        }
    }

    pub const fn with_state(self, percent: f64) -> Self {
        TaxRates {
            state_percent: percent,
            ..self
        }
    }
}

/// Computes `percent`% of `amount`.
///
/// A percentage of exactly `0.0` returns `0.0` without touching `amount`,
/// so zero tax stays exactly zero even for non-finite amounts.
///
/// ## Example
/// ```rust
/// use tally_core::tax::tax_on;
///
/// assert_eq!(tax_on(800.0, 10.0), 80.0);
/// assert_eq!(tax_on(f64::NAN, 0.0), 0.0);
/// ```
#[inline]
pub fn tax_on(amount: f64, percent: f64) -> f64 {
    if percent == 0.0 {
        return 0.0;
    }
    percent / 100.0 * amount
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_no_tax() {
        let rates = TaxRates::default();
        assert_eq!(rates.federal_percent, 0.0);
        assert_eq!(rates.state_percent, 0.0);
    }

    #[test]
    fn test_constructors() {
        assert_eq!(TaxRates::federal(6.0), TaxRates::new(6.0, 0.0));
        assert_eq!(TaxRates::state(10.0), TaxRates::new(0.0, 10.0));
        assert_eq!(
            TaxRates::default().with_federal(6.0).with_state(10.0),
            TaxRates::new(6.0, 10.0)
        );
    }

    #[test]
    fn test_tax_on() {
        assert!((tax_on(650.0, 6.0) - 39.0).abs() < 0.001);
        assert!((tax_on(800.0, 6.0) - 48.0).abs() < 0.001);
        assert_eq!(tax_on(123.45, 0.0), 0.0);
        assert!((tax_on(100.0, -5.0) - -5.0).abs() < 0.001);
    }

    #[test]
    fn test_zero_percent_short_circuits() {
        assert_eq!(tax_on(f64::INFINITY, 0.0), 0.0);
        assert_eq!(tax_on(f64::NAN, -0.0), 0.0);
    }

    #[test]
    fn test_deserialize_missing_fields_default_to_zero() {
        let rates: TaxRates = serde_json::from_str(r#"{"statePercent":10.0}"#).unwrap();
        assert_eq!(rates, TaxRates::state(10.0));

        let rates: TaxRates = serde_json::from_str("{}").unwrap();
        assert_eq!(rates, TaxRates::default());
    }
}
