//! # Cart Quote
//!
//! Builds a cart from the command line and prints its totals.
//!
//! ## Usage
//! ```bash
//! # Two items, one half off, 6% federal and 10% state tax
//! cargo run -p cart-quote -- --item Laptop:500 --item Guitar:300:50 --federal 6 --state 10
//!
//! # Tax defaults from the environment, JSON output
//! TALLY_STATE_TAX_PERCENT=10 cargo run -p cart-quote -- --item Laptop:500 --json
//! ```
//!
//! ## Log Levels
//! - `RUST_LOG=debug` - Show cart mutations
//! - `RUST_LOG=tally_core=trace` - Show every recomputation
//! - Default: warnings only, so stdout stays clean

mod args;

use std::fmt::Write as _;

use tally_core::error::ConfigResult;
use tally_core::{CartConfig, CartTotals, Item, ShoppingCart, TaxRates};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::args::{QuoteArgs, USAGE};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args = QuoteArgs::parse(std::env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let rates = resolve_rates(&args, CartConfig::load)?;
    info!(
        federal = rates.federal_percent,
        state = rates.state_percent,
        "Tax rates resolved"
    );

    let cart: ShoppingCart = args
        .items
        .iter()
        .map(|spec| Item::with_generated_id(spec.name.as_str(), spec.price, spec.discount))
        .collect();
    info!(items = cart.len(), "Cart built");

    let totals = cart.totals(rates);
    if args.json {
        println!("{}", render_json(&totals)?);
    } else {
        print!("{}", render_report(&cart, &totals));
    }

    Ok(())
}

/// Logs go to stderr; `RUST_LOG` overrides the default filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Command line percentages win over the environment.
///
/// `load` only runs when at least one percentage is left unset, so a
/// malformed `TALLY_*_TAX_PERCENT` cannot fail a fully specified run.
fn resolve_rates<F>(args: &QuoteArgs, load: F) -> ConfigResult<TaxRates>
where
    F: FnOnce() -> ConfigResult<CartConfig>,
{
    if let (Some(federal), Some(state)) = (args.federal, args.state) {
        return Ok(TaxRates::new(federal, state));
    }

    let defaults = load()?.tax_rates();
    Ok(TaxRates::new(
        args.federal.unwrap_or(defaults.federal_percent),
        args.state.unwrap_or(defaults.state_percent),
    ))
}

fn render_json(totals: &CartTotals) -> serde_json::Result<String> {
    serde_json::to_string_pretty(totals)
}

fn render_report(cart: &ShoppingCart, totals: &CartTotals) -> String {
    let rule = "-".repeat(40);
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "Cart ({} items)", totals.item_count);
    let _ = writeln!(out, "{rule}");
    for item in cart.items() {
        if item.has_discount() {
            let _ = writeln!(
                out,
                "{:<24} {:>9.2} (-{}%)",
                item.name(),
                item.price(),
                item.discount()
            );
        } else {
            let _ = writeln!(out, "{:<24} {:>9.2}", item.name(), item.price());
        }
    }
    let _ = writeln!(out, "{rule}");
    for (label, amount) in [
        ("Discount", totals.discount),
        ("Sub total", totals.sub_total),
        ("Federal tax", totals.federal_tax),
        ("State tax", totals.state_tax),
        ("TOTAL", totals.final_total),
    ] {
        let _ = writeln!(out, "{label:<24} {amount:>9.2}");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::ConfigError;

    fn half_off_guitar_cart() -> ShoppingCart {
        ShoppingCart::from_items(vec![
            Item::new("1111", "Laptop 1", 500.0),
            Item::with_discount("2222", "Guitar 1", 300.0, 50.0),
        ])
    }

    fn report_line<'a>(report: &'a str, label: &str) -> &'a str {
        report
            .lines()
            .find(|line| line.starts_with(label))
            .unwrap_or_else(|| panic!("no {label} line in:\n{report}"))
    }

    fn broken_config() -> ConfigResult<CartConfig> {
        Err(ConfigError::InvalidValue {
            key: "TALLY_STATE_TAX_PERCENT".to_string(),
            value: "ten".to_string(),
        })
    }

    #[test]
    fn test_args_override_config() {
        let args = QuoteArgs {
            state: Some(7.5),
            ..QuoteArgs::default()
        };
        let config = CartConfig {
            federal_tax_percent: 6.0,
            state_tax_percent: 10.0,
        };

        let rates = resolve_rates(&args, || Ok(config)).unwrap();

        assert_eq!(rates, TaxRates::new(6.0, 7.5));
    }

    #[test]
    fn test_config_used_when_args_absent() {
        let config = CartConfig {
            federal_tax_percent: 6.0,
            state_tax_percent: 0.0,
        };

        let rates = resolve_rates(&QuoteArgs::default(), || Ok(config)).unwrap();

        assert_eq!(rates, TaxRates::federal(6.0));
    }

    #[test]
    fn test_config_skipped_when_both_rates_given() {
        let args = QuoteArgs {
            federal: Some(6.0),
            state: Some(10.0),
            ..QuoteArgs::default()
        };

        assert_eq!(
            resolve_rates(&args, broken_config).unwrap(),
            TaxRates::new(6.0, 10.0)
        );
    }

    #[test]
    fn test_config_error_when_a_rate_is_missing() {
        let args = QuoteArgs {
            federal: Some(6.0),
            ..QuoteArgs::default()
        };

        assert!(resolve_rates(&args, broken_config).is_err());
    }

    #[test]
    fn test_report_with_discount_and_taxes() {
        let cart = half_off_guitar_cart();
        let report = render_report(&cart, &cart.totals(TaxRates::federal(6.0)));

        assert!(report.starts_with("Cart (2 items)"));
        assert!(report.contains("(-50%)"));
        assert!(report_line(&report, "Discount").ends_with(" 150.00"));
        assert!(report_line(&report, "Sub total").ends_with(" 650.00"));
        assert!(report_line(&report, "Federal tax").ends_with(" 39.00"));
        assert!(report_line(&report, "State tax").ends_with(" 0.00"));
        assert!(report_line(&report, "TOTAL").ends_with(" 689.00"));
    }

    #[test]
    fn test_report_without_discount_has_no_negative_zero() {
        let cart = ShoppingCart::from_items(vec![
            Item::new("1111", "Laptop 1", 500.0),
            Item::new("2222", "Guitar 1", 300.0),
        ]);
        let report = render_report(&cart, &cart.totals(TaxRates::default()));

        assert!(!report.contains("-0.00"), "{report}");
        assert!(report_line(&report, "Discount").ends_with(" 0.00"));
        assert!(report_line(&report, "TOTAL").ends_with(" 800.00"));
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let cart = half_off_guitar_cart();
        let json = render_json(&cart.totals(TaxRates::federal(6.0))).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["itemCount"], 2);
        assert_eq!(value["discount"], 150.0);
        assert_eq!(value["subTotal"], 650.0);
        assert_eq!(value["stateTax"], 0.0);
        assert!((value["federalTax"].as_f64().unwrap() - 39.0).abs() < 0.01);
        assert!((value["finalTotal"].as_f64().unwrap() - 689.0).abs() < 0.01);
    }

    #[test]
    fn test_json_discount_is_positive_zero_without_discounts() {
        let cart = ShoppingCart::from_items(vec![Item::new("1111", "Laptop 1", 500.0)]);
        let json = render_json(&cart.totals(TaxRates::default())).unwrap();

        assert!(json.contains(r#""discount": 0.0"#), "{json}");
    }
}
