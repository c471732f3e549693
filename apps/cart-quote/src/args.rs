//! Command line parsing for `cart-quote`.
//!
//! ## Syntax
//! ```text
//! cart-quote --item NAME:PRICE[:DISCOUNT] [--item ...]
//!            [--federal PERCENT] [--state PERCENT] [--json]
//! ```

use thiserror::Error;

/// Errors produced while reading argv.
#[derive(Debug, Error, PartialEq)]
pub enum ArgsError {
    #[error("{flag} expects a value")]
    MissingValue { flag: String },

    #[error("Invalid item {spec:?}: expected NAME:PRICE[:DISCOUNT]")]
    InvalidItem { spec: String },

    #[error("Invalid number for {flag}: {value:?}")]
    InvalidNumber { flag: String, value: String },

    #[error("Unknown argument: {0}")]
    Unknown(String),
}

/// One `--item` argument.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSpec {
    pub name: String,
    pub price: f64,
    pub discount: f64,
}

impl ItemSpec {
    /// Parses `NAME:PRICE` or `NAME:PRICE:DISCOUNT`.
    ///
    /// The name is everything before the last one or two numeric fields, so
    /// `Laptop:Pro:500` is an item named `Laptop:Pro`.
    pub fn parse(spec: &str) -> Result<Self, ArgsError> {
        let invalid = || ArgsError::InvalidItem {
            spec: spec.to_string(),
        };

        let mut parts = spec.rsplitn(3, ':');
        let last = parts.next().ok_or_else(invalid)?;
        let middle = parts.next().ok_or_else(invalid)?;

        let (name, price, discount) = match parts.next() {
            Some(head) => match (middle.parse::<f64>(), last.parse::<f64>()) {
                (Ok(price), Ok(discount)) => (head.to_string(), price, discount),
                // "Laptop:Pro:500": the middle field is part of the name
                (Err(_), Ok(price)) => (format!("{head}:{middle}"), price, 0.0),
                _ => return Err(invalid()),
            },
            None => (middle.to_string(), last.parse::<f64>().map_err(|_| invalid())?, 0.0),
        };

        if name.trim().is_empty() {
            return Err(invalid());
        }

        Ok(ItemSpec {
            name,
            price,
            discount,
        })
    }
}

/// Parsed command line.
#[derive(Debug, Default, PartialEq)]
pub struct QuoteArgs {
    pub items: Vec<ItemSpec>,
    /// Overrides `TALLY_FEDERAL_TAX_PERCENT` when set.
    pub federal: Option<f64>,
    /// Overrides `TALLY_STATE_TAX_PERCENT` when set.
    pub state: Option<f64>,
    pub json: bool,
    pub help: bool,
}

impl QuoteArgs {
    /// Parses arguments, excluding the program name.
    pub fn parse<I>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = QuoteArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--item" | "-i" => {
                    let spec = next_value(&mut args, &arg)?;
                    parsed.items.push(ItemSpec::parse(&spec)?);
                }
                "--federal" | "-f" => {
                    parsed.federal = Some(parse_number(&mut args, &arg)?);
                }
                "--state" | "-s" => {
                    parsed.state = Some(parse_number(&mut args, &arg)?);
                }
                "--json" => parsed.json = true,
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::Unknown(arg)),
            }
        }

        Ok(parsed)
    }
}

fn next_value<I>(args: &mut I, flag: &str) -> Result<String, ArgsError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or_else(|| ArgsError::MissingValue {
        flag: flag.to_string(),
    })
}

fn parse_number<I>(args: &mut I, flag: &str) -> Result<f64, ArgsError>
where
    I: Iterator<Item = String>,
{
    let value = next_value(args, flag)?;
    value.parse().map_err(|_| ArgsError::InvalidNumber {
        flag: flag.to_string(),
        value,
    })
}

pub const USAGE: &str = "\
Usage: cart-quote [OPTIONS]

Options:
  -i, --item <NAME:PRICE[:DISCOUNT]>  Add an item (repeatable)
  -f, --federal <PERCENT>             Federal tax percent (default: $TALLY_FEDERAL_TAX_PERCENT or 0)
  -s, --state <PERCENT>               State tax percent (default: $TALLY_STATE_TAX_PERCENT or 0)
      --json                          Print totals as JSON
  -h, --help                          Show this help message";
