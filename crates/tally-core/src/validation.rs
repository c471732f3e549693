//! # Validation Module
//!
//! Opt-in range checks for items and tax percentages.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Embedding app (checkout UI, order service)                   │
//! │  ├── Calls THIS MODULE before building items                           │
//! │  └── Decides what to do with a ValidationError                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Item / ShoppingCart                                          │
//! │  └── Accepts ANY numeric input, never rejects                          │
//! │                                                                         │
//! │  The cart never calls these functions itself: its totals for a       │
//! │  negative price or a 150% discount are the plain arithmetic result.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::validation::{validate_discount, validate_tax_percent};
//!
//! assert!(validate_discount(50.0).is_ok());
//! assert!(validate_tax_percent(-1.0).is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::item::Item;

/// Upper bound for a percent-off discount.
pub const MAX_DISCOUNT_PERCENT: f64 = 100.0;

// =============================================================================
// Numeric Validators
// =============================================================================

fn require_finite(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }
    Ok(())
}

fn require_range(field: &str, value: f64, min: f64, max: f64) -> ValidationResult<()> {
    require_finite(field, value)?;

    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min,
            max,
            value,
        });
    }

    Ok(())
}

/// Validates a price in dollars.
///
/// ## Rules
/// - Must be finite
/// - Must be non-negative (zero is allowed: free items)
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_price;
///
/// assert!(validate_price(10.99).is_ok());
/// assert!(validate_price(0.0).is_ok());
/// assert!(validate_price(-1.0).is_err());
/// ```
pub fn validate_price(price: f64) -> ValidationResult<()> {
    require_range("price", price, 0.0, f64::MAX)
}

/// Validates a discount percentage.
///
/// ## Rules
/// - Must be finite
/// - Must be within `[0, 100]`
pub fn validate_discount(discount: f64) -> ValidationResult<()> {
    require_range("discount", discount, 0.0, MAX_DISCOUNT_PERCENT)
}

/// Validates a tax percentage.
///
/// ## Rules
/// - Must be finite
/// - Must be non-negative (no upper bound)
pub fn validate_tax_percent(percent: f64) -> ValidationResult<()> {
    require_range("tax percent", percent, 0.0, f64::MAX)
}

// =============================================================================
// Item Validator
// =============================================================================

/// Validates every field of an item.
///
/// ## Rules
/// - Name must not be blank
/// - Price and discount as in [`validate_price`] and [`validate_discount`]
///
/// The id is not checked: the cart does not require it to be unique or
/// non-empty.
pub fn validate_item(item: &Item) -> ValidationResult<()> {
    if item.name().trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    validate_price(item.price())?;
    validate_discount(item.discount())?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
