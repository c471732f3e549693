//! # Item
//!
//! A purchasable line item: id, name, price and an optional percent-off
//! discount.
//!
//! ## Value Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Item { id: "1111", name: "Laptop", price: 500.0, discount: 30.0 }     │
//! │                                                                         │
//! │  • Immutable once built (no setters)                                   │
//! │  • Equality compares ALL four fields                                   │
//! │  • Cheap to clone: the cart owns its own copies                        │
//! │  • `id` is NOT required to be unique                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A line item that can be placed in a [`ShoppingCart`](crate::ShoppingCart).
///
/// ## No Validation
/// Construction never fails. Negative prices and discounts outside
/// `[0, 100]` are stored as given and flow straight into the cart totals.
/// Use [`crate::validation::validate_item`] when a caller wants range checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    id: String,
    name: String,
    /// Price in dollars.
    price: f64,
    /// Percent off the price (30.0 = 30% off).
    #[serde(default)]
    discount: f64,
}

impl Item {
    /// Creates an item with no discount.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::Item;
    ///
    /// let laptop = Item::new("1111", "Laptop 1", 500.0);
    /// assert_eq!(laptop.discount(), 0.0);
    /// ```
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Item::with_discount(id, name, price, 0.0)
    }

    /// Creates an item with a percentage discount.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::Item;
    ///
    /// let guitar = Item::with_discount("2222", "Guitar 1", 300.0, 50.0);
    /// assert_eq!(guitar.discount_amount(), 150.0);
    /// ```
    pub fn with_discount(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        discount: f64,
    ) -> Self {
        Item {
            id: id.into(),
            name: name.into(),
            price,
            discount,
        }
    }

    /// Creates an item with a random UUID v4 id.
    pub fn with_generated_id(name: impl Into<String>, price: f64, discount: f64) -> Self {
        Item::with_discount(Uuid::new_v4().to_string(), name, price, discount)
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn price(&self) -> f64 {
        self.price
    }

    #[inline]
    pub fn discount(&self) -> f64 {
        self.discount
    }

    /// Checks if this item carries a discount.
    ///
    /// Only an exact `0.0` counts as "no discount".
    #[inline]
    pub fn has_discount(&self) -> bool {
        self.discount != 0.0
    }

    /// Returns the dollar amount taken off this item's price.
    ///
    /// ## Formula
    /// `discount / 100 * price`, or exactly `0.0` when the item has no
    /// discount.
    pub fn discount_amount(&self) -> f64 {
        if !self.has_discount() {
            return 0.0;
        }
        self.discount / 100.0 * self.price
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
