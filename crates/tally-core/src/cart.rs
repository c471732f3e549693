//! # Shopping Cart
//!
//! An ordered collection of [`Item`]s and the arithmetic over it.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Calculations                                    │
//! │                                                                         │
//! │  items ──► Σ price ────────────┐                                        │
//! │                                ├──► sub total ──┬──► federal tax ─┐     │
//! │  items ──► Σ discount_amount ──┘   (Σ - disc)   ├──► state tax ───┤     │
//! │           (discount != 0 only)                  │                 │     │
//! │                                                 └─────────────────┴──►  │
//! │                                                            final total  │
//! │                                                                         │
//! │  NOTE: every call recomputes from the current items. Nothing cached.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Mutation
//! - `add` appends, duplicates allowed
//! - `remove` drops the FIRST item equal to the argument, or does nothing

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use ts_rs::TS;

use crate::item::Item;
use crate::tax::{tax_on, TaxRates};

/// The shopping cart.
///
/// ## Invariants
/// - Items keep insertion order
/// - The sequence reflects exactly the adds/removes performed (no dedup)
///
/// ## Thread Safety
/// None provided. Wrap in a `Mutex` when shared between threads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShoppingCart {
    items: Vec<Item>,
}

impl ShoppingCart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        ShoppingCart { items: Vec::new() }
    }

    /// Creates a cart pre-seeded with items, in the given order.
    pub fn from_items(items: Vec<Item>) -> Self {
        ShoppingCart { items }
    }

    /// Appends an item to the end of the cart.
    pub fn add(&mut self, item: Item) {
        debug!(
            id = %item.id(),
            price = item.price(),
            discount = item.discount(),
            "Adding item to cart"
        );
        self.items.push(item);
    }

    /// Removes the first item equal to `item`.
    ///
    /// ## Behavior
    /// - Equality compares id, name, price and discount
    /// - Only one occurrence is removed, even with duplicates present
    /// - No equal item: the cart is left untouched
    pub fn remove(&mut self, item: &Item) {
        match self.items.iter().position(|i| i == item) {
            Some(index) => {
                self.items.remove(index);
                debug!(id = %item.id(), index, "Removed item from cart");
            }
            None => debug!(id = %item.id(), "Item not in cart, nothing removed"),
        }
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the number of items, counting duplicates.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total dollar discount across the cart.
    ///
    /// Items whose discount is exactly `0.0` are skipped. A cart without
    /// discounted items reports positive `0.0`.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::{Item, ShoppingCart};
    ///
    /// let mut cart = ShoppingCart::new();
    /// cart.add(Item::new("1111", "Laptop 1", 500.0));
    /// cart.add(Item::with_discount("2222", "Guitar 1", 300.0, 50.0));
    ///
    /// assert_eq!(cart.calculate_discount(), 150.0);
    /// ```
    pub fn calculate_discount(&self) -> f64 {
        let discount: f64 = self
            .items
            .iter()
            .filter(|item| item.has_discount())
            .map(Item::discount_amount)
            .fold(0.0, |acc, amount| acc + amount);
        trace!(discount, "Calculated cart discount");
        discount
    }

    /// Sum of all prices minus [`calculate_discount`](Self::calculate_discount).
    ///
    /// An empty cart has a sub total of zero.
    pub fn calculate_sub_total(&self) -> f64 {
        let gross = self.items.iter().fold(0.0, |acc, item| acc + item.price());
        gross - self.calculate_discount()
    }

    /// Federal tax on the sub total.
    ///
    /// Returns exactly `0.0` when `tax_percent` is `0.0`.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::{Item, ShoppingCart};
    ///
    /// let cart = ShoppingCart::from_items(vec![
    ///     Item::new("1111", "Laptop 1", 500.0),
    ///     Item::new("2222", "Guitar 1", 300.0),
    /// ]);
    ///
    /// assert!((cart.calculate_federal_tax(6.0) - 48.0).abs() < 0.01);
    /// assert_eq!(cart.calculate_federal_tax(0.0), 0.0);
    /// ```
    pub fn calculate_federal_tax(&self, tax_percent: f64) -> f64 {
        tax_on(self.calculate_sub_total(), tax_percent)
    }

    /// State tax on the sub total.
    ///
    /// Same formula as [`calculate_federal_tax`](Self::calculate_federal_tax);
    /// only the percentage supplied by the caller differs.
    pub fn calculate_state_tax(&self, tax_percent: f64) -> f64 {
        tax_on(self.calculate_sub_total(), tax_percent)
    }

    /// Sub total plus federal and state tax.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::{Item, ShoppingCart, TaxRates};
    ///
    /// let cart = ShoppingCart::from_items(vec![
    ///     Item::new("1111", "Laptop 1", 500.0),
    ///     Item::with_discount("2222", "Guitar 1", 300.0, 50.0),
    /// ]);
    ///
    /// // 650 + 6% federal (39) + 10% state (65)
    /// let total = cart.calculate_final_total(TaxRates::new(6.0, 10.0));
    /// assert!((total - 754.0).abs() < 0.01);
    /// ```
    pub fn calculate_final_total(&self, rates: TaxRates) -> f64 {
        self.calculate_sub_total()
            + self.calculate_federal_tax(rates.federal_percent)
            + self.calculate_state_tax(rates.state_percent)
    }

    /// Snapshot of every figure for the given rates.
    pub fn totals(&self, rates: TaxRates) -> CartTotals {
        CartTotals {
            item_count: self.len(),
            discount: self.calculate_discount(),
            sub_total: self.calculate_sub_total(),
            federal_tax: self.calculate_federal_tax(rates.federal_percent),
            state_tax: self.calculate_state_tax(rates.state_percent),
            final_total: self.calculate_final_total(rates),
        }
    }
}

impl From<Vec<Item>> for ShoppingCart {
    fn from(items: Vec<Item>) -> Self {
        ShoppingCart::from_items(items)
    }
}

impl FromIterator<Item> for ShoppingCart {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        ShoppingCart::from_items(iter.into_iter().collect())
    }
}

/// Cart totals summary for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub discount: f64,
    pub sub_total: f64,
    pub federal_tax: f64,
    pub state_tax: f64,
    pub final_total: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================
