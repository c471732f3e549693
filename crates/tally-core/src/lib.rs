//! # tally-core: Shopping Cart Arithmetic
//!
//! Items with prices and optional percent-off discounts, collected in a
//! cart that computes discount, sub total, federal tax, state tax and final
//! total on demand.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tally Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │        Embedding app (checkout UI, order service, cart-quote)   │   │
//! │  │   owns persistence, currency formatting, tax-rate sourcing      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ in-process calls                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   item    │  │   cart    │  │    tax    │  │ validation│  │   │
//! │  │   │   Item    │  │ Shopping  │  │ TaxRates  │  │  opt-in   │  │   │
//! │  │   │           │  │   Cart    │  │  tax_on   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO DATABASE • NO NETWORK • PURE ARITHMETIC                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`item`] - The `Item` value type
//! - [`cart`] - `ShoppingCart` and its calculations
//! - [`tax`] - Tax percentages and the shared tax formula
//! - [`config`] - Default tax percentages from the environment
//! - [`validation`] - Range checks the cart never applies on its own
//! - [`error`] - Config and validation error types
//!
//! ## Design Principles
//!
//! 1. **Recompute, never cache**: every total is derived from the current items
//! 2. **Permissive arithmetic**: no input makes a calculation fail
//! 3. **Value semantics**: items are compared by all fields, the cart owns copies
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{Item, ShoppingCart, TaxRates};
//!
//! let mut cart = ShoppingCart::new();
//! cart.add(Item::new("1111", "Laptop 1", 500.0));
//! cart.add(Item::with_discount("2222", "Guitar 1", 300.0, 50.0));
//!
//! assert_eq!(cart.calculate_discount(), 150.0);
//! assert_eq!(cart.calculate_sub_total(), 650.0);
//!
//! // 650 + 6% federal tax
//! let total = cart.calculate_final_total(TaxRates::federal(6.0));
//! assert!((total - 689.0).abs() < 0.01);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod config;
pub mod error;
pub mod item;
pub mod tax;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::Item` instead of
// `use tally_core::item::Item`

pub use cart::{CartTotals, ShoppingCart};
pub use config::CartConfig;
pub use error::{ConfigError, ValidationError};
pub use item::Item;
pub use tax::TaxRates;
