//! Domain types and logic for the Ferretería storefront.
//!
//! This crate holds everything the storefront knows, independent of how it is
//! rendered:
//!
//! - **Catalog**: items, categories, stock and the stock ledger
//! - **Cart**: cart entries and the stock reservation rules
//! - **Search**: the category + text filter
//! - **Checkout**: receipts
//! - **State**: the application state and its `dispatch` entry point
//! - **View**: view models and shopper-facing messages
//!
//! # Example
//!
//! ```rust
//! use ferreteria_commerce::prelude::*;
//!
//! let config = StoreConfig::embedded().unwrap();
//! let mut state = AppState::new(config);
//!
//! state.dispatch(Action::AddToCart(ItemId::new(1))).unwrap();
//! state.dispatch(Action::AddToCart(ItemId::new(1))).unwrap();
//!
//! match state.dispatch(Action::Checkout).unwrap() {
//!     Outcome::CheckedOut(receipt) => assert_eq!(receipt.total.display(), "S/51.98"),
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;
pub mod state;
pub mod view;

pub use config::{ConfigError, StoreConfig};
pub use error::StoreError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{ConfigError, ItemSeed, StoreConfig};
    pub use crate::error::StoreError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        AdjustmentReason, CatalogStore, Category, CategoryFilter, Item, StockAdjustment,
        StockLedger,
    };

    // Cart
    pub use crate::cart::{CartEntry, CartStore};

    // Checkout
    pub use crate::checkout::{Receipt, ReceiptLine};

    // Search
    pub use crate::search::{matches, FilterState};

    // State
    pub use crate::state::{Action, AppState, Outcome};

    // View
    pub use crate::view::{
        cart_panel, catalog_grid, category_buttons, CartPanel, CartRow, CategoryButton, Notice,
        ProductCard,
    };
}
