//! Application state and the single dispatch entry point.
//!
//! Every user action is applied by [`AppState::dispatch`]. It runs to
//! completion before the next action, so the stores never see interleaved
//! mutations.

use crate::cart::CartStore;
use crate::catalog::{CatalogStore, CategoryFilter, Item};
use crate::checkout::Receipt;
use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::ids::{ItemId, ReceiptNumber};
use crate::search::FilterState;
use serde::{Deserialize, Serialize};

/// A user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    SelectCategory(CategoryFilter),
    Search(String),
    AddToCart(ItemId),
    RemoveFromCart(ItemId),
    ClearCart,
    Checkout,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::SelectCategory(_) => "select_category",
            Action::Search(_) => "search",
            Action::AddToCart(_) => "add_to_cart",
            Action::RemoveFromCart(_) => "remove_from_cart",
            Action::ClearCart => "clear_cart",
            Action::Checkout => "checkout",
        }
    }
}

/// What a successful action changed.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Only the catalog view needs re-rendering.
    FilterChanged,
    /// Catalog stock and the cart changed.
    CartChanged,
    /// Purchase completed.
    CheckedOut(Receipt),
    /// Internal lookup miss; nothing changed.
    Ignored,
}

/// Everything the storefront holds in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    catalog: CatalogStore,
    cart: CartStore,
    filter: FilterState,
    config: StoreConfig,
    next_receipt: ReceiptNumber,
}

impl AppState {
    /// Seed a fresh session from configuration.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            catalog: config.build_catalog(),
            cart: CartStore::new(config.currency),
            filter: FilterState::default(),
            config,
            next_receipt: ReceiptNumber::new(1),
        }
    }

    /// Apply one action.
    ///
    /// `OutOfStock` and `EmptyCart` are returned for the UI to report.
    /// `NotFound` and `NotInCart` become [`Outcome::Ignored`].
    pub fn dispatch(&mut self, action: Action) -> Result<Outcome, StoreError> {
        let name = action.name();
        let result = self.apply(action);
        match result {
            Err(StoreError::NotFound(id)) | Err(StoreError::NotInCart(id)) => {
                tracing::debug!(action = name, item_id = %id, "lookup miss ignored");
                Ok(Outcome::Ignored)
            }
            Err(e) => {
                tracing::debug!(action = name, error = %e, "action rejected");
                Err(e)
            }
            Ok(outcome) => Ok(outcome),
        }
    }

    fn apply(&mut self, action: Action) -> Result<Outcome, StoreError> {
        match action {
            Action::SelectCategory(category) => {
                self.filter.category = category;
                Ok(Outcome::FilterChanged)
            }
            Action::Search(term) => {
                self.filter.search_term = term;
                Ok(Outcome::FilterChanged)
            }
            Action::AddToCart(id) => {
                self.cart.add_one(&mut self.catalog, id)?;
                Ok(Outcome::CartChanged)
            }
            Action::RemoveFromCart(id) => {
                self.cart.remove_one(&mut self.catalog, id)?;
                Ok(Outcome::CartChanged)
            }
            Action::ClearCart => {
                self.cart
                    .clear(&mut self.catalog, self.config.restore_stock_on_clear)?;
                Ok(Outcome::CartChanged)
            }
            Action::Checkout => {
                let receipt = self.cart.checkout(&mut self.catalog, self.next_receipt)?;
                self.next_receipt = self.next_receipt.next();
                Ok(Outcome::CheckedOut(receipt))
            }
        }
    }

    /// Items visible under the current filter.
    pub fn visible_items(&self) -> impl Iterator<Item = &Item> {
        self.catalog.list(&self.filter)
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}
