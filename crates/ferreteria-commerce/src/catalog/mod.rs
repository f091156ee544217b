//! Product catalog module.
//!
//! Contains the item type, categories, the catalog store, and the stock ledger.

mod category;
mod inventory;
mod item;
mod store;

pub use category::{Category, CategoryFilter};
pub use inventory::{AdjustmentReason, StockAdjustment, StockLedger};
pub use item::Item;
pub use store::CatalogStore;
