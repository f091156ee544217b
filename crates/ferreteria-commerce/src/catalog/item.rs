//! Catalog item type.

use crate::catalog::Category;
use crate::ids::ItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A purchasable item and its available stock.
///
/// Stock is the number of units not yet reserved by the cart. It only
/// changes through the owning [`CatalogStore`](crate::catalog::CatalogStore).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// Unique, stable identifier.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Category.
    pub category: Category,
    /// Available units.
    pub stock: u32,
}

impl Item {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        price: Money,
        category: Category,
        stock: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category,
            stock,
        }
    }

    /// Price formatted for display (e.g., "S/25.99").
    pub fn formatted_price(&self) -> String {
        self.price.display()
    }

    /// Check if at least `quantity` units are available.
    pub fn is_in_stock(&self, quantity: u32) -> bool {
        self.stock >= quantity
    }

    /// Price after a percentage discount. The percentage is clamped to 0..=100.
    pub fn discounted_price(&self, percent: f64) -> Money {
        let percent = percent.clamp(0.0, 100.0);
        Money::new(
            self.price.amount_cents - self.price.percentage(percent).amount_cents,
            self.price.currency,
        )
    }
}
