//! The catalog store: items in seed order plus their stock ledger.

use crate::catalog::{AdjustmentReason, Item, StockAdjustment, StockLedger};
use crate::error::StoreError;
use crate::ids::{ItemId, ReceiptNumber};
use crate::search::FilterState;
use serde::{Deserialize, Serialize};

/// Owns every catalog item. Items are seeded once and never added or removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogStore {
    items: Vec<Item>,
    ledger: StockLedger,
}

impl CatalogStore {
    /// Create a store from seed items, keeping their order.
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            ledger: StockLedger::new(),
        }
    }

    /// Items visible under `filter`, in catalog order.
    pub fn list<'a>(&'a self, filter: &'a FilterState) -> impl Iterator<Item = &'a Item> + 'a {
        self.items.iter().filter(move |item| filter.matches(item))
    }

    pub fn find_by_id(&self, id: ItemId) -> Result<&Item, StoreError> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Apply a signed stock delta as a manual correction.
    ///
    /// Fails without mutating if the result would be negative.
    pub fn adjust_stock(&mut self, id: ItemId, delta: i64) -> Result<u32, StoreError> {
        self.apply(id, delta, AdjustmentReason::Correction)
    }

    /// Take one unit off the shelf for the cart.
    pub(crate) fn reserve(&mut self, id: ItemId, quantity: u32) -> Result<u32, StoreError> {
        self.apply(id, -i64::from(quantity), AdjustmentReason::Reserved)
    }

    /// Put cart units back on the shelf.
    pub(crate) fn release(&mut self, id: ItemId, quantity: u32) -> Result<u32, StoreError> {
        self.apply(id, i64::from(quantity), AdjustmentReason::Released)
    }

    /// Record that reserved units left the store without returning to stock.
    pub(crate) fn consume(
        &mut self,
        id: ItemId,
        quantity: u32,
        reason: AdjustmentReason,
        receipt: Option<ReceiptNumber>,
    ) {
        let mut adjustment = StockAdjustment::new(id, i64::from(quantity), reason);
        if let Some(receipt) = receipt {
            adjustment = adjustment.with_receipt(receipt);
        }
        self.ledger.record(adjustment);
    }

    fn apply(
        &mut self,
        id: ItemId,
        delta: i64,
        reason: AdjustmentReason,
    ) -> Result<u32, StoreError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let next = i64::from(item.stock)
            .checked_add(delta)
            .ok_or(StoreError::Overflow)?;
        if next < 0 {
            return Err(StoreError::InsufficientStock {
                item_id: id,
                delta,
                available: item.stock,
            });
        }
        item.stock = u32::try_from(next).map_err(|_| StoreError::Overflow)?;

        let quantity = match reason {
            AdjustmentReason::Correction => delta,
            _ => delta.abs(),
        };
        self.ledger.record(StockAdjustment::new(id, quantity, reason));

        tracing::trace!(
            item_id = %id,
            delta,
            stock = item.stock,
            reason = reason.as_str(),
            "stock adjusted"
        );
        Ok(item.stock)
    }

    /// All items in catalog order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of available stock across the catalog.
    pub fn total_stock(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.stock)).sum()
    }

    pub fn ledger(&self) -> &StockLedger {
        &self.ledger
    }
}
