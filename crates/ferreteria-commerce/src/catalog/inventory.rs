//! Stock ledger: the audit trail of every stock movement.
//!
//! Available stock moves when units are reserved by the cart or released back
//! to the shelf. Checkout and a non-restoring clear consume reservations
//! without touching available stock; they are recorded so the ledger can
//! still account for every unit.

use crate::ids::{ItemId, ReceiptNumber};
use serde::{Deserialize, Serialize};

/// Reason for a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdjustmentReason {
    /// Taken from available stock into the cart.
    Reserved,
    /// Returned from the cart to available stock.
    Released,
    /// Reservation consumed by checkout.
    Sold,
    /// Reservation dropped by a clear that does not restore stock.
    WrittenOff,
    /// Direct correction outside the cart flow.
    Correction,
}

impl AdjustmentReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdjustmentReason::Reserved => "reserved",
            AdjustmentReason::Released => "released",
            AdjustmentReason::Sold => "sold",
            AdjustmentReason::WrittenOff => "written_off",
            AdjustmentReason::Correction => "correction",
        }
    }
}

/// A single stock movement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAdjustment {
    /// Item that moved.
    pub item_id: ItemId,
    /// Change in available stock (positive or negative).
    pub stock_change: i64,
    /// Change in units held by the cart.
    pub reserved_change: i64,
    /// Why it moved.
    pub reason: AdjustmentReason,
    /// Receipt that consumed the reservation, for sales.
    pub receipt: Option<ReceiptNumber>,
}

impl StockAdjustment {
    /// Build the adjustment for moving `quantity` units for `reason`.
    ///
    /// For `Correction` the quantity is the signed stock delta.
    pub fn new(item_id: ItemId, quantity: i64, reason: AdjustmentReason) -> Self {
        let (stock_change, reserved_change) = match reason {
            AdjustmentReason::Reserved => (-quantity, quantity),
            AdjustmentReason::Released => (quantity, -quantity),
            AdjustmentReason::Sold | AdjustmentReason::WrittenOff => (0, -quantity),
            AdjustmentReason::Correction => (quantity, 0),
        };
        Self {
            item_id,
            stock_change,
            reserved_change,
            reason,
            receipt: None,
        }
    }

    pub fn with_receipt(mut self, receipt: ReceiptNumber) -> Self {
        self.receipt = Some(receipt);
        self
    }
}

/// Append-only list of stock movements.
///
/// The ledger lives for one session and is never pruned: every add, remove,
/// clear and checkout appends to it, and the per-item queries scan the whole
/// list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockLedger {
    entries: Vec<StockAdjustment>,
}

impl StockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a movement. Nothing is ever removed.
    pub fn record(&mut self, adjustment: StockAdjustment) {
        self.entries.push(adjustment);
    }

    pub fn entries(&self) -> &[StockAdjustment] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Movements for one item, oldest first.
    pub fn for_item(&self, item_id: ItemId) -> impl Iterator<Item = &StockAdjustment> {
        self.entries.iter().filter(move |a| a.item_id == item_id)
    }

    /// Units of an item currently held by the cart, according to the ledger.
    pub fn outstanding_reservations(&self, item_id: ItemId) -> i64 {
        self.for_item(item_id).map(|a| a.reserved_change).sum()
    }

    /// Total units of an item that left through `reason`.
    pub fn units_with_reason(&self, item_id: ItemId, reason: AdjustmentReason) -> i64 {
        self.for_item(item_id)
            .filter(|a| a.reason == reason)
            .map(|a| a.reserved_change.abs().max(a.stock_change.abs()))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjustment_directions() {
        let id = ItemId::new(1);
        let reserved = StockAdjustment::new(id, 2, AdjustmentReason::Reserved);
        assert_eq!((reserved.stock_change, reserved.reserved_change), (-2, 2));

        let released = StockAdjustment::new(id, 1, AdjustmentReason::Released);
        assert_eq!((released.stock_change, released.reserved_change), (1, -1));

        let sold = StockAdjustment::new(id, 3, AdjustmentReason::Sold);
        assert_eq!((sold.stock_change, sold.reserved_change), (0, -3));

        let fix = StockAdjustment::new(id, -4, AdjustmentReason::Correction);
        assert_eq!((fix.stock_change, fix.reserved_change), (-4, 0));
    }

    #[test]
    fn test_outstanding_reservations() {
        let id = ItemId::new(3);
        let mut ledger = StockLedger::new();
        ledger.record(StockAdjustment::new(id, 1, AdjustmentReason::Reserved));
        ledger.record(StockAdjustment::new(id, 1, AdjustmentReason::Reserved));
        ledger.record(StockAdjustment::new(id, 1, AdjustmentReason::Released));
        ledger.record(StockAdjustment::new(ItemId::new(4), 1, AdjustmentReason::Reserved));

        assert_eq!(ledger.outstanding_reservations(id), 1);
        assert_eq!(ledger.len(), 4);

        ledger.record(
            StockAdjustment::new(id, 1, AdjustmentReason::Sold).with_receipt(ReceiptNumber::new(1)),
        );
        assert_eq!(ledger.outstanding_reservations(id), 0);
        assert_eq!(ledger.units_with_reason(id, AdjustmentReason::Sold), 1);
        assert_eq!(ledger.units_with_reason(id, AdjustmentReason::Reserved), 2);
    }
}
