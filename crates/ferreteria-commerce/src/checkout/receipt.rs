//! Receipt types.

use crate::error::StoreError;
use crate::ids::{ItemId, ReceiptNumber};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A completed purchase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Receipt {
    /// Sequential receipt number.
    pub number: ReceiptNumber,
    /// Purchased lines, in cart order.
    pub lines: Vec<ReceiptLine>,
    /// Amount charged.
    pub total: Money,
}

impl Receipt {
    /// Build a receipt, summing the line subtotals.
    pub fn new(
        number: ReceiptNumber,
        lines: Vec<ReceiptLine>,
        currency: Currency,
    ) -> Result<Self, StoreError> {
        let total = Money::try_sum(lines.iter().map(|l| &l.subtotal), currency)
            .ok_or(StoreError::Overflow)?;
        Ok(Self {
            number,
            lines,
            total,
        })
    }

    /// Total units purchased.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }
}

/// A purchased line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReceiptLine {
    pub item_id: ItemId,
    /// Item name at time of purchase.
    pub name: String,
    pub quantity: u32,
    pub unit_price: Money,
    /// unit_price * quantity.
    pub subtotal: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: u32, quantity: u32, cents: i64) -> ReceiptLine {
        let unit_price = Money::new(cents, Currency::PEN);
        ReceiptLine {
            item_id: ItemId::new(id),
            name: format!("item-{}", id),
            quantity,
            unit_price,
            subtotal: unit_price.try_multiply(i64::from(quantity)).unwrap(),
        }
    }

    #[test]
    fn test_receipt_total() {
        let receipt = Receipt::new(
            ReceiptNumber::new(7),
            vec![line(1, 2, 2599), line(4, 1, 1500)],
            Currency::PEN,
        )
        .unwrap();
        assert_eq!(receipt.total.amount_cents, 6698);
        assert_eq!(receipt.item_count(), 3);
    }

    #[test]
    fn test_receipt_overflow() {
        let mut big = line(1, 1, 0);
        big.subtotal = Money::new(i64::MAX, Currency::PEN);
        let result = Receipt::new(ReceiptNumber::new(1), vec![big.clone(), big], Currency::PEN);
        assert_eq!(result, Err(StoreError::Overflow));
    }

    #[test]
    fn test_receipt_json_shape() {
        let receipt =
            Receipt::new(ReceiptNumber::new(1), vec![line(1, 2, 2599)], Currency::PEN).unwrap();
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["number"], 1);
        assert_eq!(json["total"]["amount_cents"], 5198);
        assert_eq!(json["lines"][0]["quantity"], 2);
    }
}
