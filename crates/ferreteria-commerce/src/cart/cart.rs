//! Cart store and the stock reconciliation rules.
//!
//! Stock is reserved the moment a unit enters the cart, not at checkout.
//! For every item, `catalog stock + cart quantity` stays constant across
//! `add_one`, `remove_one` and a restoring `clear`. Checkout and a
//! non-restoring clear consume the reservation instead.

use crate::catalog::{AdjustmentReason, CatalogStore};
use crate::checkout::{Receipt, ReceiptLine};
use crate::error::StoreError;
use crate::ids::{ItemId, ReceiptNumber};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// One cart line: units of a single item reserved from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartEntry {
    /// Catalog item.
    pub item_id: ItemId,
    /// Item name (denormalized for display).
    pub name: String,
    /// Unit price at the time of the first add.
    pub unit_price: Money,
    /// Reserved units, always positive.
    pub quantity: u32,
}

impl CartEntry {
    /// Line subtotal (unit_price * quantity).
    pub fn subtotal(&self) -> Result<Money, StoreError> {
        self.unit_price
            .try_multiply(i64::from(self.quantity))
            .ok_or(StoreError::Overflow)
    }
}

/// The shopping cart. At most one entry per item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CartStore {
    entries: Vec<CartEntry>,
    currency: Currency,
}

impl CartStore {
    pub fn new(currency: Currency) -> Self {
        Self {
            entries: Vec::new(),
            currency,
        }
    }

    /// Reserve one unit of `id` and add it to the cart.
    ///
    /// Returns the new quantity of the entry. Fails with `OutOfStock` and
    /// leaves both stores untouched when no unit is available.
    pub fn add_one(&mut self, catalog: &mut CatalogStore, id: ItemId) -> Result<u32, StoreError> {
        let item = catalog.find_by_id(id)?;
        if !item.is_in_stock(1) {
            tracing::warn!(item_id = %id, name = %item.name, "add to cart refused: out of stock");
            return Err(StoreError::OutOfStock {
                item_id: id,
                requested: 1,
                available: item.stock,
            });
        }
        let name = item.name.clone();
        let unit_price = item.price;

        let position = self.entries.iter().position(|e| e.item_id == id);
        let quantity = match position {
            Some(index) => self.entries[index]
                .quantity
                .checked_add(1)
                .ok_or(StoreError::Overflow)?,
            None => 1,
        };

        catalog.reserve(id, 1).map_err(|e| match e {
            StoreError::InsufficientStock { available, .. } => StoreError::OutOfStock {
                item_id: id,
                requested: 1,
                available,
            },
            other => other,
        })?;

        match position {
            Some(index) => self.entries[index].quantity = quantity,
            None => self.entries.push(CartEntry {
                item_id: id,
                name,
                unit_price,
                quantity,
            }),
        }

        tracing::debug!(item_id = %id, quantity, "unit reserved");
        Ok(quantity)
    }

    /// Return one unit of `id` from the cart to the catalog.
    ///
    /// Returns the remaining quantity; the entry is dropped when it hits zero.
    pub fn remove_one(
        &mut self,
        catalog: &mut CatalogStore,
        id: ItemId,
    ) -> Result<u32, StoreError> {
        let index = self
            .entries
            .iter()
            .position(|e| e.item_id == id)
            .ok_or(StoreError::NotInCart(id))?;

        catalog.release(id, 1)?;

        let remaining = self.entries[index].quantity - 1;
        if remaining == 0 {
            self.entries.remove(index);
        } else {
            self.entries[index].quantity = remaining;
        }

        tracing::debug!(item_id = %id, remaining, "unit released");
        Ok(remaining)
    }

    /// Empty the cart.
    ///
    /// With `restore_stock` every reserved unit goes back to the catalog;
    /// without it the reservations are written off and the units stay out of
    /// available stock. Returns the number of units affected.
    pub fn clear(
        &mut self,
        catalog: &mut CatalogStore,
        restore_stock: bool,
    ) -> Result<u32, StoreError> {
        let mut units: u32 = 0;
        let mut processed = 0;
        let mut failure = None;

        for entry in &self.entries {
            if restore_stock {
                if let Err(e) = catalog.release(entry.item_id, entry.quantity) {
                    failure = Some(e);
                    break;
                }
            } else {
                catalog.consume(entry.item_id, entry.quantity, AdjustmentReason::WrittenOff, None);
            }
            units = units.saturating_add(entry.quantity);
            processed += 1;
        }

        // Entries already handled must go even if a later one failed.
        self.entries = self.entries.split_off(processed);
        if let Some(e) = failure {
            return Err(e);
        }

        tracing::info!(units, restore_stock, "cart cleared");
        Ok(units)
    }

    /// Complete the purchase.
    ///
    /// Stock was committed when units were added, so nothing is restored.
    pub fn checkout(
        &mut self,
        catalog: &mut CatalogStore,
        number: ReceiptNumber,
    ) -> Result<Receipt, StoreError> {
        if self.entries.is_empty() {
            tracing::warn!("checkout refused: cart is empty");
            return Err(StoreError::EmptyCart);
        }

        let lines = self
            .entries
            .iter()
            .map(|entry| {
                Ok(ReceiptLine {
                    item_id: entry.item_id,
                    name: entry.name.clone(),
                    quantity: entry.quantity,
                    unit_price: entry.unit_price,
                    subtotal: entry.subtotal()?,
                })
            })
            .collect::<Result<Vec<_>, StoreError>>()?;
        let receipt = Receipt::new(number, lines, self.currency)?;

        for entry in self.entries.drain(..) {
            catalog.consume(entry.item_id, entry.quantity, AdjustmentReason::Sold, Some(number));
        }

        tracing::info!(
            receipt = %receipt.number,
            items = receipt.item_count(),
            total = %receipt.total,
            "checkout complete"
        );
        Ok(receipt)
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn get(&self, id: ItemId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.item_id == id)
    }

    /// Units of `id` currently reserved by the cart.
    pub fn quantity_of(&self, id: ItemId) -> u32 {
        self.get(id).map_or(0, |e| e.quantity)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total units across entries.
    pub fn item_count(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity)).sum()
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Running total of all entries.
    pub fn total(&self) -> Result<Money, StoreError> {
        self.entries.iter().try_fold(Money::zero(self.currency), |acc, entry| {
            acc.try_add(&entry.subtotal()?).ok_or(StoreError::Overflow)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Item};

    fn catalog() -> CatalogStore {
        CatalogStore::new(vec![
            item(1, "Martillo", 2599, Category::Herramientas, 20),
            item(3, "Clavos (caja)", 899, Category::Fijaciones, 100),
            item(6, "Taladro eléctrico", 8999, Category::Electricas, 1),
        ])
    }

    fn item(id: u32, name: &str, cents: i64, category: Category, stock: u32) -> Item {
        let price = Money::new(cents, Currency::PEN);
        Item::new(ItemId::new(id), name, price, category, stock)
    }

    fn stock(catalog: &CatalogStore, id: u32) -> u32 {
        catalog.find_by_id(ItemId::new(id)).unwrap().stock
    }

    #[test]
    fn test_add_reserves_stock() {
        let mut catalog = catalog();
        let mut cart = CartStore::new(Currency::PEN);

        assert_eq!(cart.add_one(&mut catalog, ItemId::new(1)).unwrap(), 1);
        assert_eq!(cart.add_one(&mut catalog, ItemId::new(1)).unwrap(), 2);

        assert_eq!(stock(&catalog, 1), 18);
        assert_eq!(cart.entries().len(), 1);
        assert_eq!(cart.quantity_of(ItemId::new(1)), 2);
    }

    #[test]
    fn test_add_out_of_stock() {
        let mut catalog = catalog();
        let mut cart = CartStore::new(Currency::PEN);

        cart.add_one(&mut catalog, ItemId::new(6)).unwrap();
        let err = cart.add_one(&mut catalog, ItemId::new(6)).unwrap_err();

        assert_eq!(
            err,
            StoreError::OutOfStock {
                item_id: ItemId::new(6),
                requested: 1,
                available: 0,
            }
        );
        assert_eq!(stock(&catalog, 6), 0);
        assert_eq!(cart.quantity_of(ItemId::new(6)), 1);
    }

    #[test]
    fn test_add_unknown_item() {
        let mut catalog = catalog();
        let mut cart = CartStore::new(Currency::PEN);
        assert_eq!(
            cart.add_one(&mut catalog, ItemId::new(42)),
            Err(StoreError::NotFound(ItemId::new(42)))
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_restores_stock() {
        let mut catalog = catalog();
        let mut cart = CartStore::new(Currency::PEN);

        cart.add_one(&mut catalog, ItemId::new(3)).unwrap();
        cart.add_one(&mut catalog, ItemId::new(3)).unwrap();
        assert_eq!(cart.remove_one(&mut catalog, ItemId::new(3)).unwrap(), 1);
        assert_eq!(stock(&catalog, 3), 99);

        assert_eq!(cart.remove_one(&mut catalog, ItemId::new(3)).unwrap(), 0);
        assert!(cart.get(ItemId::new(3)).is_none());
        assert_eq!(stock(&catalog, 3), 100);
    }

    #[test]
    fn test_remove_not_in_cart() {
        let mut catalog = catalog();
        let mut cart = CartStore::new(Currency::PEN);
        assert_eq!(
            cart.remove_one(&mut catalog, ItemId::new(1)),
            Err(StoreError::NotInCart(ItemId::new(1)))
        );
        assert_eq!(stock(&catalog, 1), 20);
    }

    #[test]
    fn test_clear_with_restore() {
        let mut catalog = catalog();
        let mut cart = CartStore::new(Currency::PEN);
        for _ in 0..5 {
            cart.add_one(&mut catalog, ItemId::new(3)).unwrap();
        }
        cart.add_one(&mut catalog, ItemId::new(1)).unwrap();

        assert_eq!(cart.clear(&mut catalog, true).unwrap(), 6);
        assert!(cart.is_empty());
        assert_eq!(stock(&catalog, 3), 100);
        assert_eq!(stock(&catalog, 1), 20);
    }

    #[test]
    fn test_clear_without_restore() {
        let mut catalog = catalog();
        let mut cart = CartStore::new(Currency::PEN);
        for _ in 0..5 {
            cart.add_one(&mut catalog, ItemId::new(3)).unwrap();
        }

        assert_eq!(cart.clear(&mut catalog, false).unwrap(), 5);
        assert!(cart.is_empty());
        assert_eq!(stock(&catalog, 3), 95);
        assert_eq!(
            catalog
                .ledger()
                .units_with_reason(ItemId::new(3), AdjustmentReason::WrittenOff),
            5
        );
    }

    #[test]
    fn test_checkout() {
        let mut catalog = catalog();
        let mut cart = CartStore::new(Currency::PEN);
        cart.add_one(&mut catalog, ItemId::new(1)).unwrap();
        cart.add_one(&mut catalog, ItemId::new(1)).unwrap();

        let receipt = cart.checkout(&mut catalog, ReceiptNumber::new(1)).unwrap();
        assert_eq!(receipt.total.display(), "S/51.98");
        assert_eq!(receipt.lines.len(), 1);
        assert!(cart.is_empty());
        assert_eq!(stock(&catalog, 1), 18);
        assert_eq!(catalog.ledger().outstanding_reservations(ItemId::new(1)), 0);
    }

    #[test]
    fn test_checkout_empty() {
        let mut catalog = catalog();
        let mut cart = CartStore::new(Currency::PEN);
        assert_eq!(
            cart.checkout(&mut catalog, ReceiptNumber::new(1)),
            Err(StoreError::EmptyCart)
        );
        assert!(catalog.ledger().is_empty());
    }

    #[test]
    fn test_total() {
        let mut catalog = catalog();
        let mut cart = CartStore::new(Currency::PEN);
        assert_eq!(cart.total().unwrap(), Money::zero(Currency::PEN));

        cart.add_one(&mut catalog, ItemId::new(1)).unwrap();
        cart.add_one(&mut catalog, ItemId::new(3)).unwrap();
        cart.add_one(&mut catalog, ItemId::new(3)).unwrap();
        assert_eq!(cart.total().unwrap().amount_cents, 2599 + 2 * 899);
        assert_eq!(cart.item_count(), 3);
    }
}
