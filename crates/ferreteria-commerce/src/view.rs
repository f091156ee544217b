//! View models for the storefront.
//!
//! Everything here is derived from [`AppState`] on demand and holds no state
//! of its own. The UI layer renders these structs; shopper-facing text lives
//! here so it can be tested without a browser.

use crate::catalog::CategoryFilter;
use crate::checkout::Receipt;
use crate::error::StoreError;
use crate::ids::ItemId;
use crate::money::Money;
use crate::state::AppState;

pub const ADD_TO_CART_LABEL: &str = "Añadir al carrito";
pub const REMOVE_LABEL: &str = "×";
pub const EMPTY_CART_MESSAGE: &str = "Tu carrito está vacío.";
pub const OUT_OF_STOCK_MESSAGE: &str = "No hay stock suficiente.";

/// A category selector button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryButton {
    pub filter: CategoryFilter,
    pub label: &'static str,
    pub selected: bool,
}

/// One card in the catalog grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub item_id: ItemId,
    pub name: String,
    pub category: &'static str,
    pub price: String,
    /// e.g. "Stock: 20".
    pub stock: String,
    /// False when stock is 0; the add button is disabled.
    pub can_add: bool,
}

/// One row in the cart panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRow {
    pub item_id: ItemId,
    /// e.g. "Martillo x2".
    pub label: String,
    pub subtotal: String,
}

/// The cart panel: rows plus footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartPanel {
    pub rows: Vec<CartRow>,
    /// e.g. "Total: S/51.98".
    pub total: String,
    /// Shown instead of rows when the cart is empty.
    pub empty_message: Option<&'static str>,
}

/// A blocking notification for the shopper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    OutOfStock,
    EmptyCart,
    PurchaseConfirmed { total: String },
}

impl Notice {
    /// Map a rejected action to a notice. Internal errors map to None.
    pub fn from_error(error: &StoreError) -> Option<Self> {
        match error {
            StoreError::OutOfStock { .. } => Some(Notice::OutOfStock),
            StoreError::EmptyCart => Some(Notice::EmptyCart),
            _ => None,
        }
    }

    pub fn for_receipt(receipt: &Receipt) -> Self {
        Notice::PurchaseConfirmed {
            total: receipt.total.display(),
        }
    }

    pub fn message(&self) -> String {
        match self {
            Notice::OutOfStock => OUT_OF_STOCK_MESSAGE.to_string(),
            Notice::EmptyCart => EMPTY_CART_MESSAGE.to_string(),
            Notice::PurchaseConfirmed { total } => format!("Compra realizada por {}", total),
        }
    }
}

pub fn category_buttons(state: &AppState) -> Vec<CategoryButton> {
    let selected = state.filter().category;
    CategoryFilter::options()
        .map(|filter| CategoryButton {
            filter,
            label: filter.label(),
            selected: filter == selected,
        })
        .collect()
}

pub fn catalog_grid(state: &AppState) -> Vec<ProductCard> {
    state
        .visible_items()
        .map(|item| ProductCard {
            item_id: item.id,
            name: item.name.clone(),
            category: item.category.label(),
            price: item.formatted_price(),
            stock: format!("Stock: {}", item.stock),
            can_add: item.is_in_stock(1),
        })
        .collect()
}

pub fn cart_panel(state: &AppState) -> Result<CartPanel, StoreError> {
    let cart = state.cart();
    if cart.is_empty() {
        return Ok(CartPanel {
            rows: Vec::new(),
            total: total_label(Money::zero(cart.currency())),
            empty_message: Some(EMPTY_CART_MESSAGE),
        });
    }

    let rows = cart
        .entries()
        .iter()
        .map(|entry| {
            Ok(CartRow {
                item_id: entry.item_id,
                label: format!("{} x{}", entry.name, entry.quantity),
                subtotal: entry.subtotal()?.display(),
            })
        })
        .collect::<Result<Vec<_>, StoreError>>()?;

    Ok(CartPanel {
        rows,
        total: total_label(cart.total()?),
        empty_message: None,
    })
}

fn total_label(total: Money) -> String {
    format!("Total: {}", total.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::config::StoreConfig;
    use crate::state::Action;

    fn state() -> AppState {
        AppState::new(StoreConfig::embedded().unwrap())
    }

    #[test]
    fn test_category_buttons() {
        let mut state = state();
        let buttons = category_buttons(&state);
        assert_eq!(buttons.len(), 5);
        assert_eq!(buttons[0].label, "Todas");
        assert!(buttons[0].selected);

        state
            .dispatch(Action::SelectCategory(CategoryFilter::Only(Category::Medicion)))
            .unwrap();
        let buttons = category_buttons(&state);
        let selected: Vec<_> = buttons.iter().filter(|b| b.selected).map(|b| b.label).collect();
        assert_eq!(selected, vec!["Medición"]);
    }

    #[test]
    fn test_catalog_grid_cards() {
        let state = state();
        let cards = catalog_grid(&state);
        assert_eq!(cards.len(), 6);
        assert_eq!(
            cards[0],
            ProductCard {
                item_id: ItemId::new(1),
                name: "Martillo".to_string(),
                category: "Herramientas",
                price: "S/25.99".to_string(),
                stock: "Stock: 20".to_string(),
                can_add: true,
            }
        );
        assert_eq!(cards[3].price, "S/15.00");
    }

    #[test]
    fn test_card_disabled_when_sold_out() {
        let mut state = state();
        for _ in 0..5 {
            state.dispatch(Action::AddToCart(ItemId::new(6))).unwrap();
        }
        let cards = catalog_grid(&state);
        let drill = cards.iter().find(|c| c.item_id == ItemId::new(6)).unwrap();
        assert!(!drill.can_add);
        assert_eq!(drill.stock, "Stock: 0");
    }

    #[test]
    fn test_empty_cart_panel() {
        let panel = cart_panel(&state()).unwrap();
        assert!(panel.rows.is_empty());
        assert_eq!(panel.total, "Total: S/0.00");
        assert_eq!(panel.empty_message, Some("Tu carrito está vacío."));
    }

    #[test]
    fn test_cart_panel_rows() {
        let mut state = state();
        state.dispatch(Action::AddToCart(ItemId::new(1))).unwrap();
        state.dispatch(Action::AddToCart(ItemId::new(1))).unwrap();
        state.dispatch(Action::AddToCart(ItemId::new(3))).unwrap();

        let panel = cart_panel(&state).unwrap();
        assert_eq!(panel.empty_message, None);
        assert_eq!(panel.rows.len(), 2);
        assert_eq!(panel.rows[0].label, "Martillo x2");
        assert_eq!(panel.rows[0].subtotal, "S/51.98");
        assert_eq!(panel.total, "Total: S/60.97");
    }

    #[test]
    fn test_notice_messages() {
        let err = StoreError::OutOfStock {
            item_id: ItemId::new(6),
            requested: 1,
            available: 0,
        };
        assert_eq!(
            Notice::from_error(&err).unwrap().message(),
            "No hay stock suficiente."
        );
        assert_eq!(
            Notice::from_error(&StoreError::EmptyCart).unwrap().message(),
            "Tu carrito está vacío."
        );
        assert_eq!(Notice::from_error(&StoreError::NotInCart(ItemId::new(1))), None);

        let notice = Notice::PurchaseConfirmed {
            total: "S/51.98".to_string(),
        };
        assert_eq!(notice.message(), "Compra realizada por S/51.98");
    }
}
