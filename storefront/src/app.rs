//! Application components.

use anyhow::Context;
use ferreteria_commerce::state::{Action, AppState, Outcome};
use ferreteria_commerce::view::{self, CartPanel, Notice, ProductCard};
use ferreteria_commerce::StoreConfig;
use leptos::prelude::*;
use leptos_meta::*;

use crate::telemetry;

// ============================================================================
// State
// ============================================================================

/// Handle to the storefront state shared by every component.
#[derive(Clone, Copy)]
struct Store {
    state: RwSignal<AppState>,
}

impl Store {
    fn new(state: AppState) -> Self {
        Self {
            state: RwSignal::new(state),
        }
    }

    fn with<R>(self, f: impl FnOnce(&AppState) -> R) -> R {
        self.state.with(f)
    }

    /// Apply an action and tell the shopper about anything they need to know.
    fn dispatch(self, action: Action) {
        let name = action.name();
        let Some(result) = self.state.try_update(|state| state.dispatch(action)) else {
            tracing::warn!(action = name, "state disposed, action dropped");
            return;
        };

        match result {
            Ok(Outcome::CheckedOut(receipt)) => {
                tracing::info!(
                    receipt = %receipt.number,
                    total = %receipt.total,
                    "purchase confirmed"
                );
                notify(&Notice::for_receipt(&receipt));
            }
            Ok(_) => {}
            Err(e) => match Notice::from_error(&e) {
                Some(notice) => notify(&notice),
                None => tracing::error!(action = name, error = %e, "action failed"),
            },
        }
    }
}

/// Show a blocking browser alert.
fn notify(notice: &Notice) {
    let message = notice.message();
    let Some(window) = web_sys::window() else {
        tracing::warn!(%message, "no window to alert");
        return;
    };
    if let Err(e) = window.alert_with_message(&message) {
        tracing::warn!(error = ?e, "alert failed");
    }
}

/// Load configuration, start logging and seed the session.
fn bootstrap() -> anyhow::Result<AppState> {
    let config = StoreConfig::embedded().context("loading the embedded store configuration")?;
    telemetry::init(&config.log_level);
    tracing::info!(
        items = config.items.len(),
        currency = config.currency.code(),
        restore_stock_on_clear = config.restore_stock_on_clear,
        "storefront starting"
    );
    Ok(AppState::new(config))
}

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let content = match bootstrap() {
        Ok(state) => view! { <Storefront state=state/> }.into_any(),
        Err(e) => {
            telemetry::init("info");
            tracing::error!(error = ?e, "storefront failed to start");
            let detail = format!("{e:#}");
            view! {
                <p class="error">"No se pudo cargar la tienda: " {detail}</p>
            }
            .into_any()
        }
    };

    view! {
        <Meta name="description" content="Ferretería - herramientas, fijaciones y más"/>
        <Title text="Ferretería"/>

        <header>
            <h1>"Ferretería"</h1>
        </header>
        {content}
    }
}

#[component]
fn Storefront(state: AppState) -> impl IntoView {
    let store = Store::new(state);

    view! {
        <div class="layout">
            <aside class="sidebar">
                <CategoryList store=store/>
            </aside>
            <main>
                <SearchBox store=store/>
                <ProductGrid store=store/>
            </main>
            <CartSection store=store/>
        </div>
    }
}

// ============================================================================
// Catalog Components
// ============================================================================

#[component]
fn CategoryList(store: Store) -> impl IntoView {
    let buttons = Memo::new(move |_| store.with(view::category_buttons));

    view! {
        <nav class="categories">
            <h2>"Categorías"</h2>
            {move || {
                buttons
                    .get()
                    .into_iter()
                    .map(|button| {
                        let filter = button.filter;
                        view! {
                            <button
                                class="category"
                                class:selected=button.selected
                                on:click=move |_| store.dispatch(Action::SelectCategory(filter))
                            >
                                {button.label}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

#[component]
fn SearchBox(store: Store) -> impl IntoView {
    view! {
        <input
            type="search"
            class="search"
            placeholder="Buscar productos..."
            on:input=move |ev| store.dispatch(Action::Search(event_target_value(&ev)))
        />
    }
}

#[component]
fn ProductGrid(store: Store) -> impl IntoView {
    let cards = Memo::new(move |_| store.with(view::catalog_grid));

    view! {
        <div class="products">
            {move || {
                cards
                    .get()
                    .into_iter()
                    .map(|card| view! { <ProductCardView card=card store=store/> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn ProductCardView(card: ProductCard, store: Store) -> impl IntoView {
    let id = card.item_id;

    view! {
        <div class="product-card">
            <div class="product-info">
                <h3>{card.name}</h3>
                <p class="category-label">{card.category}</p>
                <p class="price">{card.price}</p>
                <p class="stock">{card.stock}</p>
                <button
                    class="btn"
                    disabled=!card.can_add
                    on:click=move |_| store.dispatch(Action::AddToCart(id))
                >
                    {view::ADD_TO_CART_LABEL}
                </button>
            </div>
        </div>
    }
}

// ============================================================================
// Cart Components
// ============================================================================

#[component]
fn CartSection(store: Store) -> impl IntoView {
    let panel = Memo::new(move |_| store.with(view::cart_panel));

    view! {
        <section class="cart">
            <h2>"Carrito"</h2>
            {move || match panel.get() {
                Ok(panel) => view! { <CartContents panel=panel store=store/> }.into_any(),
                Err(e) => view! {
                    <p class="error">"Error en el carrito: " {e.to_string()}</p>
                }.into_any(),
            }}
            <div class="cart-actions">
                <button class="btn secondary" on:click=move |_| store.dispatch(Action::ClearCart)>
                    "Vaciar carrito"
                </button>
                <button class="btn" on:click=move |_| store.dispatch(Action::Checkout)>
                    "Finalizar compra"
                </button>
            </div>
        </section>
    }
}

#[component]
fn CartContents(panel: CartPanel, store: Store) -> impl IntoView {
    let rows = match panel.empty_message {
        Some(message) => view! { <li class="empty">{message}</li> }.into_any(),
        None => panel
            .rows
            .into_iter()
            .map(|row| {
                let id = row.item_id;
                view! {
                    <li class="cart-row">
                        <span>{row.label}</span>
                        <span class="subtotal">{row.subtotal}</span>
                        <button
                            class="remove"
                            on:click=move |_| store.dispatch(Action::RemoveFromCart(id))
                        >
                            {view::REMOVE_LABEL}
                        </button>
                    </li>
                }
            })
            .collect_view()
            .into_any(),
    };

    view! {
        <ul class="cart-items">{rows}</ul>
        <p class="cart-total">{panel.total}</p>
    }
}
