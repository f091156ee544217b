//! Ferretería storefront
//!
//! Client-side Leptos app over `ferreteria-commerce`:
//! - Category list and search box filter the catalog grid
//! - Product cards reserve stock when added to the cart
//! - Cart panel with removal, clear and checkout
//!
//! All state lives in one signal holding the domain [`AppState`]; the view
//! models from `ferreteria_commerce::view` are what gets rendered.
//!
//! [`AppState`]: ferreteria_commerce::state::AppState

mod app;
mod telemetry;

pub use app::App;

/// Mount the storefront on `<body>`.
pub fn run() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
