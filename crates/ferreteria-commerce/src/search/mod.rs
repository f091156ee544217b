//! Search module.
//!
//! Contains the filter state and the predicate that decides catalog visibility.

mod filter;

pub use filter::{matches, FilterState};
