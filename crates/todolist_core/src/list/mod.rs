//! List presentation layer over the item store.
//!
//! # Responsibility
//! - Project the store's two sequences as a two-section list.
//! - Relay check/uncheck commits and row selection back into the store
//!   without binding to any particular UI toolkit.

pub mod provider;
