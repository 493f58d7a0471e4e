//! Core domain logic for the to-do list.
//! This crate is the single source of truth for item-state invariants.

pub mod list;
pub mod logging;
pub mod model;
pub mod store;

pub use list::provider::{ItemListProvider, SelectionHandler, SECTION_COUNT};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{ItemValidationError, ToDoItem};
pub use model::location::{Coordinate, Location};
pub use store::item_store::{ItemStore, Section, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
