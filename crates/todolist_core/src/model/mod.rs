//! Domain model for to-do items.
//!
//! # Responsibility
//! - Define the value types shared by the store and presentation layers.
//! - Enforce field-level invariants at construction and deserialization.
//!
//! # Invariants
//! - A `ToDoItem` title is never blank.
//! - Equality of every model type is structural over all fields.

pub mod item;
pub mod location;
