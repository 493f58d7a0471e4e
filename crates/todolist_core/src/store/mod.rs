//! In-memory item storage.
//!
//! # Responsibility
//! - Own the open/done partition of all known items.
//! - Keep index-based mutation semantically safe (typed range errors).
//!
//! # Invariants
//! - Every item the store knows sits in exactly one of the two
//!   sequences, never both, never neither.

pub mod item_store;
