//! Two-sequence item store: open items and done items.
//!
//! # Responsibility
//! - Provide the only mutation paths for item state: add, check,
//!   uncheck, remove_all.
//! - Expose both sequences as ordered read-only views.
//!
//! # Invariants
//! - Open order is insertion order; done order is move order.
//! - Checking and unchecking move items, they never copy or drop them.
//! - A failed index operation leaves the store untouched.

use crate::model::item::ToDoItem;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Which of the two item sequences an operation addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Items not yet completed.
    ToDo,
    /// Completed items.
    Done,
}

impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ToDo => write!(f, "to-do"),
            Self::Done => write!(f, "done"),
        }
    }
}

/// Errors from index-addressed store operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// Index fell outside the addressed sequence.
    OutOfRange {
        section: Section,
        index: usize,
        len: usize,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange {
                section,
                index,
                len,
            } => write!(
                f,
                "index {index} is out of range for the {section} sequence of length {len}"
            ),
        }
    }
}

impl Error for StoreError {}

/// In-memory manager owning the open and done item sequences.
///
/// Lifetime is the owning process; there is no persistence behind it.
#[derive(Debug, Default)]
pub struct ItemStore {
    to_do: Vec<ToDoItem>,
    done: Vec<ToDoItem>,
}

impl ItemStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item to the end of the open sequence.
    ///
    /// No uniqueness constraint: items equal to an existing one are
    /// kept and stay distinct by position.
    pub fn add(&mut self, item: ToDoItem) {
        self.to_do.push(item);
    }

    /// Moves the open item at `index` to the end of the done sequence.
    ///
    /// # Errors
    /// - `StoreError::OutOfRange` when `index` does not address an open
    ///   item; the store is left unchanged.
    pub fn check_item(&mut self, index: usize) -> StoreResult<()> {
        if index >= self.to_do.len() {
            return Err(StoreError::OutOfRange {
                section: Section::ToDo,
                index,
                len: self.to_do.len(),
            });
        }
        let item = self.to_do.remove(index);
        self.done.push(item);
        Ok(())
    }

    /// Moves the done item at `index` back to the end of the open
    /// sequence. Inverse of [`ItemStore::check_item`].
    ///
    /// # Errors
    /// - `StoreError::OutOfRange` when `index` does not address a done
    ///   item; the store is left unchanged.
    pub fn uncheck_item(&mut self, index: usize) -> StoreResult<()> {
        if index >= self.done.len() {
            return Err(StoreError::OutOfRange {
                section: Section::Done,
                index,
                len: self.done.len(),
            });
        }
        let item = self.done.remove(index);
        self.to_do.push(item);
        Ok(())
    }

    /// Number of open items.
    pub fn to_do_count(&self) -> usize {
        self.to_do.len()
    }

    /// Number of done items.
    pub fn done_count(&self) -> usize {
        self.done.len()
    }

    /// Open item at `index`, insertion order.
    pub fn item_at(&self, index: usize) -> Option<&ToDoItem> {
        self.to_do.get(index)
    }

    /// Done item at `index`, move order.
    pub fn done_item_at(&self, index: usize) -> Option<&ToDoItem> {
        self.done.get(index)
    }

    /// The open sequence in insertion order.
    pub fn to_do_items(&self) -> &[ToDoItem] {
        &self.to_do
    }

    /// The done sequence in move order.
    pub fn done_items(&self) -> &[ToDoItem] {
        &self.done
    }

    /// Empties both sequences.
    pub fn remove_all(&mut self) {
        self.to_do.clear();
        self.done.clear();
    }
}
