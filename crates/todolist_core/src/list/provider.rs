//! Two-section list adapter.
//!
//! # Responsibility
//! - Answer section/row queries for rendering (open first, done second).
//! - Translate a toggle commit in either section into the matching
//!   store move (check or uncheck).
//! - Report row selection through an explicit handler the presentation
//!   layer registers, not a global broadcast.
//!
//! # Invariants
//! - Section 0 is the open sequence, section 1 the done sequence.
//! - The selection handler only ever sees rows that exist.

use crate::model::item::ToDoItem;
use crate::store::item_store::{ItemStore, Section, StoreError, StoreResult};

/// The list always renders exactly two sections.
pub const SECTION_COUNT: usize = 2;

/// Callback invoked when a row is selected.
pub type SelectionHandler = Box<dyn FnMut(Section, usize, &ToDoItem)>;

/// Presentation adapter between an [`ItemStore`] and a two-section list.
///
/// Owns the store for the session. Front ends render by querying
/// `rows_in`/`item_at` per section and push gestures back through
/// `commit_toggle` and `select_row`.
pub struct ItemListProvider {
    store: ItemStore,
    on_select: Option<SelectionHandler>,
}

impl ItemListProvider {
    /// Wraps a store with no selection handler registered.
    pub fn new(store: ItemStore) -> Self {
        Self {
            store,
            on_select: None,
        }
    }

    /// Registers the selection handler, replacing any previous one.
    pub fn set_selection_handler(
        &mut self,
        handler: impl FnMut(Section, usize, &ToDoItem) + 'static,
    ) {
        self.on_select = Some(Box::new(handler));
    }

    /// Number of list sections. Always [`SECTION_COUNT`].
    pub fn section_count(&self) -> usize {
        SECTION_COUNT
    }

    /// The section rendered at `index`, when in range.
    pub fn section_at(index: usize) -> Option<Section> {
        match index {
            0 => Some(Section::ToDo),
            1 => Some(Section::Done),
            _ => None,
        }
    }

    /// Row count of one section.
    pub fn rows_in(&self, section: Section) -> usize {
        match section {
            Section::ToDo => self.store.to_do_count(),
            Section::Done => self.store.done_count(),
        }
    }

    /// Item rendered at `row` of `section`.
    pub fn item_at(&self, section: Section, row: usize) -> Option<&ToDoItem> {
        match section {
            Section::ToDo => self.store.item_at(row),
            Section::Done => self.store.done_item_at(row),
        }
    }

    /// Label for the row action that moves an item across sections.
    pub fn toggle_action_title(section: Section) -> &'static str {
        match section {
            Section::ToDo => "Check",
            Section::Done => "Uncheck",
        }
    }

    /// Commits the toggle gesture for one row: checking in the open
    /// section, unchecking in the done section.
    ///
    /// # Errors
    /// - `StoreError::OutOfRange` when `row` does not exist in `section`.
    pub fn commit_toggle(&mut self, section: Section, row: usize) -> StoreResult<()> {
        match section {
            Section::ToDo => self.store.check_item(row),
            Section::Done => self.store.uncheck_item(row),
        }
    }

    /// Reports a row selection to the registered handler.
    ///
    /// A missing handler makes this a no-op for valid rows; range
    /// checking still applies either way.
    ///
    /// # Errors
    /// - `StoreError::OutOfRange` when `row` does not exist in
    ///   `section`; the handler is not invoked.
    pub fn select_row(&mut self, section: Section, row: usize) -> StoreResult<()> {
        let items = match section {
            Section::ToDo => self.store.to_do_items(),
            Section::Done => self.store.done_items(),
        };
        let item = items.get(row).ok_or(StoreError::OutOfRange {
            section,
            index: row,
            len: items.len(),
        })?;
        if let Some(handler) = self.on_select.as_mut() {
            handler(section, row, item);
        }
        Ok(())
    }

    /// Read access to the wrapped store.
    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    /// Mutable access for non-gesture mutation paths (the add flow).
    pub fn store_mut(&mut self) -> &mut ItemStore {
        &mut self.store
    }
}
