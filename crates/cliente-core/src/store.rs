//! Record Store
//!
//! In-memory cliente collection plus the view state built on top of it.
//! The last full load wins; single mutations are applied only after the
//! server confirmed them.

use crate::filter::filter_clientes;
use crate::model::{Cliente, ClienteId, DraftField};

/// Authoritative in-memory collection for the current view session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Cliente>,
}

impl RecordStore {
    pub fn new(records: Vec<Cliente>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Cliente] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: ClienteId) -> Option<&Cliente> {
        self.records.iter().find(|c| c.id == id)
    }

    /// Replace the whole collection with a fresh server listing
    pub fn replace_all(&mut self, records: Vec<Cliente>) {
        self.records = records;
    }

    /// Replace the record with `id` in place. Returns false if absent.
    pub fn apply_update(&mut self, id: ClienteId, patch: Cliente) -> bool {
        match self.records.iter_mut().find(|c| c.id == id) {
            Some(slot) => {
                *slot = patch;
                true
            }
            None => false,
        }
    }

    /// Remove the record with `id`. Returns false if absent.
    pub fn apply_delete(&mut self, id: ClienteId) -> bool {
        let before = self.records.len();
        self.records.retain(|c| c.id != id);
        self.records.len() != before
    }
}

/// Everything the list screen shows: records, search term and the
/// record currently open in the edit modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub store: RecordStore,
    pub search: String,
    /// At most one record is being edited at a time
    pub selected: Option<Cliente>,
}

impl ViewState {
    /// Records matching the current search term, in store order
    pub fn filtered(&self) -> Vec<Cliente> {
        filter_clientes(self.store.records(), &self.search)
    }

    /// Local edit of the selected record; no-op without a selection
    pub fn edit_selected(&mut self, field: DraftField, value: String) {
        if let Some(selected) = self.selected.as_mut() {
            let mut draft = selected.draft();
            draft.set(field, value);
            selected.apply_draft(&draft);
        }
    }

    /// Drop the selection if it points at `id`
    pub fn deselect(&mut self, id: ClienteId) {
        if self.selected.as_ref().map(|c| c.id) == Some(id) {
            self.selected = None;
        }
    }
}

/// Access to a [`ViewState`] living somewhere else (a reactive store, a
/// `RefCell`...). Implementations decide how change notification works.
pub trait ViewStateHandle {
    fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R;

    fn update<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> R;
}

impl ViewStateHandle for std::cell::RefCell<ViewState> {
    fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        f(&self.borrow())
    }

    fn update<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

impl<T: ViewStateHandle + ?Sized> ViewStateHandle for std::rc::Rc<T> {
    fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        (**self).read(f)
    }

    fn update<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> R {
        (**self).update(f)
    }
}
