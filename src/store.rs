//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use cliente_core::{Notice, ViewState, ViewStateHandle};
use crate::models::{Cliente, DraftField, Toast};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Records, search term and edit selection of the list screen
    pub list_view: ViewState,
    /// Notices currently on screen, oldest first
    pub toasts: Vec<Toast>,
    /// Id handed to the next toast
    pub next_toast_id: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            next_toast_id: 1,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Hands the store's view state to cliente-core's coordinator.
/// Writes go through the store so dependent memos rerun.
#[derive(Clone, Copy)]
pub struct StoreHandle(pub AppStore);

impl ViewStateHandle for StoreHandle {
    fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        f(&*self.0.list_view().read_untracked())
    }

    fn update<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> R {
        f(&mut *self.0.list_view().write())
    }
}

// ========================
// Store Helper Functions
// ========================

/// Records matching the search term (tracked)
pub fn store_filtered(store: &AppStore) -> Vec<Cliente> {
    store.list_view().read().filtered()
}

pub fn store_search(store: &AppStore) -> String {
    store.list_view().read().search.clone()
}

pub fn store_set_search(store: &AppStore, term: String) {
    store.list_view().write().search = term;
}

/// Record open in the edit modal (tracked)
pub fn store_selected(store: &AppStore) -> Option<Cliente> {
    store.list_view().read().selected.clone()
}

pub fn store_edit_selected(store: &AppStore, field: DraftField, value: String) {
    store.list_view().write().edit_selected(field, value);
}

pub fn store_clear_selection(store: &AppStore) {
    store.list_view().write().selected = None;
}

pub fn store_record_count(store: &AppStore) -> usize {
    store.list_view().read().store.len()
}

/// Append a toast and return its id
pub fn store_push_toast(store: &AppStore, notice: Notice) -> u64 {
    let id = {
        let next_field = store.next_toast_id();
        let mut next = next_field.write();
        let id = *next;
        *next += 1;
        id
    };
    store.toasts().write().push(Toast { id, notice });
    id
}

pub fn store_dismiss_toast(store: &AppStore, toast_id: u64) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}

pub fn store_toasts(store: &AppStore) -> Vec<Toast> {
    store.toasts().get()
}

