//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::list::{self, EmptyText};
use crate::models::{SortDirection, TodoItem};

/// Widget state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Ordered to-do sequence; render order equals vec order
    pub todos: Vec<TodoItem>,
    /// Current sort direction
    pub sort_direction: SortDirection,
    /// Whether the add form is shown
    pub form_visible: bool,
    /// List stays hidden until first shown
    pub list_visible: bool,
    /// Next stable item id
    pub next_id: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            next_id: 1,
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

// ========================
// Store Helper Functions
// ========================

/// Append trimmed text as a new item. Blank text is rejected and leaves the
/// sequence untouched. Every successful add resets the sort direction back
/// to descending.
pub fn store_add_todo(store: &AppStore, text: &str) -> Result<(), EmptyText> {
    let id = store.next_id().get_untracked();
    list::push_trimmed(&mut store.todos().write(), id, text)?;
    store.next_id().set(id + 1);
    store.sort_direction().set(SortDirection::Descending);
    Ok(())
}

/// Remove the item at `position` from the sequence
pub fn store_delete_todo(store: &AppStore, position: usize) {
    list::remove_at(&mut store.todos().write(), position);
}

/// Replace the text at `position`; blank text is rejected with the item
/// left unchanged
pub fn store_edit_todo(store: &AppStore, position: usize, text: &str) -> Result<(), EmptyText> {
    list::replace_trimmed(&mut store.todos().write(), position, text)
}

/// Reorder: move the item at `from` so it ends up at `to`
pub fn store_move_todo(store: &AppStore, from: usize, to: usize) {
    list::move_item(&mut store.todos().write(), from, to);
}

/// Flip the sort direction and destructively re-sort the stored sequence
pub fn store_toggle_sort(store: &AppStore) {
    let direction = store.sort_direction().get_untracked().toggled();
    store.sort_direction().set(direction);
    list::sort_items(&mut store.todos().write(), direction);
}

/// Reveal the list and hide the add form
pub fn store_show_list(store: &AppStore) {
    store.list_visible().set(true);
    store.form_visible().set(false);
}

/// Hide the add form (cancel control)
pub fn store_hide_form(store: &AppStore) {
    store.form_visible().set(false);
}

/// Sort affordance visibility, a pure function of the current list length
pub fn store_sort_visible(store: &AppStore) -> bool {
    !store.todos().read().is_empty()
}
