//! To-Do List Component
//!
//! Renders the whole list from the store; rebuilt after every mutation.

use leptos::prelude::*;

use leptos_dnd::create_dnd_signals;

use crate::components::TodoRow;
use crate::store::{use_app_store, AppStateStoreFields};

/// The visible list, hidden until first shown
#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    // Drag state shared by all rows
    let dnd = create_dnd_signals();

    // Id of the row in edit mode (entered by double-click)
    let (editing, set_editing) = signal(None::<u32>);

    let rows = move || store.todos().get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <ul class=move || {
            if store.list_visible().get() { "todo-list" } else { "todo-list hidden" }
        }>
            <For
                each=rows
                key=|(position, item)| {
                    // Key on everything a row displays so reorder, edit and
                    // sort all rebuild rows with fresh positions
                    (item.id, *position, item.text.clone())
                }
                children=move |(position, item)| {
                    view! {
                        <TodoRow
                            item=item
                            position=position
                            dnd=dnd
                            editing=editing
                            set_editing=set_editing
                        />
                    }
                }
            />
        </ul>
    }
}
