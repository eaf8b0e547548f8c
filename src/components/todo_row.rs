//! To-Do Row Component
//!
//! A single list row: text or in-place edit input, delete icon, drag handlers.

use leptos::html;
use leptos::prelude::*;

use leptos_dnd::{
    make_on_dragend, make_on_dragleave, make_on_dragover, make_on_dragstart, make_on_drop,
    DndSignals,
};

use crate::dom;
use crate::list;
use crate::models::{TodoItem, ICON_CANCEL};
use crate::store::{
    store_delete_todo, store_edit_todo, store_move_todo, use_app_store, AppStateStoreFields,
};

/// A single row in the to-do list
#[component]
pub fn TodoRow(
    item: TodoItem,
    /// Position in the current render order
    position: usize,
    dnd: DndSignals,
    /// Id of the row currently in edit mode, if any
    editing: ReadSignal<Option<u32>>,
    set_editing: WriteSignal<Option<u32>>,
) -> impl IntoView {
    let store = use_app_store();
    let id = item.id;
    let text = item.text.clone();

    let is_editing = move || editing.get() == Some(id);

    let on_dragstart = make_on_dragstart(dnd, position);
    let on_dragover = make_on_dragover(dnd, position);
    let on_dragleave = make_on_dragleave(dnd, position);
    let on_dragend = make_on_dragend(dnd);
    let on_drop = make_on_drop(dnd, position, move |from, to| {
        web_sys::console::log_1(&format!("[DND] drop: from={}, to={}", from, to).into());
        store_move_todo(&store, from, to);
    });

    // Positions are resolved from the sequence at click time via the
    // stable id, so a row acts on the item it is showing.
    let on_delete = move |_| {
        let resolved = list::position_of(&store.todos().read_untracked(), id);
        if let Some(position) = resolved {
            store_delete_todo(&store, position);
        }
    };

    // Commit on blur or Enter; the blur that follows an Enter-commit is a
    // no-op because edit mode has already been left.
    let commit_edit = move |value: String| {
        if editing.get_untracked() != Some(id) {
            return;
        }
        set_editing.set(None);
        let resolved = list::position_of(&store.todos().read_untracked(), id);
        let Some(position) = resolved else { return };
        if store_edit_todo(&store, position, &value).is_err() {
            dom::alert("To-do cannot be empty");
        }
    };

    let input_ref: NodeRef<html::Input> = NodeRef::new();
    Effect::new(move |_| {
        if is_editing() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let row_class = move || {
        let mut c = String::from("todo-item");
        if dnd.source_read.get() == Some(position) {
            c.push_str(" dragging");
        }
        if dnd.over_read.get() == Some(position) {
            c.push_str(" drag-over");
        }
        c
    };

    view! {
        <li
            class=row_class
            draggable="true"
            attr:data-index=position.to_string()
            on:dragstart=on_dragstart
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:dragend=on_dragend
            on:drop=on_drop
            on:dblclick=move |_| set_editing.set(Some(id))
        >
            {move || if is_editing() {
                view! {
                    <input
                        type="text"
                        class="edit-input"
                        value=text.clone()
                        node_ref=input_ref
                        on:blur=move |ev| commit_edit(event_target_value(&ev))
                        on:keypress=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                commit_edit(event_target_value(&ev));
                            }
                        }
                    />
                }.into_any()
            } else {
                view! { <span class="todo-text">{text.clone()}</span> }.into_any()
            }}

            <img class="delete-todo" src=ICON_CANCEL alt="Delete" on:click=on_delete />
        </li>
    }
}
