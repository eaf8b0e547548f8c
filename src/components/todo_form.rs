//! To-Do Form Component
//!
//! Text input plus the add and cancel controls.

use leptos::html;
use leptos::prelude::*;

use crate::dom;
use crate::models::ICON_CANCEL;
use crate::store::{
    store_add_todo, store_hide_form, use_app_store, AppStateStoreFields,
};

/// Form for adding new to-dos
#[component]
pub fn TodoForm() -> impl IntoView {
    let store = use_app_store();

    let (draft, set_draft) = signal(String::new());
    let input_ref: NodeRef<html::Input> = NodeRef::new();

    let add_todo = move || {
        match store_add_todo(&store, &draft.get_untracked()) {
            Ok(()) => {
                set_draft.set(String::new());
                if let Some(input) = input_ref.get_untracked() {
                    let _ = input.focus();
                }
            }
            Err(_) => dom::alert("Please add a to-do"),
        }
    };

    // First click reveals the form, subsequent clicks submit
    let on_add_click = move |_| {
        if store.form_visible().get_untracked() {
            add_todo();
        } else {
            store.form_visible().set(true);
        }
    };

    let on_keypress = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            add_todo();
        }
    };

    view! {
        <div class="submit">
            <button class="add" on:click=on_add_click>"Add"</button>
        </div>
        <div
            class="form"
            style:display=move || if store.form_visible().get() { "block" } else { "none" }
        >
            <input
                type="text"
                class="todo-input"
                placeholder="Add a to-do..."
                node_ref=input_ref
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
                on:keypress=on_keypress
            />
            <img
                class="cancel-image"
                src=ICON_CANCEL
                alt="Cancel"
                on:click=move |_| store_hide_form(&store)
            />
        </div>
    }
}
