//! To-Do Widget App
//!
//! Root component; owns the state store and lays out the controls.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{SortToggle, TodoForm, TodoList};
use crate::store::{store_show_list, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // Single state store, constructed once at startup
    let store = Store::new(AppState::new());
    provide_context(store);

    view! {
        <div class="todo-app">
            <header class="header">
                <h1>"To-Do List"</h1>
                <button id="show-button" on:click=move |_| store_show_list(&store)>
                    "Show list"
                </button>
                <SortToggle />
            </header>

            <TodoForm />

            <TodoList />

            <p class="item-count">
                {move || format!("{} items", store.todos().read().len())}
            </p>
        </div>
    }
}
