//! Sort Toggle Component
//!
//! Sort icon control; flips direction on click and swaps the icon asset
//! between the hover and plain variants.

use leptos::prelude::*;

use crate::store::{
    store_sort_visible, store_toggle_sort, use_app_store, AppStateStoreFields,
};

/// Sort icon control
#[component]
pub fn SortToggle() -> impl IntoView {
    let store = use_app_store();

    let (hover, set_hover) = signal(false);

    let icon = move || store.sort_direction().get().icon(hover.get());

    view! {
        <img
            class="white-down"
            alt="Sort"
            src=icon
            style:display=move || if store_sort_visible(&store) { "inline" } else { "none" }
            on:click=move |_| store_toggle_sort(&store)
            on:mouseover=move |_| set_hover.set(true)
            on:mouseout=move |_| set_hover.set(false)
        />
    }
}
