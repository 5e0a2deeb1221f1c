//! Filter Tab Bar Component
//!
//! All / finished / unfinished tabs. Switching never re-fetches.

use leptos::prelude::*;
use todo_client::TodoFilter;

use crate::store::{use_todo_store, TodoStateStoreFields};

#[component]
pub fn FilterTabs() -> impl IntoView {
    let store = use_todo_store();

    view! {
        <div class="filter-tabs">
            {TodoFilter::TABS.iter().map(|tab| {
                let tab = *tab;
                let tab_class = move || {
                    if store.filter().get() == tab { "filter-tab active" } else { "filter-tab" }
                };
                view! {
                    <button
                        type="button"
                        class=tab_class
                        on:click=move |_| *store.filter().write() = tab
                    >
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
