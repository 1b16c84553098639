//! Category filter sidebar (wide layouts).

use leptos::prelude::*;
use storefront_commerce::{capitalize, ListingQuery};

#[component]
pub fn FilterSidebar(categories: Vec<String>, query: RwSignal<ListingQuery>) -> impl IntoView {
    view! {
        <aside class="filter-sidebar" aria-label="Product filters">
            <h2>"Categories"</h2>
            <div class="filter-options">
                {categories
                    .into_iter()
                    .map(|category| {
                        let name = category.clone();
                        let check_name = category.clone();
                        let checked = Signal::derive(move || {
                            query.with(|q| q.categories.iter().any(|c| *c == check_name))
                        });
                        view! {
                            <label class="filter-option">
                                <input
                                    type="checkbox"
                                    prop:checked=move || checked.get()
                                    on:change=move |_| query.update(|q| q.toggle_category(&name))
                                />
                                <span>{capitalize(&category)}</span>
                            </label>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </aside>
    }
}
