//! Listing controls: sort dropdown, mobile category dropdown, shown-range line.

use leptos::prelude::*;
use storefront_commerce::{capitalize, ListingPage, ListingQuery, SortKey};

use crate::disclosure::Disclosure;

#[component]
pub fn ControlsBar(
    categories: Vec<String>,
    query: RwSignal<ListingQuery>,
    #[prop(into)] is_mobile: Signal<bool>,
    page: Memo<ListingPage>,
) -> impl IntoView {
    view! {
        <div class="controls-bar">
            <div class="controls-group">
                <SortDropdown query/>
                // Categories move from the sidebar into a dropdown on narrow layouts.
                <Show when=move || is_mobile.get()>
                    <CategoryDropdown categories=categories.clone() query/>
                </Show>
            </div>
            <div class="shown-range">
                {move || {
                    page.with(|p| format!("Showing {}-{} of {}", p.start_item, p.end_item, p.total_items))
                }}
            </div>
        </div>
    }
}

#[component]
fn SortDropdown(query: RwSignal<ListingQuery>) -> impl IntoView {
    let menu = Disclosure::new(false);
    menu.close_on_escape();

    view! {
        <div class="dropdown">
            <button
                class="dropdown-trigger"
                aria-haspopup="listbox"
                aria-expanded=move || menu.is_open().to_string()
                aria-label="Sort products"
                on:click=move |_| menu.toggle()
            >
                {move || query.with(|q| format!("Sort by: {}", q.sort.display_name()))}
            </button>
            <Show when=move || menu.is_open()>
                <div class="dropdown-menu" role="listbox" aria-label="Sort options">
                    {SortKey::ALL
                        .iter()
                        .map(|&key| {
                            let selected = move || query.with(|q| q.sort == key);
                            view! {
                                <button
                                    class="dropdown-option"
                                    class:selected=selected
                                    role="option"
                                    aria-selected=move || selected().to_string()
                                    on:click=move |_| {
                                        query.update(|q| q.set_sort(key));
                                        menu.close();
                                    }
                                >
                                    {key.display_name()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
        </div>
    }
}

/// Multi-select category dropdown. Stays open across selections so several
/// categories can be toggled in one visit.
#[component]
fn CategoryDropdown(categories: Vec<String>, query: RwSignal<ListingQuery>) -> impl IntoView {
    let menu = Disclosure::new(false);
    menu.close_on_escape();

    let label = move || {
        query.with(|q| match q.categories.as_slice() {
            [] => "Categories: None".to_string(),
            [only] => format!("Categories: {}", capitalize(only)),
            selected => format!("Categories: {} selected", selected.len()),
        })
    };

    view! {
        <div class="dropdown">
            <button
                class="dropdown-trigger"
                aria-haspopup="listbox"
                aria-expanded=move || menu.is_open().to_string()
                aria-label="Filter by category"
                on:click=move |_| menu.toggle()
            >
                {label}
            </button>
            <Show when=move || menu.is_open()>
                <div class="dropdown-menu" role="listbox" aria-label="Category options">
                    {categories
                        .iter()
                        .map(|category| {
                            let name = category.clone();
                            let check_name = category.clone();
                            let selected = Signal::derive(move || {
                                query.with(|q| q.categories.iter().any(|c| *c == check_name))
                            });
                            view! {
                                <button
                                    class="dropdown-option"
                                    class:selected=move || selected.get()
                                    role="option"
                                    aria-selected=move || selected.get().to_string()
                                    on:click=move |_| query.update(|q| q.toggle_category(&name))
                                >
                                    {capitalize(category)}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
        </div>
    }
}
