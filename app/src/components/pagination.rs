//! Desktop pagination controls.

use leptos::prelude::*;
use storefront_commerce::{page_numbers, ListingPage, ListingQuery};

const MAX_VISIBLE_PAGES: usize = 5;

#[component]
pub fn Pagination(page: Memo<ListingPage>, query: RwSignal<ListingQuery>) -> impl IntoView {
    let go_to = move |target: usize| query.update(|q| q.set_page(target));

    view! {
        <Show when=move || page.with(|p| p.total_pages > 1)>
            <nav class="pagination" aria-label="Pagination navigation">
                <Show when=move || page.with(|p| p.current_page > 1)>
                    <button
                        class="page-btn"
                        aria-label="Go to previous page"
                        on:click=move |_| {
                            let current = page.with_untracked(|p| p.current_page);
                            go_to(current.saturating_sub(1).max(1));
                        }
                    >
                        "\u{2039}"
                    </button>
                </Show>

                {move || {
                    let p = page.get();
                    page_numbers(p.current_page, p.total_pages, MAX_VISIBLE_PAGES)
                        .into_iter()
                        .map(|n| {
                            let active = n == p.current_page;
                            view! {
                                <button
                                    class="page-btn"
                                    class:active=active
                                    aria-label=format!("Go to page {n}")
                                    aria-current=active.then_some("page")
                                    on:click=move |_| go_to(n)
                                >
                                    {n}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}

                <button
                    class="page-btn"
                    aria-label="Go to next page"
                    disabled=move || page.with(|p| p.current_page >= p.total_pages)
                    on:click=move |_| {
                        let (current, total) = page.with_untracked(|p| (p.current_page, p.total_pages));
                        if current < total {
                            go_to(current + 1);
                        }
                    }
                >
                    "\u{203A}"
                </button>
            </nav>
        </Show>
    }
}
