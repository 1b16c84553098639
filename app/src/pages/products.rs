//! Product listing page: filter, sort, and windowed display.

use leptos::prelude::*;
use leptos_meta::Title;
use storefront_commerce::{
    distinct_categories, select, ListingQuery, Product, Window, DEFAULT_PAGE_SIZE,
};

use crate::api::fetch_products;
use crate::components::back_to_top::BackToTopButton;
use crate::components::controls_bar::ControlsBar;
use crate::components::filter_sidebar::FilterSidebar;
use crate::components::pagination::Pagination;
use crate::components::product_grid::{EmptyState, ProductGrid, ProductGridSkeleton};
use crate::viewport::use_is_mobile;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let products = LocalResource::new(|| fetch_products());
    let is_mobile = use_is_mobile();

    view! {
        <Title text="Simple Online Store"/>
        <Suspense fallback=move || view! { <ProductGridSkeleton/> }>
            {move || {
                products.get().map(|result| match result.take() {
                    Ok(products) => view! { <Listing products is_mobile/> }.into_any(),
                    Err(e) => {
                        view! { <p class="error">"Error loading products: " {e.to_string()}</p> }
                            .into_any()
                    }
                })
            }}
        </Suspense>
        <BackToTopButton/>
    }
}

/// The listing proper, once the catalog has arrived. Owns the filter, sort,
/// and window state for this page view.
#[component]
fn Listing(products: Vec<Product>, #[prop(into)] is_mobile: Signal<bool>) -> impl IntoView {
    let categories = distinct_categories(&products);
    let query = RwSignal::new(if is_mobile.get_untracked() {
        ListingQuery::incremental(DEFAULT_PAGE_SIZE)
    } else {
        ListingQuery::new(DEFAULT_PAGE_SIZE)
    });

    // Keep the windowing mode in step with the layout width.
    Effect::new(move |_| {
        let paged = !is_mobile.get();
        let mode_differs = query.with_untracked(|q| match q.window {
            Window::Paged { .. } => !paged,
            Window::Incremental { .. } => paged,
        });
        if mode_differs {
            query.update(|q| q.set_paged(paged));
        }
    });

    let page = Memo::new(move |_| query.with(|q| select(&products, q)));

    let sidebar_categories = categories.clone();
    let controls_categories = categories;

    view! {
        <div class="listing-layout">
            <Show when=move || !is_mobile.get()>
                <FilterSidebar categories=sidebar_categories.clone() query/>
            </Show>
            <div class="listing-main">
                <ControlsBar categories=controls_categories.clone() query is_mobile page/>

                {move || {
                    if page.with(|p| p.total_items == 0) {
                        view! {
                            <EmptyState on_clear=move || {
                                query.update(|q| q.set_categories(Vec::new()))
                            }/>
                        }
                            .into_any()
                    } else {
                        view! { <ProductGrid products=page.with(|p| p.items.clone())/> }
                            .into_any()
                    }
                }}

                <Show when=move || !is_mobile.get()>
                    <Pagination page query/>
                </Show>
                <Show when=move || is_mobile.get() && page.with(|p| p.has_more)>
                    <div class="load-more">
                        <button
                            class="btn btn-outline"
                            on:click=move |_| query.update(|q| q.load_more())
                        >
                            "Load More Products"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
