//! Product grid, cards, and loading skeletons.

use leptos::prelude::*;
use storefront_commerce::{capitalize, Product};

use crate::cart_store::CartStore;

#[component]
pub fn ProductGrid(products: Vec<Product>) -> impl IntoView {
    view! {
        <section class="product-grid" aria-label="Product grid">
            {products
                .into_iter()
                .map(|product| view! { <ProductCard product/> })
                .collect::<Vec<_>>()}
        </section>
    }
}

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let cart = CartStore::expect();
    let href = format!("/product/{}", product.id);
    let price = product.price_display();
    let category = capitalize(&product.category);
    let rating = format!("\u{2605} {:.1}", product.rating);
    let for_cart = product.clone();

    view! {
        <div class="product-card">
            <a href=href.clone()>
                <img class="product-thumb" src=product.thumbnail.clone() alt=product.title.clone()/>
            </a>
            <div class="product-info">
                <a href=href>
                    <h3>{product.title.clone()}</h3>
                </a>
                <p class="product-category">{category}</p>
                <div class="product-meta">
                    <span class="price">{price}</span>
                    <span class="rating">{rating}</span>
                </div>
                <button class="btn" on:click=move |_| cart.add(for_cart.clone())>
                    "Add to Cart"
                </button>
            </div>
        </div>
    }
}

/// Shown when the category filter matches nothing.
#[component]
pub fn EmptyState(#[prop(into)] on_clear: Callback<()>) -> impl IntoView {
    view! {
        <div class="empty-state">
            <h3>"No products found"</h3>
            <p>"No products match the selected filters."</p>
            <button class="btn btn-outline" on:click=move |_| on_clear.run(())>
                "Clear filters"
            </button>
        </div>
    }
}

#[component]
pub fn ProductGridSkeleton() -> impl IntoView {
    view! {
        <div class="product-grid">
            <ProductCardSkeleton/>
            <ProductCardSkeleton/>
            <ProductCardSkeleton/>
            <ProductCardSkeleton/>
        </div>
    }
}

#[component]
fn ProductCardSkeleton() -> impl IntoView {
    view! {
        <div class="product-card">
            <div class="skeleton skeleton-thumb"></div>
            <div class="product-info">
                <div class="skeleton skeleton-line-wide"></div>
                <div class="skeleton skeleton-line-narrow"></div>
            </div>
        </div>
    }
}

#[component]
pub fn ProductDetailSkeleton() -> impl IntoView {
    view! {
        <div class="product-detail">
            <div class="skeleton skeleton-image"></div>
            <div>
                <div class="skeleton skeleton-line-wide"></div>
                <div class="skeleton skeleton-line-narrow"></div>
                <div class="skeleton skeleton-block"></div>
            </div>
        </div>
    }
}
