//! Product detail page.

use leptos::prelude::*;
use leptos_meta::Title;
use storefront_commerce::{capitalize, Product};

use crate::api::{fetch_product, ApiError};
use crate::cart_store::CartStore;
use crate::components::product_grid::ProductDetailSkeleton;

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let params = leptos_router::hooks::use_params_map();
    let product = LocalResource::new(move || {
        let id = params.get().get("id").and_then(|s| s.parse::<u64>().ok());
        async move {
            match id {
                Some(id) => fetch_product(id).await.map(Some),
                None => Ok(None),
            }
        }
    });

    view! {
        <Suspense fallback=move || view! { <ProductDetailSkeleton/> }>
            {move || {
                product.get().map(|result| match result.take() {
                    Ok(Some(product)) => view! { <ProductDetail product/> }.into_any(),
                    Ok(None) | Err(ApiError::Status(404)) => {
                        view! {
                            <div class="detail-missing">
                                <p>"Product not found"</p>
                                <a href="/">"Back to products"</a>
                            </div>
                        }
                            .into_any()
                    }
                    Err(e) => {
                        view! { <p class="error">"Error loading product: " {e.to_string()}</p> }
                            .into_any()
                    }
                })
            }}
        </Suspense>
    }
}

#[component]
fn ProductDetail(product: Product) -> impl IntoView {
    let title = product.title.clone();
    let price = product.price_display();
    let category = capitalize(&product.category);
    let rating = format!("\u{2605} {:.1}", product.rating);
    let stock = format!("{} in stock", product.stock);
    let image = if product.images.is_empty() {
        product.thumbnail.clone()
    } else {
        product.images[0].clone()
    };

    view! {
        <Title text=format!("{title} - Simple Online Store")/>
        <div class="product-detail">
            <img class="detail-image" src=image alt=product.title.clone()/>
            <div class="detail-info">
                <p class="product-category">{category}</p>
                <h1>{product.title.clone()}</h1>
                <div class="product-meta">
                    <span class="rating">{rating}</span>
                    <span class="stock">{stock}</span>
                </div>
                <p class="price detail-price">{price}</p>
                <p class="detail-description">{product.description.clone()}</p>
                <AddToCartButton product=product.clone()/>
            </div>
        </div>
    }
}

#[component]
fn AddToCartButton(product: Product) -> impl IntoView {
    let cart = CartStore::expect();
    let (added, set_added) = signal(false);

    view! {
        <button
            class="btn"
            on:click=move |_| {
                cart.add(product.clone());
                set_added.set(true);
            }
        >
            "Add to Cart"
        </button>
        <Show when=move || added.get()>
            <p class="added-note">"Added to cart!"</p>
        </Show>
    }
}
