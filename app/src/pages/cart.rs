//! Shopping cart page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::cart_store::CartStore;
use crate::components::quantity_picker::QuantityPicker;

#[component]
pub fn CartPage() -> impl IntoView {
    let cart = CartStore::expect();

    view! {
        <Title text="Shopping Cart - Simple Online Store"/>
        {move || {
            if cart.is_empty() {
                view! {
                    <div class="cart-empty">
                        <h1>"Your cart is empty"</h1>
                        <p>"Add some products to get started!"</p>
                        <a href="/" class="btn">"Continue Shopping"</a>
                    </div>
                }
                    .into_any()
            } else {
                view! { <CartContents/> }.into_any()
            }
        }}
    }
}

#[component]
fn CartContents() -> impl IntoView {
    let cart = CartStore::expect();

    view! {
        <div class="cart-page">
            <h1>"Shopping Cart"</h1>
            <div class="cart-lines">
                {move || {
                    cart.lines()
                        .into_iter()
                        .map(|line| {
                            let id = line.product.id;
                            let price = line.product.price_display();
                            let subtotal = line.subtotal_display();
                            view! {
                                <div class="cart-line">
                                    <img
                                        class="cart-thumb"
                                        src=line.product.thumbnail.clone()
                                        alt=line.product.title.clone()
                                    />
                                    <div class="cart-line-info">
                                        <h3>{line.product.title.clone()}</h3>
                                        <p class="price">{price}</p>
                                    </div>
                                    <QuantityPicker product_id=id quantity=line.quantity/>
                                    <div class="cart-line-subtotal">
                                        <strong>{subtotal}</strong>
                                    </div>
                                    <button
                                        class="remove-btn"
                                        aria-label="Remove from cart"
                                        on:click=move |_| cart.remove(id)
                                    >
                                        "Remove"
                                    </button>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            <div class="cart-summary">
                <span class="cart-total">
                    "Total: " {move || cart.total_price_display()}
                </span>
                <div class="cart-actions">
                    <button class="btn btn-outline" on:click=move |_| cart.clear()>
                        "Clear Cart"
                    </button>
                    <button class="btn btn-primary">"Checkout"</button>
                </div>
            </div>
        </div>
    }
}
