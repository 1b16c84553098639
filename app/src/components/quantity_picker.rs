//! Quantity stepper for a cart line.

use leptos::prelude::*;

use crate::cart_store::CartStore;

/// "+" and "−" map onto `set_quantity`, so stepping down from 1 removes the
/// line rather than leaving a zero-quantity entry.
#[component]
pub fn QuantityPicker(product_id: u64, quantity: i64) -> impl IntoView {
    let cart = CartStore::expect();

    view! {
        <div class="quantity-picker">
            <button
                class="quantity-btn"
                aria-label="Decrease quantity"
                on:click=move |_| cart.set_quantity(product_id, quantity - 1)
            >
                "\u{2212}"
            </button>
            <span class="quantity">{quantity}</span>
            <button
                class="quantity-btn"
                aria-label="Increase quantity"
                on:click=move |_| cart.set_quantity(product_id, quantity + 1)
            >
                "+"
            </button>
        </div>
    }
}
