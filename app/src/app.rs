//! Application root: routing, layout, shared context.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::cart_store::CartStore;
use crate::components::mobile_menu::MobileMenu;
use crate::disclosure::Disclosure;
use crate::pages::{CartPage, NotFound, ProductDetailPage, ProductsPage};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    // Hydrates from local storage before any page can mutate the cart.
    CartStore::provide();

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Stylesheet id="storefront" href="/style.css"/>
        <Meta
            name="description"
            content="Shop our online store - browse products, view details, and manage your cart."
        />
        <Title text="Simple Online Store"/>

        <Router>
            <Header/>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=ProductsPage/>
                    <Route path=path!("/product/:id") view=ProductDetailPage/>
                    <Route path=path!("/cart") view=CartPage/>
                    <Route path=path!("/*any") view=NotFound/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

#[component]
fn Header() -> impl IntoView {
    let menu = Disclosure::new(true);
    menu.close_on_escape();

    view! {
        <header class="site-header">
            <a href="/" class="logo">"Simple Online Store"</a>
            <nav class="header-nav" aria-label="Main navigation">
                <a href="/">"Products"</a>
                <CartLink/>
            </nav>
            <button
                class="menu-toggle"
                aria-label="Open menu"
                on:click=move |_| menu.toggle()
            >
                "\u{2630}"
            </button>
            <MobileMenu menu=menu/>
        </header>
    }
}

/// Cart nav link with a live item-count badge.
#[component]
fn CartLink() -> impl IntoView {
    let cart = CartStore::expect();

    view! {
        <a href="/cart" class="cart-link">
            "Cart"
            {move || {
                let count = cart.total_items();
                (count > 0).then(|| view! { <span class="cart-badge">{count}</span> })
            }}
        </a>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>"Simple Online Store"</p>
            <p class="footer-note">"Product data by dummyjson.com"</p>
        </footer>
    }
}
