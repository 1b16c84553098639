//! Slide-in navigation drawer for narrow layouts.

use leptos::prelude::*;

use crate::disclosure::Disclosure;

#[component]
pub fn MobileMenu(menu: Disclosure) -> impl IntoView {
    view! {
        <Show when=move || menu.is_open()>
            <div class="menu-backdrop" on:click=move |_| menu.close()></div>
            <div class="mobile-menu" role="dialog" aria-label="Menu">
                <div class="mobile-menu-header">
                    <span>"Menu"</span>
                    <button
                        class="menu-close"
                        aria-label="Close menu"
                        on:click=move |_| menu.close()
                    >
                        "\u{00d7}"
                    </button>
                </div>
                <nav class="mobile-menu-nav">
                    <a href="/" on:click=move |_| menu.close()>"Products"</a>
                    <a href="/cart" on:click=move |_| menu.close()>"Cart"</a>
                </nav>
            </div>
        </Show>
    }
}
