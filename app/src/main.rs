//! Storefront entry point (client-side rendering).

mod api;
mod app;
mod cart_store;
mod components;
mod disclosure;
mod pages;
mod viewport;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
