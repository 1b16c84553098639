//! Floating scroll-to-top button for long listings.

use leptos::ev;
use leptos::prelude::*;

/// Scroll depth past which the button appears.
const SHOW_AFTER_PX: f64 = 300.0;

fn past_threshold(scroll_y: f64) -> bool {
    scroll_y > SHOW_AFTER_PX
}

fn scroll_position() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

#[component]
pub fn BackToTopButton() -> impl IntoView {
    let (visible, set_visible) = signal(past_threshold(scroll_position()));
    let handle = window_event_listener(ev::scroll, move |_| {
        set_visible.set(past_threshold(scroll_position()));
    });
    on_cleanup(move || handle.remove());

    let scroll_to_top = move |_| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    };

    view! {
        <Show when=move || visible.get()>
            <button class="back-to-top" aria-label="Go back to top" on:click=scroll_to_top>
                "\u{2191}"
            </button>
        </Show>
    }
}
