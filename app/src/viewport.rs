//! Viewport width detection.

use leptos::ev;
use leptos::prelude::*;

/// Below this width the listing switches to incremental "load more" mode.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Reactive narrow-viewport signal, updated on window resize.
pub fn use_is_mobile() -> Signal<bool> {
    let (width, set_width) = signal(window_width());
    let handle = window_event_listener(ev::resize, move |_| set_width.set(window_width()));
    on_cleanup(move || handle.remove());
    Signal::derive(move || width.get() < MOBILE_BREAKPOINT)
}

fn window_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        // No window (native tests): assume a wide layout.
        .unwrap_or(1024.0)
}
