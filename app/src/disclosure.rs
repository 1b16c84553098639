//! Open/close bookkeeping for dropdowns, menus, and modal sheets.

use leptos::ev;
use leptos::logging;
use leptos::prelude::*;

/// Open-close state shared between a trigger and its panel.
///
/// With `lock_scroll`, the document body stops scrolling while the panel is
/// open and is restored on close.
#[derive(Clone, Copy)]
pub struct Disclosure {
    open: RwSignal<bool>,
    lock_scroll: bool,
}

impl Disclosure {
    pub fn new(lock_scroll: bool) -> Self {
        Self {
            open: RwSignal::new(false),
            lock_scroll,
        }
    }

    /// Reactive open state.
    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn open(&self) {
        self.open.set(true);
        if self.lock_scroll {
            set_body_scroll_locked(true);
        }
    }

    pub fn close(&self) {
        self.open.set(false);
        if self.lock_scroll {
            set_body_scroll_locked(false);
        }
    }

    pub fn toggle(&self) {
        if self.open.get_untracked() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Register Escape-to-close for the lifetime of the current owner.
    pub fn close_on_escape(&self) {
        let this = *self;
        let handle = window_event_listener(ev::keydown, move |ev| {
            if ev.key() == "Escape" && this.open.get_untracked() {
                this.close();
            }
        });
        on_cleanup(move || handle.remove());
    }
}

fn set_body_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let value = if locked { "hidden" } else { "" };
    if let Err(e) = body.style().set_property("overflow", value) {
        logging::warn!("failed to toggle body scroll lock: {e:?}");
    }
}
