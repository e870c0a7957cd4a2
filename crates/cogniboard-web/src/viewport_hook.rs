//! Viewport width hook backed by the browser `resize` event.

use leptos::prelude::*;
use leptos::web_sys;
use leptos::web_sys::window;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Width assumed until the first client-side measurement lands.
///
/// Only ever visible during server rendering and the first hydration tick;
/// the mount effect replaces it with the real `innerWidth` immediately.
pub const PRERENDER_WIDTH: f64 = 1280.0;

fn inner_width() -> Option<f64> {
    window().and_then(|w| w.inner_width().ok()).and_then(|w| w.as_f64())
}

/// Leptos hook publishing the live viewport width as a signal.
///
/// Registers a `resize` listener on mount and pushes every sample through
/// unthrottled; consumers derive their layout mode from the signal instead
/// of duplicating media queries.
pub fn use_viewport_width() -> ReadSignal<f64> {
    let (width, set_width) = signal(PRERENDER_WIDTH);

    Effect::new(move |_| {
        let Some(win) = window() else {
            return;
        };

        // Initial measurement on mount.
        if let Some(w) = inner_width() {
            set_width.set(w);
        }

        let on_resize = Closure::wrap(Box::new(move |_: web_sys::Event| {
            if let Some(w) = inner_width() {
                set_width.set(w);
            }
        }) as Box<dyn FnMut(_)>);

        win.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            .unwrap_or_else(|e| {
                leptos::logging::error!("Failed to add resize listener: {:?}", e);
            });
        on_resize.forget();
    });

    width
}
