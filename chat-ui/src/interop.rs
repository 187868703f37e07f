use dioxus::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Event};

/// Get the browser viewport dimensions in CSS pixels
pub fn viewport_size() -> Option<(f64, f64)> {
    let window = window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

/// Report the viewport size on every window resize.
pub fn watch_viewport(on_resize: Callback<(f64, f64)>) {
    let Some(window) = window() else {
        dioxus_logger::tracing::warn!("no window; viewport tracking disabled");
        return;
    };

    let resize_closure = Closure::wrap(Box::new(move |_e: Event| {
        if let Some(size) = viewport_size() {
            on_resize.call(size);
        }
    }) as Box<dyn FnMut(Event)>);

    if let Err(e) =
        window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())
    {
        dioxus_logger::tracing::error!("failed to add resize listener: {:?}", e);
        return;
    }

    // Leak the closure to keep it alive for the lifetime of the page
    resize_closure.forget();
}

/// Open a citation source in a new browser tab.
pub fn open_in_new_tab(url: &str) {
    let Some(window) = window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        dioxus_logger::tracing::warn!("failed to open {}: {:?}", url, e);
    }
}
