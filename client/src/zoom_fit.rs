use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use sevi_shared::Size;
use sevi_shared::fit::{FitBounds, zoom_factor};

use crate::dom::{self, set_style};

struct ResizeBinding {
    window: web_sys::Window,
    handler: Closure<dyn Fn()>,
}

thread_local! {
    static RESIZE_BINDING: RefCell<Option<ResizeBinding>> = const { RefCell::new(None) };
}

/// Shrink `container` with CSS `zoom` until it fits the page body and the viewport.
/// The body's width must not depend on the container's own width.
pub fn fit_container_by_zoom(container: &HtmlElement) {
    let Ok(window) = dom::window() else {
        return;
    };
    let Some(body) = window.document().and_then(|d| d.body()) else {
        return;
    };

    set_style(container, "zoom", "1");
    let content = Size::new(
        container.scroll_width() as f64,
        container.scroll_height() as f64,
    );
    let bounds = FitBounds {
        client_width: body.client_width() as f64,
        scroll_height: body.scroll_height() as f64,
        viewport_height: window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(f64::INFINITY),
    };
    let factor = zoom_factor(content, bounds);
    set_style(container, "zoom", &factor.to_string());
}

/// Fit the element with `id` now and again on every window resize.
/// Replaces any earlier binding.
pub fn bind_resize(id: &'static str) {
    let Ok(window) = dom::window() else {
        return;
    };

    RESIZE_BINDING.with(|slot| {
        if let Some(old) = slot.borrow_mut().take() {
            let _ = old.window.remove_event_listener_with_callback(
                "resize",
                old.handler.as_ref().unchecked_ref(),
            );
        }
    });

    let fit = move || {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            fit_container_by_zoom(&el);
        }
    };
    fit();

    let handler = Closure::<dyn Fn()>::new(fit);
    if window
        .add_event_listener_with_callback("resize", handler.as_ref().unchecked_ref())
        .is_ok()
    {
        RESIZE_BINDING.with(|slot| {
            *slot.borrow_mut() = Some(ResizeBinding {
                window: window.clone(),
                handler,
            });
        });
    }
}
