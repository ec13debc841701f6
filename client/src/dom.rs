use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use sevi_shared::RenderError;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

pub(crate) fn window() -> Result<Window, RenderError> {
    web_sys::window().ok_or(RenderError::Dom("window"))
}

pub(crate) fn document() -> Result<Document, RenderError> {
    window()?.document().ok_or(RenderError::Dom("document"))
}

pub(crate) fn create_html(
    document: &Document,
    tag: &'static str,
) -> Result<HtmlElement, RenderError> {
    document
        .create_element(tag)
        .map_err(|e| create_error(tag, e))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| RenderError::Create {
            element: tag,
            reason: "not an HTML element".into(),
        })
}

pub(crate) fn create_svg(document: &Document, tag: &'static str) -> Result<Element, RenderError> {
    document
        .create_element_ns(Some(SVG_NS), tag)
        .map_err(|e| create_error(tag, e))
}

pub(crate) fn set_style(el: &HtmlElement, property: &str, value: &str) {
    el.style().set_property(property, value).ok();
}

pub(crate) fn px(value: f64) -> String {
    format!("{value}px")
}

fn create_error(element: &'static str, err: wasm_bindgen::JsValue) -> RenderError {
    RenderError::Create {
        element,
        reason: err.as_string().unwrap_or_else(|| format!("{err:?}")),
    }
}
