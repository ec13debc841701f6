use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use sevi_shared::config::{DEFAULT_LOADING_TEXT, HOME_ID, OVERLAY_ID, PREV_POSITION_ATTR};

use crate::dom::{self, set_style};

/// A full-cover overlay with a spinner and a label, owned by the caller that showed it.
pub struct LoadingOverlay {
    overlay: HtmlElement,
    label: Option<Element>,
}

impl LoadingOverlay {
    /// Show an overlay over `parent` (`#home`, else `<body>`, when `None`), or return
    /// the one already there.
    ///
    /// A statically positioned parent is switched to `position: relative` for as long as
    /// the overlay is up; its previous inline value is kept on the overlay for [`hide`].
    pub fn show(parent: Option<&HtmlElement>, text: Option<&str>) -> Option<Self> {
        let document = dom::document().ok()?;
        let parent = match parent {
            Some(el) => el.clone(),
            None => default_parent(&document)?,
        };

        if let Some(existing) = parent
            .query_selector(&format!("#{OVERLAY_ID}"))
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            let label = existing.query_selector("span:last-child").ok().flatten();
            return Some(Self {
                overlay: existing,
                label,
            });
        }

        let prev_position = parent
            .style()
            .get_property_value("position")
            .unwrap_or_default();
        let computed = dom::window()
            .ok()
            .and_then(|w| w.get_computed_style(&parent).ok().flatten())
            .and_then(|style| style.get_property_value("position").ok())
            .unwrap_or_default();
        if needs_positioning(&computed) {
            set_style(&parent, "position", "relative");
        }

        let overlay = dom::create_html(&document, "div").ok()?;
        overlay.set_id(OVERLAY_ID);
        overlay.set_attribute("role", "status").ok();
        overlay.set_attribute(PREV_POSITION_ATTR, &prev_position).ok();
        for (property, value) in OVERLAY_STYLE {
            set_style(&overlay, property, value);
        }

        let inner = dom::create_html(&document, "div").ok()?;
        set_style(&inner, "display", "flex");
        set_style(&inner, "gap", "0.6rem");
        set_style(&inner, "align-items", "center");

        // Spinner appearance comes from the stylesheet.
        let spinner = dom::create_html(&document, "span").ok()?;
        spinner.set_class_name("spinner");

        let label = dom::create_html(&document, "span").ok()?;
        label.set_text_content(Some(text.unwrap_or(DEFAULT_LOADING_TEXT)));
        set_style(&label, "font-size", "0.95rem");

        inner.append_child(&spinner).ok()?;
        inner.append_child(&label).ok()?;
        overlay.append_child(&inner).ok()?;
        parent.append_child(&overlay).ok()?;

        Some(Self {
            overlay,
            label: Some(label.into()),
        })
    }

    /// [`LoadingOverlay::show`] over the first match of `selector`, falling back to the
    /// default parent when nothing matches.
    pub fn show_in(selector: &str, text: Option<&str>) -> Option<Self> {
        let document = dom::document().ok()?;
        let parent = document
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        Self::show(parent.as_ref(), text)
    }

    pub fn set_text(&self, text: &str) {
        if let Some(label) = &self.label {
            label.set_text_content(Some(text));
        }
    }

    /// Remove this overlay; a no-op if something else already removed it.
    pub fn hide(self) {
        if self.overlay.is_connected() {
            remove_overlay(&self.overlay);
        }
    }
}

/// Remove the document's loading overlay, if any, and restore its parent's inline position.
pub fn hide() {
    let Ok(document) = dom::document() else {
        return;
    };
    if let Some(overlay) = document.get_element_by_id(OVERLAY_ID) {
        remove_overlay(&overlay);
    }
}

fn remove_overlay(overlay: &Element) {
    let parent = overlay
        .parent_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let prev_position = overlay.get_attribute(PREV_POSITION_ATTR);
    overlay.remove();

    if let (Some(parent), Some(prev)) = (parent, prev_position) {
        match restored_position(&prev) {
            Some(value) => set_style(&parent, "position", value),
            None => {
                parent.style().remove_property("position").ok();
            }
        }
    }
}

const OVERLAY_STYLE: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("inset", "0"),
    ("display", "flex"),
    ("align-items", "center"),
    ("justify-content", "center"),
    ("background", "rgba(0,0,0,0.45)"),
    ("color", "#fff"),
    ("z-index", "9999"),
    ("padding", "1rem"),
    ("backdrop-filter", "blur(3px)"),
    ("border-radius", "6px"),
];

fn default_parent(document: &web_sys::Document) -> Option<HtmlElement> {
    document
        .get_element_by_id(HOME_ID)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .or_else(|| document.body())
}

fn needs_positioning(computed_position: &str) -> bool {
    computed_position.trim() == "static"
}

/// Inline value to put back on hide; `None` clears the property.
fn restored_position(prev: &str) -> Option<&str> {
    let prev = prev.trim();
    (!prev.is_empty()).then_some(prev)
}
