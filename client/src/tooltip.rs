use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use sevi_shared::config::TOOLTIP_ID;
use sevi_shared::{Placement, RenderError, Size};

use crate::dom::{self, px, set_style};

/// Handle to the single `#tooltip` node shared by every region of the map.
#[derive(Clone)]
pub struct Tooltip {
    el: HtmlElement,
}

impl Tooltip {
    /// Find or create the tooltip and move it under `wrapper`, so the wrapper's
    /// overflow clipping and coordinate space apply to it.
    pub fn attach(document: &Document, wrapper: &Element) -> Result<Self, RenderError> {
        let el = match document
            .get_element_by_id(TOOLTIP_ID)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            Some(el) => el,
            None => {
                let el = dom::create_html(document, "div")?;
                el.set_id(TOOLTIP_ID);
                el.set_class_name("tooltip");
                el
            }
        };

        let already_inside = el
            .parent_element()
            .is_some_and(|parent| parent.is_same_node(Some(wrapper.as_ref())));
        if !already_inside {
            wrapper
                .append_child(&el)
                .map_err(|_| RenderError::Dom("tooltip parent"))?;
        }
        Ok(Self { el })
    }

    pub fn set_content(&self, html: &str) {
        self.el.set_inner_html(html);
    }

    pub fn size(&self) -> Size {
        let rect = self.el.get_bounding_client_rect();
        Size::new(rect.width(), rect.height())
    }

    pub fn show_at(&self, placement: Placement) {
        set_style(&self.el, "left", &px(placement.x));
        set_style(&self.el, "top", &px(placement.y));
        set_style(&self.el, "opacity", "1");
    }

    /// Only visibility changes; the last content stays in place.
    pub fn hide(&self) {
        set_style(&self.el, "opacity", "0");
    }
}
