use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

use sevi_shared::config::{MAP_CONTAINER_SELECTOR, WRAPPER_ID};
use sevi_shared::path::svg_path;
use sevi_shared::scores::tooltip_html;
use sevi_shared::{
    DataSource, FeatureCollection, FetchError, MapConfig, Mercator, RenderError, ScoreTable, Size,
    fill_for, place_tooltip_scaled, render_scale,
};

use crate::colors::region_style;
use crate::dom;
use crate::tooltip::Tooltip;

/// Pointer listeners attached to one region path; detached on drop.
struct RegionListeners {
    path: Element,
    on_move: Closure<dyn Fn(MouseEvent)>,
    on_out: Closure<dyn Fn(MouseEvent)>,
}

impl Drop for RegionListeners {
    fn drop(&mut self) {
        let _ = self.path.remove_event_listener_with_callback(
            "mousemove",
            self.on_move.as_ref().unchecked_ref(),
        );
        let _ = self.path.remove_event_listener_with_callback(
            "mouseout",
            self.on_out.as_ref().unchecked_ref(),
        );
    }
}

thread_local! {
    // Listeners of the map currently in the document.
    static MAP_LISTENERS: RefCell<Vec<RegionListeners>> = const { RefCell::new(Vec::new()) };
}

/// Fetch the region feature collection described by `source`.
pub async fn fetch_regions(source: &DataSource) -> Result<FeatureCollection, FetchError> {
    let resp = gloo_net::http::Request::get(&source.url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !resp.ok() {
        return Err(FetchError::Status(resp.status()));
    }

    resp.json::<FeatureCollection>()
        .await
        .map_err(|e| FetchError::Parse(e.to_string()))
}

/// Mount point for the map: `#home #map`, else `<body>`.
fn map_container(document: &Document) -> Result<Element, RenderError> {
    match document
        .query_selector(MAP_CONTAINER_SELECTOR)
        .ok()
        .flatten()
    {
        Some(el) => Ok(el),
        None => Ok(document.body().ok_or(RenderError::Dom("body"))?.into()),
    }
}

/// Replace any earlier map with a fresh wrapper and an empty SVG canvas.
///
/// The old wrapper is looked up in the whole document, since an earlier render may
/// have fallen back to `<body>`.
fn prepare_canvas(
    document: &Document,
    config: &MapConfig,
) -> Result<(HtmlElement, Element), RenderError> {
    let container = map_container(document)?;

    MAP_LISTENERS.with(|slot| slot.borrow_mut().clear());
    if let Some(prev) = document.get_element_by_id(WRAPPER_ID) {
        prev.remove();
    }

    let wrapper = dom::create_html(document, "div")?;
    wrapper.set_id(WRAPPER_ID);
    container
        .append_child(&wrapper)
        .map_err(|_| RenderError::Dom("map container"))?;

    let svg = dom::create_svg(document, "svg")?;
    svg.set_attribute("viewBox", &config.view_box()).ok();
    svg.set_attribute("preserveAspectRatio", "xMidYMid meet").ok();
    wrapper
        .append_child(&svg)
        .map_err(|_| RenderError::Dom("map wrapper"))?;

    Ok((wrapper, svg))
}

/// Draw the choropleth into `#home #map` (or `<body>`) and wire the hover tooltip.
///
/// Any map drawn by an earlier call is removed first. Resolves to the fetched
/// collection so callers can reuse it without another request.
pub async fn render_map(
    config: &MapConfig,
    scores: ScoreTable,
) -> Result<FeatureCollection, RenderError> {
    let document = dom::document()?;
    let (wrapper, svg) = prepare_canvas(&document, config)?;

    let projection = Mercator::for_canvas(config);
    let tooltip = Tooltip::attach(&document, &wrapper)?;

    let regions = match fetch_regions(&config.source).await {
        Ok(regions) => regions,
        Err(e) => {
            web_sys::console::error_1(&format!("Error loading GeoJSON: {e}").into());
            return Err(e.into());
        }
    };

    let mut listeners = Vec::with_capacity(regions.features.len());
    for region in regions.regions(&config.source.name_field) {
        let path = dom::create_svg(&document, "path")?;
        let name = region.display_name().to_string();
        let score = region.name.and_then(|n| scores.get(n));
        let fill = fill_for(score);

        path.set_attribute("class", "state").ok();
        path.set_attribute("data-name", &name).ok();
        path.set_attribute(
            "d",
            &region
                .geometry
                .map(|g| svg_path(g, &projection))
                .unwrap_or_default(),
        )
        .ok();
        path.set_attribute("style", &region_style(fill, false)).ok();

        let on_move = {
            let wrapper = wrapper.clone();
            let tooltip = tooltip.clone();
            let path = path.clone();
            let html = tooltip_html(&name, score);
            let (gap, padding) = (config.tooltip_gap, config.tooltip_padding);
            Closure::<dyn Fn(MouseEvent)>::new(move |e: MouseEvent| {
                let rect = wrapper.get_bounding_client_rect();
                let pointer = (
                    e.client_x() as f64 - rect.left(),
                    e.client_y() as f64 - rect.top(),
                );
                // #home may be under CSS zoom; rects are on-screen, left/top are not.
                let scale = render_scale(rect.width(), wrapper.offset_width() as f64);
                tooltip.set_content(&html);
                let placement = place_tooltip_scaled(
                    pointer,
                    Size::new(rect.width(), rect.height()),
                    tooltip.size(),
                    gap,
                    padding,
                    scale,
                );
                tooltip.show_at(placement);
                path.set_attribute("style", &region_style(fill, true)).ok();
            })
        };

        let on_out = {
            let tooltip = tooltip.clone();
            let path = path.clone();
            Closure::<dyn Fn(MouseEvent)>::new(move |_: MouseEvent| {
                tooltip.hide();
                path.set_attribute("style", &region_style(fill, false)).ok();
            })
        };

        path.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
            .ok();
        path.add_event_listener_with_callback("mouseout", on_out.as_ref().unchecked_ref())
            .ok();
        svg.append_child(&path)
            .map_err(|_| RenderError::Dom("map canvas"))?;

        listeners.push(RegionListeners {
            path,
            on_move,
            on_out,
        });
    }

    web_sys::console::info_1(&format!("map: drew {} regions", listeners.len()).into());
    MAP_LISTENERS.with(|slot| *slot.borrow_mut() = listeners);

    Ok(regions)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn wrapper_count(document: &Document) -> u32 {
        document
            .query_selector_all(&format!("#{WRAPPER_ID}"))
            .map(|list| list.length())
            .unwrap_or(0)
    }

    fn mount_home(document: &Document) -> Element {
        let home = document.create_element("section").expect("section");
        home.set_id(sevi_shared::config::HOME_ID);
        let map = document.create_element("div").expect("div");
        map.set_id(sevi_shared::config::MAP_ID);
        home.append_child(&map).expect("append map");
        document.body().expect("body").append_child(&home).expect("append home");
        home
    }

    fn clear_wrappers(document: &Document) {
        while let Some(el) = document.get_element_by_id(WRAPPER_ID) {
            el.remove();
        }
    }

    #[wasm_bindgen_test]
    fn repeated_setup_keeps_one_wrapper() {
        let document = dom::document().expect("document");
        let home = mount_home(&document);
        let config = MapConfig::default();

        prepare_canvas(&document, &config).expect("first canvas");
        let (wrapper, svg) = prepare_canvas(&document, &config).expect("second canvas");

        assert_eq!(wrapper_count(&document), 1);
        assert!(wrapper.is_connected());
        assert_eq!(svg.get_attribute("viewBox").as_deref(), Some("0 0 1200 1263"));
        let parent = wrapper.parent_element().expect("mounted");
        assert_eq!(parent.id(), sevi_shared::config::MAP_ID);

        home.remove();
        clear_wrappers(&document);
    }

    #[wasm_bindgen_test]
    fn body_fallback_wrapper_is_replaced_once_map_exists() {
        let document = dom::document().expect("document");
        clear_wrappers(&document);
        let config = MapConfig::default();

        let (first, _) = prepare_canvas(&document, &config).expect("body canvas");
        assert_eq!(first.parent_element().map(|p| p.tag_name()).as_deref(), Some("BODY"));

        let home = mount_home(&document);
        let (second, _) = prepare_canvas(&document, &config).expect("map canvas");

        assert_eq!(wrapper_count(&document), 1);
        assert!(!first.is_connected());
        assert!(second.is_connected());

        home.remove();
        clear_wrappers(&document);
    }
}
