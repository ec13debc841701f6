use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::AddEventListenerOptions;

use sevi_shared::config::{HOME_ID, MAP_FAILED_TEXT, MAP_ID, MAP_LOADING_TEXT};
use sevi_shared::{LoadPhase, MapConfig, ScoreTable};

use crate::loading::{self, LoadingOverlay};
use crate::map;
use crate::zoom_fit;

/// Run [`init`] once the page has finished loading (now, if it already has).
pub fn start(phase: RwSignal<LoadPhase>, config: MapConfig) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    if document.ready_state() == "complete" {
        spawn_local(init(phase, config));
        return;
    }

    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let on_load = Closure::once_into_js(move || spawn_local(init(phase, config)));
    if window
        .add_event_listener_with_callback_and_add_event_listener_options(
            "load",
            on_load.unchecked_ref(),
            &options,
        )
        .is_err()
    {
        web_sys::console::warn_1(&"page: could not wait for load, map not started".into());
    }
}

/// Show the overlay, draw the map, then take the overlay down whatever happened.
async fn init(phase: RwSignal<LoadPhase>, config: MapConfig) {
    let Some(loading) = phase.get_untracked().begin() else {
        return;
    };
    phase.set(loading);

    let map_selector = format!("#{MAP_ID}");
    let overlay = LoadingOverlay::show_in(&map_selector, Some(MAP_LOADING_TEXT));

    let outcome = map::render_map(&config, ScoreTable::sevi()).await;
    if let Err(e) = &outcome {
        web_sys::console::error_1(&format!("Map initialization failed: {e}").into());
        if let Some(overlay) = &overlay {
            overlay.set_text(MAP_FAILED_TEXT);
        }
    }
    phase.set(phase.get_untracked().finish(&outcome));

    match overlay {
        Some(overlay) => overlay.hide(),
        None => loading::hide(),
    }

    if outcome.is_ok() && config.fit_home_on_resize {
        zoom_fit::bind_resize(HOME_ID);
    }
}
