use leptos::prelude::*;

use sevi_shared::config::{HOME_ID, MAP_ID};
use sevi_shared::scores::format_score;
use sevi_shared::{DataSource, LoadPhase, MapConfig, ScoreTable, fill_for};

use crate::colors::rgb_css;
use crate::page;

/// Current load phase, provided via context.
#[derive(Clone, Copy)]
pub(crate) struct Phase(pub RwSignal<LoadPhase>);

/// Map configuration from the page's query string.
fn page_config() -> MapConfig {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    MapConfig::from_query(&search)
}

/// Root component: the `#home` shell that hosts the map container, legend and status line.
#[component]
pub fn App() -> impl IntoView {
    let phase: RwSignal<LoadPhase> = RwSignal::new(LoadPhase::Idle);
    provide_context(Phase(phase));

    let config = page_config();
    if config.source != DataSource::default() {
        web_sys::console::info_1(
            &format!(
                "map: using {} (name field {})",
                config.source.url, config.source.name_field
            )
            .into(),
        );
    }

    // Start loading once the shell is in the document.
    Effect::new(move || {
        page::start(phase, config.clone());
    });

    view! {
        <section id=HOME_ID data-phase=move || phase.get().as_str()>
            <header class="home-header">
                <h1>"SEVI Index"</h1>
                <StatusLine />
            </header>
            <div id=MAP_ID></div>
            <Legend />
        </section>
    }
}

#[component]
fn StatusLine() -> impl IntoView {
    let Phase(phase) = expect_context();
    view! {
        <p
            class="home-status"
            class:home-status-failed=move || phase.get() == LoadPhase::Failed
            aria-busy=move || (!phase.get().is_settled()).to_string()
        >
            {move || phase.get().status_label()}
        </p>
    }
}

/// Score key, highest first.
#[component]
fn Legend() -> impl IntoView {
    let rows = legend_rows(ScoreTable::sevi());
    let unscored_swatch = format!("background: {};", rgb_css(fill_for(None)));
    view! {
        <ul class="legend">
            {rows
                .into_iter()
                .map(|(name, score)| {
                    let swatch = format!("background: {};", rgb_css(fill_for(Some(score))));
                    view! {
                        <li class="legend-row">
                            <span class="legend-swatch" style=swatch></span>
                            <span class="legend-name">{name}</span>
                            <span class="legend-score">{format_score(Some(score))}</span>
                        </li>
                    }
                })
                .collect_view()}
            <li class="legend-row">
                <span class="legend-swatch" style=unscored_swatch></span>
                <span class="legend-name">"No score"</span>
                <span class="legend-score">{format_score(None)}</span>
            </li>
        </ul>
    }
}

fn legend_rows(table: ScoreTable) -> Vec<(&'static str, f64)> {
    let mut rows: Vec<_> = table.iter().collect();
    rows.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    rows
}
