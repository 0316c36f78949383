//! Pressure Ulcer Statistics Dashboard
//!
//! Two Chart.js charts fed by `statistics.json`:
//! - a line chart of pressure ulcer incidence by age group
//! - a bar chart comparing incidence under different interventions
//!
//! Data flow:
//! 1. On mount: start the Chart.js bridge, fetch `statistics.json` once.
//! 2. When the statistics arrive, each slot's old chart (if any) is destroyed
//!    and a new one is built from the fresh data.
//! 3. Window resizes are debounced into one resize of every live chart;
//!    a chart container scrolling into view triggers a short-delayed
//!    no-animation redraw (charts built while hidden come out blank).
//! 4. A failed load replaces both canvases with the chart error placeholder.
//!
//! `window.exportChartData()` returns the series currently on screen.

use dioxus::prelude::*;
use pu_model::config::SiteConfig;
use pu_model::locale::Locale;
use pu_model::statistics::{ChartData, Statistics};
use pu_ui::components::{ChartContainer, ChartHeader};
use pu_ui::state::{DashboardState, LoadState};
use pu_ui::timers::BrowserScheduler;
use pu_ui::visibility::{self, ObserveOptions};
use pu_ui::widgets::{ChartSlot, ExportedChartData, JsChart, WidgetManager};
use pu_ui::{dom, fetch, js_bridge};
use pu_utils::debounce::debounce;
use pu_utils::schedule::Scheduler;
use std::cell::RefCell;
use std::rc::Rc;

/// DOM id of the element the app mounts into.
const ROOT_ID: &str = "dashboard-root";

type Charts = Rc<RefCell<WidgetManager<JsChart>>>;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_ID))
        .launch(App);
}

/// Series currently loaded in each slot.
fn export_chart_data(charts: &Charts) -> ExportedChartData {
    charts.borrow().export()
}

/// Destroy and rebuild both charts from `stats`.
fn build_charts(charts: &Charts, stats: &Statistics, locale: Locale) {
    let mut manager = charts.borrow_mut();
    let slots: [(ChartSlot, &ChartData); 2] = [
        (ChartSlot::Age, &stats.age_pressure_ulcer_data),
        (ChartSlot::Intervention, &stats.intervention_comparison_data),
    ];
    for (slot, data) in slots {
        let built = manager.replace_with(slot, || JsChart::create(slot, data.clone(), locale.text()));
        if !built {
            log::warn!("Chart {} was not built", slot.canvas_id());
        }
    }
}

/// Debounced resize, visibility redraw, and the export hook. Wired once.
fn install_responsiveness(charts: &Charts, config: &SiteConfig) {
    let resize_target = Rc::clone(charts);
    let resize = debounce(BrowserScheduler, config.resize_debounce_ms, move || {
        resize_target.borrow().resize_all();
    });
    if let Some(window) = dom::window() {
        dom::on(&window, "resize", move |_| resize.trigger());
    }

    let redraw_target = Rc::clone(charts);
    let delay = config.redraw_delay_ms;
    let options = ObserveOptions {
        threshold: config.visibility_threshold,
        root_margin: None,
        once: false,
    };
    visibility::observe_all(".chart-wrapper", &options, move |_| {
        if redraw_target.borrow().live_count() == 0 {
            return;
        }
        let charts = Rc::clone(&redraw_target);
        BrowserScheduler.schedule(delay, Box::new(move || charts.borrow().redraw_all()));
    });

    let export_source = Rc::clone(charts);
    js_bridge::publish_export("exportChartData", move || {
        serde_json::to_string(&export_chart_data(&export_source)).unwrap_or_default()
    });
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(DashboardState::new);
    let charts: Charts = use_hook(|| Rc::new(RefCell::new(WidgetManager::new())));
    let config = use_hook(|| dom::root_config(ROOT_ID));
    let locale = config.locale;
    let text = locale.text();

    // ─── Effect 1: bridge, listeners and the one fetch, on mount ───
    let mount_charts = Rc::clone(&charts);
    use_effect(move || {
        let config = config.clone();
        js_bridge::init_charts();
        install_responsiveness(&mount_charts, &config);
        spawn(async move {
            log::info!("Loading statistics from {}", config.statistics_url);
            let result = fetch::fetch_text(&config.statistics_url)
                .await
                .and_then(|body| Statistics::from_json(&body));
            state
                .statistics
                .set(LoadState::from_result(result, config.locale.text().charts_error));
        });
    });

    // ─── Effect 2: (re)build both charts whenever statistics load ───
    let build_target = Rc::clone(&charts);
    use_effect(move || {
        if let Some(stats) = state.statistics.read().ready() {
            build_charts(&build_target, stats, locale);
        }
    });

    let statistics = state.statistics.read();
    let error = statistics.error().map(str::to_string);
    let loading = statistics.is_loading();

    rsx! {
        div {
            class: "charts-grid",
            div {
                class: "chart-card",
                ChartHeader {
                    title: text.age_chart_title.to_string(),
                    caption: text.age_chart_caption.to_string(),
                }
                ChartContainer {
                    canvas_id: ChartSlot::Age.canvas_id().to_string(),
                    error: error.clone(),
                    loading,
                    locale,
                }
            }
            div {
                class: "chart-card",
                ChartHeader {
                    title: text.intervention_chart_title.to_string(),
                    caption: text.intervention_chart_caption.to_string(),
                }
                ChartContainer {
                    canvas_id: ChartSlot::Intervention.canvas_id().to_string(),
                    error,
                    loading,
                    locale,
                }
            }
        }
    }
}
