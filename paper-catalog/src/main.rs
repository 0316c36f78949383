//! Pressure Ulcer Research Papers
//!
//! Lists research papers as cards with a language filter (all / Chinese /
//! English), and wires the page's navigation bar.
//!
//! Data flow:
//! 1. Before launch: read the optional `data-config` override, wire the
//!    static navbar markup and the section reveal animation.
//! 2. On mount: fetch `papers.json` once and store the whole collection.
//! 3. Every render derives the visible cards from (collection, filter), so
//!    clicking a filter button just swaps the active criterion.
//! 4. Any fetch/status/parse failure leaves a single error message in the
//!    list area and no filter buttons.

use dioxus::prelude::*;
use pu_model::paper::PaperCollection;
use pu_ui::components::{FilterBar, PaperList};
use pu_ui::state::{CatalogState, LoadState};
use pu_ui::{dom, fetch, nav, visibility};

/// DOM id of the element the app mounts into.
const ROOT_ID: &str = "papers-root";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");

    let config = dom::root_config(ROOT_ID);
    let caps = nav::install(&config);
    if !caps.any() {
        log::info!("No navigation markup on this page");
    }
    visibility::reveal_sections(config.visibility_threshold);

    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_ID))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(CatalogState::new);

    // ─── Load the collection once on mount ───
    use_effect(move || {
        let config = dom::root_config(ROOT_ID);
        state.stagger_secs.set(config.card_stagger_secs);
        state.locale.set(config.locale);
        let message = config.locale.text().papers_error;
        spawn(async move {
            log::info!("Loading papers from {}", config.papers_url);
            let result = fetch::fetch_text(&config.papers_url)
                .await
                .and_then(|body| PaperCollection::from_json(&body))
                .map(|collection| collection.papers);
            state
                .papers
                .set(LoadState::from_result(result, message));
        });
    });

    let loaded = state.papers.read().ready().is_some();

    rsx! {
        div {
            class: "papers-section",
            if loaded {
                FilterBar {}
            }
            PaperList {}
        }
    }
}
