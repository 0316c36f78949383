//! The `#papers-container` list: cards, loading text, or one error.

use crate::components::{ErrorDisplay, LoadingSpinner, PaperCard};
use crate::state::{visible_papers, CatalogState, LoadState};
use dioxus::prelude::*;

/// Rebuilt from scratch from the collection and the active filter on every
/// render, so repeated renders show the same cards.
#[component]
pub fn PaperList() -> Element {
    let state = use_context::<CatalogState>();
    let papers = state.papers.read();
    let criterion = (state.filter)();
    let stagger = (state.stagger_secs)();
    let locale = (state.locale)();

    let body = match &*papers {
        LoadState::Loading => rsx! { LoadingSpinner { message: locale.text().loading_papers.to_string() } },
        LoadState::Failed(message) => rsx! { ErrorDisplay { message: message.clone() } },
        LoadState::Ready(_) => {
            let shown = visible_papers(&papers, criterion);
            rsx! {
                for (index, paper) in shown.into_iter().enumerate() {
                    PaperCard {
                        key: "{criterion}-{index}",
                        paper,
                        index,
                        stagger_secs: stagger,
                        locale,
                    }
                }
            }
        }
    };

    rsx! {
        div {
            id: "papers-container",
            class: "papers-grid",
            {body}
        }
    }
}
