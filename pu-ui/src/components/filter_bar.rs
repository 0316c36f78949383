//! Mutually exclusive language filter buttons.

use crate::state::CatalogState;
use dioxus::prelude::*;
use pu_model::filter::FilterCriterion;

/// One `.filter-btn` per criterion; exactly one carries `active`.
#[component]
pub fn FilterBar() -> Element {
    let mut state = use_context::<CatalogState>();
    let current = (state.filter)();
    let text = (state.locale)().text();

    rsx! {
        div {
            class: "filter-buttons",
            for criterion in FilterCriterion::ALL {
                button {
                    key: "{criterion}",
                    class: if criterion == current { "filter-btn active" } else { "filter-btn" },
                    "data-filter": "{criterion}",
                    onclick: move |_| {
                        log::info!("Filter set to {}", criterion);
                        state.filter.set(criterion);
                    },
                    {criterion.label(text)}
                }
            }
        }
    }
}
