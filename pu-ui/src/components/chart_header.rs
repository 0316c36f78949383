//! Chart header component with title and a short caption.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Chart title
    pub title: String,
    /// What the chart shows (e.g., "Incidence (%) per age group")
    #[props(default = String::new())]
    pub caption: String,
}

/// Header for chart sections showing title and optional caption.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            class: "chart-header",
            h3 { "{props.title}" }
            if !props.caption.is_empty() {
                p { class: "chart-caption", "{props.caption}" }
            }
        }
    }
}
