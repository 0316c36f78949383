//! Chart container: a `.chart-wrapper` holding either the canvas or an error.

use crate::components::LoadingSpinner;
use dioxus::prelude::*;
use pu_model::locale::Locale;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the `<canvas>` (Chart.js renders into this)
    pub canvas_id: String,
    /// Replaces the canvas when set
    #[props(!optional)]
    pub error: Option<String>,
    /// Whether the chart data is still loading
    #[props(default = false)]
    pub loading: bool,
    /// Minimum height in pixels
    #[props(default = 400)]
    pub min_height: u32,
    #[props(default)]
    pub locale: Locale,
}

/// A `.chart-wrapper` with a canvas, or the chart error placeholder.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; height: {}px; position: relative; width: 100%;",
        props.min_height, props.min_height
    );
    let text = props.locale.text();

    rsx! {
        div {
            class: "chart-wrapper",
            style: "{style}",
            if let Some(message) = props.error.as_ref() {
                div {
                    class: "chart-error",
                    style: "text-align: center; padding: 40px; color: #666;",
                    p { style: "margin-bottom: 10px;", "{text.chart_failed}" }
                    p { style: "font-size: 14px;", "{message}" }
                }
            } else {
                if props.loading {
                    LoadingSpinner { message: text.loading_chart.to_string() }
                }
                canvas { id: "{props.canvas_id}" }
            }
        }
    }
}
