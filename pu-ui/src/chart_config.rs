//! Chart.js configuration for the two dashboard charts.
//!
//! Labels and datasets go through untouched; everything else here is
//! presentation.

use pu_model::locale::UiText;
use pu_model::statistics::ChartData;
use serde_json::{json, Value};

fn title_plugin(text: &str) -> Value {
    json!({
        "display": true,
        "text": text,
        "font": { "size": 16, "weight": "bold" },
        "padding": 20,
    })
}

fn legend_plugin() -> Value {
    json!({
        "display": true,
        "position": "top",
        "labels": { "font": { "size": 12 }, "padding": 15 },
    })
}

fn tooltip_plugin() -> Value {
    json!({
        "backgroundColor": "rgba(0, 0, 0, 0.7)",
        "titleFont": { "size": 14 },
        "bodyFont": { "size": 12 },
        "padding": 10,
    })
}

fn axis_title(text: &str) -> Value {
    json!({
        "display": true,
        "text": text,
        "font": { "size": 12, "weight": "bold" },
    })
}

fn x_axis(title: &str, max_ticks: u32) -> Value {
    json!({
        "title": axis_title(title),
        "ticks": {
            "font": { "size": 11 },
            "maxRotation": 45,
            "minRotation": 45,
            "autoSkip": true,
            "maxTicksLimit": max_ticks,
        },
        "grid": { "display": false },
    })
}

fn y_axis(title: &str, max: Option<f64>) -> Value {
    let mut axis = json!({
        "beginAtZero": true,
        "title": axis_title(title),
        "ticks": { "font": { "size": 11 } },
        "grid": { "color": "rgba(0, 0, 0, 0.1)" },
    });
    if let Some(max) = max {
        axis["max"] = json!(max);
    }
    axis
}

fn animation() -> Value {
    json!({ "duration": 1000, "easing": "easeOutQuart" })
}

/// Line chart: incidence by age group.
pub fn line_chart_config(data: &ChartData, text: &UiText) -> Value {
    json!({
        "type": "line",
        "data": data,
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "title": title_plugin(text.age_chart_title),
                "legend": legend_plugin(),
                "tooltip": tooltip_plugin(),
            },
            "scales": {
                "y": y_axis(text.incidence_axis, None),
                "x": x_axis(text.age_axis, 10),
            },
            "animation": animation(),
            "elements": {
                "line": { "tension": 0.4 },
                "point": { "radius": 5, "hoverRadius": 7 },
            },
        },
    })
}

/// Bar chart: incidence under each intervention, tooltips as percentages.
pub fn bar_chart_config(data: &ChartData, text: &UiText) -> Value {
    json!({
        "type": "bar",
        "data": data,
        "percentTooltip": true,
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "title": title_plugin(text.intervention_chart_title),
                "legend": legend_plugin(),
                "tooltip": tooltip_plugin(),
            },
            "scales": {
                "y": y_axis(text.incidence_axis, Some(30.0)),
                "x": x_axis(text.intervention_axis, 8),
            },
            "animation": animation(),
            "interaction": { "intersect": false, "mode": "index" },
        },
    })
}
