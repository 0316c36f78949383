//! Shared Dioxus components, DOM glue and Chart.js bridge for the site apps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Chart.js bridge functions via `js_sys::eval()`
//! - `chart_config`: Chart.js configuration built from `ChartData`
//! - `widgets`: the per-slot chart widget manager
//! - `fetch`: JSON resource loading through `window.fetch`
//! - `dom`, `visibility`, `nav`, `timers`: capability-checked DOM helpers
//! - `state`: Reactive app state with Dioxus Signals
//! - `components`: Reusable RSX components (paper cards, filter bar, chart containers...)

pub mod chart_config;
pub mod components;
pub mod dom;
pub mod fetch;
pub mod js_bridge;
pub mod nav;
pub mod state;
pub mod timers;
pub mod visibility;
pub mod widgets;
