//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Chart.js is loaded by the host page from a CDN. The bridge functions in
//! `assets/js/chart-bridge.js` keep a registry of live `Chart` objects keyed by
//! canvas id and are exposed on `window.*`. This module provides safe Rust
//! wrappers that serialize arguments and call those globals.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

// Embed the bridge at compile time
static CHART_BRIDGE_JS: &str = include_str!("../assets/js/chart-bridge.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('PU JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a string as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}

/// Initialize the bridge with a wait-for-Chart.js polling loop.
///
/// The bridge script is stored on `window` and evaluated at global scope once
/// `Chart` exists, so its `function` declarations become globals. Calls made
/// before that point are queued by the per-call polling in [`create_chart`].
pub fn init_charts() {
    let store_js = format!("window.__puChartBridge = {};", js_string(CHART_BRIDGE_JS));
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__puChartsReady) { return; }
            var waitForChart = setInterval(function() {
                if (typeof Chart !== 'undefined') {
                    clearInterval(waitForChart);
                    (0, eval)(window.__puChartBridge);
                    delete window.__puChartBridge;
                    if (typeof puCreateChart !== 'undefined') window.puCreateChart = puCreateChart;
                    if (typeof puDestroyChart !== 'undefined') window.puDestroyChart = puDestroyChart;
                    if (typeof puResizeChart !== 'undefined') window.puResizeChart = puResizeChart;
                    if (typeof puRedrawChart !== 'undefined') window.puRedrawChart = puRedrawChart;
                    if (typeof puHasChart !== 'undefined') window.puHasChart = puHasChart;
                    if (typeof puApplyChartDefaults !== 'undefined') puApplyChartDefaults();
                    window.__puChartsReady = true;
                    console.log('PU charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Build a chart on the canvas with id `canvas_id`.
///
/// Polls until the bridge is ready and the canvas is in the DOM. Gives up
/// (with a console warning) after ~5 seconds so a missing canvas disables the
/// chart instead of polling forever.
pub fn create_chart(canvas_id: &str, config_json: &str) {
    let id = js_string(canvas_id);
    let config = js_string(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var tries = 0;
            var poll = setInterval(function() {{
                tries += 1;
                if (window.__puChartsReady &&
                    typeof window.puCreateChart !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.puCreateChart({id}, {config});
                    }} catch(e) {{ console.error('[PU] puCreateChart error:', e); }}
                }} else if (tries >= 50) {{
                    clearInterval(poll);
                    console.warn('[PU] gave up waiting for chart canvas', {id});
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy the chart attached to `canvas_id`, if any.
pub fn destroy_chart(canvas_id: &str) {
    call_js(&format!(
        "if (window.puDestroyChart) window.puDestroyChart({});",
        js_string(canvas_id)
    ));
}

/// Ask the chart on `canvas_id` to re-measure its container.
pub fn resize_chart(canvas_id: &str) {
    call_js(&format!(
        "if (window.puResizeChart) window.puResizeChart({});",
        js_string(canvas_id)
    ));
}

/// Redraw the chart on `canvas_id` without animation (`update('none')`).
pub fn redraw_chart(canvas_id: &str) {
    call_js(&format!(
        "if (window.puRedrawChart) window.puRedrawChart({});",
        js_string(canvas_id)
    ));
}

/// Whether Chart.js actually holds a chart for `canvas_id`.
///
/// False while [`create_chart`] is still polling, and for good if it gave up
/// or the constructor threw.
pub fn has_chart(canvas_id: &str) -> bool {
    let code = format!(
        "!!(window.puHasChart && window.puHasChart({}))",
        js_string(canvas_id)
    );
    js_sys::eval(&code)
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

/// Publish a zero-argument function on `window` that returns the JSON
/// produced by `export` parsed into a plain JS object.
pub fn publish_export<F>(name: &str, export: F)
where
    F: Fn() -> String + 'static,
{
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::<dyn Fn() -> JsValue>::new(move || {
        js_sys::JSON::parse(&export()).unwrap_or(JsValue::NULL)
    });
    let function: &js_sys::Function = closure.as_ref().unchecked_ref();
    if let Err(e) = js_sys::Reflect::set(&window, &JsValue::from_str(name), function) {
        log::warn!("Failed to publish window.{}: {:?}", name, e);
    }
    closure.forget();
}

#[cfg(test)]
mod tests {
    use super::js_string;

    #[test]
    fn test_js_string_escapes_quotes_and_newlines() {
        assert_eq!(js_string("ageChart"), "\"ageChart\"");
        assert_eq!(js_string("a'b\"c\nd"), "\"a'b\\\"c\\nd\"");
    }
}
