//! Loading JSON resources through `window.fetch`.

use pu_model::LoadError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Best-effort text for a rejected promise value.
fn describe(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

fn network(url: &str, reason: impl Into<String>) -> LoadError {
    LoadError::Network {
        url: url.to_string(),
        reason: reason.into(),
    }
}

/// GET `url` and return the body as text.
///
/// Transport failures, non-2xx statuses and unreadable bodies each map to
/// their own [`LoadError`] variant. No retry, no timeout.
pub async fn fetch_text(url: &str) -> Result<String, LoadError> {
    let window = web_sys::window().ok_or_else(|| network(url, "no window"))?;
    let value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| network(url, describe(&e)))?;
    let response: Response = value
        .dyn_into()
        .map_err(|_| network(url, "fetch did not resolve to a Response"))?;

    if !response.ok() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let body = response
        .text()
        .map_err(|e| LoadError::Malformed(describe(&e)))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|e| LoadError::Malformed(describe(&e)))?;
    log::info!("Fetched {}", url);
    text.as_string()
        .ok_or_else(|| LoadError::Malformed(format!("body of {} is not text", url)))
}
