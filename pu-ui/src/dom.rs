//! Capability-checked DOM lookups.
//!
//! Every lookup returns `Option`/`Vec` instead of assuming the element is
//! there, so a page that lacks some markup simply loses that feature.

use pu_model::config::SiteConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// First element matching `selector`.
pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// All elements matching `selector`, in document order.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn as_html(element: &Element) -> Option<HtmlElement> {
    element.clone().dyn_into::<HtmlElement>().ok()
}

/// Attach `handler` for the page's lifetime.
pub fn on<T, F>(target: &T, event: &str, handler: F)
where
    T: AsRef<EventTarget>,
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target
        .as_ref()
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("Failed to attach {} listener: {:?}", event, e);
    }
    closure.forget();
}

/// Site configuration for the app mounted at `root_id`, honouring an
/// optional `data-config` JSON override on the root element.
pub fn root_config(root_id: &str) -> SiteConfig {
    let attr = element_by_id(root_id).and_then(|root| root.get_attribute("data-config"));
    SiteConfig::from_attr(attr.as_deref())
}
