//! IntersectionObserver wiring.

use crate::dom;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// How to watch a group of elements.
#[derive(Debug, Clone, PartialEq)]
pub struct ObserveOptions {
    pub threshold: f64,
    pub root_margin: Option<String>,
    /// Stop watching an element after its first intersection
    pub once: bool,
}

/// Call `on_visible` whenever an element matching `selector` becomes
/// intersecting. Returns `false` (and observes nothing) when no element
/// matches or the observer can't be created.
pub fn observe_all<F>(selector: &str, options: &ObserveOptions, mut on_visible: F) -> bool
where
    F: FnMut(&Element) + 'static,
{
    let targets = dom::query_all(selector);
    if targets.is_empty() {
        log::info!("No {} elements to observe", selector);
        return false;
    }

    let once = options.once;
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                on_visible(&target);
                if once {
                    observer.unobserve(&target);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    if let Some(margin) = &options.root_margin {
        init.set_root_margin(margin);
    }

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(e) => {
                log::warn!("IntersectionObserver unavailable: {:?}", e);
                return false;
            }
        };
    for target in &targets {
        observer.observe(target);
    }
    callback.forget();
    true
}

/// Class on `<body>` that opts `.section`s into the hidden-until-revealed
/// style. Only set once the observer is in place.
pub const REVEAL_CLASS: &str = "js-reveal";

/// Fade `.section` elements in the first time they scroll into view.
///
/// Sections stay plainly visible unless this succeeds, so a page without
/// IntersectionObserver (or without this app) never hides content.
pub fn reveal_sections(threshold: f64) -> bool {
    let options = ObserveOptions {
        threshold,
        root_margin: Some("0px 0px -50px 0px".to_string()),
        once: true,
    };
    let observing = observe_all(".section", &options, |section| {
        let _ = section.class_list().add_1("fade-in-up");
    });
    if observing {
        if let Some(body) = dom::document().and_then(|d| d.body()) {
            let _ = body.class_list().add_1(REVEAL_CLASS);
        }
    }
    observing
}
