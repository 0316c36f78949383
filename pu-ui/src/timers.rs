//! `setTimeout`-backed scheduling for the shared debounce utility.

use pu_utils::schedule::Scheduler;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Schedules tasks on the browser's timer queue.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = i32;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Option<i32> {
        let window = web_sys::window()?;
        let callback = Closure::once_into_js(move || task());
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay)
            .ok()
    }

    fn cancel(&self, handle: i32) {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(handle);
        }
    }
}
