//! Event wiring for the static page. Each submodule owns one feature and
//! silently skips itself when its elements are missing.

pub mod intro;
pub mod keys;
pub mod nav;
pub mod pointer;
pub mod scroll;
pub mod styles;
pub mod year;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, ScrollBehavior, ScrollToOptions, Window};

use crate::error::{EnhanceError, Result};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(EnhanceError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document> {
    window.document().ok_or(EnhanceError::NoDocument)
}

/// All elements matching `selector` that cast to `T`. An invalid selector
/// yields an empty list.
pub fn select_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

pub fn select<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<T>().ok())
}

/// Registers a listener for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

pub fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
