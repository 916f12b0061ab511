//! Enhancements for the AI Chronicle static page, compiled to WebAssembly.

use log::{debug, info, warn};
use web_sys::{Document, Window};

pub mod config;
pub mod error;
pub mod page;
pub mod reveal;
pub mod typewriter;

use config::PageConfig;
use error::Result;
use page::{intro, keys, nav, pointer, scroll, styles, year};

/// Logs a feature that failed to wire up and lets the others carry on.
fn wire(feature: &str, result: Result<()>) {
    if let Err(e) = result {
        warn!("Skipping {}: {}", feature, e);
    }
}

fn enhance(document: &Document, window: &Window) {
    let config = PageConfig::from_document(document);
    info!("Enhancing page");

    year::stamp(document);

    if typewriter::attach(document, config.phrases.clone(), config.typing).is_none() {
        debug!("Typewriter not started");
    }

    match reveal::observe_groups(document, &config.reveal) {
        Ok(count) => debug!("Observing {} elements for reveal", count),
        Err(e) => warn!("Skipping reveal animations: {}", e),
    }

    wire("nav links", nav::attach_links(document, window));
    wire("scroll-top button", scroll::attach_scroll_top(document, window, config.scroll_top_threshold));
    wire("mobile menu", nav::attach_menu(document));
    wire("parallax", scroll::attach_parallax(document, window, config.parallax_rate));
    wire("hover glow", pointer::attach_glow(document, &config.glow_shadow));
    wire("timeline pulse", pointer::attach_pulse(document, config.pulse_ms));
    wire("keyboard shortcuts", keys::attach(document, window));
    wire("load animations", intro::attach(document, window));
}

/// Wires every page feature, deferring to `DOMContentLoaded` while the
/// document is still parsing.
pub fn run() -> Result<()> {
    let window = page::window()?;
    let document = page::document(&window)?;

    wire("stylesheet", styles::inject(&document));

    if document.ready_state() == "loading" {
        let target = document.clone();
        page::listen(&target, "DOMContentLoaded", move |_| enhance(&document, &window))
    } else {
        enhance(&document, &window);
        Ok(())
    }
}
