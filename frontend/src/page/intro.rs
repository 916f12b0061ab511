use log::debug;
use web_sys::{Document, HtmlElement, Window};

use super::{listen, select};
use crate::error::Result;

const ENTRANCES: [(&str, &str); 3] = [
    (".hero-title", "fadeInUp 1s ease-out"),
    (".hero-subtitle", "fadeInUp 1s ease-out 0.3s both"),
    (".hero-cta", "fadeInUp 1s ease-out 0.6s both"),
];

/// Marks the body loaded and starts the hero entrance animations once the
/// window has finished loading.
pub fn attach(document: &Document, window: &Window) -> Result<()> {
    if document.ready_state() == "complete" {
        play(document);
        return Ok(());
    }
    let document = document.clone();
    listen(window, "load", move |_| play(&document))
}

fn play(document: &Document) {
    if let Some(body) = document.body() {
        let _ = body.class_list().add_1("loaded");
    }
    for (selector, animation) in ENTRANCES {
        match select::<HtmlElement>(document, selector) {
            Some(element) => {
                let _ = element.style().set_property("animation", animation);
            }
            None => debug!("No {} to animate", selector),
        }
    }
}
