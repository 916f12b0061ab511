use gloo_timers::callback::Timeout;
use web_sys::{Document, HtmlElement};

use super::{listen, select_all};
use crate::error::Result;

const GLOW_TARGETS: &str = ".btn-primary, .btn-secondary, .pioneer-card, .app-card";
const PULSE: &str = "pulse 0.6s ease-in-out";

pub fn attach_glow(document: &Document, shadow: &str) -> Result<()> {
    for element in select_all::<HtmlElement>(document, GLOW_TARGETS) {
        let target = element.clone();
        let shadow = shadow.to_string();
        listen(&element, "mouseenter", move |_| {
            let _ = target.style().set_property("box-shadow", &shadow);
        })?;

        let target = element.clone();
        listen(&element, "mouseleave", move |_| {
            let _ = target.style().remove_property("box-shadow");
        })?;
    }
    Ok(())
}

/// Plays the pulse keyframes on a clicked timeline entry, clearing the
/// animation afterwards so the next click can replay it.
pub fn attach_pulse(document: &Document, duration_ms: u32) -> Result<()> {
    for content in select_all::<HtmlElement>(document, ".timeline-content") {
        let target = content.clone();
        listen(&content, "click", move |_| {
            let _ = target.style().set_property("animation", PULSE);
            let target = target.clone();
            Timeout::new(duration_ms, move || {
                let _ = target.style().remove_property("animation");
            })
            .forget();
        })?;
    }
    Ok(())
}
