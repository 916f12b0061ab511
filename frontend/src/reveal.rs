//! Scroll-triggered entrance animations.

use log::debug;
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::Result;
use crate::page;

/// Class that lets the stylesheet play the entrance transition.
pub const REVEALED_CLASS: &str = "animate";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Fraction of the element that must be visible.
    pub threshold: f64,
    /// Pixels trimmed off the bottom of the viewport.
    pub bottom_margin_px: f64,
    /// Conceal elements again when they drop below the threshold.
    pub replay: bool,
    pub groups: Vec<RevealGroup>,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin_px: 50.0,
            replay: false,
            groups: vec![
                RevealGroup::new(".timeline-item", false),
                RevealGroup::new(".pioneer-card", true),
                RevealGroup::new(".app-card", true),
            ],
        }
    }
}

impl RevealConfig {
    pub fn root_margin(&self) -> String {
        format!("0px 0px {}px 0px", -self.bottom_margin_px)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RevealGroup {
    pub selector: String,
    #[serde(default)]
    pub stagger: bool,
}

impl RevealGroup {
    pub fn new(selector: &str, stagger: bool) -> Self {
        Self {
            selector: selector.to_string(),
            stagger,
        }
    }
}

/// CSS animation delay for the `index`th card of a staggered group.
pub fn stagger_delay(index: usize) -> String {
    let seconds = (index as f64 * 0.1 * 1000.0).round() / 1000.0;
    format!("{}s", seconds)
}

pub trait Revealable {
    fn is_revealed(&self) -> bool;
    fn reveal(&self);
    fn conceal(&self);
}

impl Revealable for Element {
    fn is_revealed(&self) -> bool {
        self.class_list().contains(REVEALED_CLASS)
    }

    fn reveal(&self) {
        let _ = self.class_list().add_1(REVEALED_CLASS);
    }

    fn conceal(&self) {
        let _ = self.class_list().remove_1(REVEALED_CLASS);
    }
}

#[derive(Debug, Clone)]
pub struct RevealTrigger {
    threshold: f64,
    replay: bool,
}

impl RevealTrigger {
    pub fn new(config: &RevealConfig) -> Self {
        Self {
            threshold: config.threshold,
            replay: config.replay,
        }
    }

    /// Applies one batch of `(element, visible fraction)` changes and
    /// returns how many elements were newly revealed.
    pub fn apply<R, I>(&self, entries: I) -> usize
    where
        R: Revealable,
        I: IntoIterator<Item = (R, f64)>,
    {
        let mut revealed = 0;
        for (element, fraction) in entries {
            if fraction >= self.threshold {
                if !element.is_revealed() {
                    element.reveal();
                    revealed += 1;
                }
            } else if self.replay && element.is_revealed() {
                element.conceal();
            }
        }
        revealed
    }
}

/// Observes every element of the configured groups, applying stagger
/// delays first. Returns the number of elements registered.
pub fn observe_groups(document: &Document, config: &RevealConfig) -> Result<usize> {
    let trigger = RevealTrigger::new(config);
    let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        let batch = entries.iter().filter_map(|entry| {
            let entry = entry.dyn_into::<IntersectionObserverEntry>().ok()?;
            Some((entry.target(), entry.intersection_ratio()))
        });
        let count = trigger.apply(batch);
        if count > 0 {
            debug!("Revealed {} elements", count);
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(&config.root_margin());
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    let mut registered = 0;
    for group in &config.groups {
        let elements = page::select_all::<HtmlElement>(document, &group.selector);
        if elements.is_empty() {
            debug!("No elements for {}", group.selector);
        }
        for (index, element) in elements.iter().enumerate() {
            if group.stagger {
                let _ = element.style().set_property("animation-delay", &stagger_delay(index));
            }
            observer.observe(element);
            registered += 1;
        }
    }
    Ok(registered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Card {
        revealed: Rc<Cell<bool>>,
        reveals: Rc<Cell<u32>>,
    }

    impl Revealable for Card {
        fn is_revealed(&self) -> bool {
            self.revealed.get()
        }

        fn reveal(&self) {
            self.revealed.set(true);
            self.reveals.set(self.reveals.get() + 1);
        }

        fn conceal(&self) {
            self.revealed.set(false);
        }
    }

    #[test]
    fn default_margin_trims_fifty_pixels() {
        assert_eq!(RevealConfig::default().root_margin(), "0px 0px -50px 0px");
    }

    #[test]
    fn crossing_threshold_reveals_once_and_stays() {
        let trigger = RevealTrigger::new(&RevealConfig::default());
        let card = Card::default();

        assert_eq!(trigger.apply([(card.clone(), 0.0)]), 0);
        assert!(!card.is_revealed());

        assert_eq!(trigger.apply([(card.clone(), 0.15)]), 1);
        assert!(card.is_revealed());

        assert_eq!(trigger.apply([(card.clone(), 0.0)]), 0);
        assert_eq!(trigger.apply([(card.clone(), 0.9)]), 0);
        assert!(card.is_revealed());
        assert_eq!(card.reveals.get(), 1);
    }

    #[test]
    fn exact_threshold_counts_as_visible() {
        let trigger = RevealTrigger::new(&RevealConfig::default());
        let card = Card::default();
        assert_eq!(trigger.apply([(card.clone(), 0.1)]), 1);
    }

    #[test]
    fn replay_conceals_below_threshold() {
        let config = RevealConfig {
            replay: true,
            ..RevealConfig::default()
        };
        let trigger = RevealTrigger::new(&config);
        let card = Card::default();

        trigger.apply([(card.clone(), 0.5)]);
        trigger.apply([(card.clone(), 0.05)]);
        assert!(!card.is_revealed());
        assert_eq!(trigger.apply([(card.clone(), 0.5)]), 1);
        assert_eq!(card.reveals.get(), 2);
    }

    #[test]
    fn empty_batch_is_a_no_op() {
        let trigger = RevealTrigger::new(&RevealConfig::default());
        assert_eq!(trigger.apply(Vec::<(Card, f64)>::new()), 0);
    }

    #[test]
    fn stagger_delays_step_by_a_tenth() {
        let delays: Vec<String> = (0..4).map(stagger_delay).collect();
        assert_eq!(delays, vec!["0s", "0.1s", "0.2s", "0.3s"]);
    }
}
