use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions, Window};

use super::{listen, smooth_scroll_to};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Timeline,
    Pioneers,
    Top,
    Bottom,
}

impl Shortcut {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "t" | "T" => Some(Self::Timeline),
            "p" | "P" => Some(Self::Pioneers),
            "Home" => Some(Self::Top),
            "End" => Some(Self::Bottom),
            _ => None,
        }
    }

    fn run(self, document: &Document, window: &Window) {
        match self {
            Self::Timeline => scroll_into_view(document, "timeline"),
            Self::Pioneers => scroll_into_view(document, "pioneers"),
            Self::Top => smooth_scroll_to(window, 0.0),
            Self::Bottom => {
                if let Some(body) = document.body() {
                    smooth_scroll_to(window, body.scroll_height() as f64);
                }
            }
        }
    }
}

fn scroll_into_view(document: &Document, id: &str) {
    if let Some(section) = document.get_element_by_id(id) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        section.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

pub fn attach(document: &Document, window: &Window) -> Result<()> {
    let document_ref = document.clone();
    let window = window.clone();
    listen(document, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if let Some(shortcut) = Shortcut::from_key(&event.key()) {
            shortcut.run(&document_ref, &window);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_match_either_case() {
        assert_eq!(Shortcut::from_key("t"), Some(Shortcut::Timeline));
        assert_eq!(Shortcut::from_key("T"), Some(Shortcut::Timeline));
        assert_eq!(Shortcut::from_key("p"), Some(Shortcut::Pioneers));
        assert_eq!(Shortcut::from_key("P"), Some(Shortcut::Pioneers));
    }

    #[test]
    fn named_keys() {
        assert_eq!(Shortcut::from_key("Home"), Some(Shortcut::Top));
        assert_eq!(Shortcut::from_key("End"), Some(Shortcut::Bottom));
        assert_eq!(Shortcut::from_key("home"), None);
        assert_eq!(Shortcut::from_key("x"), None);
    }
}
