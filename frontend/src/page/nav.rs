use log::debug;
use web_sys::{Document, Element, HtmlElement, Window};

use super::{listen, select, select_all, smooth_scroll_to};
use crate::error::Result;

const ACTIVE: &str = "active";

/// Scroll position that puts a section just below the fixed navbar.
pub fn nav_target_top(section_top: f64, nav_height: f64) -> f64 {
    section_top - nav_height
}

/// Smooth scrolling for `.nav-link` anchors.
pub fn attach_links(document: &Document, window: &Window) -> Result<()> {
    for link in select_all::<Element>(document, ".nav-link") {
        let document = document.clone();
        let window = window.clone();
        let target = link.clone();
        listen(&link, "click", move |event| {
            event.prevent_default();
            let Some(href) = target.get_attribute("href") else {
                return;
            };
            let Some(section) = select::<HtmlElement>(&document, &href) else {
                debug!("Nav target {} not found", href);
                return;
            };
            let nav_height = select::<HtmlElement>(&document, ".navbar")
                .map(|navbar| navbar.offset_height() as f64)
                .unwrap_or(0.0);
            smooth_scroll_to(&window, nav_target_top(section.offset_top() as f64, nav_height));
        })?;
    }
    Ok(())
}

/// Mobile menu toggle. Following a nav link closes the menu.
pub fn attach_menu(document: &Document) -> Result<()> {
    let (Some(hamburger), Some(menu)) = (
        select::<Element>(document, ".hamburger"),
        select::<Element>(document, ".nav-menu"),
    ) else {
        debug!("No mobile menu on this page");
        return Ok(());
    };

    {
        let hamburger_ref = hamburger.clone();
        let menu = menu.clone();
        listen(&hamburger, "click", move |_| {
            let _ = hamburger_ref.class_list().toggle(ACTIVE);
            let _ = menu.class_list().toggle(ACTIVE);
        })?;
    }

    for link in select_all::<Element>(document, ".nav-link") {
        let hamburger = hamburger.clone();
        let menu = menu.clone();
        listen(&link, "click", move |_| {
            let _ = hamburger.class_list().remove_1(ACTIVE);
            let _ = menu.class_list().remove_1(ACTIVE);
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_sits_below_navbar() {
        assert_eq!(nav_target_top(1200.0, 80.0), 1120.0);
        assert_eq!(nav_target_top(0.0, 0.0), 0.0);
    }
}
