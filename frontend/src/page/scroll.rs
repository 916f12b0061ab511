use log::debug;
use web_sys::{Document, Element, HtmlElement, Window};

use super::{listen, select, smooth_scroll_to};
use crate::error::Result;

pub fn scroll_top_visible(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Hero translation for the current scroll position, or `None` once the
/// hero has scrolled out of view and should be left alone.
pub fn parallax_offset(scrolled: f64, viewport_height: f64, rate: f64) -> Option<f64> {
    // + 0.0 turns -0 into 0
    (scrolled < viewport_height).then(|| scrolled * rate + 0.0)
}

fn scroll_offset(window: &Window) -> f64 {
    window.page_y_offset().unwrap_or(0.0)
}

pub fn attach_scroll_top(document: &Document, window: &Window, threshold: f64) -> Result<()> {
    let Some(button) = document.get_element_by_id("scroll-top") else {
        debug!("No #scroll-top button");
        return Ok(());
    };

    {
        let button = button.clone();
        let window_ref = window.clone();
        listen(window, "scroll", move |_| toggle_visible(&button, &window_ref, threshold))?;
    }

    let window = window.clone();
    listen(&button, "click", move |_| smooth_scroll_to(&window, 0.0))
}

fn toggle_visible(button: &Element, window: &Window, threshold: f64) {
    let classes = button.class_list();
    let _ = if scroll_top_visible(scroll_offset(window), threshold) {
        classes.add_1("visible")
    } else {
        classes.remove_1("visible")
    };
}

pub fn attach_parallax(document: &Document, window: &Window, rate: f64) -> Result<()> {
    let Some(hero) = select::<HtmlElement>(document, ".hero") else {
        debug!("No .hero section, parallax disabled");
        return Ok(());
    };

    let window_ref = window.clone();
    listen(window, "scroll", move |_| {
        let viewport_height = window_ref
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0);
        if let Some(offset) = parallax_offset(scroll_offset(&window_ref), viewport_height, rate) {
            let _ = hero
                .style()
                .set_property("transform", &format!("translate3d(0, {}px, 0)", offset));
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_shows_past_threshold() {
        assert!(!scroll_top_visible(0.0, 300.0));
        assert!(!scroll_top_visible(300.0, 300.0));
        assert!(scroll_top_visible(301.0, 300.0));
    }

    #[test]
    fn parallax_moves_at_half_speed_inside_viewport() {
        assert_eq!(parallax_offset(200.0, 800.0, -0.5), Some(-100.0));
        assert_eq!(parallax_offset(800.0, 800.0, -0.5), None);
    }

    #[test]
    fn parallax_at_top_is_positive_zero() {
        let offset = parallax_offset(0.0, 800.0, -0.5).unwrap();
        assert_eq!(format!("{}", offset), "0");
    }
}
