use chrono::{Datelike, Local};
use web_sys::Document;

pub fn current_year() -> i32 {
    Local::now().year()
}

pub fn stamp(document: &Document) {
    if let Some(element) = document.get_element_by_id("current-year") {
        element.set_text_content(Some(&current_year().to_string()));
    }
}
