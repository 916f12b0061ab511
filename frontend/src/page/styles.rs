use web_sys::Document;

use crate::error::{EnhanceError, Result};

pub const STYLE_ELEMENT_ID: &str = "chronicle-styles";

/// Keyframes and mobile menu layout the page stylesheet doesn't carry.
pub const STYLES: &str = r#"
    @keyframes fadeInUp {
        from {
            opacity: 0;
            transform: translateY(30px);
        }
        to {
            opacity: 1;
            transform: translateY(0);
        }
    }

    @keyframes pulse {
        0% { transform: scale(1); }
        50% { transform: scale(1.05); }
        100% { transform: scale(1); }
    }

    .nav-menu.active {
        display: flex;
        flex-direction: column;
        position: absolute;
        top: 100%;
        left: 0;
        width: 100%;
        background: rgba(15, 15, 35, 0.95);
        backdrop-filter: blur(20px);
        padding: 1rem;
        border-top: 1px solid var(--border-color);
    }

    @media (max-width: 768px) {
        .nav-menu {
            display: none;
        }
    }
"#;

/// Appends the extra stylesheet to `<head>`. Injecting twice is a no-op.
pub fn inject(document: &Document) -> Result<()> {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(());
    }
    let head = document.head().ok_or(EnhanceError::NoDocument)?;
    let style = document.create_element("style")?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(STYLES));
    head.append_child(&style)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_defines_animations_used_by_the_page() {
        assert!(STYLES.contains("@keyframes fadeInUp"));
        assert!(STYLES.contains("@keyframes pulse"));
        assert!(STYLES.contains(".nav-menu.active"));
    }
}
