//! Smooth scrolling to same-page sections, offset so the sticky header does
//! not cover the section heading.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

/// Height assumed for the header when it is not in the document.
const HEADER_FALLBACK_PX: f64 = 80.0;

/// Breathing room between the header's bottom edge and the section heading.
const ANCHOR_MARGIN_PX: f64 = 20.0;

/// Scroll position that puts `offset_top` just below the header.
fn scroll_target(offset_top: f64, header_height: f64) -> f64 {
    offset_top - header_height - ANCHOR_MARGIN_PX
}

/// Smooth-scrolls the window to the element with the given id. Missing
/// elements (section not on this page, header not mounted yet) are a no-op.
pub fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };
    let Some(target) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let header_height = document
        .get_element_by_id("site-header")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| el.offset_height() as f64)
        .unwrap_or(HEADER_FALLBACK_PX);

    let options = ScrollToOptions::new();
    options.set_top(scroll_target(target.offset_top() as f64, header_height));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_sits_below_header_with_margin() {
        assert_eq!(scroll_target(500.0, 64.0), 416.0);
        assert_eq!(scroll_target(500.0, HEADER_FALLBACK_PX), 400.0);
    }

    #[test]
    fn target_near_page_top_can_go_negative() {
        // The browser clamps negative scroll positions itself.
        assert_eq!(scroll_target(50.0, 80.0), -50.0);
    }
}
