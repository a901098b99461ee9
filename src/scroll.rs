//! Scroll-position policy: pure decisions driven by the vertical scroll
//! offset, kept free of DOM types so they are testable without a document.

/// Scroll offset past which the navbar switches to its raised shadow.
pub const NAVBAR_SHADOW_THRESHOLD_PX: f64 = 50.0;

/// Scroll offset past which the scroll-to-top button becomes visible.
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 300.0;

/// How far below the navbar a section may still sit while being treated
/// as the section in view.
pub const ACTIVE_SECTION_LOOKAHEAD_PX: f64 = 100.0;

pub const NAVBAR_SHADOW_RESTING: &str = "0 4px 6px rgba(0, 0, 0, 0.1)";
pub const NAVBAR_SHADOW_RAISED: &str = "0 4px 12px rgba(0, 0, 0, 0.15)";

/// Box shadow the navbar should carry at the given scroll offset.
pub fn navbar_shadow(scroll_y: f64) -> &'static str {
    if scroll_y > NAVBAR_SHADOW_THRESHOLD_PX {
        NAVBAR_SHADOW_RAISED
    } else {
        NAVBAR_SHADOW_RESTING
    }
}

/// Whether the scroll-to-top button is shown at the given scroll offset.
pub fn scroll_top_button_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD_PX
}

/// Scroll destination for an in-page anchor: the target's top, adjusted
/// so the fixed navbar does not cover it.
pub fn anchor_target_offset(section_top: f64, nav_height: f64) -> f64 {
    section_top - nav_height
}

/// Index of the section currently in view, given each section's document
/// top offset in document order. A section counts as reached once its top,
/// less the navbar height and the lookahead, is at or above the scroll
/// offset; the last reached section wins. `None` above all sections.
pub fn active_section_index(tops: &[f64], scroll_y: f64, nav_height: f64) -> Option<usize> {
    let mut current = None;
    for (index, top) in tops.iter().enumerate() {
        if scroll_y >= top - nav_height - ACTIVE_SECTION_LOOKAHEAD_PX {
            current = Some(index);
        }
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_shadow_boundary_is_fifty() {
        assert_eq!(navbar_shadow(0.0), NAVBAR_SHADOW_RESTING);
        assert_eq!(navbar_shadow(50.0), NAVBAR_SHADOW_RESTING);
        assert_eq!(navbar_shadow(51.0), NAVBAR_SHADOW_RAISED);
    }

    #[test]
    fn scroll_top_button_boundary_is_three_hundred() {
        assert!(!scroll_top_button_visible(0.0));
        assert!(!scroll_top_button_visible(300.0));
        assert!(scroll_top_button_visible(300.1));
        assert!(scroll_top_button_visible(301.0));
    }

    #[test]
    fn anchor_offset_subtracts_nav_height() {
        assert_eq!(anchor_target_offset(800.0, 80.0), 720.0);
        assert_eq!(anchor_target_offset(0.0, 80.0), -80.0);
    }

    #[test]
    fn last_reached_section_wins() {
        let tops = [0.0, 800.0, 1600.0];
        // Second section is reached at 800 - 80 - 100 = 620.
        assert_eq!(active_section_index(&tops, 619.0, 80.0), Some(0));
        assert_eq!(active_section_index(&tops, 620.0, 80.0), Some(1));
        // Third at 1600 - 80 - 100 = 1420.
        assert_eq!(active_section_index(&tops, 1419.0, 80.0), Some(1));
        assert_eq!(active_section_index(&tops, 1420.0, 80.0), Some(2));
        assert_eq!(active_section_index(&tops, 5000.0, 80.0), Some(2));
    }

    #[test]
    fn no_section_active_above_the_first() {
        let tops = [500.0, 1200.0];
        assert_eq!(active_section_index(&tops, 0.0, 80.0), None);
        assert_eq!(active_section_index(&tops, 319.0, 80.0), None);
        assert_eq!(active_section_index(&tops, 320.0, 80.0), Some(0));
    }

    #[test]
    fn empty_section_list_has_no_active_section() {
        assert_eq!(active_section_index(&[], 1000.0, 80.0), None);
    }
}
