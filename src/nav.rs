// Navigation and page chrome: anchor scrolling, the to-top action,
// loader dismissal, and service card selection.
// See steering.md: Interaction Rules

use crate::types::Directive;

/// Handles one-off interaction events that need no internal state.
#[derive(Debug)]
pub struct NavController {
    loader_delay_ms: u32,
}

impl NavController {
    pub fn new(loader_delay_ms: u32) -> Self {
        NavController { loader_delay_ms }
    }

    /// Window load: dismiss the page loader after the configured delay.
    pub fn on_loaded(&self) -> Directive {
        Directive::DismissLoader {
            delay_ms: self.loader_delay_ms,
        }
    }

    /// In-page anchor click. A missing target is a silent no-op; an open
    /// mobile nav panel closes before the scroll.
    pub fn on_anchor_click(
        &self,
        fragment: &str,
        target_exists: bool,
        nav_open: bool,
    ) -> Vec<Directive> {
        if !target_exists {
            return Vec::new();
        }
        let mut directives = Vec::with_capacity(2);
        if nav_open {
            directives.push(Directive::CloseNav);
        }
        directives.push(Directive::ScrollToFragment {
            fragment: fragment.to_string(),
        });
        directives
    }

    /// To-top button click. Idempotent.
    pub fn on_scroll_top_click(&self) -> Directive {
        Directive::ScrollToTop
    }

    /// Service card click: single-select across the row.
    pub fn on_service_select(&self, index: usize) -> Directive {
        Directive::SetActiveService { index }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav() -> NavController {
        NavController::new(500)
    }

    #[test]
    fn loaded_schedules_loader_dismissal() {
        assert_eq!(nav().on_loaded(), Directive::DismissLoader { delay_ms: 500 });
    }

    #[test]
    fn missing_anchor_target_is_silent() {
        assert!(nav().on_anchor_click("#gone", false, false).is_empty());
        assert!(nav().on_anchor_click("#gone", false, true).is_empty());
    }

    #[test]
    fn anchor_click_scrolls_to_fragment() {
        let directives = nav().on_anchor_click("#contact", true, false);
        assert_eq!(
            directives,
            vec![Directive::ScrollToFragment {
                fragment: "#contact".to_string()
            }]
        );
    }

    #[test]
    fn open_nav_closes_before_scrolling() {
        let directives = nav().on_anchor_click("#about", true, true);
        assert_eq!(directives[0], Directive::CloseNav);
        assert!(matches!(
            directives[1],
            Directive::ScrollToFragment { .. }
        ));
    }

    #[test]
    fn service_select_marks_index() {
        assert_eq!(
            nav().on_service_select(2),
            Directive::SetActiveService { index: 2 }
        );
    }
}
