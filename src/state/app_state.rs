//! Central `AppState` container.

use std::time::Duration;

use crate::catalog::RESULTS;
use crate::state::types::{ImageSlot, NavSection, PageMode, Rect4};
use crate::theme::Settings;

/// Interaction state of the Curate view.
///
/// Holds the page mode, the prompt, the curation flags, the menu and the clock.
/// Invariant: `loading` and `results_visible` are never both `true`.
#[derive(Debug)]
pub struct AppState {
    /// Which view is rendered.
    pub page: PageMode,
    /// Prompt text bound to the input field.
    pub input: String,
    /// Caret position inside `input`, counted in chars.
    pub caret: usize,
    /// `true` while the simulated curation delay is running.
    pub loading: bool,
    /// `true` once the latest curation completed.
    pub results_visible: bool,
    /// Whether the slide-in navigation menu is open.
    pub menu_open: bool,
    /// Highlighted entry in the navigation menu.
    pub menu_selected: usize,
    /// Formatted time of day shown in the footer.
    pub clock: String,

    // Curation coordination
    /// Generation of the submission whose completion may still apply.
    /// Bumped by every submission and by returning to the landing view.
    pub curation_generation: u64,
    /// Thumbnail source per result card, indexed like `catalog::RESULTS`.
    pub thumbnails: [ImageSlot; RESULTS.len()],

    // Landing page scrolling
    /// Vertical scroll offset of the landing page, in rows.
    pub landing_scroll: u16,
    /// Largest meaningful scroll offset, recorded by the renderer.
    pub landing_max_scroll: u16,
    /// Row offset of each navigation section, recorded by the renderer.
    pub landing_anchors: [u16; 3],

    // Results grid scrolling
    /// First visible row of result cards.
    pub results_scroll: u16,
    /// Largest card-row offset, recorded by the renderer for the current width.
    pub results_max_scroll: u16,

    // Hit-test rectangles recorded during rendering
    /// Menu icon in the landing header.
    pub menu_button_rect: Option<Rect4>,
    /// Back arrow in the input view header.
    pub back_button_rect: Option<Rect4>,
    /// Close control of the open menu.
    pub menu_close_rect: Option<Rect4>,
    /// Navigation entries of the open menu, in [`NavSection::ALL`] order.
    pub nav_rects: [Option<Rect4>; 3],

    /// Settings loaded at start-up.
    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl AppState {
    /// What: Construct the initial view state.
    ///
    /// Inputs:
    /// - `settings`: Loaded configuration (delay, clock format, keymap, theme).
    ///
    /// Output:
    /// - Landing view, empty prompt, all flags cleared, menu closed.
    #[must_use]
    pub const fn new(settings: Settings) -> Self {
        Self {
            page: PageMode::Landing,
            input: String::new(),
            caret: 0,
            loading: false,
            results_visible: false,
            menu_open: false,
            menu_selected: 0,
            clock: String::new(),
            curation_generation: 0,
            thumbnails: [ImageSlot::Primary; RESULTS.len()],
            landing_scroll: 0,
            landing_max_scroll: 0,
            landing_anchors: [0; 3],
            results_scroll: 0,
            results_max_scroll: 0,
            menu_button_rect: None,
            back_button_rect: None,
            menu_close_rect: None,
            nav_rects: [None; 3],
            settings,
        }
    }

    /// Configured curation delay.
    #[must_use]
    pub const fn curation_delay(&self) -> Duration {
        Duration::from_millis(self.settings.curation_delay_ms)
    }

    /// `true` when the landing page is scrolled to (or near) the top.
    #[must_use]
    pub const fn landing_at_top(&self) -> bool {
        self.landing_scroll < self.settings.scroll_top_threshold
    }

    /// Row offset of a navigation section as last rendered.
    #[must_use]
    pub const fn anchor_of(&self, section: NavSection) -> u16 {
        self.landing_anchors[section.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: The initial state is the landing view with every flag cleared.
    ///
    /// Inputs:
    /// - `AppState::default()`.
    ///
    /// Output:
    /// - Landing page, empty prompt, no loading/results/menu, primary thumbnails.
    fn default_state_is_landing_and_idle() {
        let app = AppState::default();
        assert_eq!(app.page, PageMode::Landing);
        assert!(app.input.is_empty());
        assert!(!app.loading);
        assert!(!app.results_visible);
        assert!(!app.menu_open);
        assert!(app.thumbnails.iter().all(|t| *t == ImageSlot::Primary));
        assert_eq!(app.curation_delay(), Duration::from_millis(2000));
        assert!(app.landing_at_top());
    }

    #[test]
    /// What: The scroll-top check uses the configured threshold as an exclusive bound.
    ///
    /// Inputs:
    /// - Threshold 3 with scroll offsets 2 and 3.
    ///
    /// Output:
    /// - At top for 2, not at top for 3.
    fn landing_at_top_respects_threshold() {
        let mut app = AppState::default();
        app.settings.scroll_top_threshold = 3;
        app.landing_scroll = 2;
        assert!(app.landing_at_top());
        app.landing_scroll = 3;
        assert!(!app.landing_at_top());
    }
}
