//! Header state driven by an injected scroll position
//!
//! The header swaps to its condensed style once the page scrolls past a small
//! threshold, and owns the mobile menu flag. The wasm layer feeds scroll
//! positions in; nothing here touches the browser.

/// Scroll offset in pixels past which the header is considered scrolled.
pub const SCROLL_THRESHOLD: f64 = 10.0;

#[derive(Debug, Default)]
pub struct HeaderState {
    scrolled: bool,
    menu_open: bool,
}

impl HeaderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Feed a scroll position; returns true when the scrolled flag changed,
    /// so callers only repaint on transitions.
    pub fn observe_scroll(&mut self, y: f64) -> bool {
        let scrolled = y > SCROLL_THRESHOLD;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Navigation always closes the mobile menu.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_flag_follows_threshold() {
        let mut header = HeaderState::new();
        assert!(!header.is_scrolled());

        assert!(header.observe_scroll(11.0));
        assert!(header.is_scrolled());

        // Same side of the threshold: no transition reported.
        assert!(!header.observe_scroll(400.0));
        assert!(header.is_scrolled());

        assert!(header.observe_scroll(0.0));
        assert!(!header.is_scrolled());
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut header = HeaderState::new();
        assert!(!header.observe_scroll(SCROLL_THRESHOLD));
        assert!(!header.is_scrolled());
    }

    #[test]
    fn menu_toggles_and_closes() {
        let mut header = HeaderState::new();
        assert!(header.toggle_menu());
        assert!(header.is_menu_open());
        assert!(!header.toggle_menu());

        header.toggle_menu();
        header.close_menu();
        assert!(!header.is_menu_open());

        // close is idempotent
        header.close_menu();
        assert!(!header.is_menu_open());
    }
}
