//! Mobile navigation menu state.
//!
//! The open button, close button, overlay click, in-menu link clicks, and the
//! Escape key all funnel into [`MenuState::close`], which is idempotent.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Whether the slide-in mobile menu (and its overlay) is showing.
///
/// Rendering derives the `open` marker class on the panel and overlay, plus
/// the body scroll lock, from this single flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}
