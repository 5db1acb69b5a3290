//! FAQ accordion state.
//!
//! DESIGN
//! ======
//! Open-ness is an explicit `Option<usize>` rather than an inference from the
//! rendered content height, so at most one item can be open at a time by
//! construction. The measured content height is used only to size the
//! expansion, never to decide logical state.

#[cfg(test)]
#[path = "faq_test.rs"]
mod faq_test;

/// Which accordion item, if any, is expanded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaqState {
    pub open: Option<usize>,
}

impl FaqState {
    /// Click behavior for item `index`: clicking the open item closes it,
    /// clicking any other item opens it and implicitly closes the rest.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}
