//! Color theme state shared by the desktop and mobile toggles.
//!
//! DESIGN
//! ======
//! Both toggle instances render from one `RwSignal<Theme>` provided via
//! context, so their icons can never disagree about the active preference.
//! Storage and document-root glue lives in `util::theme`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// The two-valued site theme. Absent stored preference means `Dark`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// The opposite theme.
    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Persisted storage value and document-root marker class.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Unknown strings are treated as unset.
    #[must_use]
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Whether the sun ("switch to light") icon is the visible one.
    ///
    /// Dark mode shows the sun, light mode shows the moon; the hidden icon
    /// carries the `hidden` class.
    #[must_use]
    pub fn shows_light_icon(self) -> bool {
        self == Self::Dark
    }
}
