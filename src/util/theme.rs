//! Theme persistence and document-root glue.
//!
//! Reads the saved preference from `localStorage` and swaps the `dark` /
//! `light` marker class pair on the `<html>` element. Requires a browser
//! environment; non-hydrate builds no-op so native tests stay deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::theme::Theme;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "theme";

/// Read the stored theme preference, if any.
///
/// Absent key, denied storage, or an unrecognized value all read as unset;
/// callers fall back to [`Theme::default`] (dark).
#[must_use]
pub fn read_stored() -> Option<Theme> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
        Theme::from_stored(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the preference. Best effort; a denied write is silent.
pub fn persist(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Swap the marker class pair on `document.documentElement`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let classes = root.class_list();
            let _ = classes.remove_1(theme.flip().as_str());
            let _ = classes.add_1(theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
