//! Scroll progress math and the current-position readback.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Percent of the page scrolled, clamped to `[0, 100]`.
///
/// Pages no taller than the viewport have no scrollable distance; they
/// report `0.0` rather than dividing by zero.
#[must_use]
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Width style for the indicator bar at `progress` percent.
#[must_use]
pub fn indicator_width_style(progress: f64) -> String {
    format!("width: {progress}%")
}

/// Read the live scroll progress from the window and document.
#[must_use]
pub fn read_progress() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return 0.0;
        };
        let Some(root) = window.document().and_then(|d| d.document_element()) else {
            return 0.0;
        };
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let viewport = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        scroll_progress(scroll_y, f64::from(root.scroll_height()), viewport)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
