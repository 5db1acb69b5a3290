use super::*;

#[test]
fn progress_is_zero_at_top() {
    assert_eq!(scroll_progress(0.0, 3000.0, 800.0), 0.0);
}

#[test]
fn progress_is_one_hundred_at_bottom() {
    assert_eq!(scroll_progress(2200.0, 3000.0, 800.0), 100.0);
}

#[test]
fn progress_is_proportional_in_between() {
    assert_eq!(scroll_progress(1100.0, 3000.0, 800.0), 50.0);
}

#[test]
fn progress_clamps_past_the_bottom() {
    // Overscroll/bounce can report positions beyond the document height.
    assert_eq!(scroll_progress(2500.0, 3000.0, 800.0), 100.0);
    assert_eq!(scroll_progress(-50.0, 3000.0, 800.0), 0.0);
}

#[test]
fn page_no_taller_than_viewport_reports_zero_not_nan() {
    let progress = scroll_progress(0.0, 800.0, 800.0);
    assert_eq!(progress, 0.0);
    assert!(!progress.is_nan());

    assert_eq!(scroll_progress(10.0, 600.0, 800.0), 0.0);
}

#[test]
fn progress_stays_in_range_for_arbitrary_positions() {
    for scroll_y in [-100.0, 0.0, 1.0, 500.0, 10_000.0] {
        for height in [0.0, 799.0, 800.0, 801.0, 5000.0] {
            let progress = scroll_progress(scroll_y, height, 800.0);
            assert!((0.0..=100.0).contains(&progress), "{scroll_y} {height} -> {progress}");
        }
    }
}

#[test]
fn indicator_width_style_formats_percent() {
    assert_eq!(indicator_width_style(0.0), "width: 0%");
    assert_eq!(indicator_width_style(62.5), "width: 62.5%");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_progress_is_zero_without_a_browser() {
    assert_eq!(read_progress(), 0.0);
}
