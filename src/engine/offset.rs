//! Offset computation - pure interpolation from scroll position to pixels.
//!
//! No host access happens here. Callers hand in the captured baseline,
//! the frame's current geometry, and the three scalar inputs (scroll
//! position, viewport height, page height); they get back a vertical
//! translation in pixels. Keeping this free of side effects is what makes
//! the math testable with plain numbers.
//!
//! The model: an element travels past its frame while the frame crosses
//! the viewport. The travel distance is the overlap between element and
//! frame heights, spread linearly over the frame's visible transit, and
//! centered so the offset is zero when the frame's midpoint sits at the
//! viewport's midpoint.

use super::baseline::Baseline;
use crate::types::BoxMeasure;

// =============================================================================
// Frame geometry
// =============================================================================

/// Current geometry of an element's frame (its container), re-measured on
/// every pass so layout shifts between ticks are picked up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameGeometry {
    /// Document-origin top edge.
    pub top: f64,
    /// Resolved height from the measurement fallback chain.
    pub height: f64,
}

impl FrameGeometry {
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Build from a raw box measurement.
    pub fn from_measure(measure: &BoxMeasure) -> Self {
        Self {
            top: measure.top,
            height: measure.resolved_height(),
        }
    }

    /// Document-origin bottom edge.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

// =============================================================================
// Visibility
// =============================================================================

/// Whether any part of the frame is inside the current viewport window.
///
/// Touching at an edge counts as visible; an element only skips its
/// update once the frame is strictly past either edge.
pub fn is_in_viewport(frame: &FrameGeometry, scroll_y: f64, viewport_height: f64) -> bool {
    !(frame.bottom() < scroll_y || frame.top > scroll_y + viewport_height)
}

// =============================================================================
// Travel window classification
// =============================================================================

/// How much viewport travel a frame actually gets.
///
/// Frames near the document edges never cross the full viewport: a frame
/// starting above the fold is already visible at scroll zero, and a frame
/// near the bottom is still visible when the page runs out. Both get a
/// shortened window so the offset still spans its full range over the
/// travel that exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelWindow {
    /// Frame top is above one viewport height; the window shrinks to the
    /// frame's own top edge.
    TopClamped,
    /// Less than one viewport height of page remains below the frame;
    /// the window shrinks to the distance left.
    BottomClamped,
    /// Full viewport-height window.
    Unclamped,
}

/// Classify the travel window. The top clamp is checked first and wins
/// when a short page would satisfy both.
pub fn classify_window(frame: &FrameGeometry, viewport_height: f64, page_height: f64) -> TravelWindow {
    if frame.top < viewport_height {
        TravelWindow::TopClamped
    } else if page_height - frame.bottom() < viewport_height {
        TravelWindow::BottomClamped
    } else {
        TravelWindow::Unclamped
    }
}

// =============================================================================
// Interpolation
// =============================================================================

/// Vertical translation for one element at the given scroll position.
///
/// All three window shapes share one formula: the scroll position plus
/// the travel window, anchored at the frame top, scaled by overlap over
/// (frame height + window), re-centered by half the overlap. The bottom
/// clamp only shortens the denominator; its anchor term keeps the full
/// viewport height so the offset stays continuous at the boundary.
///
/// A degenerate window (frame height + window summing to zero) divides
/// by zero; callers treat the resulting non-finite value as a skipped
/// element rather than writing it out.
pub fn compute_translate_y(
    baseline: &Baseline,
    frame: &FrameGeometry,
    scroll_y: f64,
    viewport_height: f64,
    page_height: f64,
) -> f64 {
    let overlap = baseline.height - frame.height;

    match classify_window(frame, viewport_height, page_height) {
        TravelWindow::TopClamped => {
            let window = frame.top;
            -(scroll_y + window - frame.top) * (overlap / (frame.height + window)) + overlap / 2.0
        }
        TravelWindow::BottomClamped => {
            let window = page_height - frame.bottom();
            -(scroll_y + viewport_height - frame.top) * (overlap / (frame.height + window))
                + overlap / 2.0
        }
        TravelWindow::Unclamped => {
            -(scroll_y + viewport_height - frame.top) * (overlap / (frame.height + viewport_height))
                + overlap / 2.0
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 800.0;
    const PAGE: f64 = 5000.0;

    fn baseline_with_height(height: f64) -> Baseline {
        Baseline {
            height,
            ..Baseline::default()
        }
    }

    // ===== Window classification =====

    #[test]
    fn frame_above_the_fold_is_top_clamped() {
        let frame = FrameGeometry::new(300.0, 500.0);
        assert_eq!(classify_window(&frame, VIEWPORT, PAGE), TravelWindow::TopClamped);
    }

    #[test]
    fn frame_near_page_bottom_is_bottom_clamped() {
        // 5000 - (4400 + 500) = 100 of page left below the frame
        let frame = FrameGeometry::new(4400.0, 500.0);
        assert_eq!(classify_window(&frame, VIEWPORT, PAGE), TravelWindow::BottomClamped);
    }

    #[test]
    fn mid_page_frame_is_unclamped() {
        let frame = FrameGeometry::new(2000.0, 500.0);
        assert_eq!(classify_window(&frame, VIEWPORT, PAGE), TravelWindow::Unclamped);
    }

    #[test]
    fn top_clamp_wins_on_short_pages() {
        // Short page: both conditions hold, the top clamp is taken
        let frame = FrameGeometry::new(100.0, 500.0);
        assert_eq!(classify_window(&frame, VIEWPORT, 900.0), TravelWindow::TopClamped);
    }

    #[test]
    fn exact_viewport_distance_is_unclamped() {
        // Strict comparisons: exactly one viewport of travel on each side
        let frame = FrameGeometry::new(VIEWPORT, 500.0);
        let page = frame.bottom() + VIEWPORT;
        assert_eq!(classify_window(&frame, VIEWPORT, page), TravelWindow::Unclamped);
    }

    // ===== Visibility =====

    #[test]
    fn frame_inside_viewport_is_visible() {
        let frame = FrameGeometry::new(1000.0, 500.0);
        assert!(is_in_viewport(&frame, 900.0, VIEWPORT));
    }

    #[test]
    fn frame_scrolled_past_is_not_visible() {
        let frame = FrameGeometry::new(100.0, 200.0); // bottom at 300
        assert!(!is_in_viewport(&frame, 400.0, VIEWPORT));
    }

    #[test]
    fn frame_below_viewport_is_not_visible() {
        let frame = FrameGeometry::new(2000.0, 500.0);
        assert!(!is_in_viewport(&frame, 0.0, VIEWPORT));
    }

    #[test]
    fn edge_touching_frames_are_visible() {
        // Bottom exactly at the scroll line
        let frame = FrameGeometry::new(100.0, 200.0);
        assert!(is_in_viewport(&frame, 300.0, VIEWPORT));

        // Top exactly at the viewport's lower edge
        let frame = FrameGeometry::new(800.0, 200.0);
        assert!(is_in_viewport(&frame, 0.0, VIEWPORT));
    }

    // ===== Interpolation values =====

    #[test]
    fn top_clamped_frame_at_scroll_zero_sits_at_half_overlap() {
        // Element 1000 tall in a 500-tall frame starting at the very top.
        // The window collapses to zero, so the scroll term vanishes and
        // only the centering term remains.
        let baseline = baseline_with_height(1000.0);
        let frame = FrameGeometry::new(0.0, 500.0);

        let y = compute_translate_y(&baseline, &frame, 0.0, VIEWPORT, PAGE);
        assert_eq!(y, 250.0);
    }

    #[test]
    fn top_clamped_frame_ramps_down_as_scroll_grows() {
        let baseline = baseline_with_height(1000.0);
        let frame = FrameGeometry::new(0.0, 500.0);

        // window = 0 makes the slope overlap / frame.height = 1 here
        let y = compute_translate_y(&baseline, &frame, 100.0, VIEWPORT, PAGE);
        assert_eq!(y, 150.0);
    }

    #[test]
    fn unclamped_mid_page_value() {
        // Element 1000 tall, frame 500 tall at top 1000, scrolled to 400:
        // -(400 + 800 - 1000) * (500 / 1300) + 250 = 173.0769...
        let baseline = baseline_with_height(1000.0);
        let frame = FrameGeometry::new(1000.0, 500.0);

        let y = compute_translate_y(&baseline, &frame, 400.0, VIEWPORT, PAGE);
        assert!((y - 173.07692307692307).abs() < 1e-9);
    }

    #[test]
    fn offset_is_zero_when_frame_midpoint_crosses_viewport_midpoint() {
        let baseline = baseline_with_height(1000.0);
        let frame = FrameGeometry::new(1000.0, 500.0);

        // Midpoints align when scroll + 400 == 1250
        let y = compute_translate_y(&baseline, &frame, 850.0, VIEWPORT, PAGE);
        assert!(y.abs() < 1e-9);
    }

    #[test]
    fn offset_is_antisymmetric_around_the_midpoint() {
        let baseline = baseline_with_height(1000.0);
        let frame = FrameGeometry::new(1000.0, 500.0);

        let before = compute_translate_y(&baseline, &frame, 850.0 - 130.0, VIEWPORT, PAGE);
        let after = compute_translate_y(&baseline, &frame, 850.0 + 130.0, VIEWPORT, PAGE);
        assert!((before + after).abs() < 1e-9);
    }

    #[test]
    fn shorter_element_moves_against_the_scroll() {
        // Negative overlap flips the direction of travel
        let baseline = baseline_with_height(300.0);
        let frame = FrameGeometry::new(1000.0, 500.0);

        let early = compute_translate_y(&baseline, &frame, 400.0, VIEWPORT, PAGE);
        let late = compute_translate_y(&baseline, &frame, 1200.0, VIEWPORT, PAGE);
        assert!(early < 0.0);
        assert!(late > 0.0);
        assert!(late > early);
    }

    #[test]
    fn bottom_clamp_shortens_denominator_but_keeps_anchor() {
        // Page 2000, frame at 1100 height 500: bottom 1600, only 400 of
        // page left, so the window is 400 while the anchor term keeps the
        // full viewport height:
        // -(900 + 800 - 1100) * (500 / 900) + 250 = -83.33...
        let baseline = baseline_with_height(1000.0);
        let frame = FrameGeometry::new(1100.0, 500.0);

        let y = compute_translate_y(&baseline, &frame, 900.0, VIEWPORT, 2000.0);
        assert!((y - (-83.33333333333333)).abs() < 1e-6);
    }

    // ===== Continuity across clamp boundaries =====

    #[test]
    fn offset_is_continuous_at_the_top_clamp_boundary() {
        let baseline = baseline_with_height(1000.0);
        let scroll_y = 600.0;

        let just_unclamped = FrameGeometry::new(VIEWPORT, 500.0);
        let just_clamped = FrameGeometry::new(VIEWPORT - 0.001, 500.0);

        let a = compute_translate_y(&baseline, &just_unclamped, scroll_y, VIEWPORT, PAGE);
        let b = compute_translate_y(&baseline, &just_clamped, scroll_y, VIEWPORT, PAGE);
        assert!((a - b).abs() < 0.01, "top boundary jump: {a} vs {b}");
    }

    #[test]
    fn offset_is_continuous_at_the_bottom_clamp_boundary() {
        let baseline = baseline_with_height(1000.0);
        let frame = FrameGeometry::new(1000.0, 500.0);
        let scroll_y = 900.0;

        // Exactly one viewport below the frame vs a hair less
        let page_unclamped = frame.bottom() + VIEWPORT;
        let page_clamped = page_unclamped - 0.001;

        let a = compute_translate_y(&baseline, &frame, scroll_y, VIEWPORT, page_unclamped);
        let b = compute_translate_y(&baseline, &frame, scroll_y, VIEWPORT, page_clamped);
        assert!((a - b).abs() < 0.01, "bottom boundary jump: {a} vs {b}");
    }

    // ===== Degenerate input =====

    #[test]
    fn zero_height_frame_at_page_top_is_non_finite() {
        // window and frame height both zero: the division has no answer,
        // and the caller skips the write instead
        let baseline = baseline_with_height(0.0);
        let frame = FrameGeometry::new(0.0, 0.0);

        let y = compute_translate_y(&baseline, &frame, 50.0, VIEWPORT, PAGE);
        assert!(!y.is_finite());
    }

    #[test]
    fn equal_heights_mean_no_movement() {
        // Zero overlap: the element exactly fills its frame
        let baseline = baseline_with_height(500.0);
        let frame = FrameGeometry::new(1000.0, 500.0);

        for scroll_y in [300.0, 850.0, 1400.0] {
            let y = compute_translate_y(&baseline, &frame, scroll_y, VIEWPORT, PAGE);
            assert_eq!(y, 0.0);
        }
    }
}
