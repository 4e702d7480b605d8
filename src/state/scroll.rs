//! Scroll sampling - last observed position and change detection.
//!
//! One sampler per engine instance. Each sample reads the host's current
//! scroll offset, reports whether the vertical position moved since the
//! previous sample, and stores the new value either way.
//!
//! Only the vertical offset participates in change detection: the
//! horizontal offset is stored for interface compatibility but nothing
//! downstream consumes it.

use crate::host::HostSurface;
use crate::types::ScrollOffset;

// =============================================================================
// Sample
// =============================================================================

/// Result of one scroll sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// The offset just read from the host.
    pub offset: ScrollOffset,
    /// Whether the vertical offset differs from the previous sample.
    pub changed: bool,
}

// =============================================================================
// ScrollSampler
// =============================================================================

/// Owns the last observed scroll position and produces change flags.
///
/// The changed flag is the sole input the scheduler uses to decide between
/// another tick and suspension.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollSampler {
    last: ScrollOffset,
}

impl ScrollSampler {
    /// Create a sampler at the un-scrolled origin.
    pub const fn new() -> Self {
        Self {
            last: ScrollOffset::ZERO,
        }
    }

    /// The last stored scroll position.
    pub const fn offset(&self) -> ScrollOffset {
        self.last
    }

    /// Read the host's scroll offset and update the stored position.
    ///
    /// Returns the new offset plus a changed flag. The stored position is
    /// updated regardless of whether it changed.
    pub fn sample<H: HostSurface>(&mut self, host: &mut H) -> Sample {
        let offset = host.read_scroll_offset();
        let changed = offset.y != self.last.y;
        self.last = offset;

        Sample { offset, changed }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::mock::MockHost;

    #[test]
    fn test_initial_offset_is_zero() {
        let sampler = ScrollSampler::new();
        assert_eq!(sampler.offset(), ScrollOffset::ZERO);
    }

    #[test]
    fn test_first_sample_at_origin_is_unchanged() {
        let mut host = MockHost::new();
        let mut sampler = ScrollSampler::new();

        // Host starts at origin, sampler starts at origin - no movement
        let sample = sampler.sample(&mut host);
        assert!(!sample.changed);
        assert_eq!(sample.offset, ScrollOffset::ZERO);
    }

    #[test]
    fn test_vertical_movement_is_detected() {
        let mut host = MockHost::new();
        let mut sampler = ScrollSampler::new();

        host.set_scroll_y(120.0);
        let sample = sampler.sample(&mut host);
        assert!(sample.changed);
        assert_eq!(sampler.offset().y, 120.0);

        // Same position again - stored but unchanged
        let sample = sampler.sample(&mut host);
        assert!(!sample.changed);
        assert_eq!(sampler.offset().y, 120.0);
    }

    #[test]
    fn test_horizontal_movement_is_stored_but_not_a_change() {
        let mut host = MockHost::new();
        let mut sampler = ScrollSampler::new();

        host.scroll.x = 50.0;
        let sample = sampler.sample(&mut host);

        assert!(!sample.changed); // vertical did not move
        assert_eq!(sampler.offset().x, 50.0); // still stored
    }

    #[test]
    fn test_scroll_back_to_origin_is_a_change() {
        let mut host = MockHost::new();
        let mut sampler = ScrollSampler::new();

        host.set_scroll_y(300.0);
        assert!(sampler.sample(&mut host).changed);

        host.set_scroll_y(0.0);
        assert!(sampler.sample(&mut host).changed);
        assert_eq!(sampler.offset(), ScrollOffset::ZERO);
    }
}
