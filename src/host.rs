//! Host surface abstraction.
//!
//! The engine never touches a document directly. Everything it needs from
//! the outside world - element lookup, geometry reads, style writes, frame
//! scheduling, signal subscriptions - goes through the [`HostSurface`]
//! trait, so the same engine runs against a real DOM-like surface or an
//! in-memory test double.
//!
//! Delivery is explicit rather than closure-based: when a scheduled frame
//! fires the host calls `Engine::tick`, and when a watched signal fires the
//! host calls `Engine::handle_signal`.

use crate::types::{BoxMeasure, ScrollOffset, SignalSet, Size, TransformProperty};

/// Class selector used when the caller does not name a target.
pub const DEFAULT_SELECTOR: &str = ".scrollax";

/// Data attribute carrying the per-element stacking hint.
pub const Z_INDEX_ATTRIBUTE: &str = "data-scrollax-zindex";

// =============================================================================
// Handles
// =============================================================================

/// Opaque handle to a host-surface visual node.
///
/// The host mints these; the engine only stores and passes them back. Two
/// handles are the same element iff they compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementHandle(u64);

impl ElementHandle {
    /// Wrap a host-chosen id.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The host-chosen id.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Identifier of a scheduled frame, so a pending tick can be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameToken(u64);

impl FrameToken {
    /// Wrap a host-chosen id.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The host-chosen id.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

// =============================================================================
// Targets
// =============================================================================

/// Which elements the engine should track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Resolve a selector on the host surface.
    Selector(String),
    /// Track these handles directly, in the given order.
    Handles(Vec<ElementHandle>),
}

impl Default for Target {
    fn default() -> Self {
        Target::Selector(DEFAULT_SELECTOR.to_string())
    }
}

impl From<&str> for Target {
    fn from(selector: &str) -> Self {
        Target::Selector(selector.to_string())
    }
}

impl From<Vec<ElementHandle>> for Target {
    fn from(handles: Vec<ElementHandle>) -> Self {
        Target::Handles(handles)
    }
}

impl From<ElementHandle> for Target {
    fn from(handle: ElementHandle) -> Self {
        Target::Handles(vec![handle])
    }
}

/// The frame override: a shared containing element for every tracked
/// element, instead of each element's immediate container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameTarget {
    /// Resolve a selector on the host surface.
    Selector(String),
    /// Use this handle directly.
    Handle(ElementHandle),
}

impl From<&str> for FrameTarget {
    fn from(selector: &str) -> Self {
        FrameTarget::Selector(selector.to_string())
    }
}

impl From<ElementHandle> for FrameTarget {
    fn from(handle: ElementHandle) -> Self {
        FrameTarget::Handle(handle)
    }
}

// =============================================================================
// HostSurface
// =============================================================================

/// The collaborator interface the engine consumes.
///
/// Contract notes for implementors:
/// - `measure_box` positions are relative to the document origin
///   (un-scrolled coordinates), independent of the current scroll offset.
/// - `read_scroll_offset` should prefer a root-element scroll value and
///   fall back to a window-level offset.
/// - When a frame scheduled via `schedule_frame` fires, call
///   `Engine::tick`. When a signal in the watched set fires, call
///   `Engine::handle_signal` with its kind. Watch requests are cumulative;
///   unwatch removes the given kinds.
/// - `watch_signals` with `passive = true` asks for passive delivery on the
///   kinds where the surface supports it (scroll and touch-move).
pub trait HostSurface {
    /// Resolve a selector to every matching element, in surface order.
    fn query_selector_all(&mut self, selector: &str) -> Vec<ElementHandle>;

    /// Resolve a selector to the first matching element.
    fn query_selector(&mut self, selector: &str) -> Option<ElementHandle>;

    /// The element's immediate container, if it has one.
    fn query_parent(&mut self, element: ElementHandle) -> Option<ElementHandle>;

    /// Read an element's position and dimension sources.
    fn measure_box(&mut self, element: ElementHandle) -> BoxMeasure;

    /// The element's full inline style declaration text.
    fn read_inline_style(&mut self, element: ElementHandle) -> String;

    /// Replace the element's full inline style declaration text.
    fn write_inline_style(&mut self, element: ElementHandle, style: &str);

    /// Read one attribute value, `None` when absent.
    fn read_attribute(&mut self, element: ElementHandle, name: &str) -> Option<String>;

    /// Current scroll position of the tracked surface.
    fn read_scroll_offset(&mut self) -> ScrollOffset;

    /// Current viewport size.
    fn measure_viewport(&mut self) -> Size;

    /// Current page (full document) size.
    fn measure_page(&mut self) -> Size;

    /// Schedule one frame callback; the host will call `Engine::tick`.
    fn schedule_frame(&mut self) -> FrameToken;

    /// Cancel a frame that has not fired yet.
    fn cancel_frame(&mut self, token: FrameToken);

    /// Start delivering these signal kinds to `Engine::handle_signal`.
    fn watch_signals(&mut self, signals: SignalSet, passive: bool);

    /// Stop delivering these signal kinds.
    fn unwatch_signals(&mut self, signals: SignalSet);

    /// Which transform property this surface accepts.
    fn probe_transform_property(&mut self) -> TransformProperty;

    /// Whether passive listener registration is honored.
    fn supports_passive_listeners(&mut self) -> bool;

    /// Write the transform-capable style property directly.
    fn write_transform(
        &mut self,
        element: ElementHandle,
        property: TransformProperty,
        value: &str,
    );

    /// Resolve a tracking target to its ordered element list.
    ///
    /// Selector targets go through the surface's query machinery; direct
    /// handle targets are returned as given.
    fn query_elements(&mut self, target: &Target) -> Vec<ElementHandle> {
        match target {
            Target::Selector(selector) => self.query_selector_all(selector),
            Target::Handles(handles) => handles.clone(),
        }
    }
}

// =============================================================================
// Mock host (test support)
// =============================================================================


// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::mock::MockHost;
    use super::*;

    #[test]
    fn test_element_handle_round_trip() {
        let handle = ElementHandle::new(42);
        assert_eq!(handle.raw(), 42);
        assert_eq!(handle, ElementHandle::new(42));
        assert_ne!(handle, ElementHandle::new(43));
    }

    #[test]
    fn test_default_target_is_class_selector() {
        match Target::default() {
            Target::Selector(s) => assert_eq!(s, DEFAULT_SELECTOR),
            Target::Handles(_) => panic!("default target should be a selector"),
        }
    }

    #[test]
    fn test_target_conversions() {
        assert_eq!(Target::from(".hero"), Target::Selector(".hero".to_string()));

        let handle = ElementHandle::new(7);
        assert_eq!(Target::from(handle), Target::Handles(vec![handle]));
    }

    #[test]
    fn test_query_elements_selector_path() {
        let mut host = MockHost::new();
        let a = host.add_element(BoxMeasure::new(0.0, 0.0));
        let b = host.add_element(BoxMeasure::new(100.0, 0.0));
        host.register_selector(".scrollax", &[a, b]);

        let found = host.query_elements(&Target::default());
        assert_eq!(found, vec![a, b]);
    }

    #[test]
    fn test_query_elements_handle_path() {
        let mut host = MockHost::new();
        let a = host.add_element(BoxMeasure::new(0.0, 0.0));

        // Direct handles bypass selector resolution entirely
        let found = host.query_elements(&Target::Handles(vec![a]));
        assert_eq!(found, vec![a]);
    }

    #[test]
    fn test_query_elements_unknown_selector_is_empty() {
        let mut host = MockHost::new();
        assert!(host.query_elements(&Target::from(".missing")).is_empty());
    }

    #[test]
    fn test_mock_frame_bookkeeping() {
        let mut host = MockHost::new();

        let t0 = host.schedule_frame();
        let t1 = host.schedule_frame();
        assert_eq!(host.pending_frames(), 2);
        assert_eq!(host.schedule_count, 2);

        host.cancel_frame(t0);
        assert_eq!(host.pending_frames(), 1);
        assert_eq!(host.cancelled, vec![t0]);

        assert_eq!(host.fire_frame(), Some(t1));
        assert_eq!(host.pending_frames(), 0);
        assert_eq!(host.fire_frame(), None);
    }

    #[test]
    fn test_mock_watch_bookkeeping() {
        let mut host = MockHost::new();

        host.watch_signals(SignalSet::SCROLL | SignalSet::TOUCH_MOVE, true);
        assert!(host.watched.contains(SignalSet::SCROLL));

        host.unwatch_signals(SignalSet::SCROLL);
        assert!(!host.watched.contains(SignalSet::SCROLL));
        assert!(host.watched.contains(SignalSet::TOUCH_MOVE));
    }
}
