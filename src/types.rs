//! Core types for scrollax.
//!
//! These types define the vocabulary shared by every part of the engine:
//! geometry values read from the host surface, the scheduler's mode flag,
//! the resume-signal set, and the capabilities probed once at construction.

// =============================================================================
// Size
// =============================================================================

/// A width/height pair in CSS pixels.
///
/// Used for the viewport, the page, and element boxes. Values are `f64`
/// because hosts report fractional pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Zero size (the degraded value when no measurement source is available).
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

// =============================================================================
// ScrollOffset
// =============================================================================

/// A scroll position of the tracked surface, in CSS pixels.
///
/// Only the vertical offset drives the offset computation; the horizontal
/// offset is carried for interface compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollOffset {
    pub x: f64,
    pub y: f64,
}

impl ScrollOffset {
    /// The un-scrolled origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new scroll offset.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// =============================================================================
// BoxMeasure - Raw geometry read from the host
// =============================================================================

/// The raw measurements the host reports for one element.
///
/// `top`/`left` are relative to the document origin (un-scrolled
/// coordinates). The three dimension sources mirror the host surface's
/// client/offset/scroll measurements; a source that the host cannot provide
/// reads as zero and the resolution chain falls through to the next one.
///
/// # Examples
///
/// ```
/// use scrollax::types::{BoxMeasure, Size};
///
/// let mut measure = BoxMeasure::new(120.0, 0.0);
/// measure.client = Size::ZERO;                 // unavailable
/// measure.offset = Size::new(300.0, 1000.0);   // next source wins
///
/// assert_eq!(measure.resolved_height(), 1000.0);
/// assert_eq!(measure.resolved_width(), 300.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxMeasure {
    /// Top edge in document coordinates.
    pub top: f64,
    /// Left edge in document coordinates.
    pub left: f64,
    /// Client-box size (zero when unavailable).
    pub client: Size,
    /// Offset-box size (zero when unavailable).
    pub offset: Size,
    /// Scroll-box size (zero when unavailable).
    pub scroll: Size,
}

impl BoxMeasure {
    /// Create a measure with a position and no dimension sources.
    pub const fn new(top: f64, left: f64) -> Self {
        Self {
            top,
            left,
            client: Size::ZERO,
            offset: Size::ZERO,
            scroll: Size::ZERO,
        }
    }

    /// Resolve the width through the client -> offset -> scroll chain.
    ///
    /// The first non-zero source wins; all-zero sources degrade to 0.
    pub fn resolved_width(&self) -> f64 {
        resolve_length(self.client.width, self.offset.width, self.scroll.width)
    }

    /// Resolve the height through the client -> offset -> scroll chain.
    pub fn resolved_height(&self) -> f64 {
        resolve_length(self.client.height, self.offset.height, self.scroll.height)
    }

    /// Resolve both axes at once.
    pub fn resolved_size(&self) -> Size {
        Size::new(self.resolved_width(), self.resolved_height())
    }
}

/// Pick the first non-zero measurement, degrading to zero when every source
/// is unavailable. Each axis resolves independently.
fn resolve_length(client: f64, offset: f64, scroll: f64) -> f64 {
    if client != 0.0 {
        client
    } else if offset != 0.0 {
        offset
    } else if scroll != 0.0 {
        scroll
    } else {
        0.0
    }
}

// =============================================================================
// EngineState
// =============================================================================

/// The scheduler's mode flag.
///
/// `Active` means a tick is pending or running; `Suspended` means the engine
/// is idle until a resume signal arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineState {
    /// Recompute-and-apply ticks are being scheduled.
    Active,
    /// Idle; waiting for a resume signal.
    #[default]
    Suspended,
}

// =============================================================================
// Signals
// =============================================================================

/// One kind of host notification the engine can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    /// Viewport resized.
    Resize,
    /// Device orientation changed.
    OrientationChange,
    /// The tracked surface scrolled.
    Scroll,
    /// A touch-driven move occurred.
    TouchMove,
}

impl SignalKind {
    /// The single-bit set containing just this kind.
    pub const fn as_set(self) -> SignalSet {
        match self {
            SignalKind::Resize => SignalSet::RESIZE,
            SignalKind::OrientationChange => SignalSet::ORIENTATION_CHANGE,
            SignalKind::Scroll => SignalSet::SCROLL,
            SignalKind::TouchMove => SignalSet::TOUCH_MOVE,
        }
    }
}

impl From<SignalKind> for SignalSet {
    fn from(kind: SignalKind) -> Self {
        kind.as_set()
    }
}

bitflags::bitflags! {
    /// A set of signal kinds, used for watch/unwatch requests.
    ///
    /// Combine with bitwise OR: `SignalSet::SCROLL | SignalSet::TOUCH_MOVE`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SignalSet: u8 {
        const RESIZE = 1 << 0;
        const ORIENTATION_CHANGE = 1 << 1;
        const SCROLL = 1 << 2;
        const TOUCH_MOVE = 1 << 3;
    }
}

// =============================================================================
// Capabilities - Probed once at engine construction
// =============================================================================

/// The style property name the host accepts for transforms.
///
/// Vendor prefixes survive on older surfaces; the probe picks whichever the
/// host actually supports and every write uses that one property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransformProperty {
    /// The unprefixed `transform` property.
    #[default]
    Standard,
    Webkit,
    Moz,
    Ms,
}

impl TransformProperty {
    /// DOM-style property name for this variant.
    pub const fn dom_name(self) -> &'static str {
        match self {
            TransformProperty::Standard => "transform",
            TransformProperty::Webkit => "WebkitTransform",
            TransformProperty::Moz => "MozTransform",
            TransformProperty::Ms => "msTransform",
        }
    }
}

/// Host capabilities detected once when the engine is created.
///
/// Immutable after construction: the applier reads the transform property
/// from here and the scheduler reads the passive flag when arming resume
/// subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// Which transform property the host accepts.
    pub transform_property: TransformProperty,
    /// Whether the host honors passive listener registration.
    pub passive_listeners: bool,
}

impl Capabilities {
    /// Create a capabilities value.
    pub const fn new(transform_property: TransformProperty, passive_listeners: bool) -> Self {
        Self {
            transform_property,
            passive_listeners,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
