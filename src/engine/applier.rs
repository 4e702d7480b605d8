//! Transform application - compose the style value and hand it to the host.
//!
//! The write path is deliberately thin: rounding happens here (so the
//! computation stays exact), the value string is assembled here, and the
//! host does the actual property write using whichever transform property
//! the capability probe settled on.

use super::baseline::Baseline;
use crate::host::{ElementHandle, HostSurface};
use crate::types::TransformProperty;

/// Round to the nearest whole pixel when enabled, pass through otherwise.
///
/// Sub-pixel translations blur text on some surfaces, which is why
/// rounding is the default. Opting out keeps the fully smooth values.
pub fn apply_rounding(translate_y: f64, rounding: bool) -> f64 {
    if rounding {
        translate_y.round()
    } else {
        translate_y
    }
}

/// Build the transform value for one element.
///
/// Always `translate3d` with a zero horizontal component; the third
/// component carries the element's depth hint. A preserved suffix from
/// the element's original inline style is re-appended after the
/// translation so both apply, in that order.
pub fn compose_transform(translate_y: f64, z_index: f64, suffix: &str) -> String {
    let translation = format!("translate3d(0px, {translate_y}px, {z_index}px)");
    if suffix.is_empty() {
        translation
    } else {
        format!("{translation} {suffix}")
    }
}

/// Write one computed offset to one element. Returns the value actually
/// written, after rounding.
pub fn apply_transform<H: HostSurface>(
    host: &mut H,
    element: ElementHandle,
    baseline: &Baseline,
    translate_y: f64,
    rounding: bool,
    property: TransformProperty,
) -> f64 {
    let written = apply_rounding(translate_y, rounding);
    let value = compose_transform(
        written,
        baseline.z_index,
        &baseline.preserved_transform_suffix,
    );
    host.write_transform(element, property, &value);
    written
}

// =============================================================================
// Tests
// =============================================================================
