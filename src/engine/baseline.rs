//! Baseline capture - resting geometry and style snapshots.
//!
//! Every tracked element gets one [`Baseline`] per initialization pass.
//! The baseline records where the element sits in the document with no
//! parallax offset applied, plus everything needed to restore the element
//! exactly as it was found. All later offset math reads from these
//! snapshots instead of re-measuring the element, so a capture survives
//! unchanged until the next refresh or a resize signal.

use crate::host::{ElementHandle, HostSurface, Z_INDEX_ATTRIBUTE};

// =============================================================================
// Baseline
// =============================================================================

/// Resting-state snapshot of one tracked element.
///
/// `top` and `left` are document-origin positions (scroll already added
/// back in by the host). `height` and `width` come from the measurement
/// fallback chain, so a zero stays zero only when every source agreed.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Baseline {
    pub top: f64,
    pub left: f64,
    pub height: f64,
    pub width: f64,
    /// Full inline style text at capture time, written back on restore.
    pub original_style_text: String,
    /// Pre-existing transform value, whitespace stripped, re-appended
    /// after the computed translation on every write. Empty when the
    /// element had no inline transform.
    pub preserved_transform_suffix: String,
    /// Depth offset fed into the third translation component.
    pub z_index: f64,
}

// =============================================================================
// GeometryCache
// =============================================================================

/// Baselines for the whole tracked set, in element order.
///
/// The cache is rebuilt wholesale: [`capture`](GeometryCache::capture)
/// drops every prior entry before measuring again. Index `i` always
/// corresponds to element `i` of the slice it was captured from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryCache {
    baselines: Vec<Baseline>,
}

impl GeometryCache {
    /// Create an empty cache.
    pub const fn new() -> Self {
        Self {
            baselines: Vec::new(),
        }
    }

    /// Number of captured baselines.
    pub fn len(&self) -> usize {
        self.baselines.len()
    }

    /// True when nothing has been captured yet.
    pub fn is_empty(&self) -> bool {
        self.baselines.is_empty()
    }

    /// Baseline for the element at `index`, if captured.
    pub fn get(&self, index: usize) -> Option<&Baseline> {
        self.baselines.get(index)
    }

    /// All captured baselines in element order.
    pub fn baselines(&self) -> &[Baseline] {
        &self.baselines
    }

    /// Drop every captured baseline.
    pub fn clear(&mut self) {
        self.baselines.clear();
    }

    /// Measure every element and rebuild the cache from scratch.
    ///
    /// Elements must be in their resting position when this runs, which
    /// is why initialization restores styles before recapturing.
    pub fn capture<H: HostSurface>(&mut self, host: &mut H, elements: &[ElementHandle]) {
        self.baselines.clear();
        self.baselines.reserve(elements.len());
        for &element in elements {
            self.baselines.push(capture_one(host, element));
        }
    }

    /// Write every element's captured inline style back unchanged.
    pub fn restore<H: HostSurface>(&self, host: &mut H, elements: &[ElementHandle]) {
        for (baseline, &element) in self.baselines.iter().zip(elements) {
            host.write_inline_style(element, &baseline.original_style_text);
        }
    }
}

fn capture_one<H: HostSurface>(host: &mut H, element: ElementHandle) -> Baseline {
    let measure = host.measure_box(element);
    let size = measure.resolved_size();
    let style = host.read_inline_style(element);
    let suffix = extract_transform_suffix(&style);
    let z_index = host
        .read_attribute(element, Z_INDEX_ATTRIBUTE)
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .unwrap_or(0.0);

    Baseline {
        top: measure.top,
        left: measure.left,
        height: size.height,
        width: size.width,
        original_style_text: style,
        preserved_transform_suffix: suffix,
        z_index,
    }
}

// =============================================================================
// Transform suffix extraction
// =============================================================================

/// Pull an existing transform value out of inline style text.
///
/// Scans for the first case-insensitive `transform` token followed by a
/// colon (optionally with whitespace between), then takes everything up
/// to the next `;` or end of text as the value. All whitespace inside
/// the value is stripped; the stored suffix keeps its original casing.
/// Returns an empty string when no transform declaration is present.
pub fn extract_transform_suffix(style: &str) -> String {
    let lower = style.to_ascii_lowercase();
    let bytes = lower.as_bytes();
    let mut from = 0;

    while let Some(found) = lower[from..].find("transform") {
        let start = from + found;
        let mut cursor = start + "transform".len();
        while cursor < bytes.len() && bytes[cursor].is_ascii_whitespace() {
            cursor += 1;
        }
        if cursor < bytes.len() && bytes[cursor] == b':' {
            let value_start = cursor + 1;
            let value_end = lower[value_start..]
                .find(';')
                .map(|semi| value_start + semi)
                .unwrap_or(lower.len());
            return style[value_start..value_end]
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
        }
        from = start + "transform".len();
    }

    String::new()
}

// =============================================================================
// Tests
// =============================================================================
