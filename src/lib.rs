//! # scrollax
//!
//! Scroll-driven parallax positioning engine.
//!
//! Tracks a set of elements and, as the document scrolls, computes a
//! vertical offset for each from its captured resting geometry, then
//! writes the offset back as a `translate3d` transform. The loop runs
//! only while the scroll position is actually moving; the rest of the
//! time it sits suspended with resume signals armed.
//!
//! ## Architecture
//!
//! The engine is headless. Every interaction with the outside world -
//! element queries, geometry reads, style writes, frame scheduling,
//! signal subscriptions - goes through the [`HostSurface`] trait, so the
//! same engine runs against a real document surface or an in-memory one.
//!
//! ```text
//! host signals/frames → Engine → sample scroll → compute offsets → transform writes
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (Size, ScrollOffset, SignalSet, Capabilities)
//! - [`host`] - The HostSurface trait, element handles, tracking targets
//! - [`state`] - Scroll sampling with change detection
//! - [`engine`] - Baselines, offset math, transform writes, runtime facade
//! - [`pipeline`] - Tick flow and active/suspended loop scheduling
//! - [`error`] - Configuration errors

pub mod engine;
pub mod error;
pub mod host;
pub mod pipeline;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use engine::{
    apply_rounding, apply_transform, classify_window, compose_transform, compute_translate_y,
    extract_transform_suffix, is_in_viewport, Baseline, Engine, FrameGeometry, GeometryCache,
    Options, TickCallback, TravelWindow,
};

pub use error::ConfigError;

pub use host::{
    ElementHandle, FrameTarget, FrameToken, HostSurface, Target, DEFAULT_SELECTOR,
    Z_INDEX_ATTRIBUTE,
};

pub use pipeline::{
    ElementOutcome, Scheduler, TickDisposition, TickReport, RESUME_WATCH,
};

pub use state::{Sample, ScrollSampler};
