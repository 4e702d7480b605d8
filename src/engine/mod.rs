//! Parallax Engine - baselines, offset math, transform writes, runtime.
//!
//! The engine turns scroll position into per-element vertical offsets:
//! - Baseline: resting geometry and style snapshots per element
//! - Offset: pure interpolation from scroll position to pixels
//! - Applier: transform string composition and the host write
//! - Runtime: the lifecycle facade that drives all of it
//!
//! # Architecture
//!
//! Geometry is captured once per initialization, never per tick:
//!
//! ```text
//! initialize: restore styles → measure → capture baselines → paint
//! tick:       sample scroll → per element: frame? visible? → compute → write
//! ```
//!
//! Per-tick work only re-reads what can change between frames (scroll
//! position, frame geometry, page height). Everything else comes from the
//! captured baselines, which is what keeps a tick cheap enough to run on
//! every animation frame.

mod applier;
mod baseline;
mod offset;
mod runtime;

pub use applier::*;
pub use baseline::*;
pub use offset::*;
pub use runtime::*;
