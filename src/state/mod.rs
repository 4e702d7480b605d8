//! State Module - Runtime scroll state.
//!
//! The engine's only mutable runtime state outside the scheduler lives
//! here: the last observed scroll position of the tracked surface and the
//! change detection that decides whether a tick does any work.

mod scroll;

pub use scroll::*;
