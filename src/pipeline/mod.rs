//! Pipeline Module - Tick flow and loop scheduling.
//!
//! One tick runs: sample scroll → changed? → compute and apply offsets →
//! reschedule, or suspend until a resume signal. The scheduler here owns
//! the reschedule-or-suspend half; the engine runtime drives the rest.

mod scheduler;

pub use scheduler::*;
