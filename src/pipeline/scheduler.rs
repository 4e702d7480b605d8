//! Scheduler - active/suspended loop bookkeeping.
//!
//! The tick loop must not burn frames while nothing scrolls. The
//! scheduler tracks which of two modes the loop is in and owns the
//! transitions:
//!
//! - **Active**: a frame is (or is about to be) scheduled; each delivered
//!   frame decides whether to keep going.
//! - **Suspended**: no frame pending; a set of resume signals is armed and
//!   the next one delivered schedules exactly one frame to re-evaluate.
//!
//! Resize is not part of the armed set. It stays watched for the whole
//! engine lifetime because it also triggers recapture, and folding it in
//! here would tear down that standing watch on every resume.

use tracing::debug;

use crate::host::{FrameToken, HostSurface};
use crate::types::{EngineState, SignalSet};

/// Signals armed while suspended.
pub const RESUME_WATCH: SignalSet = SignalSet::ORIENTATION_CHANGE
    .union(SignalSet::SCROLL)
    .union(SignalSet::TOUCH_MOVE);

// =============================================================================
// Tick reporting
// =============================================================================

/// What happened to one tracked element during a pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElementOutcome {
    /// Offset computed and written.
    Applied { translate_y: f64 },
    /// Frame entirely outside the viewport; nothing written.
    OffScreen,
    /// Geometry could not be resolved (missing frame, missing baseline,
    /// or a non-finite offset); nothing written, the element stays as-is.
    Degraded,
}

/// Where the loop went after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickDisposition {
    /// Movement was observed; another frame is scheduled.
    Continued,
    /// No movement; the loop went idle with resume signals armed.
    Suspended,
    /// The engine is destroyed; the tick did nothing.
    Inactive,
}

/// Per-tick summary: the loop decision plus one outcome per element, in
/// element order. Ticks that skip the pass report no outcomes.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub disposition: TickDisposition,
    pub outcomes: Vec<ElementOutcome>,
}

impl TickReport {
    /// Report for a tick that never ran a pass.
    pub fn skipped(disposition: TickDisposition) -> Self {
        Self {
            disposition,
            outcomes: Vec::new(),
        }
    }

    /// How many elements had an offset written this tick.
    pub fn applied_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, ElementOutcome::Applied { .. }))
            .count()
    }
}

// =============================================================================
// Scheduler
// =============================================================================

/// Two-state frame loop driver.
///
/// Owns the pending frame token and the armed-signal flag so every
/// transition releases exactly what it acquired. The runtime decides
/// *when* to transition; the scheduler guarantees the bookkeeping is
/// balanced no matter the order of decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduler {
    state: EngineState,
    pending: Option<FrameToken>,
    resume_armed: bool,
}

impl Scheduler {
    pub const fn new() -> Self {
        Self {
            state: EngineState::Suspended,
            pending: None,
            resume_armed: false,
        }
    }

    /// Current loop mode.
    pub const fn state(&self) -> EngineState {
        self.state
    }

    /// True while a scheduled frame has not been delivered.
    pub const fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    /// Consume the pending token once the host delivers its frame.
    pub fn frame_delivered(&mut self) {
        self.pending = None;
    }

    /// Go (or stay) active and schedule the next frame. Disarms the
    /// resume watch if it was still armed.
    pub fn reschedule<H: HostSurface>(&mut self, host: &mut H) {
        if self.resume_armed {
            host.unwatch_signals(RESUME_WATCH);
            self.resume_armed = false;
        }
        self.state = EngineState::Active;
        self.pending = Some(host.schedule_frame());
    }

    /// Go idle and arm the resume signals. Arming is idempotent so
    /// repeated idle ticks do not stack watches.
    pub fn suspend<H: HostSurface>(&mut self, host: &mut H, passive: bool) {
        self.state = EngineState::Suspended;
        self.pending = None;
        if !self.resume_armed {
            host.watch_signals(RESUME_WATCH, passive);
            self.resume_armed = true;
            debug!("loop suspended, resume signals armed");
        }
    }

    /// Leave suspension: disarm the resume watch and schedule one frame.
    /// Returns false (and does nothing) when not suspended-and-armed, so
    /// signal bursts cannot stack extra frames.
    pub fn wake<H: HostSurface>(&mut self, host: &mut H) -> bool {
        if self.state != EngineState::Suspended || !self.resume_armed {
            return false;
        }
        self.reschedule(host);
        debug!("loop resumed");
        true
    }

    /// Cancel the pending frame and drop the armed watch, returning to a
    /// fully quiet state. Used on teardown.
    pub fn shutdown<H: HostSurface>(&mut self, host: &mut H) {
        if let Some(token) = self.pending.take() {
            host.cancel_frame(token);
        }
        if self.resume_armed {
            host.unwatch_signals(RESUME_WATCH);
            self.resume_armed = false;
        }
        self.state = EngineState::Suspended;
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
