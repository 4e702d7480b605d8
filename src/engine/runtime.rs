//! Engine runtime - the lifecycle facade over every other piece.
//!
//! Owns the tracked element list, the geometry cache, the scroll sampler,
//! and the scheduler, and wires them into the tick flow. The host drives
//! it from outside: `tick` when a scheduled frame fires, `handle_signal`
//! when a watched signal fires. Nothing here blocks or spawns; every
//! method runs to completion on the caller's thread.
//!
//! Lifecycle:
//!
//! ```text
//! create → capture + first paint → loop
//!   loop: tick → moved? apply + reschedule : suspend
//! refresh → recapture + repaint (also revives after destroy)
//! destroy → styles restored, frames cancelled, watches dropped
//! ```

use tracing::{debug, warn};

use super::applier;
use super::baseline::{Baseline, GeometryCache};
use super::offset::{self, FrameGeometry};
use crate::error::ConfigError;
use crate::host::{ElementHandle, FrameTarget, HostSurface, Target};
use crate::pipeline::{ElementOutcome, Scheduler, TickDisposition, TickReport};
use crate::state::ScrollSampler;
use crate::types::{Capabilities, EngineState, ScrollOffset, SignalKind, SignalSet, Size};

/// Invoked after every tick that applied offsets.
pub type TickCallback = Box<dyn FnMut(&TickReport)>;

// =============================================================================
// Options
// =============================================================================

/// Engine construction options.
pub struct Options {
    /// Round written offsets to whole pixels. On by default.
    pub round: bool,
    /// Shared frame for every element instead of each element's own
    /// container.
    pub frame: Option<FrameTarget>,
    /// Called after each tick that applied offsets.
    pub on_tick: Option<TickCallback>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            round: true,
            frame: None,
            on_tick: None,
        }
    }
}

// =============================================================================
// Engine
// =============================================================================

/// Scroll-driven parallax engine over a [`HostSurface`].
///
/// Create one per tracked element set. The element list is fixed at
/// creation; geometry is re-captured by `refresh` and on resize signals.
pub struct Engine {
    elements: Vec<ElementHandle>,
    cache: GeometryCache,
    frame_override: Option<ElementHandle>,
    sampler: ScrollSampler,
    viewport: Size,
    capabilities: Capabilities,
    round: bool,
    on_tick: Option<TickCallback>,
    scheduler: Scheduler,
    running: bool,
}

impl Engine {
    /// Resolve the target, probe host capabilities, and start tracking.
    ///
    /// Fails without touching scheduling or signal watches when the
    /// target matches nothing or a frame selector cannot be resolved.
    pub fn create<H: HostSurface>(
        host: &mut H,
        target: Target,
        options: Options,
    ) -> Result<Self, ConfigError> {
        let elements = host.query_elements(&target);
        if elements.is_empty() {
            warn!("the elements you're trying to select don't exist");
            return Err(ConfigError::NoElements);
        }

        let frame_override = match options.frame {
            None => None,
            Some(FrameTarget::Handle(handle)) => Some(handle),
            Some(FrameTarget::Selector(selector)) => match host.query_selector(&selector) {
                Some(handle) => Some(handle),
                None => {
                    warn!(%selector, "the frame you're trying to use doesn't exist");
                    return Err(ConfigError::FrameNotFound(selector));
                }
            },
        };

        let capabilities = Capabilities::new(
            host.probe_transform_property(),
            host.supports_passive_listeners(),
        );

        let mut engine = Self {
            elements,
            cache: GeometryCache::new(),
            frame_override,
            sampler: ScrollSampler::new(),
            viewport: Size::ZERO,
            capabilities,
            round: options.round,
            on_tick: options.on_tick,
            scheduler: Scheduler::new(),
            running: false,
        };
        engine.reinitialize(host);
        Ok(engine)
    }

    // ===== Lifecycle =====

    /// Re-measure everything and repaint, picking up layout changes.
    ///
    /// Also revives an engine after `destroy`: tracking resumes with a
    /// fresh capture of the same element list.
    pub fn refresh<H: HostSurface>(&mut self, host: &mut H) {
        self.reinitialize(host);
    }

    /// Stop tracking: restore captured styles, cancel the pending frame,
    /// and drop every signal watch. Safe to call repeatedly; only the
    /// first call after creation (or a revival) does anything.
    pub fn destroy<H: HostSurface>(&mut self, host: &mut H) {
        if !self.running {
            return;
        }
        self.cache.restore(host, &self.elements);
        self.cache.clear();
        self.scheduler.shutdown(host);
        host.unwatch_signals(SignalSet::RESIZE);
        self.running = false;
        debug!("engine destroyed");
    }

    /// One pass of the tick loop, called by the host when a scheduled
    /// frame fires. Decides whether to keep looping or suspend.
    pub fn tick<H: HostSurface>(&mut self, host: &mut H) -> TickReport {
        if !self.running {
            return TickReport::skipped(TickDisposition::Inactive);
        }
        self.scheduler.frame_delivered();
        self.step(host)
    }

    /// A watched signal fired. Resize recaptures geometry; every resume
    /// signal wakes a suspended loop. Ignored when destroyed.
    pub fn handle_signal<H: HostSurface>(&mut self, host: &mut H, kind: SignalKind) {
        if !self.running {
            return;
        }
        if kind == SignalKind::Resize {
            debug!("resize signal, recapturing geometry");
            self.reinitialize(host);
        }
        self.scheduler.wake(host);
    }

    // ===== Accessors =====

    /// Active while frames are scheduled, suspended while idle.
    pub fn state(&self) -> EngineState {
        self.scheduler.state()
    }

    /// False once destroyed (until a refresh revives it).
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// The tracked elements, in tracking order.
    pub fn elements(&self) -> &[ElementHandle] {
        &self.elements
    }

    /// Captured baselines, in element order. Empty when destroyed.
    pub fn baselines(&self) -> &[Baseline] {
        self.cache.baselines()
    }

    /// Scroll position as of the last sample.
    pub const fn scroll_offset(&self) -> ScrollOffset {
        self.sampler.offset()
    }

    /// Viewport size as of the last capture.
    pub const fn viewport(&self) -> Size {
        self.viewport
    }

    /// Host capabilities probed at creation.
    pub const fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    // ===== Internals =====

    /// Full (re)initialization: restore, re-measure, recapture, repaint.
    /// First-time and revival paths also start the standing resize watch
    /// and enter the loop.
    fn reinitialize<H: HostSurface>(&mut self, host: &mut H) {
        // Elements must sit at their resting positions while measured
        self.cache.restore(host, &self.elements);
        self.cache.clear();

        self.viewport = host.measure_viewport();
        self.sampler.sample(host);
        self.cache.capture(host, &self.elements);

        let report = self.apply_pass(host, TickDisposition::Continued);
        self.notify(&report);

        if !self.running {
            host.watch_signals(SignalSet::RESIZE, false);
            self.running = true;
            debug!(elements = self.elements.len(), "engine initialized");
            self.step(host);
        }
    }

    /// Sample and decide: apply + reschedule on movement, suspend on
    /// stillness.
    fn step<H: HostSurface>(&mut self, host: &mut H) -> TickReport {
        let sample = self.sampler.sample(host);
        if sample.changed {
            let report = self.apply_pass(host, TickDisposition::Continued);
            self.scheduler.reschedule(host);
            self.notify(&report);
            report
        } else {
            self.scheduler
                .suspend(host, self.capabilities.passive_listeners);
            TickReport::skipped(TickDisposition::Suspended)
        }
    }

    /// Compute and write offsets for every element at the current scroll
    /// position. Page height is re-measured once per pass; each element's
    /// frame is re-resolved and re-measured so layout shifts are seen.
    fn apply_pass<H: HostSurface>(&self, host: &mut H, disposition: TickDisposition) -> TickReport {
        let scroll_y = self.sampler.offset().y;
        let viewport_height = self.viewport.height;
        let page_height = host.measure_page().height;

        let mut outcomes = Vec::with_capacity(self.elements.len());
        for index in 0..self.elements.len() {
            let element = self.elements[index];
            outcomes.push(self.apply_one(host, index, element, scroll_y, viewport_height, page_height));
        }

        TickReport {
            disposition,
            outcomes,
        }
    }

    /// One element: resolve frame, gate on visibility, compute, write.
    /// Failures degrade to a skipped write, never a stopped loop.
    fn apply_one<H: HostSurface>(
        &self,
        host: &mut H,
        index: usize,
        element: ElementHandle,
        scroll_y: f64,
        viewport_height: f64,
        page_height: f64,
    ) -> ElementOutcome {
        let Some(baseline) = self.cache.get(index) else {
            return ElementOutcome::Degraded;
        };

        let frame = match self.frame_override {
            Some(frame) => frame,
            None => match host.query_parent(element) {
                Some(parent) => parent,
                None => return ElementOutcome::Degraded,
            },
        };
        let frame_geometry = FrameGeometry::from_measure(&host.measure_box(frame));

        if !offset::is_in_viewport(&frame_geometry, scroll_y, viewport_height) {
            return ElementOutcome::OffScreen;
        }

        let translate_y = offset::compute_translate_y(
            baseline,
            &frame_geometry,
            scroll_y,
            viewport_height,
            page_height,
        );
        if !translate_y.is_finite() {
            return ElementOutcome::Degraded;
        }

        let written = applier::apply_transform(
            host,
            element,
            baseline,
            translate_y,
            self.round,
            self.capabilities.transform_property,
        );
        ElementOutcome::Applied {
            translate_y: written,
        }
    }

    fn notify(&mut self, report: &TickReport) {
        if let Some(on_tick) = self.on_tick.as_mut() {
            on_tick(report);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
