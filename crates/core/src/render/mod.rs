use tracing::{debug, info};

use crate::{
    draw_frame, sync, FrameRequest, FrameScheduler, GazeTimeline, MarkerStyle, MediaEvent,
    MediaSource, OverlaySurface,
};

/// Render loop phase.
///
/// `Idle` and `Paused` both mean "no scheduled callback"; they differ only in
/// how they were reached. `Paused` retains whatever frame was last drawn on
/// the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Playing,
    Paused,
}

/// State machine that keeps the overlay redraw in step with media lifecycle
/// events.
///
/// The loop owns the mutable per-playback state: the gaze timeline with its
/// cursor and the single outstanding [`FrameRequest`]. Media position, the
/// drawing surface and the marker style are owned by the host and passed by
/// reference into every call, so each frame reads their most recent values.
///
/// While `Playing`, each [`RenderLoop::on_frame`] draws once and re-schedules
/// itself through the [`FrameScheduler`]; that self-rescheduling loop is the
/// only redraw driver during playback. At most one callback is ever pending
/// per instance.
#[derive(Debug)]
pub struct RenderLoop<S: FrameScheduler> {
    scheduler: S,
    phase: Phase,
    pending: Option<FrameRequest>,
    timeline: GazeTimeline,
    disposed: bool,
}

impl<S: FrameScheduler> RenderLoop<S> {
    /// Creates an idle loop with an empty timeline.
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            phase: Phase::Idle,
            pending: None,
            timeline: GazeTimeline::default(),
            disposed: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Whether a frame callback is currently scheduled.
    pub fn frame_scheduled(&self) -> bool {
        self.pending.is_some()
    }

    pub fn timeline(&self) -> &GazeTimeline {
        &self.timeline
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Replaces the gaze timeline in a single swap.
    ///
    /// The incoming timeline starts with its cursor at 0, so this is safe
    /// while the loop is playing: the very next frame advances the fresh
    /// cursor against the live playback position. No partially-parsed state
    /// is ever observable here; parsing happens before this call.
    pub fn load_timeline(&mut self, timeline: GazeTimeline) {
        info!(samples = timeline.len(), "gaze timeline replaced");
        self.timeline = timeline;
    }

    /// Applies one media lifecycle event to the state machine.
    pub fn handle_event(
        &mut self,
        event: MediaEvent,
        media: &dyn MediaSource,
        surface: &mut dyn OverlaySurface,
        style: &MarkerStyle,
    ) {
        if self.disposed {
            return;
        }

        match event {
            MediaEvent::MetadataReady => {
                let (width, height) = media.native_size();
                surface.resize(width, height);
                debug!(width, height, "surface synced to native resolution");
            }
            MediaEvent::Play => {
                if self.phase != Phase::Playing {
                    self.pending = Some(self.scheduler.schedule());
                    self.phase = Phase::Playing;
                    debug!("render loop playing");
                }
            }
            MediaEvent::Pause | MediaEvent::Ended => {
                if self.phase == Phase::Playing {
                    self.cancel_pending();
                    self.phase = Phase::Paused;
                    debug!("render loop paused");
                }
            }
            MediaEvent::Seeked => {
                // One forced draw regardless of play state; the playing loop,
                // if any, keeps its scheduled callback.
                self.timeline.reset();
                self.draw_current(media, surface, style);
            }
        }
    }

    /// The scheduled frame callback: draw once, then re-schedule while still
    /// playing.
    ///
    /// A stale invocation (delivered after cancellation or disposal) draws
    /// nothing and does not re-schedule.
    pub fn on_frame(
        &mut self,
        media: &dyn MediaSource,
        surface: &mut dyn OverlaySurface,
        style: &MarkerStyle,
    ) {
        if self.disposed {
            return;
        }
        if self.pending.take().is_none() || self.phase != Phase::Playing {
            return;
        }

        self.draw_current(media, surface, style);
        self.pending = Some(self.scheduler.schedule());
    }

    /// Tears the loop down: cancels any pending callback and ignores all
    /// further events and frames. Calling this twice is a no-op.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.cancel_pending();
        self.phase = Phase::Idle;
        self.disposed = true;
        info!("render loop disposed");
    }

    fn cancel_pending(&mut self) {
        if let Some(request) = self.pending.take() {
            self.scheduler.cancel(request);
        }
    }

    fn draw_current(
        &mut self,
        media: &dyn MediaSource,
        surface: &mut dyn OverlaySurface,
        style: &MarkerStyle,
    ) {
        if let Some(baseline_ns) = self.timeline.baseline_ns() {
            let instant = sync::timeline_instant(baseline_ns, media.position_seconds());
            self.timeline.advance(instant);
        }
        draw_frame(&self.timeline, surface, style);
    }
}
