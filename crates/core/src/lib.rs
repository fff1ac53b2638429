//! Core library for the gaze overlay video player.
//!
//! The crate keeps an eye-tracking marker synchronized to a video's playback
//! position: raw gaze CSV text is parsed into a sorted timeline, a monotonic
//! cursor tracks the sample active at the current playback instant, and a
//! small state machine re-draws the overlay every scheduled frame in step
//! with the media's play/pause/seek/end events. The host supplies the media
//! clock, the drawing surface and the live marker style through the traits in
//! [`media`], [`surface`] and [`sched`].

pub mod error;
pub mod media;
pub mod parse;
pub mod render;
pub mod sched;
pub mod style;
pub mod surface;
pub mod sync;
pub mod timeline;

pub use error::{GazeOverlayError, Result};
pub use media::{MediaEvent, MediaSource};
pub use parse::{load_gaze_file, parse_gaze_text, ParseSummary, ParsedGaze};
pub use render::{Phase, RenderLoop};
pub use sched::{FrameRequest, FrameScheduler, ManualScheduler};
pub use style::MarkerStyle;
pub use surface::{
    draw_frame, scale_point, OverlaySurface, SurfacePoint, REFERENCE_HEIGHT, REFERENCE_WIDTH,
};
pub use sync::timeline_instant;
pub use timeline::{GazeSample, GazeTimeline};
