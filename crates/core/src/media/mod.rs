/// Read-only view of the media collaborator's playback state.
///
/// The media element is owned by the host; the core only ever samples its
/// current position and native resolution. Implementations wrap whatever
/// backend the host uses, whether a real player or a scripted clock in tests.
pub trait MediaSource {
    /// Current playback position in seconds.
    fn position_seconds(&self) -> f64;

    /// Native resolution of the media, in pixels.
    fn native_size(&self) -> (u32, u32);
}

/// Media lifecycle notifications forwarded by the host.
///
/// Events may arrive in any order and interleave with scheduled frame
/// callbacks; the render loop maps each one to an explicit state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    /// Media metadata became available; the overlay surface is synced to the
    /// native resolution.
    MetadataReady,
    /// Playback started or resumed.
    Play,
    /// Playback paused.
    Pause,
    /// Playback reached the end of the media.
    Ended,
    /// The playback position jumped to a new instant.
    Seeked,
}
