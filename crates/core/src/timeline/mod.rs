use serde::{Deserialize, Serialize};

/// One timestamped eye-tracking observation in scene-camera pixel space.
///
/// Field layout follows the Pupil Labs Neon gaze export. Samples are
/// immutable once parsed; the timeline never edits them in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GazeSample {
    /// Recording timestamp in nanoseconds.
    pub timestamp_ns: i64,
    /// Horizontal gaze position in the 1600x1200 scene-camera space.
    pub x: f64,
    /// Vertical gaze position in the 1600x1200 scene-camera space.
    pub y: f64,
    /// Whether the device was worn, kept verbatim from the export.
    pub worn: String,
    /// Fixation the sample belongs to, when the export provides one.
    pub fixation_id: Option<i64>,
    /// Blink the sample belongs to, when the export provides one.
    pub blink_id: Option<i64>,
    /// Gaze azimuth in degrees.
    pub azimuth_deg: f64,
    /// Gaze elevation in degrees.
    pub elevation_deg: f64,
}

/// Sorted gaze sample sequence plus the cursor marking the sample at or
/// before the current playback instant.
///
/// The ascending-by-timestamp invariant is enforced at construction with a
/// stable sort, so [`GazeTimeline::advance`] only ever needs to look at the
/// next element. The cursor moves forward monotonically; only
/// [`GazeTimeline::reset`] rewinds it.
#[derive(Debug, Default, Clone)]
pub struct GazeTimeline {
    samples: Vec<GazeSample>,
    cursor: usize,
}

impl GazeTimeline {
    /// Builds a timeline from parsed samples, sorting them ascending by
    /// timestamp. An empty sample set is a valid "no data" timeline.
    pub fn new(mut samples: Vec<GazeSample>) -> Self {
        samples.sort_by_key(|sample| sample.timestamp_ns);
        Self { samples, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Timestamp of the first sample, the zero-reference for mapping playback
    /// time into sample time. `None` for the empty timeline.
    pub fn baseline_ns(&self) -> Option<i64> {
        self.samples.first().map(|sample| sample.timestamp_ns)
    }

    /// Current cursor index. Stays 0 for the empty timeline.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Rewinds the cursor to the first sample. Called on timeline replacement
    /// and on every seek, after which the next [`GazeTimeline::advance`] scan
    /// catches up from the start.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Moves the cursor forward while the next sample's timestamp is at or
    /// before `target_ns`. Never moves backwards.
    ///
    /// During monotonic playback each call steps past at most a handful of
    /// samples, so the amortized cost is O(1); only the first call after a
    /// [`GazeTimeline::reset`] pays for a full catch-up scan.
    pub fn advance(&mut self, target_ns: i64) {
        while self
            .samples
            .get(self.cursor + 1)
            .map(|next| next.timestamp_ns <= target_ns)
            .unwrap_or(false)
        {
            self.cursor += 1;
        }
    }

    /// The sample the cursor points at: the nearest sample at or before the
    /// last advance target, with no interpolation. A target before the
    /// baseline leaves the first sample active; a target past the end pins
    /// the last sample indefinitely.
    pub fn active(&self) -> Option<&GazeSample> {
        self.samples.get(self.cursor)
    }

    /// All samples in ascending timestamp order.
    pub fn samples(&self) -> &[GazeSample] {
        &self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(timestamp_ns: i64) -> GazeSample {
        GazeSample {
            timestamp_ns,
            x: 100.0,
            y: 200.0,
            worn: "1.0".to_string(),
            fixation_id: None,
            blink_id: None,
            azimuth_deg: 0.0,
            elevation_deg: 0.0,
        }
    }

    fn timeline(timestamps: &[i64]) -> GazeTimeline {
        GazeTimeline::new(timestamps.iter().copied().map(sample).collect())
    }

    #[test]
    fn sorts_samples_at_construction() {
        let timeline = timeline(&[300, 100, 200]);
        let order: Vec<i64> = timeline
            .samples()
            .iter()
            .map(|sample| sample.timestamp_ns)
            .collect();
        assert_eq!(order, vec![100, 200, 300]);
        assert_eq!(timeline.baseline_ns(), Some(100));
    }

    #[test]
    fn advance_moves_to_nearest_preceding_sample() {
        let mut timeline = timeline(&[100, 200, 300]);
        timeline.advance(250);
        assert_eq!(timeline.cursor(), 1);
        assert_eq!(timeline.active().unwrap().timestamp_ns, 200);
    }

    #[test]
    fn advance_includes_exact_timestamp_matches() {
        let mut timeline = timeline(&[100, 200, 300]);
        timeline.advance(300);
        assert_eq!(timeline.active().unwrap().timestamp_ns, 300);
    }

    #[test]
    fn advance_never_decreases_cursor() {
        let mut timeline = timeline(&[100, 200, 300]);
        timeline.advance(300);
        assert_eq!(timeline.cursor(), 2);

        timeline.advance(150);
        assert_eq!(timeline.cursor(), 2);
    }

    #[test]
    fn target_before_baseline_keeps_first_sample_active() {
        let mut timeline = timeline(&[100, 200]);
        timeline.advance(50);
        assert_eq!(timeline.cursor(), 0);
        assert_eq!(timeline.active().unwrap().timestamp_ns, 100);
    }

    #[test]
    fn target_past_end_pins_last_sample() {
        let mut timeline = timeline(&[100, 200]);
        timeline.advance(i64::MAX);
        assert_eq!(timeline.active().unwrap().timestamp_ns, 200);

        timeline.advance(i64::MAX);
        assert_eq!(timeline.cursor(), 1);
    }

    #[test]
    fn reset_rewinds_cursor_to_start() {
        let mut timeline = timeline(&[100, 200, 300]);
        timeline.advance(300);
        timeline.reset();
        assert_eq!(timeline.cursor(), 0);

        timeline.advance(220);
        assert_eq!(timeline.active().unwrap().timestamp_ns, 200);
    }

    #[test]
    fn empty_timeline_has_no_active_sample() {
        let mut timeline = GazeTimeline::new(Vec::new());
        assert!(timeline.is_empty());
        assert_eq!(timeline.baseline_ns(), None);

        timeline.advance(1_000);
        assert!(timeline.active().is_none());
        assert_eq!(timeline.cursor(), 0);
    }
}
