/// Nanoseconds per second, the conversion between media playback position and
/// gaze timestamp space.
pub const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

/// Maps the media's current playback position onto the gaze timeline's
/// timestamp space.
///
/// Pure function of the arguments: the position changes continuously during
/// playback, so callers recompute this every frame rather than caching it.
/// No user-supplied alignment offset is applied.
pub fn timeline_instant(baseline_ns: i64, position_seconds: f64) -> i64 {
    baseline_ns + (position_seconds * NANOS_PER_SECOND).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_position_zero_to_baseline() {
        assert_eq!(timeline_instant(1_700_000_000_000, 0.0), 1_700_000_000_000);
    }

    #[test]
    fn scales_seconds_to_nanoseconds() {
        assert_eq!(timeline_instant(1_000, 2.5), 2_500_001_000);
    }

    #[test]
    fn fractional_positions_round_to_nearest_nanosecond() {
        assert_eq!(timeline_instant(0, 0.000_000_000_6), 1);
    }
}
