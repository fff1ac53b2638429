use std::path::Path;

use tracing::{debug, info};

use crate::{GazeSample, Result};

/// Minimum number of comma-separated fields in a valid gaze row.
const FIELD_COUNT: usize = 10;

/// Case-insensitive prefix identifying the optional header row of a Neon
/// gaze export.
const HEADER_PREFIX: &str = "section id";

/// Parsed gaze data plus row-level accounting for diagnostics.
#[derive(Debug, Clone)]
pub struct ParsedGaze {
    /// Samples sorted ascending by timestamp.
    pub samples: Vec<GazeSample>,
    pub summary: ParseSummary,
}

/// Row accounting produced while parsing one gaze file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseSummary {
    /// Non-blank data rows encountered (the header is not counted).
    pub total_rows: usize,
    /// Rows discarded for having too few fields or unparseable required
    /// values.
    pub dropped_rows: usize,
    /// Whether a header row was recognised and skipped.
    pub header_skipped: bool,
}

/// Parses the full text of one gaze-data file.
///
/// Malformed rows are dropped, never fatal: a row needs at least
/// [`FIELD_COUNT`] trimmed fields and finite values for the timestamp and
/// coordinate columns, while the optional fixation/blink ids simply parse to
/// absent. The result is re-sorted ascending by timestamp regardless of input
/// order, and an empty result is a valid "no data" outcome.
pub fn parse_gaze_text(text: &str) -> ParsedGaze {
    let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());
    let mut summary = ParseSummary::default();
    let mut samples = Vec::new();

    let mut first_data_line = None;
    if let Some(first) = lines.next() {
        if is_header(first) {
            summary.header_skipped = true;
        } else {
            first_data_line = Some(first);
        }
    }

    for (index, line) in first_data_line.into_iter().chain(lines).enumerate() {
        summary.total_rows += 1;
        match parse_row(line) {
            Some(sample) => samples.push(sample),
            None => {
                summary.dropped_rows += 1;
                debug!(row = index, "dropping malformed gaze row");
            }
        }
    }

    samples.sort_by_key(|sample| sample.timestamp_ns);

    info!(
        samples = samples.len(),
        dropped = summary.dropped_rows,
        header = summary.header_skipped,
        "parsed gaze data"
    );

    ParsedGaze { samples, summary }
}

/// Reads and parses a gaze file from disk.
pub fn load_gaze_file(path: impl AsRef<Path>) -> Result<ParsedGaze> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_gaze_text(&text))
}

fn is_header(line: &str) -> bool {
    line.get(..HEADER_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(HEADER_PREFIX))
}

/// Parses one data row:
/// `section id, recording id, timestamp [ns], gaze x [px], gaze y [px],
/// worn, fixation id, blink id, azimuth [deg], elevation [deg]`.
fn parse_row(line: &str) -> Option<GazeSample> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < FIELD_COUNT {
        return None;
    }

    Some(GazeSample {
        timestamp_ns: fields[2].parse().ok()?,
        x: finite(fields[3])?,
        y: finite(fields[4])?,
        worn: fields[5].to_string(),
        fixation_id: optional_id(fields[6]),
        blink_id: optional_id(fields[7]),
        azimuth_deg: finite(fields[8])?,
        elevation_deg: finite(fields[9])?,
    })
}

fn finite(field: &str) -> Option<f64> {
    field.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn optional_id(field: &str) -> Option<i64> {
    if field.is_empty() {
        return None;
    }
    field.parse().ok()
}
