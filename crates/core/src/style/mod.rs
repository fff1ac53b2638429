use serde::{Deserialize, Serialize};

use crate::Result;

/// Marker styling read fresh on every draw.
///
/// The host owns the live values (sliders, color picker); the core receives a
/// reference at each draw call and never caches a snapshot across frames, so
/// edits take effect on the very next frame without resetting the cursor or
/// the render loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    /// Stroke width of the marker outline, in surface pixels.
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    /// Marker radius in surface pixels.
    #[serde(default = "default_radius")]
    pub radius: f64,
    /// Marker color, an opaque CSS-style color string passed through to the
    /// surface.
    #[serde(default = "default_color")]
    pub color: String,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            stroke_width: default_stroke_width(),
            radius: default_radius(),
            color: default_color(),
        }
    }
}

impl MarkerStyle {
    /// Decodes a style snapshot from JSON, filling omitted fields with the
    /// defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

fn default_stroke_width() -> f64 {
    2.0
}

fn default_radius() -> f64 {
    5.0
}

fn default_color() -> String {
    "#FF0000".to_string()
}
