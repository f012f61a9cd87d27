use std::fs;
use std::path::Path;

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which of the two concentric rings a value refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ring {
    Inner,
    Outer,
}

impl Ring {
    pub const fn other(self) -> Self {
        match self {
            Self::Inner => Self::Outer,
            Self::Outer => Self::Inner,
        }
    }
}

/// Stroke widths for the track ring and the progress ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingStrokes {
    pub track: f64,
    pub progress: f64,
}

/// Configuration of a progress ring.
///
/// Angles are whole degrees. The track span `inner_end_angle - inner_start_angle`
/// is what 100% progress sweeps and may be more or less than a full turn.
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
pub struct ArcConfig {
    /// Rotation offset applied to the whole ring
    #[builder(default = 0)]
    #[serde(default)]
    pub original_angle: i32,
    #[builder(default = false)]
    #[serde(default)]
    pub clockwise: bool,
    #[builder(default = 0)]
    #[serde(default)]
    pub inner_start_angle: i32,
    #[builder(default = 360)]
    #[serde(default = "default_inner_end_angle")]
    pub inner_end_angle: i32,
    /// Track stroke width
    #[builder(default = 10)]
    #[serde(default = "default_line_width")]
    pub line_width: i32,
    /// Distance between the rings. Negative puts the progress on the inner ring.
    #[serde(default)]
    pub line_gap: f64,
}

const fn default_inner_end_angle() -> i32 {
    360
}

const fn default_line_width() -> i32 {
    10
}

impl ArcConfig {
    /// Ring that receives the progress sweep
    pub fn active_ring(&self) -> Ring {
        if self.line_gap < 0.0 {
            Ring::Inner
        } else {
            Ring::Outer
        }
    }

    /// Ring that shows the full track
    pub fn track_ring(&self) -> Ring {
        self.active_ring().other()
    }

    pub fn ring_strokes(&self) -> RingStrokes {
        let track = f64::from(self.line_width);
        let progress = (track - self.line_gap.abs()).max(0.0);
        RingStrokes { track, progress }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}
