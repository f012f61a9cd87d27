use log::{debug, trace};

use crate::config::ArcConfig;
use crate::geometry::percent_to_interval;
use crate::progress::ProgressUnit;

/// Shift that moves angle 0 from 3 o'clock to 12 o'clock
pub const RETURN_ZERO_ANGLE: i32 = -90;

/// Angles (degrees) for one progress arc
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcAngles {
    pub start: f64,
    pub end: f64,
    /// Sector correction already subtracted from `end`
    pub sector_correction: f64,
    pub clockwise: bool,
}

impl ArcAngles {
    pub fn start_radians(&self) -> f64 {
        self.start.to_radians()
    }

    pub fn end_radians(&self) -> f64 {
        self.end.to_radians()
    }

    /// Signed distance from `start` to `end`
    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }
}

/// Turns progress values into arc angles for a configured ring.
///
/// The only state is the last configuration and what is derived from it;
/// every computation is a pure function of that state and its argument.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcCalculator {
    config: Option<ArcConfig>,
    original_angle: i64,
    inner_start_angle: i64,
    inner_end_angle: i64,
    clockwise: bool,
    circular_sector_angle: i64,
}

impl Default for ArcCalculator {
    /// Unconfigured ring: a full counter-clockwise turn whose stored bounds
    /// have not been shifted by [`RETURN_ZERO_ANGLE`].
    fn default() -> Self {
        Self {
            config: None,
            original_angle: 0,
            inner_start_angle: 0,
            inner_end_angle: 360,
            clockwise: false,
            circular_sector_angle: sector_correction(0, 360, false),
        }
    }
}

impl ArcCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ArcConfig) -> Self {
        let mut calculator = Self::new();
        calculator.configure(config);
        calculator
    }

    /// Replace the whole configuration.
    pub fn configure(&mut self, config: ArcConfig) {
        let zero = i64::from(RETURN_ZERO_ANGLE);
        let original = i64::from(config.original_angle);

        self.inner_start_angle = i64::from(config.inner_start_angle) + zero;
        self.inner_end_angle = i64::from(config.inner_end_angle) + zero;
        self.clockwise = config.clockwise;
        self.original_angle = if original < 0 {
            original % 360 + i64::from(config.inner_end_angle)
        } else {
            original % 360
        };
        self.circular_sector_angle =
            sector_correction(self.inner_start_angle, self.inner_end_angle, self.clockwise);

        debug!(
            "configured arc: track {}..{}, original {}, clockwise {}, sector {}",
            self.inner_start_angle,
            self.inner_end_angle,
            self.original_angle,
            self.clockwise,
            self.circular_sector_angle
        );

        self.config = Some(config);
    }

    pub fn config(&self) -> Option<&ArcConfig> {
        self.config.as_ref()
    }

    pub fn clockwise(&self) -> bool {
        self.clockwise
    }

    /// Normalized rotation offset of the ring
    pub fn original_angle(&self) -> i64 {
        self.original_angle
    }

    /// Correction for track spans that are not a whole turn
    pub fn circular_sector_angle(&self) -> i64 {
        self.circular_sector_angle
    }

    /// Stored track bounds, i.e. the full track arc before [`fix_angle`](Self::fix_angle).
    ///
    /// An empty progress ring is drawn from the start bound to itself.
    pub fn track_angles(&self) -> (i64, i64) {
        (self.inner_start_angle, self.inner_end_angle)
    }

    /// Rotate by the ring offset and return to 12 o'clock
    pub fn fix_angle(&self, angle: f64) -> f64 {
        angle + self.original_angle as f64 + f64::from(RETURN_ZERO_ANGLE)
    }

    /// Marker orientation for 0% progress
    pub fn marker_angle(&self) -> f64 {
        self.fix_angle(0.0)
    }

    /// Arc for an explicit pair of angles, no sector correction.
    pub fn angles_between(&self, start: f64, end: f64) -> ArcAngles {
        ArcAngles {
            start: self.fix_angle(start),
            end: self.fix_angle(end),
            sector_correction: 0.0,
            clockwise: self.clockwise,
        }
    }

    /// Arc for a progress value. Out-of-range progress is clamped.
    pub fn angle_for_progress(&self, unit: ProgressUnit) -> ArcAngles {
        let mapped = percent_to_interval(
            unit.clamped(),
            self.inner_start_angle as f64,
            self.inner_end_angle as f64,
        );
        let end_angle = if self.clockwise {
            -(mapped + 360.0)
        } else {
            mapped
        };

        let start = self.fix_angle(0.0);
        let mut end = self.fix_angle(end_angle);

        if !self.clockwise && end >= f64::from(RETURN_ZERO_ANGLE) {
            end += 360.0;
        }

        let sector_correction = self.circular_sector_angle as f64;
        end -= sector_correction;

        trace!("{unit} -> {start}..{end} (sector {sector_correction})");

        ArcAngles {
            start,
            end,
            sector_correction,
            clockwise: self.clockwise,
        }
    }
}

fn sector_correction(start: i64, end: i64, clockwise: bool) -> i64 {
    let mut diff = (end - start - 360) % 360 / 2;
    if diff != 0 && clockwise {
        diff -= 180;
    }
    diff
}
