// ============================================================================
// CRATE MODULES
// ============================================================================

pub mod calculator;
pub mod config;
pub mod error;
pub mod geometry;
pub mod progress;

// ============================================================================
// PUBLIC API - MAIN INTERFACE
// ============================================================================

pub use calculator::{ArcAngles, ArcCalculator, RETURN_ZERO_ANGLE};
pub use config::{ArcConfig, Ring, RingStrokes};
pub use error::{ConfigError, ParseProgressError};
pub use progress::ProgressUnit;
