//! Plain angle and ring math shared by the calculator and its callers.

/// Map a fraction onto the interval between two angles.
///
/// The fraction scales the interval width and is then shifted by whichever
/// bound is larger, landing on the branch the arc is drawn from.
pub fn percent_to_interval(fraction: f64, start: f64, end: f64) -> f64 {
    let scope = (end - start).abs();
    if end > start {
        fraction * scope - end
    } else {
        fraction * scope - start
    }
}

/// Radius of the largest ring of the given stroke that fits in a `width` x `height` box
pub fn fit_radius(width: f64, height: f64, line_width: f64) -> f64 {
    (width.min(height) - line_width) * 0.5
}

/// Rotation angle (radians) of an affine transform with first column `(a, b)`
pub fn rotation_of(a: f64, b: f64) -> f64 {
    b.atan2(a)
}

/// Relative rotation that turns a marker currently at `current_radians` to face `target_degrees`
pub fn marker_rotation_delta(current_radians: f64, target_degrees: f64) -> f64 {
    target_degrees.to_radians() - current_radians
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn interval_uses_upper_bound_as_offset() {
        assert_eq!(percent_to_interval(0.25, 135.0, 405.0), 67.5 - 405.0);
        assert_eq!(percent_to_interval(0.125, 45.0, -225.0), 33.75 - 45.0);
        assert_eq!(percent_to_interval(1.0, 10.0, 10.0), -10.0);
    }

    #[test]
    fn fit_radius_uses_short_side() {
        assert_eq!(fit_radius(200.0, 120.0, 20.0), 50.0);
        assert_eq!(fit_radius(80.0, 300.0, 0.0), 40.0);
    }

    #[test]
    fn marker_rotation() {
        assert!((rotation_of(0.0, 1.0) - FRAC_PI_2).abs() < 1e-12);
        assert!((rotation_of(-1.0, 0.0) - PI).abs() < 1e-12);
        assert!((marker_rotation_delta(FRAC_PI_2, 180.0) - FRAC_PI_2).abs() < 1e-12);
        assert_eq!(marker_rotation_delta(0.0, 0.0), 0.0);
    }
}
