//! Munsell Value <-> relative luminance Y
//!
//! Y is on the [0, 1] scale at the API (Value 10 maps slightly above 1);
//! the polynomial itself is evaluated in percent.

use log::warn;

use crate::constants::numeric;

const LINEAR_SLOPE: f64 = 0.0467 + 0.5602 - 0.1753 + 0.8007;

/// Polynomial in percent: linear below Value 1, cubic above.
fn y_percent(v: f64) -> f64 {
    if v <= 1.0 {
        return v * LINEAR_SLOPE;
    }
    ((0.0467 * v + 0.5602) * v - 0.1753) * v + 0.8007
}

fn dy_percent(v: f64) -> f64 {
    if v <= 1.0 {
        return LINEAR_SLOPE;
    }
    (3.0 * 0.0467 * v + 2.0 * 0.5602) * v - 0.1753
}

/// Relative luminance Y (illuminant C) of Munsell Value `v`.
pub fn value_to_y(v: f64) -> f64 {
    y_percent(v) / 100.0
}

/// Munsell Value of relative luminance `y`, using the default tolerance
/// and iteration cap.
pub fn y_to_value(y: f64) -> f64 {
    y_to_value_with(y, numeric::VALUE_TOLERANCE, numeric::MAX_VALUE_ITERATIONS)
}

/// Munsell Value of relative luminance `y` by Newton-Raphson from V = 10.
///
/// Luminances at or below the Value 1 threshold are solved directly on
/// the linear segment. The iteration stops once the residual in percent
/// drops below `tolerance`, or after `max_iterations` steps, in which case
/// the last estimate is returned.
pub fn y_to_value_with(y: f64, tolerance: f64, max_iterations: usize) -> f64 {
    let target = y * 100.0;
    if target <= LINEAR_SLOPE {
        return target / LINEAR_SLOPE;
    }

    let mut v = 10.0;
    for _ in 0..max_iterations {
        let f = y_percent(v) - target;
        if f.abs() < tolerance {
            return v;
        }
        v -= f / dy_percent(v);
    }
    warn!(
        "Value inversion for Y = {} stopped after {} iterations at V = {}",
        y, max_iterations, v
    );
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_to_y_anchors() {
        assert_eq!(value_to_y(0.0), 0.0);
        assert!((value_to_y(1.0) - LINEAR_SLOPE / 100.0).abs() < 1e-12);
        // Value 5 is a mid grey close to 20% reflectance
        let y5 = value_to_y(5.0);
        assert!(y5 > 0.18 && y5 < 0.21, "Y(5) = {}", y5);
        assert!(value_to_y(10.0) > 1.0);
    }

    #[test]
    fn test_segments_meet_at_value_one() {
        let below = value_to_y(1.0 - 1e-9);
        let above = value_to_y(1.0 + 1e-9);
        assert!((below - above).abs() < 1e-9);
    }

    #[test]
    fn test_value_to_y_strictly_increasing() {
        let mut prev = value_to_y(0.0);
        for i in 1..=1000 {
            let y = value_to_y(i as f64 / 100.0);
            assert!(y > prev, "not increasing at V = {}", i as f64 / 100.0);
            prev = y;
        }
    }

    #[test]
    fn test_y_to_value_inverts_value_to_y() {
        for i in 0..=100 {
            let v = i as f64 / 10.0;
            let back = y_to_value(value_to_y(v));
            assert!((back - v).abs() < 0.001, "V = {} came back as {}", v, back);
        }
    }

    #[test]
    fn test_y_to_value_strictly_increasing() {
        let mut prev = y_to_value(0.0);
        for i in 1..=100 {
            let v = y_to_value(i as f64 / 100.0);
            assert!(v > prev);
            prev = v;
        }
    }

    #[test]
    fn test_iteration_cap_terminates() {
        // A single step cannot converge from V = 10, the cap must still return
        let v = y_to_value_with(0.2, 1e-12, 1);
        assert!(v.is_finite());
        // Negative luminance takes the linear branch
        assert!(y_to_value(-0.5) < 0.0);
    }
}
