//! Chromatic adaptation between D65 and illuminant C
//!
//! The Munsell renotation data is defined under CIE illuminant C while
//! the public API speaks D65 XYZ. Colors are moved between the two whites
//! with palette's Bradford transform.

use palette::Xyz;
use palette::chromatic_adaptation::{AdaptInto, Method};
use palette::white_point::{C, D65};

/// Adapt a D65 XYZ color to illuminant C
pub fn d65_to_c(xyz: Xyz<D65, f64>) -> Xyz<C, f64> {
    xyz.adapt_into_using(Method::Bradford)
}

/// Adapt an illuminant C XYZ color to D65
pub fn c_to_d65(xyz: Xyz<C, f64>) -> Xyz<D65, f64> {
    xyz.adapt_into_using(Method::Bradford)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{d65, illuminant_c};

    fn assert_close(a: [f64; 3], b: [f64; 3], tol: f64) {
        for i in 0..3 {
            assert!((a[i] - b[i]).abs() < tol, "{:?} vs {:?}", a, b);
        }
    }

    #[test]
    fn test_white_points_map_onto_each_other() {
        let [x, y, z] = d65::WHITE_POINT_XYZ;
        let c = d65_to_c(Xyz::new(x, y, z));
        assert_close([c.x, c.y, c.z], illuminant_c::WHITE_POINT_XYZ, 1e-4);

        let [x, y, z] = illuminant_c::WHITE_POINT_XYZ;
        let d = c_to_d65(Xyz::new(x, y, z));
        assert_close([d.x, d.y, d.z], d65::WHITE_POINT_XYZ, 1e-4);
    }

    #[test]
    fn test_adapted_white_has_illuminant_c_chromaticity() {
        let [x, y, z] = d65::WHITE_POINT_XYZ;
        let c = d65_to_c(Xyz::new(x, y, z));
        let sum = c.x + c.y + c.z;
        assert!((c.x / sum - illuminant_c::CHROMATICITY_X).abs() < 1e-4);
        assert!((c.y / sum - illuminant_c::CHROMATICITY_Y).abs() < 1e-4);
        assert!((c.y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_adaptation_round_trip() {
        let original = Xyz::<D65, f64>::new(0.2, 0.35, 0.6);
        let back = c_to_d65(d65_to_c(original));
        assert_close([back.x, back.y, back.z], [0.2, 0.35, 0.6], 1e-10);
    }

    #[test]
    fn test_adaptation_is_linear() {
        let a = Xyz::<D65, f64>::new(0.1, 0.2, 0.3);
        let b = d65_to_c(Xyz::new(0.2, 0.4, 0.6));
        let a = d65_to_c(a);
        assert_close([2.0 * a.x, 2.0 * a.y, 2.0 * a.z], [b.x, b.y, b.z], 1e-12);

        let black = d65_to_c(Xyz::new(0.0, 0.0, 0.0));
        assert_close([black.x, black.y, black.z], [0.0; 3], 1e-15);
    }

    #[test]
    fn test_descriptor_chromaticity_matches_white_point() {
        for (white, (cx, cy)) in [
            (
                illuminant_c::WHITE_POINT_XYZ,
                (illuminant_c::CHROMATICITY_X, illuminant_c::CHROMATICITY_Y),
            ),
            (d65::WHITE_POINT_XYZ, (d65::CHROMATICITY_X, d65::CHROMATICITY_Y)),
        ] {
            let [x, y, z] = white;
            let sum = x + y + z;
            assert!((x / sum - cx).abs() < 1e-4);
            assert!((y / sum - cy).abs() < 1e-4);
        }
    }
}
