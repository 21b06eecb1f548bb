//! Reference values for the Munsell conversion engine
//!
//! This module contains compile-time constants for the illuminants,
//! the table geometry and the numerical limits used by the engine.

/// D65 Standard Illuminant Reference
///
/// CIE Standard Illuminant D65, the white point of every XYZ value that
/// enters or leaves the public API.
pub mod d65 {
    /// D65 white point in CIE XYZ color space
    /// Source: CIE 15:2004 Colorimetry, 3rd edition
    pub const WHITE_POINT_XYZ: [f64; 3] = [0.95047, 1.00000, 1.08883];

    /// D65 chromaticity coordinates
    pub const CHROMATICITY_X: f64 = 0.31271;
    pub const CHROMATICITY_Y: f64 = 0.32902;
}

/// CIE Standard Illuminant C
///
/// The Munsell renotation data is specified under illuminant C, so the
/// engine works in xyY relative to this white.
pub mod illuminant_c {
    /// Illuminant C chromaticity coordinates (CIE 1931 2°)
    pub const CHROMATICITY_X: f64 = 0.31006;
    pub const CHROMATICITY_Y: f64 = 0.31616;

    /// Illuminant C white point in CIE XYZ, derived from the chromaticity
    pub const WHITE_POINT_XYZ: [f64; 3] = [0.980705971659919, 1.0, 1.1822494939271255];
}

/// Munsell notation limits
pub mod munsell {
    /// Hue circle length in Munsell hue units
    pub const MAX_HUE: f64 = 100.0;

    /// Chroma below this is treated as achromatic (N)
    pub const MONO_LIMIT_C: f64 = 0.05;

    /// Highest Munsell Value
    pub const MAX_VALUE: f64 = 10.0;

    /// Hue family codes in hue order, each spanning ten hue units
    pub const HUE_NAMES: [&str; 10] = ["R", "YR", "Y", "GY", "G", "BG", "B", "PB", "P", "RP"];
}

/// Chromaticity table geometry
pub mod table {
    /// Hue steps per lightness level (2.5 hue units each)
    pub const HUE_STEPS: usize = 40;

    /// Chroma steps per hue (2 chroma units each)
    pub const CHROMA_STEPS: usize = 26;

    /// Width of one hue step in tenths of a hue unit
    pub const HUE_STEP_T: i32 = 25;

    /// Full hue circle in tenths of a hue unit
    pub const HUE_CIRCLE_T: i32 = 1000;

    /// Width of one chroma step in chroma units
    pub const CHROMA_STEP: i32 = 2;

    /// Largest tabulated chroma
    pub const MAX_CHROMA: i32 = (CHROMA_STEPS as i32 - 1) * CHROMA_STEP;

    /// Fixed-point scale of the encoded chromaticity coordinates
    pub const COORD_SCALE: f64 = 100_000.0;
}

/// Numerical parameters
pub mod numeric {
    /// Newton iteration stops when |v2y(v) - y| drops below this (Y×100 units)
    pub const VALUE_TOLERANCE: f64 = 0.0001;

    /// Hard cap on Newton iterations for the Value inversion
    pub const MAX_VALUE_ITERATIONS: usize = 1000;

    /// Half width, in hue steps, of the window scanned around the nearest sample
    pub const SEARCH_WINDOW: i32 = 5;

    /// Value distance within which a query sits exactly on a table level
    pub const LEVEL_SNAP: f64 = 0.0001;

    /// Distance below which a chromaticity equals the illuminant point
    pub const WHITE_EPSILON: f64 = 1e-6;

    /// Values at or below this are black
    pub const BLACK_VALUE: f64 = 1e-6;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illuminant_c_white_point_matches_chromaticity() {
        let [x, y, z] = illuminant_c::WHITE_POINT_XYZ;
        let sum = x + y + z;
        assert!((x / sum - illuminant_c::CHROMATICITY_X).abs() < 1e-9);
        assert!((y / sum - illuminant_c::CHROMATICITY_Y).abs() < 1e-9);
    }

    #[test]
    fn test_d65_constants() {
        assert!((d65::WHITE_POINT_XYZ[0] - 0.95047).abs() < 1e-9);
        assert!((d65::WHITE_POINT_XYZ[1] - 1.00000).abs() < 1e-9);
        assert!((d65::WHITE_POINT_XYZ[2] - 1.08883).abs() < 1e-9);
    }

    #[test]
    fn test_table_geometry() {
        assert_eq!(table::HUE_STEPS as i32 * table::HUE_STEP_T, table::HUE_CIRCLE_T);
        assert_eq!(table::MAX_CHROMA, 50);
        assert_eq!(munsell::HUE_NAMES.len() * 10, munsell::MAX_HUE as usize);
    }
}
