//! # Munsell Engine
//!
//! A Rust crate for converting between CIE XYZ and Munsell HVC notation.
//!
//! This library maps colors to and from the Munsell system by:
//! - Adapting D65 XYZ to illuminant C, the white of the renotation data
//! - Inverting the Value/luminance polynomial by Newton-Raphson
//! - Interpolating hue and chroma within a per-Value chromaticity table
//! - Flagging results that had to be extrapolated beyond the table
//!
//! ## Example
//!
//! ```rust
//! use munsell_engine::{Munsell, MunsellConverter};
//!
//! let converter = MunsellConverter::new();
//! let xyz = converter.munsell_to_xyz("5R 5.0/4.0".parse()?);
//! let back = converter.xyz_to_munsell(xyz.color);
//! println!("{} (saturated: {})", back.color, back.saturated);
//! # Ok::<(), munsell_engine::MunsellError>(())
//! ```

use palette::Xyz;
use palette::white_point::D65;
use serde::{Deserialize, Serialize};

pub mod calibration;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod munsell;

pub use color::MunsellConverter;
pub use config::ConverterConfig;
pub use error::{MunsellError, Result};
pub use munsell::{
    Munsell, MunsellTable, hue_name_to_hue_value, hue_value_to_hue_name, value_to_y, y_to_value,
};

/// Result of a conversion together with its gamut status
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Conversion<T> {
    /// The converted color
    pub color: T,
    /// The input lay outside the tabulated Munsell gamut and the result
    /// was extrapolated or clamped to the boundary
    pub saturated: bool,
}

impl<T> Conversion<T> {
    /// Transform the color, keeping the gamut status
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Conversion<U> {
        Conversion {
            color: f(self.color),
            saturated: self.saturated,
        }
    }
}

/// Convert D65 XYZ to Munsell with the embedded table and default settings
///
/// # Arguments
///
/// * `xyz` - `[X, Y, Z]` with D65 white, Y in [0, 1]
///
/// # Returns
///
/// A `Conversion` holding the Munsell color (hue in [0, 100), value in
/// [0, 10], chroma >= 0) and the saturation flag
pub fn from_xyz(xyz: [f64; 3]) -> Conversion<Munsell> {
    let [x, y, z] = xyz;
    MunsellConverter::new().xyz_to_munsell(Xyz::new(x, y, z))
}

/// Convert Munsell to D65 XYZ with the embedded table and default settings
pub fn to_xyz(color: Munsell) -> Conversion<[f64; 3]> {
    MunsellConverter::new()
        .munsell_to_xyz(color)
        .map(|xyz: Xyz<D65, f64>| [xyz.x, xyz.y, xyz.z])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_serialization() {
        let result = Conversion {
            color: Munsell::new(72.5, 4.0, 10.0),
            saturated: true,
        };

        let json = serde_json::to_string(&result).unwrap();
        let deserialized: Conversion<Munsell> = serde_json::from_str(&json).unwrap();

        assert_eq!(result, deserialized);
    }

    #[test]
    fn test_xyz_conversion_serialization() {
        let result = MunsellConverter::new().munsell_to_xyz(Munsell::new(5.0, 5.0, 4.0));
        let json = serde_json::to_string(&result).unwrap();
        let deserialized: Conversion<Xyz<D65, f64>> = serde_json::from_str(&json).unwrap();

        assert_eq!(result.saturated, deserialized.saturated);
        assert!((result.color.x - deserialized.color.x).abs() < 1e-12);
        assert!((result.color.y - deserialized.color.y).abs() < 1e-12);
        assert!((result.color.z - deserialized.color.z).abs() < 1e-12);
    }

    #[test]
    fn test_map_keeps_flag() {
        let c = Conversion {
            color: 2,
            saturated: true,
        };
        assert_eq!(c.map(|v| v * 3), Conversion { color: 6, saturated: true });
    }
}
