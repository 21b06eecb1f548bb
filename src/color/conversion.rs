//! Munsell conversion facade
//!
//! Provides conversions between Munsell notation and device colors:
//! - D65 XYZ to/from Munsell, adapting to illuminant C on the way
//! - xyY under illuminant C to/from Munsell
//! - sRGB to/from Munsell with gamut clipping
//! - Hex color representation

use palette::convert::FromColorUnclamped;
use palette::white_point::{C, D65};
use palette::{Srgb, Xyz, Yxy};

use crate::calibration::{c_to_d65, d65_to_c};
use crate::config::ConverterConfig;
use crate::munsell::bridge;
use crate::munsell::{Munsell, MunsellTable};
use crate::{Conversion, MunsellError, Result};

/// Converter between Munsell notation and CIE / sRGB colors
///
/// Holds a validated configuration and a reference to the chromaticity
/// table. The table is immutable, so one converter can be shared freely
/// across threads.
#[derive(Debug, Clone)]
pub struct MunsellConverter<'t> {
    config: ConverterConfig,
    table: &'t MunsellTable,
}

impl Default for MunsellConverter<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl MunsellConverter<'static> {
    /// Create a converter over the embedded table with default settings
    pub fn new() -> Self {
        Self {
            config: ConverterConfig::default(),
            table: MunsellTable::standard(),
        }
    }

    /// Create a converter over the embedded table
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration fails validation
    pub fn with_config(config: ConverterConfig) -> Result<Self> {
        Self::with_table(MunsellTable::standard(), config)
    }
}

impl<'t> MunsellConverter<'t> {
    /// Create a converter over a caller-built table
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration fails validation
    pub fn with_table(table: &'t MunsellTable, config: ConverterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, table })
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    pub fn table(&self) -> &'t MunsellTable {
        self.table
    }

    /// Convert D65 XYZ to Munsell
    ///
    /// # Arguments
    ///
    /// * `xyz` - Color in CIE XYZ, D65 white, Y in [0, 1]
    ///
    /// # Returns
    ///
    /// Munsell color and whether it had to be extrapolated beyond the table
    pub fn xyz_to_munsell(&self, xyz: Xyz<D65, f64>) -> Conversion<Munsell> {
        let yxy = Yxy::<C, f64>::from_color_unclamped(d65_to_c(xyz));
        self.yxy_to_munsell(yxy)
    }

    /// Convert Munsell to D65 XYZ
    ///
    /// # Arguments
    ///
    /// * `color` - Munsell color; Value is clamped to [0, 10]
    ///
    /// # Returns
    ///
    /// XYZ color and whether the chroma exceeded the tabulated gamut
    pub fn munsell_to_xyz(&self, color: Munsell) -> Conversion<Xyz<D65, f64>> {
        self.munsell_to_yxy(color)
            .map(|yxy| c_to_d65(Xyz::<C, f64>::from_color_unclamped(yxy)))
    }

    /// Convert xyY under illuminant C to Munsell
    pub fn yxy_to_munsell(&self, yxy: Yxy<C, f64>) -> Conversion<Munsell> {
        let (color, saturated) =
            bridge::yxy_to_munsell(self.table, &self.config, yxy.luma, [yxy.x, yxy.y]);
        Conversion { color, saturated }
    }

    /// Convert Munsell to xyY under illuminant C
    pub fn munsell_to_yxy(&self, color: Munsell) -> Conversion<Yxy<C, f64>> {
        let (luma, [x, y], saturated) = bridge::munsell_to_yxy(self.table, &self.config, color);
        Conversion {
            color: Yxy::new(x, y, luma),
            saturated,
        }
    }

    /// Convert sRGB (components in [0, 1]) to Munsell
    pub fn srgb_to_munsell(&self, srgb: Srgb<f64>) -> Conversion<Munsell> {
        self.xyz_to_munsell(Xyz::from_color_unclamped(srgb))
    }

    /// Convert Munsell to sRGB with gamut clipping
    ///
    /// # Returns
    ///
    /// sRGB color clamped to the unit cube. `saturated` only reflects the
    /// Munsell table gamut, not the sRGB clipping.
    pub fn munsell_to_srgb(&self, color: Munsell) -> Conversion<Srgb<f64>> {
        self.munsell_to_xyz(color).map(|xyz| {
            let srgb = Srgb::<f64>::from_color_unclamped(xyz);
            Srgb::new(
                srgb.red.clamp(0.0, 1.0),
                srgb.green.clamp(0.0, 1.0),
                srgb.blue.clamp(0.0, 1.0),
            )
        })
    }

    /// Convert sRGB to hexadecimal color string
    ///
    /// # Returns
    ///
    /// Hex color string (e.g., "#FF0000")
    pub fn srgb_to_hex(&self, srgb: Srgb<f64>) -> String {
        let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02X}{:02X}{:02X}",
            channel(srgb.red),
            channel(srgb.green),
            channel(srgb.blue)
        )
    }

    /// Parse hexadecimal color string to sRGB
    ///
    /// # Arguments
    ///
    /// * `hex` - Hex color string (e.g., "#FF0000" or "FF0000")
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the string is not six hex digits
    pub fn hex_to_srgb(&self, hex: &str) -> Result<Srgb<f64>> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(MunsellError::invalid_parameter("hex", hex));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map(|c| c as f64 / 255.0)
                .map_err(|_| MunsellError::invalid_parameter("hex", hex))
        };

        Ok(Srgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converter_creation() {
        let converter = MunsellConverter::new();
        assert_eq!(converter.config(), &ConverterConfig::default());
        assert!(std::ptr::eq(converter.table(), MunsellTable::standard()));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ConverterConfig {
            search_window: 0,
            ..ConverterConfig::default()
        };
        assert!(MunsellConverter::with_config(config).is_err());
    }

    #[test]
    fn test_xyz_round_trip() {
        let converter = MunsellConverter::new();
        let original = Munsell::new(5.0, 5.0, 4.0);
        let xyz = converter.munsell_to_xyz(original);
        assert!(!xyz.saturated);
        let back = converter.xyz_to_munsell(xyz.color);
        assert!(!back.saturated);
        assert!((back.color.hue - 5.0).abs() < 0.1);
        assert!((back.color.value - 5.0).abs() < 0.1);
        assert!((back.color.chroma - 4.0).abs() < 0.1);
    }

    #[test]
    fn test_yxy_achromatic_is_illuminant_c() {
        let converter = MunsellConverter::new();
        let yxy = converter.munsell_to_yxy(Munsell::achromatic(7.0)).color;
        assert!((yxy.x - 0.31006).abs() < 1e-12);
        assert!((yxy.y - 0.31616).abs() < 1e-12);
    }

    #[test]
    fn test_d65_white_is_neutral() {
        let converter = MunsellConverter::new();
        let white = converter.xyz_to_munsell(Xyz::new(0.95047, 1.0, 1.08883));
        assert!(!white.saturated);
        assert!(white.color.is_achromatic());
        assert!(white.color.value > 9.5);
    }

    #[test]
    fn test_srgb_gray_is_neutral() {
        let converter = MunsellConverter::new();
        let gray = converter.srgb_to_munsell(Srgb::new(0.5, 0.5, 0.5));
        assert!(gray.color.chroma < 0.05, "chroma {}", gray.color.chroma);
        assert!((gray.color.value - 5.0).abs() < 0.5);
    }

    #[test]
    fn test_srgb_primaries_land_in_their_hue_families() {
        let converter = MunsellConverter::new();
        for (srgb, lo, hi) in [
            (Srgb::new(1.0, 0.0, 0.0), 5.0, 10.0),
            (Srgb::new(0.0, 1.0, 0.0), 37.5, 42.5),
            (Srgb::new(0.0, 0.0, 1.0), 72.5, 82.5),
        ] {
            let hue = converter.srgb_to_munsell(srgb).color.hue;
            assert!(hue > lo && hue < hi, "{:?} -> hue {}", srgb, hue);
        }
    }

    #[test]
    fn test_munsell_to_srgb_is_clipped() {
        let converter = MunsellConverter::new();
        let srgb = converter.munsell_to_srgb(Munsell::new(5.0, 4.0, 24.0)).color;
        for c in [srgb.red, srgb.green, srgb.blue] {
            assert!((0.0..=1.0).contains(&c));
        }
        assert!(srgb.red > srgb.green && srgb.red > srgb.blue);
    }

    #[test]
    fn test_srgb_to_hex() {
        let converter = MunsellConverter::new();
        assert_eq!(converter.srgb_to_hex(Srgb::new(1.0, 0.0, 0.0)), "#FF0000");
        assert_eq!(converter.srgb_to_hex(Srgb::new(0.0, 1.0, 0.0)), "#00FF00");
        assert_eq!(converter.srgb_to_hex(Srgb::new(0.0, 0.0, 1.2)), "#0000FF");
    }

    #[test]
    fn test_hex_to_srgb() {
        let converter = MunsellConverter::new();
        let red = converter.hex_to_srgb("#FF0000").unwrap();
        assert!((red.red - 1.0).abs() < 1e-12);
        assert!(red.green < 1e-12 && red.blue < 1e-12);

        let teal = converter.hex_to_srgb("008080").unwrap();
        assert!((teal.green - 128.0 / 255.0).abs() < 1e-12);

        assert!(converter.hex_to_srgb("#FF").is_err());
        assert!(converter.hex_to_srgb("#GGGGGG").is_err());
        assert!(converter.hex_to_srgb("#ÄÄÄÄ").is_err());
    }
}
