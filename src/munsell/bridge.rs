//! Munsell HVC <-> xyY under illuminant C
//!
//! Both directions bracket the Munsell Value between two table levels,
//! scan each level, and blend the per-level results by the Value fraction.

use super::geometry::{Xy, distance, div};
use super::notation::Munsell;
use super::scan::{lerp_hue, scan_hue_chroma, scan_xy};
use super::table::{Bracket, MunsellTable};
use super::value::{value_to_y, y_to_value_with};
use crate::config::ConverterConfig;
use crate::constants::munsell::MAX_VALUE;
use crate::constants::{illuminant_c, numeric};

/// Chromaticity of the achromatic axis.
pub(crate) const WHITE: Xy = [illuminant_c::CHROMATICITY_X, illuminant_c::CHROMATICITY_Y];

/// xyY (illuminant C) to Munsell. The flag is set when any scanned level
/// had to extrapolate beyond its samples.
///
/// Non-finite input has no place in the solid and comes back as a flagged
/// neutral.
pub(crate) fn yxy_to_munsell(
    table: &MunsellTable,
    config: &ConverterConfig,
    luma: f64,
    xy: Xy,
) -> (Munsell, bool) {
    if !(luma.is_finite() && xy.iter().all(|c| c.is_finite())) {
        let value = if luma == f64::INFINITY { MAX_VALUE } else { 0.0 };
        return (Munsell::achromatic(value), true);
    }

    let value = y_to_value_with(luma, config.value_tolerance, config.max_value_iterations)
        .clamp(0.0, MAX_VALUE);

    if value <= numeric::BLACK_VALUE || distance(xy, WHITE) < numeric::WHITE_EPSILON {
        return (Munsell::achromatic(value), false);
    }

    let window = config.search_window;
    let (hue, chroma, saturated) = match table.bracket(value, config.level_snap) {
        Bracket::Single(vi) => {
            let hc = scan_hue_chroma(table, vi, xy, window);
            (hc.hue, hc.chroma, hc.saturated)
        }
        Bracket::Pair {
            lower,
            upper,
            ratio,
        } => {
            let lo = scan_hue_chroma(table, lower, xy, window);
            let hi = scan_hue_chroma(table, upper, xy, window);
            // An achromatic side carries no hue
            let hue = if lo.chroma < config.mono_limit_chroma {
                hi.hue
            } else if hi.chroma < config.mono_limit_chroma {
                lo.hue
            } else {
                lerp_hue(lo.hue, hi.hue, ratio)
            };
            let chroma = lo.chroma + (hi.chroma - lo.chroma) * ratio;
            (hue, chroma, lo.saturated || hi.saturated)
        }
    };

    if chroma < config.mono_limit_chroma {
        return (Munsell::achromatic(value), saturated);
    }
    (Munsell::new(hue, value, chroma), saturated)
}

/// Munsell to xyY (illuminant C) as `(Y, [x, y], saturated)`.
///
/// Between levels the flag follows the level that dominates the blend. A
/// NaN Value or chroma, or a non-finite hue, yields the flagged neutral at
/// the given Value (black when the Value itself is NaN).
pub(crate) fn munsell_to_yxy(
    table: &MunsellTable,
    config: &ConverterConfig,
    color: Munsell,
) -> (f64, Xy, bool) {
    if color.value.is_nan() || color.chroma.is_nan() || !color.hue.is_finite() {
        let value = if color.value.is_nan() {
            0.0
        } else {
            color.value.clamp(0.0, MAX_VALUE)
        };
        return (value_to_y(value), WHITE, true);
    }

    let value = color.value.clamp(0.0, MAX_VALUE);
    let chroma = color.chroma.max(0.0);
    let luma = value_to_y(value);

    if value <= numeric::BLACK_VALUE {
        return (luma, WHITE, chroma >= config.mono_limit_chroma);
    }
    if chroma < config.mono_limit_chroma {
        return (luma, WHITE, false);
    }

    match table.bracket(value, config.level_snap) {
        Bracket::Single(vi) => {
            let s = scan_xy(table, vi, color.hue, chroma);
            (luma, s.xy, !s.inside)
        }
        Bracket::Pair {
            lower,
            upper,
            ratio,
        } => {
            let lo = scan_xy(table, lower, color.hue, chroma);
            let hi = scan_xy(table, upper, color.hue, chroma);
            let saturated = if ratio < 0.5 { !lo.inside } else { !hi.inside };
            (luma, div(lo.xy, hi.xy, ratio), saturated)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::table::{HUE_CIRCLE_T, HUE_STEP_T};

    fn run_to(color: Munsell) -> (f64, Xy, bool) {
        munsell_to_yxy(MunsellTable::standard(), &ConverterConfig::default(), color)
    }

    fn run_from(luma: f64, xy: Xy) -> (Munsell, bool) {
        yxy_to_munsell(MunsellTable::standard(), &ConverterConfig::default(), luma, xy)
    }

    #[test]
    fn test_achromatic_ignores_hue() {
        let (y0, xy0, s0) = run_to(Munsell::new(0.0, 6.0, 0.0));
        let (y1, xy1, s1) = run_to(Munsell::new(37.5, 6.0, 0.0));
        assert_eq!((y0, xy0, s0), (y1, xy1, s1));
        assert_eq!(xy0, WHITE);
        assert!((y0 - value_to_y(6.0)).abs() < 1e-12);
        assert!(!s0);
    }

    #[test]
    fn test_black() {
        let (y, xy, saturated) = run_to(Munsell::new(0.0, 0.0, 0.0));
        assert_eq!(y, 0.0);
        assert_eq!(xy, WHITE);
        assert!(!saturated);

        let (_, _, saturated) = run_to(Munsell::new(5.0, 0.0, 4.0));
        assert!(saturated);

        let (m, saturated) = run_from(0.0, [0.0, 0.0]);
        assert_eq!(m.chroma, 0.0);
        assert_eq!(m.value, 0.0);
        assert!(!saturated);
    }

    #[test]
    fn test_round_trip_between_levels() {
        for &(h, v, c) in &[(5.0, 5.0, 4.0), (12.3, 4.4, 3.1), (61.0, 6.7, 2.5), (95.5, 2.5, 1.5)] {
            let (luma, xy, saturated) = run_to(Munsell::new(h, v, c));
            assert!(!saturated, "{} {} {} saturated", h, v, c);
            let (m, saturated) = run_from(luma, xy);
            assert!(!saturated);
            let dh = (m.hue - h + 50.0).rem_euclid(100.0) - 50.0;
            assert!(dh.abs() < 0.1, "hue {} -> {}", h, m.hue);
            assert!((m.value - v).abs() < 0.01, "value {} -> {}", v, m.value);
            assert!((m.chroma - c).abs() < 0.1, "chroma {} -> {}", c, m.chroma);
        }
    }

    #[test]
    fn test_top_level_only() {
        let (luma, xy, saturated) = run_to(Munsell::new(40.0, 10.0, 1.0));
        assert!(!saturated);
        assert!(luma > 1.0);
        let (m, _) = run_from(luma, xy);
        assert!((m.value - 10.0).abs() < 1e-3);

        // Far beyond the top level's small gamut
        let (_, _, saturated) = run_to(Munsell::new(40.0, 10.0, 20.0));
        assert!(saturated);
    }

    #[test]
    fn test_value_above_range_clamps() {
        let (luma, _, _) = run_to(Munsell::new(0.0, 12.0, 0.0));
        assert!((luma - value_to_y(MAX_VALUE)).abs() < 1e-12);
        let (m, _) = run_from(2.0, WHITE);
        assert_eq!(m.value, MAX_VALUE);
    }

    #[test]
    fn test_non_finite_munsell_is_flagged_neutral() {
        let (luma, xy, saturated) = run_to(Munsell::new(5.0, f64::NAN, 2.0));
        assert_eq!(luma, 0.0);
        assert_eq!(xy, WHITE);
        assert!(saturated);

        let (luma, xy, saturated) = run_to(Munsell::new(5.0, 4.0, f64::NAN));
        assert!((luma - value_to_y(4.0)).abs() < 1e-12);
        assert_eq!(xy, WHITE);
        assert!(saturated);

        let (_, xy, saturated) = run_to(Munsell::new(f64::INFINITY, 4.0, 2.0));
        assert_eq!(xy, WHITE);
        assert!(saturated);
    }

    #[test]
    fn test_non_finite_yxy_is_flagged_neutral() {
        let (m, saturated) = run_from(f64::NAN, [0.35, 0.35]);
        assert!(saturated);
        assert!(m.is_achromatic());
        assert_eq!(m.value, 0.0);

        let (m, saturated) = run_from(0.2, [f64::NAN, 0.35]);
        assert!(saturated);
        assert!(m.is_achromatic());

        let (m, saturated) = run_from(f64::INFINITY, WHITE);
        assert!(saturated);
        assert_eq!(m.value, MAX_VALUE);
    }

    #[test]
    fn test_tiny_chroma_collapses_to_neutral() {
        let (luma, _, _) = run_to(Munsell::new(0.0, 5.0, 0.0));
        let near_white = [WHITE[0] + 1e-5, WHITE[1] - 1e-5];
        let (m, saturated) = run_from(luma, near_white);
        assert!(!saturated);
        assert_eq!(m.chroma, 0.0);
        assert_eq!(m.hue, 0.0);
    }

    #[test]
    fn test_saturation_follows_dominant_level() {
        let table = MunsellTable::standard();
        let config = ConverterConfig::default();
        let v8 = table.values().iter().position(|&v| v == 8.0).unwrap();
        let v9 = v8 + 1;
        assert_eq!(table.values()[v9], 9.0);

        // A grid hue whose gamut differs between the two levels
        let ht = (0..HUE_CIRCLE_T)
            .step_by(HUE_STEP_T as usize)
            .find(|&ht| table.max_chroma(v8, ht) != table.max_chroma(v9, ht))
            .unwrap();
        let (lo_max, hi_max) = (table.max_chroma(v8, ht), table.max_chroma(v9, ht));
        let c = lo_max.min(hi_max) as f64 + 1.0;
        let hue = ht as f64 / 10.0;

        let (_, _, near_lower) = munsell_to_yxy(table, &config, Munsell::new(hue, 8.2, c));
        let (_, _, near_upper) = munsell_to_yxy(table, &config, Munsell::new(hue, 8.8, c));
        assert_eq!(near_lower, lo_max < hi_max);
        assert_eq!(near_upper, hi_max < lo_max);
    }
}
