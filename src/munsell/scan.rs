//! Per-level scans between chromaticity and (hue, chroma).
//!
//! `scan_hue_chroma` finds the table cell enclosing a chromaticity and
//! inverts its bilinear interpolation; `scan_xy` runs the other way,
//! interpolating a chromaticity from the cell around a (hue, chroma).

use log::trace;

use super::geometry::{self, Xy, add, inside, inverse_bilinear, sub};
use super::table::MunsellTable;
use crate::constants::illuminant_c;
use crate::constants::munsell::MAX_HUE;
use crate::constants::table::{CHROMA_STEP, HUE_STEPS, HUE_STEP_T, MAX_CHROMA};

/// Hue and chroma found for a chromaticity at one level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct HueChroma {
    pub hue: f64,
    pub chroma: f64,
    /// Extrapolated from nearest samples rather than interpolated in a cell
    pub saturated: bool,
}

/// Chromaticity interpolated for a (hue, chroma) at one level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ScanXy {
    pub xy: Xy,
    /// Interpolated strictly within tabulated samples
    pub inside: bool,
}

/// Circular blend of two hues on the 0..100 circle, taking the short way
/// round.
pub(crate) fn lerp_hue(h1: f64, h2: f64, r: f64) -> f64 {
    let (mut a, mut b) = (h1, h2);
    if b - a > MAX_HUE / 2.0 {
        a += MAX_HUE;
    } else if a - b > MAX_HUE / 2.0 {
        b += MAX_HUE;
    }
    (a + (b - a) * r).rem_euclid(MAX_HUE)
}

/// Hue and chroma of chromaticity `p` at level `vi`.
///
/// Cells are scanned in a window of `window` hue steps either side of the
/// nearest sample. When the point lies in no cell it is beyond the
/// tabulated gamut, and the result is extrapolated from the two nearest
/// samples with `saturated` set.
pub(crate) fn scan_hue_chroma(table: &MunsellTable, vi: usize, p: Xy, window: i32) -> HueChroma {
    let half_circle = HUE_STEPS as i32 / 2;

    if let Some(seed) = table.nearest(vi, p, 1).first().map(|n| *n.value) {
        // Every hue shares the achromatic sample, so it says nothing about hue
        let cells = if seed.chroma == 0 {
            half_circle
        } else {
            window.min(half_circle)
        };
        let mut found = scan_window(table, vi, p, seed.hue_t, cells);

        // The first chroma ring is uneven enough that its nearest sample
        // can lie several hue steps away from the enclosing cell
        if found.is_none() && seed.chroma <= CHROMA_STEP && cells < half_circle {
            found = scan_window(table, vi, p, seed.hue_t, half_circle);
        }

        if let Some((hue, chroma)) = found {
            return HueChroma {
                hue,
                chroma,
                saturated: false,
            };
        }
    }

    trace!("[{}, {}] outside level {}, extrapolating", p[0], p[1], vi);
    interpolate_neighbors(table, vi, p)
}

/// First cell within `cells` hue bands of `center` that encloses `p`.
fn scan_window(table: &MunsellTable, vi: usize, p: Xy, center: i32, cells: i32) -> Option<(f64, f64)> {
    let span = cells * HUE_STEP_T;
    (center - span..=center + span)
        .step_by(HUE_STEP_T as usize)
        .find_map(|ht_l| scan_one_hue_chroma(table, vi, p, ht_l))
}

/// Scan the cells of hue band [`ht_l`, `ht_l` + 25] outward in chroma.
fn scan_one_hue_chroma(table: &MunsellTable, vi: usize, p: Xy, ht_l: i32) -> Option<(f64, f64)> {
    let ht_u = ht_l + HUE_STEP_T;

    for c_l in (0..=MAX_CHROMA).step_by(CHROMA_STEP as usize) {
        let c_u = c_l + CHROMA_STEP;
        let (a, b) = match (table.sample(vi, ht_l, c_l), table.sample(vi, ht_u, c_l)) {
            (Some(a), Some(b)) => (a, b),
            // Chroma only grows outward, nothing further in this band
            (None, None) => break,
            _ => continue,
        };
        // A boundary through the cell is closed off as a parallelogram
        let (c, d) = match (table.sample(vi, ht_u, c_u), table.sample(vi, ht_l, c_u)) {
            (Some(c), Some(d)) => (c, d),
            (Some(c), None) => (c, add(a, sub(c, b))),
            (None, Some(d)) => (add(b, sub(d, a)), d),
            (None, None) => continue,
        };

        if !inside(p, a, c, d) && !inside(p, a, b, c) {
            continue;
        }
        if let Some((h, v)) = inverse_bilinear(p, a, b, c, d) {
            let hue = ((HUE_STEP_T as f64 * h + ht_l as f64) / 10.0).rem_euclid(MAX_HUE);
            let chroma = CHROMA_STEP as f64 * v + c_l as f64;
            return Some((hue, chroma));
        }
    }
    None
}

/// Blend hue and chroma of the two samples nearest `p`, weighted by distance.
fn interpolate_neighbors(table: &MunsellTable, vi: usize, p: Xy) -> HueChroma {
    let near = table.nearest(vi, p, 2);
    let [n1, n2] = near.as_slice() else {
        return HueChroma {
            hue: 0.0,
            chroma: 0.0,
            saturated: true,
        };
    };

    let total = n1.distance + n2.distance;
    let r = if total > 0.0 { n1.distance / total } else { 0.0 };

    let (mut h1, mut h2) = (n1.value.hue(), n2.value.hue());
    if n1.value.chroma == 0 {
        h1 = h2;
    } else if n2.value.chroma == 0 {
        h2 = h1;
    }
    let (c1, c2) = (n1.value.chroma as f64, n2.value.chroma as f64);

    HueChroma {
        hue: lerp_hue(h1, h2, r),
        chroma: c1 + (c2 - c1) * r,
        saturated: true,
    }
}

/// Chromaticity of (`hue`, `chroma`) at level `vi`.
///
/// Within the gamut on both bracketing hue steps the cell is bilinearly
/// interpolated. When one side runs out, its outermost sample closes a
/// triangle with the other side; when both do, the two outermost samples
/// are blended and the chroma is effectively clamped to the boundary.
pub(crate) fn scan_xy(table: &MunsellTable, vi: usize, hue: f64, chroma: f64) -> ScanXy {
    let white = [illuminant_c::CHROMATICITY_X, illuminant_c::CHROMATICITY_Y];
    let ht = hue.rem_euclid(MAX_HUE) * 10.0;
    let step = HUE_STEP_T as f64;

    let mut ht_l = (ht / step).floor() as i32 * HUE_STEP_T;
    let mut ht_u = if ht - ht_l as f64 > 1e-9 {
        ht_l + HUE_STEP_T
    } else {
        ht_l
    };
    let mut walked = 0;
    while table.max_chroma(vi, ht_l) == 0 && walked < HUE_STEPS {
        ht_l -= HUE_STEP_T;
        walked += 1;
    }
    walked = 0;
    while table.max_chroma(vi, ht_u) == 0 && walked < HUE_STEPS {
        ht_u += HUE_STEP_T;
        walked += 1;
    }
    if table.max_chroma(vi, ht_l) == 0 {
        return ScanXy {
            xy: white,
            inside: false,
        };
    }

    let rh = if ht_u == ht_l {
        0.0
    } else {
        (ht - ht_l as f64) / (ht_u - ht_l) as f64
    };
    let rc = (chroma - (chroma / CHROMA_STEP as f64).floor() * CHROMA_STEP as f64)
        / CHROMA_STEP as f64;

    let boundary = |ht: i32| table.sample(vi, ht, table.max_chroma(vi, ht));
    let lower = column(table, vi, ht_l, chroma);
    let upper = column(table, vi, ht_u, chroma);

    let result = match (lower, upper) {
        (Some((li, lo)), Some((ui, uo))) => Some(ScanXy {
            xy: geometry::interpolate4(li, lo, ui, uo, rh, rc),
            inside: true,
        }),
        (None, Some((ui, uo))) => boundary(ht_l).map(|bl| ScanXy {
            xy: geometry::interpolate3(bl, ui, uo, rh, rc),
            inside: false,
        }),
        (Some((li, lo)), None) => boundary(ht_u).map(|bu| ScanXy {
            xy: geometry::interpolate3(bu, li, lo, 1.0 - rh, rc),
            inside: false,
        }),
        (None, None) => boundary(ht_l).zip(boundary(ht_u)).map(|(bl, bu)| ScanXy {
            xy: geometry::interpolate2(bl, bu, rh),
            inside: false,
        }),
    };
    result.unwrap_or(ScanXy {
        xy: white,
        inside: false,
    })
}

/// The two samples bracketing `chroma` at grid hue `ht`, or `None` when
/// `chroma` exceeds that hue's gamut.
fn column(table: &MunsellTable, vi: usize, ht: i32, chroma: f64) -> Option<(Xy, Xy)> {
    let max_c = table.max_chroma(vi, ht);
    if chroma > max_c as f64 {
        return None;
    }
    let c_lo = (((chroma / CHROMA_STEP as f64).floor() as i32) * CHROMA_STEP).min(max_c);
    let c_hi = (c_lo + CHROMA_STEP).min(max_c);
    Some((table.sample(vi, ht, c_lo)?, table.sample(vi, ht, c_hi)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::table::HUE_CIRCLE_T;
    use crate::munsell::table::tests::encode;

    fn standard() -> &'static MunsellTable {
        MunsellTable::standard()
    }

    /// Level index of Value 5 in the standard table.
    fn five() -> usize {
        standard().values().iter().position(|&v| v == 5.0).unwrap()
    }

    #[test]
    fn test_lerp_hue_wraps() {
        let h = lerp_hue(98.0, 2.0, 0.5);
        assert!(h.abs() < 1e-9 || (h - 100.0).abs() < 1e-9, "got {}", h);
        assert!((lerp_hue(98.0, 2.0, 0.25) - 99.0).abs() < 1e-9);
        assert!((lerp_hue(2.0, 98.0, 0.75) - 99.0).abs() < 1e-9);
        assert!((lerp_hue(20.0, 30.0, 0.5) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_scan_xy_on_grid_returns_sample() {
        let table = standard();
        let vi = five();
        let got = scan_xy(table, vi, 5.0, 4.0);
        assert!(got.inside);
        assert_eq!(got.xy, table.sample(vi, 50, 4).unwrap());
    }

    #[test]
    fn test_scan_hue_chroma_on_grid_returns_grid_point() {
        let table = standard();
        let vi = five();
        let xy = table.sample(vi, 50, 4).unwrap();
        let hc = scan_hue_chroma(table, vi, xy, 5);
        assert!(!hc.saturated);
        assert!((hc.hue - 5.0).abs() < 1e-6, "hue {}", hc.hue);
        assert!((hc.chroma - 4.0).abs() < 1e-6, "chroma {}", hc.chroma);
    }

    #[test]
    fn test_scans_invert_each_other_inside_gamut() {
        let table = standard();
        for vi in [0, 1, 2, five(), table.level_count() - 2] {
            for &(hue, chroma) in &[(3.7, 1.3), (41.2, 1.9), (77.7, 0.6), (98.9, 1.5)] {
                let fwd = scan_xy(table, vi, hue, chroma);
                assert!(fwd.inside);
                let back = scan_hue_chroma(table, vi, fwd.xy, 5);
                assert!(!back.saturated);
                let dh = (back.hue - hue + 50.0).rem_euclid(100.0) - 50.0;
                assert!(dh.abs() < 1e-6, "level {} hue {} -> {}", vi, hue, back.hue);
                assert!((back.chroma - chroma).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_first_ring_seed_widens_window() {
        // At the darkest level the nearest chroma-2 sample to this point
        // sits at 97.5, more than five hue steps from its cell
        let table = standard();
        let fwd = scan_xy(table, 0, 14.0, 1.0);
        assert!(fwd.inside);
        assert_eq!(table.nearest(0, fwd.xy, 1)[0].value.hue_t, 975);

        let back = scan_hue_chroma(table, 0, fwd.xy, 5);
        assert!(!back.saturated);
        assert!((back.hue - 14.0).abs() < 1e-6, "hue {}", back.hue);
        assert!((back.chroma - 1.0).abs() < 1e-6, "chroma {}", back.chroma);
    }

    #[test]
    fn test_hue_window_crosses_zero() {
        let table = standard();
        let vi = five();
        let fwd = scan_xy(table, vi, 99.5, 3.0);
        let back = scan_hue_chroma(table, vi, fwd.xy, 5);
        assert!(!back.saturated);
        assert!((back.hue - 99.5).abs() < 1e-6, "hue {}", back.hue);
    }

    #[test]
    fn test_saturation_boundary() {
        let table = standard();
        let vi = five();
        let white = [illuminant_c::CHROMATICITY_X, illuminant_c::CHROMATICITY_Y];
        // A hue band whose outer edge is a full cell side
        let ht = (0..HUE_CIRCLE_T)
            .step_by(HUE_STEP_T as usize)
            .find(|&ht| {
                let m = table.max_chroma(vi, ht);
                m >= 4 && m == table.max_chroma(vi, ht + HUE_STEP_T)
            })
            .unwrap();
        let max_c = table.max_chroma(vi, ht);
        let a = table.sample(vi, ht, max_c).unwrap();
        let b = table.sample(vi, ht + HUE_STEP_T, max_c).unwrap();
        let mid = geometry::div(a, b, 0.5);
        let radial = sub(mid, white);
        let len = radial[0].hypot(radial[1]);
        let n = [radial[0] / len, radial[1] / len];
        let eps = 1e-3;

        let just_in = [mid[0] - n[0] * eps, mid[1] - n[1] * eps];
        let just_out = [mid[0] + n[0] * eps, mid[1] + n[1] * eps];

        let hc_in = scan_hue_chroma(table, vi, just_in, 5);
        assert!(!hc_in.saturated);
        assert!(hc_in.chroma < max_c as f64);
        assert!(hc_in.chroma > (max_c - CHROMA_STEP) as f64);

        let hc_out = scan_hue_chroma(table, vi, just_out, 5);
        assert!(hc_out.saturated);
        let band_mid = (ht as f64 + 12.5) / 10.0;
        let dh = (hc_out.hue - band_mid + 50.0).rem_euclid(100.0) - 50.0;
        assert!(dh.abs() < 2.5, "hue {} for band at {}", hc_out.hue, band_mid);
    }

    #[test]
    fn test_far_outside_extrapolates() {
        let table = standard();
        let hc = scan_hue_chroma(table, five(), [0.05, 0.05], 5);
        assert!(hc.saturated);
        assert!(hc.chroma > 0.0);
    }

    #[test]
    fn test_scan_xy_beyond_both_sides_clamps() {
        let table = standard();
        let vi = five();
        let got = scan_xy(table, vi, 5.0, 60.0);
        assert!(!got.inside);
        let edge = table.sample(vi, 50, table.max_chroma(vi, 50)).unwrap();
        assert_eq!(got.xy, edge);
    }

    #[test]
    fn test_scan_xy_beyond_one_side() {
        let table = standard();
        let vi = five();
        // Find adjacent hue steps with different gamut limits
        let ht = (0..HUE_CIRCLE_T)
            .step_by(HUE_STEP_T as usize)
            .find(|&ht| table.max_chroma(vi, ht) < table.max_chroma(vi, ht + HUE_STEP_T))
            .unwrap();
        let chroma = table.max_chroma(vi, ht) as f64 + 1.0;
        let got = scan_xy(table, vi, (ht as f64 + 12.5) / 10.0, chroma);
        assert!(!got.inside);
        assert!(got.xy[0].is_finite() && got.xy[1].is_finite());
    }

    /// One populated hue (index 10) at a single level; everything else
    /// carries only the achromatic sample.
    fn sparse_source() -> Vec<Vec<i32>> {
        let white = (31006, 31616);
        (0..HUE_STEPS)
            .map(|h| {
                if h == 10 {
                    let mut run = encode(&[white.0, 32000, 33000]);
                    run.extend(encode(&[white.1, 32600, 33600]));
                    run
                } else {
                    vec![white.0, white.1]
                }
            })
            .collect()
    }

    #[test]
    fn test_scan_xy_walks_past_empty_hues() {
        let src = sparse_source();
        let runs: Vec<&[i32]> = src.iter().map(Vec::as_slice).collect();
        let table = MunsellTable::new(&[5.0], &[runs.as_slice()]).unwrap();

        assert_eq!(table.max_chroma(0, 250), 4);
        assert_eq!(table.max_chroma(0, 300), 0);

        // Hue 30 has no chromatic samples; both sides walk to hue 25
        let got = scan_xy(&table, 0, 30.0, 2.0);
        assert!(got.inside);
        assert_eq!(got.xy, [0.32, 0.326]);
    }

    #[test]
    fn test_empty_level_degrades() {
        let white = vec![31006, 31616];
        let runs: Vec<&[i32]> = vec![white.as_slice(); HUE_STEPS];
        let table = MunsellTable::new(&[5.0], &[runs.as_slice()]).unwrap();

        let got = scan_xy(&table, 0, 30.0, 2.0);
        assert!(!got.inside);

        let hc = scan_hue_chroma(&table, 0, [0.35, 0.35], 5);
        assert!(hc.saturated);
        assert_eq!(hc.chroma, 0.0);
    }
}
