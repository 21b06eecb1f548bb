//! Chromaticity sample table and per-level spatial index
//!
//! For every lightness level the table maps (hue step, chroma step) to an
//! xy chromaticity under illuminant C. Hue is addressed in tenths of a hue
//! unit (`hue_t`, multiples of 25 on the grid) and chroma in chroma units
//! (multiples of 2). Entries exist from chroma 0, the illuminant point, up
//! to the per-hue maximum; everything beyond is outside the tabulated gamut.

use std::sync::OnceLock;

use log::debug;

use super::data::{TBL_SRC_MIN, TBL_V};
use super::geometry::Xy;
use super::kdtree::{KdTree, Neighbor};
use crate::constants::table::{
    CHROMA_STEP, CHROMA_STEPS, COORD_SCALE, HUE_CIRCLE_T, HUE_STEPS, HUE_STEP_T,
};
use crate::error::{MunsellError, Result};

/// Grid coordinates of a table sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPoint {
    /// Hue in tenths of a hue unit, in [0, 1000)
    pub hue_t: i32,
    /// Chroma in chroma units
    pub chroma: i32,
}

impl GridPoint {
    pub fn hue(&self) -> f64 {
        self.hue_t as f64 / 10.0
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Level {
    samples: Vec<Option<Xy>>,
    max_chroma: [i32; HUE_STEPS],
    tree: KdTree<GridPoint>,
}

/// Position of a Munsell Value relative to the table levels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Bracket {
    /// The value sits on (or beyond) a single level
    Single(usize),
    /// The value lies between two adjacent levels; `ratio` is the
    /// fraction of the way from `lower` to `upper`
    Pair { lower: usize, upper: usize, ratio: f64 },
}

/// Immutable Munsell chromaticity table with one k-d tree per level.
#[derive(Debug, Clone, PartialEq)]
pub struct MunsellTable {
    values: Vec<f64>,
    levels: Vec<Level>,
}

static STANDARD: OnceLock<MunsellTable> = OnceLock::new();

impl MunsellTable {
    /// Build a table from per-level Values and their encoded sample runs.
    ///
    /// `source[level][hue_step]` holds the x run followed by the y run for
    /// chroma 0, 2, 4, ..., each double-delta encoded in units of 1e-5.
    ///
    /// # Errors
    ///
    /// Returns `MalformedTable` when the level count, hue count or run
    /// lengths are inconsistent, when the Values are not strictly
    /// increasing, or when a sample decodes outside `x > 0, y > 0,
    /// x + y < 1`.
    pub fn new(values: &[f64], source: &[&[&[i32]]]) -> Result<Self> {
        if values.is_empty() || values.len() != source.len() {
            return Err(MunsellError::MalformedTable {
                level: values.len().min(source.len()),
                hue: 0,
                reason: format!("{} values for {} encoded levels", values.len(), source.len()),
            });
        }
        if let Some(i) = values.windows(2).position(|w| !(w[0] < w[1])) {
            return Err(MunsellError::MalformedTable {
                level: i + 1,
                hue: 0,
                reason: "level values are not strictly increasing".to_string(),
            });
        }

        let levels = source
            .iter()
            .enumerate()
            .map(|(vi, runs)| decode_level(vi, runs))
            .collect::<Result<Vec<_>>>()?;

        let sample_count: usize = levels.iter().map(|l| l.tree.len()).sum();
        debug!(
            "Built Munsell table: {} levels, {} samples",
            levels.len(),
            sample_count
        );

        Ok(Self {
            values: values.to_vec(),
            levels,
        })
    }

    /// The embedded table, built on first use and shared afterwards.
    ///
    /// # Panics
    ///
    /// Panics if the embedded source data is malformed, which can only
    /// happen if `data.rs` was corrupted.
    pub fn standard() -> &'static MunsellTable {
        STANDARD.get_or_init(|| {
            MunsellTable::embedded()
                .unwrap_or_else(|e| panic!("embedded Munsell table is corrupt: {}", e))
        })
    }

    /// A fresh copy of the embedded table. Prefer [`MunsellTable::standard`]
    /// unless an owned table is needed.
    pub fn embedded() -> Result<Self> {
        MunsellTable::new(&TBL_V, &TBL_SRC_MIN)
    }

    /// Munsell Value of every level, strictly increasing.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Chromaticity at grid point (`hue_t`, `chroma`) of level `level`.
    ///
    /// `hue_t` wraps around the hue circle. Off-grid or untabulated
    /// positions yield `None`.
    pub fn sample(&self, level: usize, hue_t: i32, chroma: i32) -> Option<Xy> {
        if chroma < 0 || chroma % CHROMA_STEP != 0 || hue_t % HUE_STEP_T != 0 {
            return None;
        }
        let ci = (chroma / CHROMA_STEP) as usize;
        if ci >= CHROMA_STEPS {
            return None;
        }
        let lv = self.levels.get(level)?;
        lv.samples[hue_index(hue_t) * CHROMA_STEPS + ci]
    }

    /// Largest tabulated chroma at grid hue `hue_t` of level `level`;
    /// 0 when only the achromatic sample exists.
    pub fn max_chroma(&self, level: usize, hue_t: i32) -> i32 {
        self.levels
            .get(level)
            .map_or(0, |lv| lv.max_chroma[hue_index(hue_t)])
    }

    /// The `k` samples of level `level` closest to chromaticity `p`.
    pub fn nearest(&self, level: usize, p: Xy, k: usize) -> Vec<Neighbor<'_, GridPoint>> {
        self.levels
            .get(level)
            .map_or_else(Vec::new, |lv| lv.tree.nearest(p, k))
    }

    /// Locate `value` among the levels. Values within `snap` of a level,
    /// or outside the tabulated range, resolve to a single level. NaN
    /// resolves to the first level.
    pub(crate) fn bracket(&self, value: f64, snap: f64) -> Bracket {
        if value.is_nan() {
            return Bracket::Single(0);
        }
        let last = self.values.len() - 1;
        if value >= self.values[last] - snap {
            return Bracket::Single(last);
        }
        if value <= self.values[0] + snap {
            return Bracket::Single(0);
        }
        let upper = self.values.partition_point(|&v| v <= value);
        let lower = upper - 1;
        let (lo, hi) = (self.values[lower], self.values[upper]);
        if value - lo <= snap {
            return Bracket::Single(lower);
        }
        if hi - value <= snap {
            return Bracket::Single(upper);
        }
        Bracket::Pair {
            lower,
            upper,
            ratio: (value - lo) / (hi - lo),
        }
    }
}

fn hue_index(hue_t: i32) -> usize {
    (hue_t.rem_euclid(HUE_CIRCLE_T) / HUE_STEP_T) as usize
}

/// Undo the double delta encoding: two running sums.
fn integrate(encoded: &[i32]) -> Vec<i64> {
    let mut out = Vec::with_capacity(encoded.len());
    let mut delta = 0i64;
    let mut value = 0i64;
    for &d in encoded {
        delta += d as i64;
        value += delta;
        out.push(value);
    }
    out
}

fn decode_level(vi: usize, runs: &[&[i32]]) -> Result<Level> {
    if runs.len() != HUE_STEPS {
        return Err(MunsellError::MalformedTable {
            level: vi,
            hue: runs.len(),
            reason: format!("expected {} hue runs, found {}", HUE_STEPS, runs.len()),
        });
    }

    let mut samples = vec![None; HUE_STEPS * CHROMA_STEPS];
    let mut max_chroma = [0; HUE_STEPS];
    let mut points = Vec::new();

    for (hi, run) in runs.iter().enumerate() {
        if run.is_empty() || run.len() % 2 != 0 || run.len() / 2 > CHROMA_STEPS {
            return Err(MunsellError::MalformedTable {
                level: vi,
                hue: hi,
                reason: format!("run of length {} is not two equal coordinate runs", run.len()),
            });
        }
        let n = run.len() / 2;
        let xs = integrate(&run[..n]);
        let ys = integrate(&run[n..]);
        for (ci, (&x, &y)) in xs.iter().zip(&ys).enumerate() {
            let xy = [x as f64 / COORD_SCALE, y as f64 / COORD_SCALE];
            if !(xy[0] > 0.0 && xy[1] > 0.0 && xy[0] + xy[1] < 1.0) {
                return Err(MunsellError::MalformedTable {
                    level: vi,
                    hue: hi,
                    reason: format!(
                        "chroma {} decodes to [{}, {}], outside the chromaticity triangle",
                        ci as i32 * CHROMA_STEP,
                        xy[0],
                        xy[1]
                    ),
                });
            }
            let point = GridPoint {
                hue_t: hi as i32 * HUE_STEP_T,
                chroma: ci as i32 * CHROMA_STEP,
            };
            samples[hi * CHROMA_STEPS + ci] = Some(xy);
            points.push((xy, point));
        }
        max_chroma[hi] = (n as i32 - 1) * CHROMA_STEP;
    }

    Ok(Level {
        samples,
        max_chroma,
        tree: KdTree::build(points),
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::constants::illuminant_c;

    /// Encode absolute coordinates the way `data.rs` stores them.
    pub(crate) fn encode(values: &[i32]) -> Vec<i32> {
        let d1: Vec<i32> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| if i == 0 { v } else { v - values[i - 1] })
            .collect();
        d1.iter()
            .enumerate()
            .map(|(i, &d)| if i == 0 { d } else { d - d1[i - 1] })
            .collect()
    }

    #[test]
    fn test_integrate_inverts_encoding() {
        let values = [31006, 31890, 32811, 33790];
        let decoded = integrate(&encode(&values));
        assert_eq!(decoded, values.iter().map(|&v| v as i64).collect::<Vec<_>>());
    }

    #[test]
    fn test_standard_table_shape() {
        let table = MunsellTable::standard();
        assert_eq!(table.level_count(), TBL_V.len());
        assert!(table.values().windows(2).all(|w| w[0] < w[1]));
        for vi in 0..table.level_count() {
            for h in 0..HUE_STEPS as i32 {
                let ht = h * HUE_STEP_T;
                let max_c = table.max_chroma(vi, ht);
                assert_eq!(max_c % CHROMA_STEP, 0);
                assert!(table.sample(vi, ht, max_c).is_some());
                assert!(table.sample(vi, ht, max_c + CHROMA_STEP).is_none());
            }
        }
    }

    #[test]
    fn test_chroma_zero_is_illuminant_point() {
        let table = MunsellTable::standard();
        for vi in 0..table.level_count() {
            let xy = table.sample(vi, 375, 0).unwrap();
            assert!((xy[0] - illuminant_c::CHROMATICITY_X).abs() < 1e-9);
            assert!((xy[1] - illuminant_c::CHROMATICITY_Y).abs() < 1e-9);
        }
    }

    #[test]
    fn test_sample_wraps_hue_and_rejects_off_grid() {
        let table = MunsellTable::standard();
        assert_eq!(table.sample(5, -25, 2), table.sample(5, 975, 2));
        assert_eq!(table.sample(5, 1000, 2), table.sample(5, 0, 2));
        assert!(table.sample(5, 10, 2).is_none());
        assert!(table.sample(5, 0, 3).is_none());
        assert!(table.sample(5, 0, -2).is_none());
        assert!(table.sample(99, 0, 0).is_none());
    }

    #[test]
    fn test_every_tree_point_has_a_sample() {
        let table = MunsellTable::standard();
        let xy = table.sample(8, 250, 6).unwrap();
        let hit = table.nearest(8, xy, 1);
        assert_eq!(hit[0].distance, 0.0);
        assert_eq!(
            table.sample(8, hit[0].value.hue_t, hit[0].value.chroma),
            Some(hit[0].point)
        );
    }

    #[test]
    fn test_rebuild_is_identical() {
        let a = MunsellTable::new(&TBL_V, &TBL_SRC_MIN).unwrap();
        let b = MunsellTable::new(&TBL_V, &TBL_SRC_MIN).unwrap();
        assert_eq!(a, b);
        let p = [0.36, 0.33];
        for vi in 0..a.level_count() {
            assert_eq!(a.nearest(vi, p, 3), b.nearest(vi, p, 3));
        }
    }

    #[test]
    fn test_malformed_sources_rejected() {
        let run: &[i32] = &[31006, 0, 31616, 0];
        let level: Vec<&[i32]> = vec![run; HUE_STEPS];

        // Value count does not match level count
        let err = MunsellTable::new(&[1.0, 2.0], &[level.as_slice()]).unwrap_err();
        assert!(matches!(err, MunsellError::MalformedTable { .. }));

        // Values not increasing
        assert!(MunsellTable::new(&[2.0, 1.0], &[level.as_slice(), level.as_slice()]).is_err());

        // Odd run length
        let mut bad = level.clone();
        bad[3] = &[31006, 0, 31616];
        let err = MunsellTable::new(&[1.0], &[bad.as_slice()]).unwrap_err();
        assert!(matches!(err, MunsellError::MalformedTable { level: 0, hue: 3, .. }));

        // Missing hue runs
        assert!(MunsellTable::new(&[1.0], &[&level[..39]]).is_err());

        assert!(MunsellTable::new(&[1.0], &[level.as_slice()]).is_ok());
    }

    #[test]
    fn test_non_physical_sample_rejected() {
        // Chroma 2 at x = -0.01
        let mut negative = encode(&[31006, -1000]);
        negative.extend(encode(&[31616, 30000]));
        // Chroma 2 at x + y > 1
        let mut beyond = encode(&[31006, 60000]);
        beyond.extend(encode(&[31616, 45000]));

        let run: &[i32] = &[31006, 0, 31616, 0];
        let mut level: Vec<&[i32]> = vec![run; HUE_STEPS];

        level[9] = negative.as_slice();
        let err = MunsellTable::new(&[1.0], &[level.as_slice()]).unwrap_err();
        assert!(matches!(err, MunsellError::MalformedTable { level: 0, hue: 9, .. }));

        level[9] = beyond.as_slice();
        let err = MunsellTable::new(&[1.0], &[level.as_slice()]).unwrap_err();
        assert!(matches!(err, MunsellError::MalformedTable { level: 0, hue: 9, .. }));
    }

    #[test]
    fn test_every_sample_is_a_chromaticity() {
        let table = MunsellTable::standard();
        for vi in 0..table.level_count() {
            for ht in (0..HUE_CIRCLE_T).step_by(HUE_STEP_T as usize) {
                for c in (0..=table.max_chroma(vi, ht)).step_by(CHROMA_STEP as usize) {
                    let [x, y] = table.sample(vi, ht, c).unwrap();
                    assert!(x > 0.0 && y > 0.0 && x + y < 1.0, "level {} hue {} chroma {}", vi, ht, c);
                }
            }
        }
    }

    #[test]
    fn test_chroma_rings_do_not_cross() {
        // Along each hue the samples move away from the illuminant point
        let table = MunsellTable::standard();
        let white = [illuminant_c::CHROMATICITY_X, illuminant_c::CHROMATICITY_Y];
        for vi in 0..table.level_count() {
            for ht in (0..HUE_CIRCLE_T).step_by(HUE_STEP_T as usize) {
                let mut last = 0.0;
                for c in (CHROMA_STEP..=table.max_chroma(vi, ht)).step_by(CHROMA_STEP as usize) {
                    let r = crate::munsell::geometry::distance(table.sample(vi, ht, c).unwrap(), white);
                    assert!(r > last, "level {} hue {} chroma {}", vi, ht, c);
                    last = r;
                }
            }
        }
    }

    #[test]
    fn test_bracket() {
        let table = MunsellTable::standard();
        let snap = 1e-4;
        assert_eq!(table.bracket(0.0, snap), Bracket::Single(0));
        assert_eq!(table.bracket(f64::NAN, snap), Bracket::Single(0));
        assert_eq!(table.bracket(10.5, snap), Bracket::Single(table.level_count() - 1));
        let five = table.values().iter().position(|&v| v == 5.0).unwrap();
        assert_eq!(table.bracket(5.0, snap), Bracket::Single(five));
        assert_eq!(table.bracket(4.99995, snap), Bracket::Single(five));
        match table.bracket(5.25, snap) {
            Bracket::Pair { lower, upper, ratio } => {
                assert_eq!((lower, upper), (five, five + 1));
                assert!((ratio - 0.25).abs() < 1e-12);
            }
            other => panic!("expected a pair, got {:?}", other),
        }
    }
}
