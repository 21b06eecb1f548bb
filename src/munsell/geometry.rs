//! 2D chromaticity geometry: orientation tests and interpolation kernels.

/// A point in the CIE 1931 xy chromaticity plane.
pub type Xy = [f64; 2];

/// Z component of the cross product of `a` and `b`.
#[inline]
pub fn cross(a: Xy, b: Xy) -> f64 {
    a[0] * b[1] - a[1] * b[0]
}

#[inline]
pub fn sub(a: Xy, b: Xy) -> Xy {
    [a[0] - b[0], a[1] - b[1]]
}

#[inline]
pub fn add(a: Xy, b: Xy) -> Xy {
    [a[0] + b[0], a[1] + b[1]]
}

#[inline]
pub fn distance(a: Xy, b: Xy) -> f64 {
    let d = sub(a, b);
    d[0].hypot(d[1])
}

/// Whether `p` lies inside or on the edge of triangle `abc`.
///
/// Works for either winding; a degenerate triangle contains nothing.
/// Points off an edge by no more than rounding noise count as on it.
pub fn inside(p: Xy, a: Xy, b: Xy, c: Xy) -> bool {
    const EDGE_SLACK: f64 = 1e-12;

    let area = cross(sub(b, a), sub(c, a));
    if area == 0.0 {
        return false;
    }
    let s = area.signum();
    let ab = cross(sub(b, a), sub(p, a)) * s;
    let bc = cross(sub(c, b), sub(p, b)) * s;
    let ca = cross(sub(a, c), sub(p, c)) * s;
    ab >= -EDGE_SLACK && bc >= -EDGE_SLACK && ca >= -EDGE_SLACK
}

/// Linear blend of `a` and `b`, `r` = 0 giving `a`.
#[inline]
pub fn div(a: Xy, b: Xy, r: f64) -> Xy {
    [a[0] + (b[0] - a[0]) * r, a[1] + (b[1] - a[1]) * r]
}

/// Two-point kernel: linear blend across hue.
#[inline]
pub fn interpolate2(lower: Xy, upper: Xy, rh: f64) -> Xy {
    div(lower, upper, rh)
}

/// Three-point kernel: a clamped point on the lower hue side and a chroma
/// segment on the upper side. Barycentric weights `1-rh`, `rh(1-rc)`, `rh rc`.
#[inline]
pub fn interpolate3(lower: Xy, upper_in: Xy, upper_out: Xy, rh: f64, rc: f64) -> Xy {
    div(lower, div(upper_in, upper_out, rc), rh)
}

/// Four-point kernel: bilinear blend over a cell, chroma first then hue.
#[inline]
pub fn interpolate4(lower_in: Xy, lower_out: Xy, upper_in: Xy, upper_out: Xy, rh: f64, rc: f64) -> Xy {
    div(div(lower_in, lower_out, rc), div(upper_in, upper_out, rc), rh)
}

/// Fractional position `(h, v)` of `p` in the cell spanned by `a` (origin),
/// `b` (along h), `c` (opposite corner) and `d` (along v):
/// `p = a + h(b-a) + v(d-a) + hv(a-b+c-d)`.
///
/// The radial ratio `v` is the root in [0, 1] of a quadratic; the angular
/// ratio `h` then comes from whichever coordinate equation is better
/// conditioned. Returns `None` unless both ratios lie in [0, 1].
pub fn inverse_bilinear(p: Xy, a: Xy, b: Xy, c: Xy, d: Xy) -> Option<(f64, f64)> {
    const EPS: f64 = 1e-10;
    const SLACK: f64 = 1e-9;

    let e = sub(b, a);
    let f = sub(d, a);
    let g = add(sub(a, b), sub(c, d));
    let q = sub(p, a);

    let qa = cross(g, f);
    let qb = cross(q, g) + cross(e, f);
    let qc = cross(q, e);

    let mut roots = [f64::NAN; 2];
    if qa.abs() < EPS {
        if qb.abs() < EPS {
            return None;
        }
        roots[0] = -qc / qb;
    } else {
        let disc = qb * qb - 4.0 * qa * qc;
        if disc < 0.0 {
            return None;
        }
        let sq = disc.sqrt();
        roots[0] = (-qb + sq) / (2.0 * qa);
        roots[1] = (-qb - sq) / (2.0 * qa);
    }

    roots
        .into_iter()
        .filter(|v| (-SLACK..=1.0 + SLACK).contains(v))
        .find_map(|v| {
            let dx = e[0] + v * g[0];
            let dy = e[1] + v * g[1];
            let h = if dx.abs() >= dy.abs() {
                if dx.abs() < EPS {
                    return None;
                }
                (q[0] - v * f[0]) / dx
            } else {
                (q[1] - v * f[1]) / dy
            };
            (-SLACK..=1.0 + SLACK)
                .contains(&h)
                .then(|| (h.clamp(0.0, 1.0), v.clamp(0.0, 1.0)))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Xy = [0.0, 0.0];
    const B: Xy = [1.0, 0.0];
    const C: Xy = [1.0, 1.0];
    const D: Xy = [0.0, 1.0];

    #[test]
    fn test_inside_either_winding() {
        let p = [0.6, 0.2];
        assert!(inside(p, A, B, C));
        assert!(inside(p, C, B, A));
        assert!(!inside([0.2, 0.6], A, B, C));
    }

    #[test]
    fn test_inside_includes_edges() {
        assert!(inside([0.5, 0.0], A, B, C));
        assert!(inside(A, A, B, C));
    }

    #[test]
    fn test_inside_absorbs_rounding_on_edges() {
        // The midpoint of a shared outer edge, rebuilt in floating point
        let b = [0.41504, 0.45547];
        let c = [0.45131, 0.5036];
        let d = [0.46956, 0.4933];
        let mid = div(d, c, 0.5);
        assert!(inside(mid, b, c, d));

        assert!(inside([0.5, -1e-15], A, B, C));
        assert!(!inside([0.5, -1e-6], A, B, C));
    }

    #[test]
    fn test_degenerate_triangle_contains_nothing() {
        assert!(!inside(A, A, A, C));
        assert!(!inside([0.5, 0.5], A, [0.5, 0.5], C));
    }

    #[test]
    fn test_inverse_bilinear_unit_square() {
        let (h, v) = inverse_bilinear([0.25, 0.75], A, B, C, D).unwrap();
        assert!((h - 0.25).abs() < 1e-12);
        assert!((v - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_inverse_bilinear_reproduces_forward_blend() {
        let a = [0.31, 0.32];
        let b = [0.33, 0.31];
        let c = [0.36, 0.30];
        let d = [0.34, 0.33];
        for &(h, v) in &[(0.1, 0.9), (0.5, 0.5), (0.8, 0.3), (0.0, 0.4)] {
            let p = interpolate4(a, d, b, c, h, v);
            let (h2, v2) = inverse_bilinear(p, a, b, c, d).unwrap();
            assert!((h - h2).abs() < 1e-9, "h {} vs {}", h, h2);
            assert!((v - v2).abs() < 1e-9, "v {} vs {}", v, v2);
        }
    }

    #[test]
    fn test_inverse_bilinear_wedge() {
        // Collapsed origin edge: a == b, as at chroma 0
        let o = [0.31, 0.316];
        let c = [0.34, 0.33];
        let d = [0.33, 0.35];
        let p = interpolate4(o, d, o, c, 0.3, 0.6);
        let (h, v) = inverse_bilinear(p, o, o, c, d).unwrap();
        assert!((h - 0.3).abs() < 1e-9);
        assert!((v - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_inverse_bilinear_outside_rejected() {
        assert!(inverse_bilinear([1.5, 0.5], A, B, C, D).is_none());
        assert!(inverse_bilinear([0.5, -0.5], A, B, C, D).is_none());
    }

    #[test]
    fn test_kernels() {
        assert_eq!(interpolate2(A, C, 0.5), [0.5, 0.5]);
        assert_eq!(interpolate3(A, B, C, 1.0, 0.5), [1.0, 0.5]);
        assert_eq!(interpolate3(A, B, C, 0.0, 0.5), A);
        assert_eq!(interpolate4(A, D, B, C, 0.5, 0.5), [0.5, 0.5]);
    }
}
