//! Static 2-d tree over chromaticity points for k-nearest-neighbour queries.
//!
//! The tree is stored implicitly: after construction the point vector is
//! ordered so that the median of every sub-slice is its splitting node,
//! alternating x and y by depth.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::geometry::Xy;

/// A balanced, immutable k-d tree mapping xy points to payloads.
#[derive(Debug, Clone, PartialEq)]
pub struct KdTree<T> {
    nodes: Vec<(Xy, T)>,
}

/// One result of a nearest-neighbour query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor<'a, T> {
    pub point: Xy,
    pub value: &'a T,
    pub distance: f64,
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    dist2: f64,
    index: usize,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist2
            .total_cmp(&other.dist2)
            .then(self.index.cmp(&other.index))
    }
}

impl<T> KdTree<T> {
    /// Build a tree over `points`. Construction is deterministic: the same
    /// input always yields the same node order.
    pub fn build(mut points: Vec<(Xy, T)>) -> Self {
        arrange(&mut points, 0);
        Self { nodes: points }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The `k` points closest to `p`, nearest first. Fewer are returned
    /// when the tree holds fewer than `k` points.
    pub fn nearest(&self, p: Xy, k: usize) -> Vec<Neighbor<'_, T>> {
        if k == 0 {
            return Vec::new();
        }
        let mut heap = BinaryHeap::with_capacity(k + 1);
        self.search(0, self.nodes.len(), 0, p, k, &mut heap);
        heap.into_sorted_vec()
            .into_iter()
            .map(|c| {
                let (point, value) = &self.nodes[c.index];
                Neighbor {
                    point: *point,
                    value,
                    distance: c.dist2.sqrt(),
                }
            })
            .collect()
    }

    fn search(
        &self,
        lo: usize,
        hi: usize,
        depth: usize,
        p: Xy,
        k: usize,
        heap: &mut BinaryHeap<Candidate>,
    ) {
        if lo >= hi {
            return;
        }
        let axis = depth % 2;
        let mid = lo + (hi - lo) / 2;
        let node = self.nodes[mid].0;

        let dx = node[0] - p[0];
        let dy = node[1] - p[1];
        let candidate = Candidate {
            dist2: dx * dx + dy * dy,
            index: mid,
        };
        if heap.len() < k {
            heap.push(candidate);
        } else if heap.peek().is_some_and(|worst| candidate < *worst) {
            heap.pop();
            heap.push(candidate);
        }

        let diff = p[axis] - node[axis];
        let (near, far) = if diff < 0.0 {
            ((lo, mid), (mid + 1, hi))
        } else {
            ((mid + 1, hi), (lo, mid))
        };
        self.search(near.0, near.1, depth + 1, p, k, heap);
        let reach = heap.peek().map_or(f64::INFINITY, |worst| worst.dist2);
        if heap.len() < k || diff * diff < reach {
            self.search(far.0, far.1, depth + 1, p, k, heap);
        }
    }
}

fn arrange<T>(points: &mut [(Xy, T)], depth: usize) {
    if points.len() <= 1 {
        return;
    }
    let axis = depth % 2;
    let mid = points.len() / 2;
    points.select_nth_unstable_by(mid, |a, b| a.0[axis].total_cmp(&b.0[axis]));
    let (left, right) = points.split_at_mut(mid);
    arrange(left, depth + 1);
    arrange(&mut right[1..], depth + 1);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> KdTree<usize> {
        let mut points = Vec::new();
        for i in 0..10 {
            for j in 0..10 {
                points.push(([i as f64 * 0.1, j as f64 * 0.1], i * 10 + j));
            }
        }
        KdTree::build(points)
    }

    fn brute_force(points: &[(Xy, usize)], p: Xy, k: usize) -> Vec<f64> {
        let mut d: Vec<f64> = points
            .iter()
            .map(|(q, _)| (q[0] - p[0]).hypot(q[1] - p[1]))
            .collect();
        d.sort_by(f64::total_cmp);
        d.truncate(k);
        d
    }

    #[test]
    fn test_nearest_single() {
        let tree = grid();
        let hit = tree.nearest([0.31, 0.52], 1);
        assert_eq!(hit.len(), 1);
        assert_eq!(*hit[0].value, 35);
        assert!(hit[0].distance < 0.03);
    }

    #[test]
    fn test_nearest_matches_brute_force() {
        let mut points = Vec::new();
        let mut seed = 12345u64;
        for i in 0..300 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let x = (seed >> 33) as f64 / (1u64 << 31) as f64;
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let y = (seed >> 33) as f64 / (1u64 << 31) as f64;
            points.push(([x, y], i));
        }
        let tree = KdTree::build(points.clone());
        for &p in &[[0.5, 0.5], [0.0, 0.0], [0.93, 0.12], [2.0, -1.0]] {
            let got: Vec<f64> = tree.nearest(p, 5).iter().map(|n| n.distance).collect();
            let want = brute_force(&points, p, 5);
            assert_eq!(got.len(), 5);
            for (g, w) in got.iter().zip(&want) {
                assert!((g - w).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_nearest_sorted_and_bounded() {
        let tree = grid();
        let hits = tree.nearest([0.45, 0.45], 4);
        assert_eq!(hits.len(), 4);
        assert!(hits.windows(2).all(|w| w[0].distance <= w[1].distance));
        assert_eq!(tree.nearest([0.0, 0.0], 500).len(), 100);
        assert!(tree.nearest([0.0, 0.0], 0).is_empty());
    }

    #[test]
    fn test_empty_tree() {
        let tree: KdTree<u8> = KdTree::build(Vec::new());
        assert!(tree.is_empty());
        assert!(tree.nearest([0.3, 0.3], 2).is_empty());
    }

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(grid(), grid());
    }
}
