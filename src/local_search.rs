//! Pairwise-exchange local search.
//!
//! # Algorithm
//!
//! First-improvement hill climbing over the swap neighborhood:
//!
//! 1. Scan position pairs `(i, j)`, `i < j`, in lexicographic order
//! 2. Swap the indices at `i` and `j` and evaluate the full tour cost
//! 3. On the first strict improvement, keep the swap and restart the scan
//! 4. Stop when a complete scan finds no improving swap
//!
//! Each scan costs O(n²) evaluations of O(n) each. There is no internal cap
//! on `n`; callers bound instance size.

use crate::geo::DistanceMatrix;
use crate::tour::tour_cost;

/// Result of a local search run.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalSearchOutcome {
    /// The locally optimal tour.
    pub tour: Vec<usize>,
    /// Cost of `tour`.
    pub cost: f64,
    /// Number of scans started, including the final non-improving one.
    pub passes: usize,
    /// Number of improving swaps applied.
    pub swaps: usize,
}

/// Improves `tour` until no single pairwise exchange lowers its cost.
///
/// # Examples
///
/// ```
/// use agro_route::geo::{DistanceMatrix, Planar, Point};
/// use agro_route::local_search::{is_local_optimum, local_search};
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
/// ];
/// let m = DistanceMatrix::build_with(&points, &Planar).unwrap();
/// let out = local_search(vec![0, 2, 1, 3], &m);
/// assert!((out.cost - 4.0).abs() < 1e-12);
/// assert!(is_local_optimum(&out.tour, &m));
/// ```
pub fn local_search(mut tour: Vec<usize>, matrix: &DistanceMatrix) -> LocalSearchOutcome {
    let n = tour.len();
    let mut best_cost = tour_cost(&tour, matrix);
    let mut passes = 0;
    let mut swaps = 0;

    'scan: loop {
        passes += 1;
        for i in 0..n.saturating_sub(1) {
            for j in (i + 1)..n {
                tour.swap(i, j);
                let cost = tour_cost(&tour, matrix);
                if cost < best_cost {
                    best_cost = cost;
                    swaps += 1;
                    continue 'scan;
                }
                tour.swap(i, j);
            }
        }
        break;
    }

    LocalSearchOutcome {
        tour,
        cost: best_cost,
        passes,
        swaps,
    }
}

/// Returns `true` if no single exchange of two positions strictly lowers
/// the cost of `tour`.
pub fn is_local_optimum(tour: &[usize], matrix: &DistanceMatrix) -> bool {
    let base = tour_cost(tour, matrix);
    let mut work = tour.to_vec();
    for i in 0..work.len() {
        for j in (i + 1)..work.len() {
            work.swap(i, j);
            let improves = tour_cost(&work, matrix) < base;
            work.swap(i, j);
            if improves {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::construct::random_tour;
    use crate::geo::{Planar, Point};
    use crate::random::create_rng;
    use crate::tour::is_permutation;

    fn grid(side: usize) -> DistanceMatrix {
        let points: Vec<Point> = (0..side * side)
            .map(|k| Point::new((k / side) as f64, (k % side) as f64))
            .collect();
        DistanceMatrix::build_with(&points, &Planar).unwrap()
    }

    #[test]
    fn test_local_search_result_is_local_optimum() {
        let m = grid(4);
        let mut rng = create_rng(42);
        for _ in 0..5 {
            let out = local_search(random_tour(m.len(), &mut rng), &m);
            assert!(is_permutation(&out.tour, m.len()));
            assert!(is_local_optimum(&out.tour, &m));
        }
    }

    #[test]
    fn test_local_search_cost_matches_tour() {
        let m = grid(3);
        let out = local_search(random_tour(m.len(), &mut create_rng(5)), &m);
        assert_eq!(out.cost, tour_cost(&out.tour, &m));
    }

    #[test]
    fn test_local_search_never_worsens() {
        let m = grid(4);
        let mut rng = create_rng(9);
        for _ in 0..5 {
            let start = random_tour(m.len(), &mut rng);
            let before = tour_cost(&start, &m);
            let out = local_search(start, &m);
            assert!(out.cost <= before);
        }
    }

    #[test]
    fn test_local_search_idempotent_at_optimum() {
        let m = grid(3);
        let first = local_search(random_tour(m.len(), &mut create_rng(3)), &m);
        let second = local_search(first.tour.clone(), &m);
        assert_eq!(second.tour, first.tour);
        assert_eq!(second.cost, first.cost);
        assert_eq!(second.passes, 1);
        assert_eq!(second.swaps, 0);
    }

    #[test]
    fn test_local_search_counts_passes() {
        let m = grid(3);
        let out = local_search(random_tour(m.len(), &mut create_rng(17)), &m);
        assert_eq!(out.passes, out.swaps + 1);
    }

    #[test]
    fn test_local_search_trivial_tours() {
        let m = DistanceMatrix::from_rows(vec![vec![0.0]]).unwrap();
        let out = local_search(vec![0], &m);
        assert_eq!(out.tour, vec![0]);
        assert_eq!(out.cost, 0.0);
        assert_eq!(out.swaps, 0);

        let empty = local_search(Vec::new(), &m);
        assert!(empty.tour.is_empty());
        assert_eq!(empty.cost, 0.0);
    }

    #[test]
    fn test_is_local_optimum_detects_crossing() {
        let m = grid(2);
        // Grid of side 2: 0=(0,0) 1=(0,1) 2=(1,0) 3=(1,1); 0,1,2,3 crosses.
        assert!(!is_local_optimum(&[0, 1, 2, 3], &m));
        assert!(is_local_optimum(&[0, 1, 3, 2], &m));
    }
}
