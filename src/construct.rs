//! Initial tour construction.
//!
//! - [`random_tour`]: uniform shuffle of all indices.
//! - [`semi_greedy_tour`]: randomized nearest-neighbor build whose
//!   greediness is controlled by `alpha`.

use rand::Rng;

use crate::geo::DistanceMatrix;
use crate::random::shuffle;

/// A uniformly shuffled permutation of `0..n`.
pub fn random_tour<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut tour: Vec<usize> = (0..n).collect();
    shuffle(&mut tour, rng);
    tour
}

/// Builds a tour with a semi-greedy randomized nearest-neighbor rule.
///
/// Starts at a random point. At each step the distances from the current
/// point to every remaining candidate give a band
/// `[min, min + alpha * (max - min)]`; the next point is drawn uniformly
/// from the candidates inside the band. The band is recomputed over the
/// remaining candidates at every step.
///
/// `alpha = 0` picks the nearest candidate (ties broken at random);
/// `alpha = 1` picks uniformly among all remaining candidates.
///
/// # Examples
///
/// ```
/// use agro_route::construct::semi_greedy_tour;
/// use agro_route::geo::{DistanceMatrix, Planar, Point};
/// use agro_route::random::create_rng;
/// use agro_route::tour::is_permutation;
///
/// let points: Vec<Point> = (0..6).map(|i| Point::new(i as f64, 0.0)).collect();
/// let m = DistanceMatrix::build_with(&points, &Planar).unwrap();
/// let tour = semi_greedy_tour(&m, 0.3, &mut create_rng(42));
/// assert!(is_permutation(&tour, 6));
/// ```
pub fn semi_greedy_tour<R: Rng + ?Sized>(
    matrix: &DistanceMatrix,
    alpha: f64,
    rng: &mut R,
) -> Vec<usize> {
    let n = matrix.len();
    if n == 0 {
        return Vec::new();
    }

    let mut candidates: Vec<usize> = (0..n).collect();
    let mut tour = Vec::with_capacity(n);
    let mut current = candidates.remove(rng.random_range(0..n));
    tour.push(current);

    let mut eligible = Vec::with_capacity(n);
    while !candidates.is_empty() {
        let row = matrix.row(current);

        let mut min_d = f64::INFINITY;
        let mut max_d = f64::NEG_INFINITY;
        let mut nearest = 0;
        for (k, &c) in candidates.iter().enumerate() {
            let d = row[c];
            if d < min_d {
                min_d = d;
                nearest = k;
            }
            if d > max_d {
                max_d = d;
            }
        }

        let threshold = min_d + alpha * (max_d - min_d);
        eligible.clear();
        eligible.extend(
            candidates
                .iter()
                .enumerate()
                .filter(|&(_, &c)| row[c] <= threshold)
                .map(|(k, _)| k),
        );
        if eligible.is_empty() {
            eligible.push(nearest);
        }

        let pick = eligible[rng.random_range(0..eligible.len())];
        current = candidates.remove(pick);
        tour.push(current);
    }

    tour
}
