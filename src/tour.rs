//! Tour representation and evaluation.
//!
//! A tour is a permutation of the point indices `0..n`, read as a closed
//! cycle: after the last index the route returns to the first.

use crate::geo::DistanceMatrix;

/// Total cost of the closed cycle described by `tour`.
///
/// Sums every consecutive edge plus the wrap-around edge from the last
/// index back to the first. Tours of length 0 or 1 cost nothing.
///
/// # Examples
///
/// ```
/// use agro_route::geo::DistanceMatrix;
/// use agro_route::tour::tour_cost;
///
/// let m = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 3.0],
///     vec![2.0, 3.0, 0.0],
/// ]).unwrap();
/// assert_eq!(tour_cost(&[0, 1, 2], &m), 6.0);
/// ```
pub fn tour_cost(tour: &[usize], matrix: &DistanceMatrix) -> f64 {
    if tour.len() < 2 {
        return 0.0;
    }
    let mut cost = 0.0;
    for pair in tour.windows(2) {
        cost += matrix.get(pair[0], pair[1]);
    }
    cost + matrix.get(tour[tour.len() - 1], tour[0])
}

/// Returns `true` if `tour` holds each of `0..n` exactly once.
pub fn is_permutation(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &v in tour {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

/// A solved visiting order over the caller's points.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Indices into the caller's point list, in visiting order.
    pub order: Vec<usize>,
    /// Cost of the closed cycle.
    pub cost: f64,
}

impl Route {
    pub fn new(order: Vec<usize>, cost: f64) -> Self {
        Self { order, cost }
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Arranges `items` (parallel to the solved points) in visiting order.
    ///
    /// # Panics
    ///
    /// Panics if `items` is shorter than the number of solved points.
    pub fn apply<T: Clone>(&self, items: &[T]) -> Vec<T> {
        self.order.iter().map(|&i| items[i].clone()).collect()
    }

    /// The same cycle, starting at `start`.
    ///
    /// Returns an unchanged copy if `start` is not part of the route.
    pub fn rotated_to(&self, start: usize) -> Route {
        let Some(pos) = self.order.iter().position(|&x| x == start) else {
            return self.clone();
        };
        let mut order = Vec::with_capacity(self.order.len());
        order.extend_from_slice(&self.order[pos..]);
        order.extend_from_slice(&self.order[..pos]);
        Route::new(order, self.cost)
    }

    /// Drops a point the caller prepended to the input (typically the
    /// traveller's current location) and re-indexes the rest.
    ///
    /// The route is first rotated so that travel departs from `anchor`;
    /// the anchor is then removed and every index above it is shifted down
    /// by one, so the result indexes the caller's list without the anchor.
    ///
    /// # Cost
    ///
    /// `cost` stays the cost of the solved cycle *through the anchor*. It is
    /// not `tour_cost(&order, ..)` over the reduced list; call
    /// [`Route::recosted`] with the stops-only matrix to get that.
    pub fn without_anchor(&self, anchor: usize) -> Route {
        let rotated = self.rotated_to(anchor);
        let order = rotated
            .order
            .into_iter()
            .filter(|&i| i != anchor)
            .map(|i| if i > anchor { i - 1 } else { i })
            .collect();
        Route::new(order, self.cost)
    }

    /// The same order with `cost` recomputed as a closed cycle over `matrix`.
    pub fn recosted(self, matrix: &DistanceMatrix) -> Route {
        let cost = tour_cost(&self.order, matrix);
        Route::new(self.order, cost)
    }
}
