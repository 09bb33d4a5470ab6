//! Dense symmetric distance matrix.

use super::metric::{DistanceMetric, Haversine};
use super::point::Point;
use crate::error::{Error, Result};

/// Tolerance used when checking caller-supplied matrices for symmetry.
const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// An N×N symmetric matrix of travel costs with a zero diagonal.
///
/// Indexed by position in the point list the matrix was built from, not by
/// any external entity id. Stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds the great-circle distance matrix for `points`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `points` is empty or any point has
    /// a non-finite coordinate, a latitude outside [-90, 90] or a longitude
    /// outside [-180, 180].
    pub fn build(points: &[Point]) -> Result<Self> {
        Self::build_with(points, &Haversine)
    }

    /// Builds the matrix for `points` using `metric`.
    ///
    /// Only the upper triangle is evaluated; it is mirrored into the lower
    /// triangle and the diagonal stays zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `points` is empty, if `metric`
    /// rejects a point (see [`DistanceMetric::check_point`]), or if it yields
    /// a negative or non-finite distance.
    pub fn build_with<M: DistanceMetric + ?Sized>(points: &[Point], metric: &M) -> Result<Self> {
        let n = points.len();
        if n == 0 {
            return Err(Error::invalid_input("cannot build a distance matrix from zero points"));
        }
        for (i, point) in points.iter().enumerate() {
            metric.check_point(point).map_err(|e| match e {
                Error::InvalidInput(msg) => Error::invalid_input(format!("point {i}: {msg}")),
                other => other,
            })?;
        }

        let mut data = vec![0.0; n * n];
        for (i, upper) in upper_rows(points, metric).into_iter().enumerate() {
            for (offset, d) in upper.into_iter().enumerate() {
                let j = i + 1 + offset;
                if !d.is_finite() || d < 0.0 {
                    return Err(Error::invalid_input(format!(
                        "distance ({i}, {j}) must be finite and non-negative, got {d}"
                    )));
                }
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }

        log::trace!("geo.matrix: built n={n}");
        Ok(Self { n, data })
    }

    /// Wraps a caller-supplied matrix, e.g. one fetched from a road-network
    /// service.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the matrix is empty, not square,
    /// has a negative or non-finite entry, a non-zero diagonal, or is not
    /// symmetric.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(Error::invalid_input("distance matrix has no rows"));
        }

        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(Error::invalid_input(format!(
                    "row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
            data.extend(row);
        }

        for i in 0..n {
            for j in 0..n {
                let d = data[i * n + j];
                if !d.is_finite() || d < 0.0 {
                    return Err(Error::invalid_input(format!(
                        "entry ({i}, {j}) must be finite and non-negative, got {d}"
                    )));
                }
                if i == j && d != 0.0 {
                    return Err(Error::invalid_input(format!(
                        "diagonal entry ({i}, {i}) must be zero, got {d}"
                    )));
                }
                if j > i && (d - data[j * n + i]).abs() > SYMMETRY_TOLERANCE {
                    return Err(Error::invalid_input(format!(
                        "matrix is not symmetric at ({i}, {j})"
                    )));
                }
            }
        }

        Ok(Self { n, data })
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Cost of travelling from `i` to `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// All costs from `i`.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }
}

/// Distances from each point to every later point.
#[cfg(not(feature = "parallel"))]
fn upper_rows<M: DistanceMetric + ?Sized>(points: &[Point], metric: &M) -> Vec<Vec<f64>> {
    (0..points.len())
        .map(|i| {
            points[i + 1..]
                .iter()
                .map(|q| metric.distance(&points[i], q))
                .collect()
        })
        .collect()
}

#[cfg(feature = "parallel")]
fn upper_rows<M: DistanceMetric + ?Sized>(points: &[Point], metric: &M) -> Vec<Vec<f64>> {
    use rayon::prelude::*;

    (0..points.len())
        .into_par_iter()
        .map(|i| {
            points[i + 1..]
                .iter()
                .map(|q| metric.distance(&points[i], q))
                .collect()
        })
        .collect()
}
