//! Pairwise distance functions.

use super::point::Point;
use crate::error::{Error, Result};

/// Mean Earth radius used by [`haversine`], in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points, in kilometres.
///
/// Uses the haversine formula on a sphere of radius [`EARTH_RADIUS_KM`].
///
/// # Examples
///
/// ```
/// use agro_route::geo::{haversine, Point};
///
/// let a = Point::new(-22.9068, -43.1729);
/// let b = Point::new(-23.5505, -46.6333);
/// let d = haversine(&a, &b);
/// assert!((d - haversine(&b, &a)).abs() < 1e-9);
/// assert!(d > 350.0 && d < 370.0);
/// ```
pub fn haversine(p1: &Point, p2: &Point) -> f64 {
    let d_lat = (p2.lat - p1.lat).to_radians();
    let d_lon = (p2.lon - p1.lon).to_radians();
    let half_lat = (d_lat / 2.0).sin();
    let half_lon = (d_lon / 2.0).sin();
    let a = half_lat * half_lat
        + p1.lat.to_radians().cos() * p2.lat.to_radians().cos() * half_lon * half_lon;
    // Rounding can push `a` just past 1 for near-antipodal points. NaN
    // passes through untouched.
    let a = if a > 1.0 { 1.0 } else { a };
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Source of pairwise travel cost between two points.
///
/// Implementations must be symmetric and return zero for identical
/// points; the matrix builder only evaluates the upper triangle.
pub trait DistanceMetric: Send + Sync {
    fn distance(&self, a: &Point, b: &Point) -> f64;

    /// Rejects points this metric cannot measure. The default accepts any
    /// point with finite coordinates.
    fn check_point(&self, point: &Point) -> Result<()> {
        if point.lat.is_finite() && point.lon.is_finite() {
            Ok(())
        } else {
            Err(Error::invalid_input(format!(
                "coordinates must be finite, got ({}, {})",
                point.lat, point.lon
            )))
        }
    }
}

/// Great-circle distance in kilometres.
#[derive(Debug, Clone, Copy, Default)]
pub struct Haversine;

impl DistanceMetric for Haversine {
    #[inline]
    fn distance(&self, a: &Point, b: &Point) -> f64 {
        haversine(a, b)
    }

    fn check_point(&self, point: &Point) -> Result<()> {
        if !(-90.0..=90.0).contains(&point.lat) {
            return Err(Error::invalid_input(format!(
                "latitude must be within [-90, 90], got {}",
                point.lat
            )));
        }
        if !(-180.0..=180.0).contains(&point.lon) {
            return Err(Error::invalid_input(format!(
                "longitude must be within [-180, 180], got {}",
                point.lon
            )));
        }
        Ok(())
    }
}

/// Euclidean distance treating `(lat, lon)` as plane coordinates.
///
/// Useful for synthetic instances where the optimum is known in closed form.
#[derive(Debug, Clone, Copy, Default)]
pub struct Planar;

impl DistanceMetric for Planar {
    #[inline]
    fn distance(&self, a: &Point, b: &Point) -> f64 {
        let dx = a.lat - b.lat;
        let dy = a.lon - b.lon;
        (dx * dx + dy * dy).sqrt()
    }
}
