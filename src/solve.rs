//! Point-level entry points.
//!
//! These wrap the matrix-level runners with the input checks a caller
//! needs: empty input is rejected, a single point is returned as a trivial
//! zero-cost route without running a driver.

use crate::error::{Error, Result};
use crate::geo::{DistanceMatrix, DistanceMetric, Haversine, Point};
use crate::gls::{GlsConfig, GlsRunner};
use crate::tabu::{TabuConfig, TabuRunner};
use crate::tour::Route;

/// Orders `points` with Guided Local Search over great-circle distances.
///
/// # Errors
///
/// [`Error::InvalidInput`] if `points` is empty or holds a coordinate
/// outside the valid latitude/longitude range,
/// [`Error::InvalidConfig`] if `config` fails validation.
///
/// # Examples
///
/// ```
/// use agro_route::{solve_guided_local_search, GlsConfig, Point};
///
/// let farms = vec![
///     Point::new(-22.4326, -42.9786),
///     Point::new(-22.5112, -43.1779),
///     Point::new(-22.2819, -42.5311),
///     Point::new(-22.3965, -42.8093),
/// ];
/// let route = solve_guided_local_search(&farms, &GlsConfig::default().with_seed(1)).unwrap();
/// assert_eq!(route.len(), 4);
/// assert!(route.cost > 0.0);
/// ```
pub fn solve_guided_local_search(points: &[Point], config: &GlsConfig) -> Result<Route> {
    solve_guided_local_search_with_metric(points, &Haversine, config)
}

/// Orders `points` with Guided Local Search using `metric`.
pub fn solve_guided_local_search_with_metric<M: DistanceMetric + ?Sized>(
    points: &[Point],
    metric: &M,
    config: &GlsConfig,
) -> Result<Route> {
    config.validate()?;
    if let Some(route) = trivial_route(points, metric)? {
        return Ok(route);
    }
    let matrix = DistanceMatrix::build_with(points, metric)?;
    let result = GlsRunner::run(&matrix, config)?;
    Ok(Route::new(result.best, result.best_cost))
}

/// Orders `points` with Tabu Search over great-circle distances.
///
/// # Errors
///
/// [`Error::InvalidInput`] if `points` is empty or holds a coordinate
/// outside the valid latitude/longitude range,
/// [`Error::InvalidConfig`] if `config` fails validation.
pub fn solve_tabu_search(points: &[Point], config: &TabuConfig) -> Result<Route> {
    solve_tabu_search_with_metric(points, &Haversine, config)
}

/// Orders `points` with Tabu Search using `metric`.
pub fn solve_tabu_search_with_metric<M: DistanceMetric + ?Sized>(
    points: &[Point],
    metric: &M,
    config: &TabuConfig,
) -> Result<Route> {
    config.validate()?;
    if let Some(route) = trivial_route(points, metric)? {
        return Ok(route);
    }
    let matrix = DistanceMatrix::build_with(points, metric)?;
    let result = TabuRunner::run(&matrix, config)?;
    Ok(Route::new(result.best, result.best_cost))
}

fn trivial_route<M: DistanceMetric + ?Sized>(
    points: &[Point],
    metric: &M,
) -> Result<Option<Route>> {
    match points {
        [] => Err(Error::invalid_input("at least one point is required")),
        [only] => {
            metric.check_point(only)?;
            Ok(Some(Route::new(vec![0], 0.0)))
        }
        _ => Ok(None),
    }
}
