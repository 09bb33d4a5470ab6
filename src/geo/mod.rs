//! Distance model.
//!
//! Points are `(latitude, longitude)` pairs in decimal degrees. Pairwise
//! travel cost comes from a [`DistanceMetric`]; the default is the
//! great-circle [`Haversine`] distance in kilometres. The solvers only ever
//! see a dense [`DistanceMatrix`], so any other cost source (a road-network
//! table, for instance) can be plugged in through
//! [`DistanceMatrix::from_rows`].

mod matrix;
mod metric;
mod point;

pub use matrix::DistanceMatrix;
pub use metric::{haversine, DistanceMetric, Haversine, Planar, EARTH_RADIUS_KM};
pub use point::Point;
