//! Tour optimization for geographic points.
//!
//! Given a list of `(latitude, longitude)` points, computes a closed
//! visiting order that approximately minimizes total travel cost:
//!
//! - **Guided Local Search (GLS)**: repeated semi-greedy randomized
//!   construction with a decaying greediness parameter, each candidate
//!   driven to a local optimum.
//! - **Tabu Search (TS)**: random restarts driven to local optima, with a
//!   bounded memory of recent best tours.
//!
//! Both share a first-improvement pairwise-exchange local search and a
//! dense distance matrix, by default of great-circle (haversine) distances.
//!
//! # Architecture
//!
//! The crate is a pure function boundary: points (or a prebuilt
//! [`DistanceMatrix`]) in, a permutation of their indices and its cost out.
//! Resolving entity ids to points, and mapping the returned order back to
//! entities, belong to the caller; [`Route::apply`] and
//! [`Route::without_anchor`] cover the usual post-processing.
//!
//! Every run owns its matrix, search state and random generator, so
//! concurrent runs on separate threads need no synchronization.

pub mod construct;
pub mod error;
pub mod geo;
pub mod gls;
pub mod local_search;
pub mod random;
pub mod solve;
pub mod stop;
pub mod tabu;
pub mod tour;

pub use error::{Error, Result};
pub use geo::{DistanceMatrix, Point};
pub use gls::{GlsConfig, GlsResult, GlsRunner};
pub use solve::{
    solve_guided_local_search, solve_guided_local_search_with_metric, solve_tabu_search,
    solve_tabu_search_with_metric,
};
pub use stop::StopReason;
pub use tabu::{TabuConfig, TabuResult, TabuRunner};
pub use tour::Route;
