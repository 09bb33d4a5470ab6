//! Guided Local Search (GLS).
//!
//! A multi-start metaheuristic in the GRASP family: each iteration builds a
//! fresh tour with the semi-greedy rule, drives it to a local optimum with
//! pairwise-exchange local search and keeps it if it beats the best so far.
//! The candidate band `alpha` decays geometrically, so construction starts
//! out exploratory and becomes progressively greedier.
//!
//! # References
//!
//! - Feo, T. A. & Resende, M. G. C. (1995). "Greedy randomized adaptive
//!   search procedures", *Journal of Global Optimization* 6(2), 109-133.

mod config;
mod runner;

pub use config::GlsConfig;
pub use runner::{GlsResult, GlsRunner};
