//! Tabu Search (TS).
//!
//! Random-restart local search that keeps a short-term memory of the best
//! tours seen over the last `tabu_tenure` iterations. Each iteration draws
//! a fresh random tour, drives it to a local optimum, and keeps it if it
//! beats the incumbent. The memory bounds what is retained; it does not
//! forbid candidates.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

mod config;
mod runner;

pub use config::TabuConfig;
pub use runner::{TabuResult, TabuRunner};
