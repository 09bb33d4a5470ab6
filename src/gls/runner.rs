//! Guided Local Search execution engine.
//!
//! # Algorithm
//!
//! 1. Baseline: local search on a random tour
//! 2. At each iteration:
//!    a. Build a semi-greedy candidate with the current `alpha`
//!    b. Apply local search (twice when `repeat_local_search` is set)
//!    c. Adopt the candidate if it strictly beats the best, resetting the
//!    stagnation counter; otherwise increment it
//!    d. Decay `alpha *= beta`, making later constructions greedier
//! 3. Terminate after max iterations or stagnation

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::config::GlsConfig;
use crate::construct::{random_tour, semi_greedy_tour};
use crate::error::Result;
use crate::geo::DistanceMatrix;
use crate::local_search::local_search;
use crate::random::rng_from_seed;
use crate::stop::StopReason;

/// Result of a Guided Local Search run.
#[derive(Debug, Clone)]
pub struct GlsResult {
    /// Best tour found.
    pub best: Vec<usize>,
    /// Cost of the best tour.
    pub best_cost: f64,
    /// Iterations executed (not counting the baseline).
    pub iterations: usize,
    /// Iteration at which the best tour was found; 0 is the baseline.
    pub best_iteration: usize,
    /// Best cost after the baseline and after every iteration.
    pub cost_history: Vec<f64>,
    /// Number of local search applications, baseline included.
    pub local_search_calls: usize,
    /// Value of `alpha` after the last decay.
    pub final_alpha: f64,
    /// Whether the run was cancelled externally.
    pub cancelled: bool,
    /// Why the loop ended.
    pub stop_reason: StopReason,
}

/// Guided Local Search runner.
pub struct GlsRunner;

impl GlsRunner {
    /// Executes Guided Local Search over `matrix`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`](crate::Error::InvalidConfig) if
    /// `config` fails validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use agro_route::geo::{DistanceMatrix, Point};
    /// use agro_route::gls::{GlsConfig, GlsRunner};
    ///
    /// let points = vec![
    ///     Point::new(-22.90, -43.17),
    ///     Point::new(-22.95, -43.21),
    ///     Point::new(-22.81, -43.05),
    /// ];
    /// let m = DistanceMatrix::build(&points).unwrap();
    /// let result = GlsRunner::run(&m, &GlsConfig::default().with_seed(42)).unwrap();
    /// assert_eq!(result.best.len(), 3);
    /// ```
    pub fn run(matrix: &DistanceMatrix, config: &GlsConfig) -> Result<GlsResult> {
        Self::run_with_cancel(matrix, config, None)
    }

    /// Runs GLS with an optional cancellation token.
    ///
    /// The flag is checked before every iteration; once set, the run stops
    /// and returns the best tour found so far.
    pub fn run_with_cancel(
        matrix: &DistanceMatrix,
        config: &GlsConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GlsResult> {
        config.validate()?;

        let n = matrix.len();
        let mut rng = rng_from_seed(config.seed);
        log::debug!(
            "gls.run: start n={n} max_iterations={} max_no_improve={} alpha={} beta={}",
            config.max_iterations,
            config.max_no_improve,
            config.alpha,
            config.beta
        );

        let baseline = local_search(random_tour(n, &mut rng), matrix);
        let mut best = baseline.tour;
        let mut best_cost = baseline.cost;
        let mut best_iteration = 0;
        let mut local_search_calls = 1;

        let mut alpha = config.alpha;
        // `max_iterations` may be effectively unbounded; stagnation ends such runs.
        let capacity = config
            .max_iterations
            .min(config.max_no_improve)
            .saturating_add(1);
        let mut cost_history = Vec::with_capacity(capacity);
        cost_history.push(best_cost);
        let mut no_improve_count = 0;
        let mut iterations = 0;
        let mut stop_reason = StopReason::MaxIterations;

        for iteration in 1..=config.max_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    stop_reason = StopReason::Cancelled;
                    break;
                }
            }

            let constructed = semi_greedy_tour(matrix, alpha, &mut rng);
            let mut candidate = local_search(constructed, matrix);
            local_search_calls += 1;
            if config.repeat_local_search {
                candidate = local_search(candidate.tour, matrix);
                local_search_calls += 1;
            }

            if candidate.cost < best_cost {
                log::trace!(
                    "gls.run: improved iteration={iteration} cost={:.6} -> {:.6}",
                    best_cost,
                    candidate.cost
                );
                best = candidate.tour;
                best_cost = candidate.cost;
                best_iteration = iteration;
                no_improve_count = 0;
            } else {
                no_improve_count += 1;
            }

            alpha *= config.beta;
            iterations = iteration;
            cost_history.push(best_cost);

            if no_improve_count >= config.max_no_improve {
                stop_reason = StopReason::Stagnation;
                break;
            }
        }

        let cancelled = stop_reason == StopReason::Cancelled;
        log::debug!(
            "gls.run: done n={n} iterations={iterations} best_cost={best_cost:.6} best_iteration={best_iteration} reason={stop_reason}"
        );

        Ok(GlsResult {
            best,
            best_cost,
            iterations,
            best_iteration,
            cost_history,
            local_search_calls,
            final_alpha: alpha,
            cancelled,
            stop_reason,
        })
    }
}
