//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Baseline: local search on a random tour
//! 2. At each iteration:
//!    a. Build a fresh random tour and apply local search
//!    b. Adopt it if it strictly beats the best, resetting the stagnation
//!    counter; otherwise increment it
//!    c. Push the current best onto the history buffer, evicting the
//!    oldest entry beyond `tabu_tenure`
//! 3. Terminate after max iterations or stagnation
//!
//! Candidates are never derived from, or filtered by, the history buffer.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::config::TabuConfig;
use crate::construct::random_tour;
use crate::error::Result;
use crate::geo::DistanceMatrix;
use crate::local_search::local_search;
use crate::random::rng_from_seed;
use crate::stop::StopReason;

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
pub struct TabuResult {
    /// Best tour found.
    pub best: Vec<usize>,
    /// Cost of the best tour.
    pub best_cost: f64,
    /// Total iterations executed (not counting the baseline).
    pub iterations: usize,
    /// Iteration at which the best tour was found; 0 is the baseline.
    pub best_iteration: usize,
    /// Best cost after the baseline and after every iteration.
    pub cost_history: Vec<f64>,
    /// The most recent `(best, best_cost)` entries, oldest first, at most
    /// `tabu_tenure` long.
    pub history: VecDeque<(Vec<usize>, f64)>,
    /// Number of local search applications, baseline included.
    pub local_search_calls: usize,
    /// Whether the run was cancelled externally.
    pub cancelled: bool,
    /// Why the loop ended.
    pub stop_reason: StopReason,
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search over `matrix`.
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
    /// use agro_route::tabu::{TabuConfig, TabuRunner};
    ///
    /// let points = vec![
    ///     Point::new(-22.90, -43.17),
    ///     Point::new(-22.95, -43.21),
    ///     Point::new(-22.81, -43.05),
    /// ];
    /// let m = DistanceMatrix::build(&points).unwrap();
    /// let result = TabuRunner::run(&m, &TabuConfig::default().with_seed(42)).unwrap();
    /// assert_eq!(result.best.len(), 3);
    /// assert!(result.history.len() <= 10);
    /// ```
    pub fn run(matrix: &DistanceMatrix, config: &TabuConfig) -> Result<TabuResult> {
        Self::run_with_cancel(matrix, config, None)
    }

    /// Runs Tabu Search with an optional cancellation token.
    ///
    /// The flag is checked before every iteration; once set, the run stops
    /// and returns the best tour found so far.
    pub fn run_with_cancel(
        matrix: &DistanceMatrix,
        config: &TabuConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<TabuResult> {
        config.validate()?;

        let n = matrix.len();
        let mut rng = rng_from_seed(config.seed);
        log::debug!(
            "tabu.run: start n={n} max_iterations={} max_no_improve={} tabu_tenure={}",
            config.max_iterations,
            config.max_no_improve,
            config.tabu_tenure
        );

        let baseline = local_search(random_tour(n, &mut rng), matrix);
        let mut best = baseline.tour;
        let mut best_cost = baseline.cost;
        let mut best_iteration = 0;
        let mut local_search_calls = 1;

        let mut history: VecDeque<(Vec<usize>, f64)> = VecDeque::new();
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

            let candidate = local_search(random_tour(n, &mut rng), matrix);
            local_search_calls += 1;

            if candidate.cost < best_cost {
                log::trace!(
                    "tabu.run: improved iteration={iteration} cost={:.6} -> {:.6}",
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

            if config.record_history {
                history.push_back((best.clone(), best_cost));
                if history.len() > config.tabu_tenure {
                    history.pop_front();
                }
            }

            iterations = iteration;
            cost_history.push(best_cost);

            if no_improve_count >= config.max_no_improve {
                stop_reason = StopReason::Stagnation;
                break;
            }
        }

        let cancelled = stop_reason == StopReason::Cancelled;
        log::debug!(
            "tabu.run: done n={n} iterations={iterations} best_cost={best_cost:.6} best_iteration={best_iteration} reason={stop_reason}"
        );

        Ok(TabuResult {
            best,
            best_cost,
            iterations,
            best_iteration,
            cost_history,
            history,
            local_search_calls,
            cancelled,
            stop_reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{Planar, Point};
    use crate::local_search::is_local_optimum;
    use crate::tour::{is_permutation, tour_cost};

    fn unit_square() -> DistanceMatrix {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 0.0),
        ];
        DistanceMatrix::build_with(&points, &Planar).unwrap()
    }

    fn scattered(n: usize) -> DistanceMatrix {
        let points: Vec<Point> = (0..n)
            .map(|k| {
                let k = k as f64;
                Point::new((k * 7.3) % 11.0, (k * 3.7) % 5.0)
            })
            .collect();
        DistanceMatrix::build_with(&points, &Planar).unwrap()
    }

    #[test]
    fn test_tabu_unit_square_finds_perimeter() {
        let m = unit_square();
        let result = TabuRunner::run(&m, &TabuConfig::default().with_seed(42)).unwrap();
        assert!(is_permutation(&result.best, 4));
        assert!(
            (result.best_cost - 4.0).abs() < 1e-9,
            "expected perimeter 4, got {}",
            result.best_cost
        );
    }

    #[test]
    fn test_tabu_reported_cost_matches_tour() {
        let m = scattered(9);
        let result = TabuRunner::run(&m, &TabuConfig::default().with_seed(8)).unwrap();
        assert!(is_permutation(&result.best, 9));
        assert!((tour_cost(&result.best, &m) - result.best_cost).abs() < 1e-9);
        assert!(is_local_optimum(&result.best, &m));
    }

    #[test]
    fn test_tabu_cost_history_non_increasing() {
        let m = scattered(10);
        let result = TabuRunner::run(&m, &TabuConfig::default().with_seed(42)).unwrap();
        assert_eq!(result.cost_history.len(), result.iterations + 1);
        for window in result.cost_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best cost history should be non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_tabu_history_capped_at_tenure() {
        let m = scattered(7);
        let config = TabuConfig::default()
            .with_max_iterations(40)
            .with_max_no_improve(1000)
            .with_tabu_tenure(4)
            .with_seed(42);
        let result = TabuRunner::run(&m, &config).unwrap();
        assert_eq!(result.iterations, 40);
        assert_eq!(result.stop_reason, StopReason::MaxIterations);
        assert_eq!(result.history.len(), 4);

        // The newest entry is the final best.
        let (last_tour, last_cost) = result.history.back().unwrap();
        assert_eq!(last_tour, &result.best);
        assert_eq!(*last_cost, result.best_cost);

        // Entries are snapshots of the best, so their costs never increase.
        let costs: Vec<f64> = result.history.iter().map(|(_, c)| *c).collect();
        for window in costs.windows(2) {
            assert!(window[1] <= window[0]);
        }
    }

    #[test]
    fn test_tabu_history_does_not_affect_search() {
        let m = scattered(8);
        let config = TabuConfig::default().with_seed(5);
        let with = TabuRunner::run(&m, &config).unwrap();
        let without = TabuRunner::run(&m, &config.clone().with_record_history(false)).unwrap();
        assert_eq!(with.best, without.best);
        assert_eq!(with.cost_history, without.cost_history);
        assert!(without.history.is_empty());
    }

    #[test]
    fn test_tabu_deterministic_with_seed() {
        let m = scattered(8);
        let config = TabuConfig::default().with_seed(2024);
        let a = TabuRunner::run(&m, &config).unwrap();
        let b = TabuRunner::run(&m, &config).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.best_cost, b.best_cost);
        assert_eq!(a.history, b.history);
    }

    #[test]
    fn test_tabu_stagnation_termination() {
        let m = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
        let config = TabuConfig::default()
            .with_max_iterations(10_000)
            .with_max_no_improve(20)
            .with_seed(42);
        let result = TabuRunner::run(&m, &config).unwrap();
        // Every two-point tour costs the same, so nothing ever improves.
        assert_eq!(result.iterations, 20);
        assert_eq!(result.best_iteration, 0);
        assert_eq!(result.local_search_calls, 21);
        assert!((result.best_cost - 2.0).abs() < 1e-12);
        assert_eq!(result.stop_reason, StopReason::Stagnation);
    }

    #[test]
    fn test_tabu_unbounded_iterations_stop_on_stagnation() {
        let m = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
        let config = TabuConfig::default()
            .with_max_iterations(usize::MAX)
            .with_max_no_improve(5)
            .with_seed(42);
        let result = TabuRunner::run(&m, &config).unwrap();
        assert_eq!(result.iterations, 5);
        assert_eq!(result.cost_history.len(), 6);
        assert_eq!(result.stop_reason, StopReason::Stagnation);
    }

    #[test]
    fn test_tabu_cancelled_before_start() {
        let m = scattered(6);
        let flag = Arc::new(AtomicBool::new(true));
        let result =
            TabuRunner::run_with_cancel(&m, &TabuConfig::default().with_seed(5), Some(flag))
                .unwrap();
        assert!(result.cancelled);
        assert_eq!(result.stop_reason, StopReason::Cancelled);
        assert_eq!(result.iterations, 0);
        assert!(result.history.is_empty());
        assert!(is_permutation(&result.best, 6));
    }

    #[test]
    fn test_tabu_zero_tenure_keeps_history_empty() {
        let m = scattered(7);
        let config = TabuConfig::default().with_seed(9);
        let recorded = TabuRunner::run(&m, &config).unwrap();
        let result = TabuRunner::run(&m, &config.clone().with_tabu_tenure(0)).unwrap();
        assert!(result.history.is_empty());
        assert!(is_permutation(&result.best, 7));
        assert!((tour_cost(&result.best, &m) - result.best_cost).abs() < 1e-9);
        assert_eq!(result.best, recorded.best);
        assert_eq!(result.cost_history, recorded.cost_history);
    }
}
