//! Tabu Search configuration.

use crate::error::Result;

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use agro_route::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(1000)
///     .with_tabu_tenure(7);
/// assert_eq!(config.max_iterations, 1000);
/// assert_eq!(config.tabu_tenure, 7);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TabuConfig {
    /// Maximum number of iterations.
    pub max_iterations: usize,
    /// Maximum iterations without improvement before stopping.
    pub max_no_improve: usize,
    /// Capacity of the history buffer of recent best tours. Zero keeps
    /// the buffer empty.
    pub tabu_tenure: usize,
    /// Whether to keep the history buffer at all.
    ///
    /// The buffer is never consulted when choosing candidates; turning it
    /// off changes nothing but [`TabuResult::history`](super::TabuResult).
    pub record_history: bool,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            max_no_improve: 50,
            tabu_tenure: 10,
            record_history: true,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets maximum iterations without improvement.
    pub fn with_max_no_improve(mut self, n: usize) -> Self {
        self.max_no_improve = n;
        self
    }

    /// Sets the history buffer capacity.
    pub fn with_tabu_tenure(mut self, tenure: usize) -> Self {
        self.tabu_tenure = tenure;
        self
    }

    pub fn with_record_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Every combination of fields is currently accepted, including a zero
    /// `tabu_tenure`.
    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}
