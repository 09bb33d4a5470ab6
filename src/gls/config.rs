//! Guided Local Search configuration.

use crate::error::{Error, Result};

/// Configuration parameters for the Guided Local Search driver.
///
/// # Examples
///
/// ```
/// use agro_route::gls::GlsConfig;
///
/// let config = GlsConfig::default()
///     .with_max_iterations(200)
///     .with_alpha(0.5)
///     .with_seed(7);
/// assert_eq!(config.max_iterations, 200);
/// assert_eq!(config.max_no_improve, 50);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GlsConfig {
    /// Maximum number of construct-and-improve iterations.
    pub max_iterations: usize,
    /// Consecutive non-improving iterations before stopping.
    pub max_no_improve: usize,
    /// Initial spread of the semi-greedy candidate band, in `[0, 1]`.
    /// `0` is pure nearest-neighbor, `1` is pure random.
    pub alpha: f64,
    /// Per-iteration decay factor applied to `alpha`, in `(0, 1]`.
    pub beta: f64,
    /// Apply local search a second time to each candidate.
    ///
    /// The second pass starts from a local optimum and changes nothing; it
    /// only shows up in [`GlsResult::local_search_calls`](super::GlsResult).
    pub repeat_local_search: bool,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for GlsConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            max_no_improve: 50,
            alpha: 0.3,
            beta: 0.99,
            repeat_local_search: true,
            seed: None,
        }
    }
}

impl GlsConfig {
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

    /// Sets the initial candidate band spread.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the alpha decay factor.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_repeat_local_search(mut self, repeat: bool) -> Self {
        self.repeat_local_search = repeat;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(Error::invalid_config(format!(
                "alpha must be in [0, 1], got {}",
                self.alpha
            )));
        }
        if !(self.beta > 0.0 && self.beta <= 1.0) {
            return Err(Error::invalid_config(format!(
                "beta must be in (0, 1], got {}",
                self.beta
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gls_config_defaults() {
        let config = GlsConfig::default();
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.max_no_improve, 50);
        assert!((config.alpha - 0.3).abs() < 1e-12);
        assert!((config.beta - 0.99).abs() < 1e-12);
        assert!(config.repeat_local_search);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_gls_config_builder() {
        let config = GlsConfig::default()
            .with_max_iterations(10)
            .with_max_no_improve(3)
            .with_alpha(0.0)
            .with_beta(1.0)
            .with_repeat_local_search(false)
            .with_seed(99);

        assert_eq!(config.max_iterations, 10);
        assert_eq!(config.max_no_improve, 3);
        assert_eq!(config.alpha, 0.0);
        assert_eq!(config.beta, 1.0);
        assert!(!config.repeat_local_search);
        assert_eq!(config.seed, Some(99));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_gls_validate_bad_alpha() {
        assert!(GlsConfig::default().with_alpha(-0.1).validate().is_err());
        assert!(GlsConfig::default().with_alpha(1.5).validate().is_err());
        assert!(GlsConfig::default().with_alpha(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_gls_validate_bad_beta() {
        assert!(GlsConfig::default().with_beta(0.0).validate().is_err());
        assert!(GlsConfig::default().with_beta(1.01).validate().is_err());
        assert!(GlsConfig::default().with_beta(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_gls_validate_reports_invalid_config() {
        let err = GlsConfig::default().with_alpha(2.0).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}
