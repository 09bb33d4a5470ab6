//! Why a driver run ended.

use std::fmt;

/// Termination cause of a GLS or TS run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// All `max_iterations` iterations ran.
    MaxIterations,
    /// `max_no_improve` consecutive iterations failed to beat the best.
    Stagnation,
    /// The cancellation flag was set.
    Cancelled,
}

impl StopReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MaxIterations => "max_iterations",
            Self::Stagnation => "stagnation",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_reason_display() {
        assert_eq!(StopReason::MaxIterations.to_string(), "max_iterations");
        assert_eq!(StopReason::Stagnation.to_string(), "stagnation");
        assert_eq!(StopReason::Cancelled.to_string(), "cancelled");
    }
}
