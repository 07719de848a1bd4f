//! Run configuration.

use serde::{Deserialize, Serialize};

/// Whether negative edge weights are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeightPolicy {
    /// Any integral weight is accepted.
    #[default]
    AllowNegative,
    /// A negative weight fails the run with [`KruskalError::NegativeWeight`].
    ///
    /// [`KruskalError::NegativeWeight`]: crate::graph::KruskalError::NegativeWeight
    NonNegative,
}

/// Options for one engine run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KruskalConfig {
    /// Attach a component snapshot to every accepted step.
    pub snapshots: bool,
    /// Weight validation policy.
    pub weights: WeightPolicy,
}

impl KruskalConfig {
    /// Default configuration: snapshots on, negative weights allowed.
    pub const fn new() -> Self {
        Self {
            snapshots: true,
            weights: WeightPolicy::AllowNegative,
        }
    }

    /// Turns component snapshots on or off.
    #[must_use]
    pub const fn with_snapshots(mut self, snapshots: bool) -> Self {
        self.snapshots = snapshots;
        self
    }

    /// Sets the weight policy.
    #[must_use]
    pub const fn with_weight_policy(mut self, weights: WeightPolicy) -> Self {
        self.weights = weights;
        self
    }
}

impl Default for KruskalConfig {
    fn default() -> Self {
        Self::new()
    }
}
