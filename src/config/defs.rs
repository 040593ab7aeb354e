use serde::{Deserialize, Serialize};

use crate::model::limits::MachineLimits;

/// How inverse solutions are filtered against the tilt-axis limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SolutionPolicy {
    /// Return every algebraic solution with its limit flag.
    #[default]
    All,
    /// Return only the first solution inside the limits, or fail.
    PreferInLimits,
}

impl SolutionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SolutionPolicy::All => "all",
            SolutionPolicy::PreferInLimits => "prefer-in-limits",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ConverterConfig {
    #[serde(default)]
    pub policy: SolutionPolicy,
    #[serde(default)]
    pub limits: MachineLimits,
}
