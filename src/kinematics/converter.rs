use serde::Serialize;
use tracing::debug;

use crate::command::Command;
use crate::config::defs::{ConverterConfig, SolutionPolicy};
use crate::kinematics::{self, KinematicsError};
use crate::model::axes::{AxisPair, AxisSolution, Convention};
use crate::model::euler::EulerTriplet;
use crate::model::limits::AxisLimits;

#[derive(Debug, Clone, Serialize)]
pub struct ForwardOutcome {
    pub convention: Convention,
    pub input: AxisPair,
    pub limits: AxisLimits,
    pub tilt_within_limits: bool,
    pub euler: EulerTriplet,
    pub tool_axis: [f64; 3],
}

#[derive(Debug, Clone, Serialize)]
pub struct InverseOutcome {
    pub convention: Convention,
    pub input: EulerTriplet,
    pub limits: AxisLimits,
    pub policy: SolutionPolicy,
    pub solutions: Vec<AxisSolution>,
    pub tool_axis: [f64; 3],
}

impl InverseOutcome {
    pub fn any_within_limits(&self) -> bool {
        self.solutions.iter().any(|s| s.within_limits)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "direction", rename_all = "lowercase")]
pub enum Outcome {
    Forward(ForwardOutcome),
    Inverse(InverseOutcome),
}

/// Stateless front of the kinematics: applies machine limits and the solution policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    config: ConverterConfig,
}

impl Converter {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    pub fn execute(&self, command: &Command) -> Result<Outcome, KinematicsError> {
        match *command {
            Command::ForwardBc(pair) => self.forward(Convention::Bc, pair).map(Outcome::Forward),
            Command::ForwardAc(pair) => self.forward(Convention::Ac, pair).map(Outcome::Forward),
            Command::InverseBc(euler) => self.inverse(Convention::Bc, euler).map(Outcome::Inverse),
            Command::InverseAc(euler) => self.inverse(Convention::Ac, euler).map(Outcome::Inverse),
        }
    }

    pub fn forward(
        &self,
        convention: Convention,
        pair: AxisPair,
    ) -> Result<ForwardOutcome, KinematicsError> {
        let limits = convention.tilt_limits(&self.config.limits);
        let tilt_within_limits = limits.contains(pair.tilt);
        if !tilt_within_limits && self.config.policy == SolutionPolicy::PreferInLimits {
            return Err(KinematicsError::LimitViolation {
                axis: convention.tilt_name(),
                limits,
                candidates: vec![pair],
            });
        }

        let euler = kinematics::forward(convention, pair);
        Ok(ForwardOutcome {
            convention,
            input: pair,
            limits,
            tilt_within_limits,
            euler,
            tool_axis: pair.to_matrix(convention).z_axis.to_array(),
        })
    }

    pub fn inverse(
        &self,
        convention: Convention,
        euler: EulerTriplet,
    ) -> Result<InverseOutcome, KinematicsError> {
        let limits = convention.tilt_limits(&self.config.limits);
        let candidates = kinematics::inverse(convention, euler)?;
        debug!(
            convention = convention.as_str(),
            candidates = candidates.len(),
            "solved inverse kinematics"
        );

        let annotated: Vec<AxisSolution> = candidates
            .iter()
            .map(|pair| AxisSolution::annotate(*pair, &limits))
            .collect();

        let solutions = match self.config.policy {
            SolutionPolicy::All => annotated,
            SolutionPolicy::PreferInLimits => match annotated.iter().find(|s| s.within_limits) {
                Some(best) => vec![*best],
                None => {
                    return Err(KinematicsError::LimitViolation {
                        axis: convention.tilt_name(),
                        limits,
                        candidates,
                    });
                }
            },
        };

        Ok(InverseOutcome {
            convention,
            input: euler,
            limits,
            policy: self.config.policy,
            solutions,
            tool_axis: euler.tool_axis().to_array(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/kinematics/converter.rs"]
mod tests;
