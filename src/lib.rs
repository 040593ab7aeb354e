pub mod cli;
pub mod command;
pub mod config;
pub mod kinematics;
pub mod model;
pub mod report;
pub mod session;

pub mod prelude {
    pub use crate::command::{Command, parse_command};
    pub use crate::config::defs::{ConverterConfig, SolutionPolicy};
    pub use crate::kinematics::converter::{Converter, Outcome};
    pub use crate::model::axes::{AxisPair, Convention};
    pub use crate::model::euler::EulerTriplet;
    pub use crate::model::limits::{AxisLimits, MachineLimits};
}
