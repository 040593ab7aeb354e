pub mod parse;

use crate::model::axes::{AxisPair, Convention};
use crate::model::euler::EulerTriplet;

pub use parse::{CommandError, parse_command};

/// A fully parsed conversion request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    ForwardBc(AxisPair),
    ForwardAc(AxisPair),
    InverseBc(EulerTriplet),
    InverseAc(EulerTriplet),
}

impl Command {
    pub fn convention(&self) -> Convention {
        match self {
            Command::ForwardBc(_) | Command::InverseBc(_) => Convention::Bc,
            Command::ForwardAc(_) | Command::InverseAc(_) => Convention::Ac,
        }
    }

    pub fn direction(&self) -> &'static str {
        match self {
            Command::ForwardBc(_) | Command::ForwardAc(_) => "forward",
            Command::InverseBc(_) | Command::InverseAc(_) => "inverse",
        }
    }
}
