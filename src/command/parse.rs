use thiserror::Error;

use crate::command::Command;
use crate::model::axes::{AxisPair, Convention};
use crate::model::euler::EulerTriplet;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("empty message")]
    Empty,
    #[error("unknown mode '{0}': expected BC, AC or IJK")]
    UnknownMode(String),
    #[error("{mode} expects {expected} numbers, got {got}")]
    ArgCount {
        mode: &'static str,
        expected: &'static str,
        got: usize,
    },
    #[error("inputs must be numeric: '{0}'")]
    NotNumeric(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Convention(Convention),
    /// Old keyword: always B/C → I/J/K.
    LegacyIjk,
}

impl Mode {
    fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "BC" => Some(Mode::Convention(Convention::Bc)),
            "AC" => Some(Mode::Convention(Convention::Ac)),
            "IJK" => Some(Mode::LegacyIjk),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Mode::Convention(c) => c.as_str(),
            Mode::LegacyIjk => "IJK",
        }
    }
}

/// Parses `<MODE> <n1> <n2> [n3]`. Two numbers ask for the forward
/// transform, three for the inverse. Commas count as separators.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut tokens = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty());

    let head = tokens.next().ok_or(CommandError::Empty)?;
    let mode = Mode::from_token(head).ok_or_else(|| CommandError::UnknownMode(head.to_string()))?;
    let args: Vec<&str> = tokens.collect();

    let expected = match mode {
        Mode::LegacyIjk => "2",
        Mode::Convention(_) => "2 or 3",
    };
    let arg_count = || CommandError::ArgCount {
        mode: mode.as_str(),
        expected,
        got: args.len(),
    };
    let arity_ok = match mode {
        Mode::LegacyIjk => args.len() == 2,
        Mode::Convention(_) => args.len() == 2 || args.len() == 3,
    };
    if !arity_ok {
        return Err(arg_count());
    }

    let values = args
        .iter()
        .map(|t| parse_angle(t))
        .collect::<Result<Vec<f64>, _>>()?;

    match (mode, values.as_slice()) {
        (Mode::LegacyIjk | Mode::Convention(Convention::Bc), &[tilt, c]) => {
            Ok(Command::ForwardBc(AxisPair::new(tilt, c)))
        }
        (Mode::Convention(Convention::Ac), &[tilt, c]) => {
            Ok(Command::ForwardAc(AxisPair::new(tilt, c)))
        }
        (Mode::Convention(Convention::Bc), &[i, j, k]) => {
            Ok(Command::InverseBc(EulerTriplet::new(i, j, k)))
        }
        (Mode::Convention(Convention::Ac), &[i, j, k]) => {
            Ok(Command::InverseAc(EulerTriplet::new(i, j, k)))
        }
        _ => Err(arg_count()),
    }
}

fn parse_angle(token: &str) -> Result<f64, CommandError> {
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(CommandError::NotNumeric(token.to_string())),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/command/parse.rs"]
mod tests;
