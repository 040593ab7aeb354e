use clap::Args;

use crate::cli::Context;
use crate::command::Command;
use crate::model::axes::{AxisPair, Convention};
use crate::model::euler::EulerTriplet;
use crate::report::{render_error, render_outcome};

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConventionArg {
    Bc,
    Ac,
}

impl From<ConventionArg> for Convention {
    fn from(value: ConventionArg) -> Self {
        match value {
            ConventionArg::Bc => Convention::Bc,
            ConventionArg::Ac => Convention::Ac,
        }
    }
}

#[derive(Args, Debug)]
pub struct ForwardArgs {
    /// Kinematic chain
    #[arg(value_enum)]
    pub(crate) convention: ConventionArg,

    /// Tilt angle (B or A) in degrees
    #[arg(allow_negative_numbers = true)]
    pub(crate) tilt: f64,

    /// C angle in degrees
    #[arg(allow_negative_numbers = true)]
    pub(crate) c: f64,
}

#[derive(Args, Debug)]
pub struct InverseArgs {
    /// Kinematic chain
    #[arg(value_enum)]
    pub(crate) convention: ConventionArg,

    #[arg(allow_negative_numbers = true)]
    pub(crate) i: f64,

    #[arg(allow_negative_numbers = true)]
    pub(crate) j: f64,

    #[arg(allow_negative_numbers = true)]
    pub(crate) k: f64,
}

pub fn handle_forward(args: ForwardArgs, ctx: &Context) -> anyhow::Result<()> {
    let pair = AxisPair::new(args.tilt, args.c);
    let command = match Convention::from(args.convention) {
        Convention::Bc => Command::ForwardBc(pair),
        Convention::Ac => Command::ForwardAc(pair),
    };
    emit(respond(&[args.tilt, args.c], command, ctx))
}

pub fn handle_inverse(args: InverseArgs, ctx: &Context) -> anyhow::Result<()> {
    let euler = EulerTriplet::new(args.i, args.j, args.k);
    let command = match Convention::from(args.convention) {
        Convention::Bc => Command::InverseBc(euler),
        Convention::Ac => Command::InverseAc(euler),
    };
    emit(respond(&[args.i, args.j, args.k], command, ctx))
}

/// Rendered outcome, or the error rendered in the same output format.
pub(crate) fn respond(values: &[f64], command: Command, ctx: &Context) -> Result<String, String> {
    if values.iter().any(|v| !v.is_finite()) {
        return Err(render_error("inputs must be numeric", ctx.format));
    }
    let outcome = ctx
        .converter
        .execute(&command)
        .map_err(|err| render_error(&err.to_string(), ctx.format))?;
    render_outcome(&outcome, ctx.format)
        .map_err(|err| render_error(&format!("internal error: {err}"), ctx.format))
}

fn emit(response: Result<String, String>) -> anyhow::Result<()> {
    match response {
        Ok(body) => {
            print!("{body}");
            Ok(())
        }
        Err(body) => {
            print!("{body}");
            if !body.ends_with('\n') {
                println!();
            }
            anyhow::bail!("conversion rejected")
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/convert.rs"]
mod tests;
