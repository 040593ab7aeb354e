use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::defs::SolutionPolicy;
use crate::config::loader::resolve_config;
use crate::kinematics::converter::Converter;
use crate::report::OutputFormat;

mod convert;
mod eval;
mod limits;
mod session;

#[derive(Parser, Debug)]
#[command(name = "rotary-ijk", version, about = "Rotary axis <-> ZXZ I/J/K converter")]
pub struct Cli {
    /// Machine config (TOML). Defaults to ./rotary-ijk.toml when present
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, global = true, default_value = "text")]
    format: OutputFormat,

    /// Override the solution policy of the config
    #[arg(long, value_enum, global = true)]
    policy: Option<SolutionPolicy>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Tilt and C -> I, J, K
    Forward(convert::ForwardArgs),
    /// I, J, K -> tilt and C
    Inverse(convert::InverseArgs),
    /// Evaluate one free-text message, e.g. "BC -60 90 -90"
    Eval(eval::EvalArgs),
    /// Answer messages read line by line from stdin
    Session,
    /// Print the active limits and policy
    Limits,
}

pub(crate) struct Context {
    pub converter: Converter,
    pub format: OutputFormat,
}

impl Cli {
    pub fn dispatch(self) -> anyhow::Result<()> {
        let mut config = resolve_config(self.config.as_deref())?;
        if let Some(policy) = self.policy {
            config.policy = policy;
        }
        let ctx = Context {
            converter: Converter::new(config),
            format: self.format,
        };

        match self.command {
            Command::Forward(args) => convert::handle_forward(args, &ctx),
            Command::Inverse(args) => convert::handle_inverse(args, &ctx),
            Command::Eval(args) => eval::handle(args, &ctx),
            Command::Session => session::handle(&ctx),
            Command::Limits => limits::handle(&ctx),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/mod.rs"]
mod tests;
