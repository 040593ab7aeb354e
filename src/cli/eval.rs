use clap::Args;

use crate::cli::Context;
use crate::session::handle_message;

#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Message tokens, e.g. BC -60 90 -90
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true, trailing_var_arg = true)]
    pub(crate) message: Vec<String>,
}

pub fn handle(args: EvalArgs, ctx: &Context) -> anyhow::Result<()> {
    let text = args.message.join(" ");
    let Some(reply) = handle_message(&ctx.converter, &text, ctx.format) else {
        anyhow::bail!("empty message");
    };
    print!("{}", reply.body);
    if !reply.body.ends_with('\n') {
        println!();
    }
    if !reply.ok {
        anyhow::bail!("message rejected");
    }
    Ok(())
}
