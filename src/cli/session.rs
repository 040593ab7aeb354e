use std::io;

use tracing::info;

use crate::cli::Context;
use crate::session::run_session;

pub fn handle(ctx: &Context) -> anyhow::Result<()> {
    let config = ctx.converter.config();
    info!(
        policy = config.policy.as_str(),
        a_limits = %config.limits.a,
        b_limits = %config.limits.b,
        "session started, one message per line"
    );
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&ctx.converter, ctx.format, stdin.lock(), stdout.lock())?;
    Ok(())
}
