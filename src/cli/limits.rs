use crate::cli::Context;
use crate::report::OutputFormat;

pub fn handle(ctx: &Context) -> anyhow::Result<()> {
    let config = ctx.converter.config();
    let rendered = match ctx.format {
        OutputFormat::Text => toml::to_string_pretty(config)?,
        OutputFormat::Json => serde_json::to_string_pretty(config)?,
    };
    println!("{rendered}");
    Ok(())
}
