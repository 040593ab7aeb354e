pub mod json;
pub mod text;

use crate::kinematics::converter::Outcome;

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn render_outcome(
    outcome: &Outcome,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(text::render_outcome(outcome)),
        OutputFormat::Json => json::render_outcome(outcome),
    }
}

pub fn render_error(message: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => text::render_error(message),
        OutputFormat::Json => json::render_error(message),
    }
}
