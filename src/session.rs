use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::command::parse_command;
use crate::kinematics::converter::Converter;
use crate::report::{self, OutputFormat};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub messages: usize,
    pub answered: usize,
    pub rejected: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub body: String,
    pub ok: bool,
}

impl Reply {
    fn ok(body: String) -> Self {
        Self { body, ok: true }
    }

    fn error(message: &str, format: OutputFormat) -> Self {
        Self {
            body: report::render_error(message, format),
            ok: false,
        }
    }
}

/// Reply to one incoming message. `None` for blank lines.
pub fn handle_message(converter: &Converter, text: &str, format: OutputFormat) -> Option<Reply> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if is_help(trimmed) {
        return Some(Reply::ok(report::text::usage(converter.config())));
    }

    let command = match parse_command(trimmed) {
        Ok(command) => command,
        Err(err) => {
            warn!(text = trimmed, error = %err, "rejected message");
            return Some(Reply::error(&err.to_string(), format));
        }
    };

    let reply = match converter.execute(&command) {
        Ok(outcome) => {
            info!(
                convention = command.convention().as_str(),
                direction = command.direction(),
                "converted"
            );
            match report::render_outcome(&outcome, format) {
                Ok(body) => Reply::ok(body),
                Err(err) => Reply::error(&format!("internal error: {err}"), format),
            }
        }
        Err(err) => {
            warn!(
                convention = command.convention().as_str(),
                direction = command.direction(),
                error = %err,
                "conversion failed"
            );
            Reply::error(&err.to_string(), format)
        }
    };
    Some(reply)
}

fn is_help(text: &str) -> bool {
    matches!(
        text.to_ascii_lowercase().as_str(),
        "/start" | "/help" | "help"
    )
}

/// Reads one message per line and writes one reply per message.
pub fn run_session<R: BufRead, W: Write>(
    converter: &Converter,
    format: OutputFormat,
    mut input: R,
    mut output: W,
) -> std::io::Result<SessionStats> {
    let mut stats = SessionStats::default();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        // undecodable bytes become U+FFFD and fail parsing for this message only
        let line = String::from_utf8_lossy(&buf);
        let Some(reply) = handle_message(converter, &line, format) else {
            continue;
        };
        stats.messages += 1;
        if reply.ok {
            stats.answered += 1;
        } else {
            stats.rejected += 1;
        }
        output.write_all(reply.body.as_bytes())?;
        if !reply.body.ends_with('\n') {
            output.write_all(b"\n")?;
        }
        output.flush()?;
    }
    info!(
        messages = stats.messages,
        answered = stats.answered,
        rejected = stats.rejected,
        "session finished"
    );
    Ok(stats)
}

#[cfg(test)]
#[path = "../tests/src_inline/session.rs"]
mod tests;
