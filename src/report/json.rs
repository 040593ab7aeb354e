use serde_json::json;

use crate::kinematics::converter::Outcome;

pub fn render_outcome(outcome: &Outcome) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(outcome)
}

pub fn render_error(message: &str) -> String {
    json!({ "error": message }).to_string()
}
