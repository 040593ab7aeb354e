use crate::config::defs::ConverterConfig;
use crate::kinematics::converter::{ForwardOutcome, InverseOutcome, Outcome};

pub fn render_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Forward(out) => render_forward(out),
        Outcome::Inverse(out) => render_inverse(out),
    }
}

fn render_forward(out: &ForwardOutcome) -> String {
    let tilt = out.convention.tilt_name();
    let mut s = String::new();
    s.push_str(&format!(
        "{} ({}={:.3}, C={:.3}) -> IJK (ZXZ):\n",
        out.convention, tilt, out.input.tilt, out.input.c
    ));
    s.push_str(&format!("I: {:.3}°\n", out.euler.i));
    s.push_str(&format!("J: {:.3}°\n", out.euler.j));
    s.push_str(&format!("K: {:.3}°\n", out.euler.k));
    if !out.tilt_within_limits {
        s.push_str(&format!(
            "warning: {}={:.3}° is outside {} limits {}\n",
            tilt, out.input.tilt, tilt, out.limits
        ));
    }
    s
}

fn render_inverse(out: &InverseOutcome) -> String {
    let tilt = out.convention.tilt_name();
    let mut s = String::new();
    s.push_str(&format!(
        "IJK ({:.3}, {:.3}, {:.3}) -> {}:\n",
        out.input.i, out.input.j, out.input.k, out.convention
    ));
    for (idx, solution) in out.solutions.iter().enumerate() {
        let status = if solution.within_limits {
            "within limits".to_string()
        } else {
            format!("outside {} limits {}", tilt, out.limits)
        };
        s.push_str(&format!(
            "solution {}: {}={:.3}° C={:.3}° [{}]\n",
            idx + 1,
            tilt,
            solution.pair.tilt,
            solution.pair.c,
            status
        ));
    }
    if !out.any_within_limits() {
        s.push_str(&format!(
            "warning: no solution within {} limits {}\n",
            tilt, out.limits
        ));
    }
    s
}

pub fn render_error(message: &str) -> String {
    format!("error: {message}\n")
}

pub fn usage(config: &ConverterConfig) -> String {
    let mut s = String::new();
    s.push_str("Rotary axis / ZXZ Euler angle calculator.\n\n");
    s.push_str("Modes:\n");
    s.push_str("1. IJK -> BC: 'BC I J K' (e.g. BC -60 90 -90)\n");
    s.push_str("2. BC -> IJK: 'BC B C' or 'IJK B C' (e.g. IJK -45 90)\n");
    s.push_str("3. IJK -> AC: 'AC I J K' (e.g. AC 30 45 0)\n");
    s.push_str("4. AC -> IJK: 'AC A C' (e.g. AC 45 30)\n\n");
    s.push_str("BC: table-table, B around Y. AC: A around X. C around Z.\n");
    s.push_str(&format!("A limits: {}\n", config.limits.a));
    s.push_str(&format!("B limits: {}\n", config.limits.b));
    s.push_str(&format!("Solution policy: {}\n", config.policy.as_str()));
    s
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
