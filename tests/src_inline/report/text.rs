use super::*;
use crate::command::Command;
use crate::config::defs::SolutionPolicy;
use crate::kinematics::converter::Converter;
use crate::model::axes::AxisPair;
use crate::model::euler::EulerTriplet;
use crate::model::limits::{AxisLimits, MachineLimits};

#[test]
fn inverse_lists_every_solution() {
    let outcome = Converter::default()
        .execute(&Command::InverseBc(EulerTriplet::new(178.0, 36.0, -90.0)))
        .expect("inverse");
    let text = render_outcome(&outcome);
    assert_eq!(
        text,
        "IJK (178.000, 36.000, -90.000) -> BC:\n\
         solution 1: B=36.000° C=88.000° [within limits]\n\
         solution 2: B=-36.000° C=-92.000° [within limits]\n"
    );
}

#[test]
fn inverse_warns_when_nothing_fits() {
    let converter = Converter::new(ConverterConfig {
        policy: SolutionPolicy::All,
        limits: MachineLimits {
            a: AxisLimits::new(-120.0, 120.0),
            b: AxisLimits::new(-20.0, 120.0),
        },
    });
    let outcome = converter
        .execute(&Command::InverseBc(EulerTriplet::new(0.0, 150.0, 90.0)))
        .expect("inverse");
    let text = render_outcome(&outcome);
    assert!(text.contains("[outside B limits [-20.000, 120.000]]"), "{text}");
    assert!(text.ends_with("warning: no solution within B limits [-20.000, 120.000]\n"));
}

#[test]
fn forward_prints_ijk() {
    let outcome = Converter::default()
        .execute(&Command::ForwardAc(AxisPair::new(45.0, 30.0)))
        .expect("forward");
    let text = render_outcome(&outcome);
    assert_eq!(
        text,
        "AC (A=45.000, C=30.000) -> IJK (ZXZ):\nI: 30.000°\nJ: 45.000°\nK: 0.000°\n"
    );
}

#[test]
fn usage_mentions_limits() {
    let text = usage(&ConverterConfig::default());
    assert!(text.contains("B limits: [-120.000, 120.000]"));
    assert!(text.contains("Solution policy: all"));
}
