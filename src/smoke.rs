//! Self-check exercising each component once with known inputs.

use crate::boolean_algebra::BooleanExpr;
use crate::conversions::{binary_to_decimal, NumberConverter};
use crate::error::Result;
use crate::networking::SubnetCalculator;
use std::collections::HashMap;

/// Outcome of one self-check step.
#[derive(Debug)]
pub struct Check {
    pub name: &'static str,
    pub outcome: Result<String>,
}

impl Check {
    fn run(name: &'static str, f: impl FnOnce() -> Result<String>) -> Self {
        let outcome = f();
        match &outcome {
            Ok(value) => log::debug!("check {name}: ok ({value:?})"),
            Err(e) => log::warn!("check {name}: {e}"),
        }
        Check { name, outcome }
    }

    pub fn passed(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Run every step; a failing step does not stop the ones after it.
pub fn run_smoke_checks() -> Vec<Check> {
    vec![
        Check::run("NumberConverter(42).to_binary()", || {
            Ok(NumberConverter::new(42).to_binary())
        }),
        Check::run("binary_to_decimal(\"1010\")", || {
            binary_to_decimal("1010").map(|n| n.to_string())
        }),
        Check::run("BooleanExpr(\"A AND B\")", || {
            BooleanExpr::new("A AND B").map(|expr| expr.to_string())
        }),
        Check::run("BooleanExpr.evaluate({A: true, B: false})", || {
            let expr = BooleanExpr::new("A AND B")?;
            let env = HashMap::from([("A", true), ("B", false)]);
            expr.evaluate(&env).map(|v| v.to_string())
        }),
        Check::run("SubnetCalculator(\"192.168.1.1\", 5).summary()", || {
            SubnetCalculator::new("192.168.1.1", 5).map(|calc| calc.summary())
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_checks_pass() {
        let checks = run_smoke_checks();
        assert_eq!(checks.len(), 5);
        assert!(checks.iter().all(Check::passed), "{checks:?}");

        let values: Vec<&str> = checks
            .iter()
            .map(|c| c.outcome.as_deref().unwrap_or(""))
            .collect();
        assert_eq!(values[0], "101010");
        assert_eq!(values[1], "10");
        assert_eq!(values[2], "A AND B");
        assert_eq!(values[3], "false");
        assert!(values[4].contains("Prefix length:    /27"));
    }
}
