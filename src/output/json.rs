//! JSON output.

use serde::Serialize;

/// Pretty-printed JSON for any serializable report.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boolean_algebra::BooleanExpr;
    use crate::networking::{SubnetCalculator, SubnetRow};
    use serde_json::Value;

    #[test]
    fn test_subnet_rows_json() {
        let calc = SubnetCalculator::new("10.0.0.0/8", 2).unwrap();
        let rows: Vec<SubnetRow> = calc.subnets().collect();
        let value: Value = serde_json::from_str(&to_json(&rows).unwrap()).unwrap();
        assert_eq!(value[1]["index"], 2);
        assert_eq!(value[1]["network"], "10.128.0.0");
        assert_eq!(value[1]["broadcast"], "10.255.255.255");
        assert_eq!(value[0]["hosts"], 8_388_606);
    }

    #[test]
    fn test_truth_table_json() {
        let table = BooleanExpr::new("NOT A").unwrap().truth_table().unwrap();
        let value: Value = serde_json::from_str(&to_json(&table).unwrap()).unwrap();
        assert_eq!(value["variables"][0], "A");
        assert_eq!(value["rows"][0]["values"][0], false);
        assert_eq!(value["rows"][0]["result"], true);
    }
}
