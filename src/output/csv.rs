//! CSV output for subnet rows and truth tables.

use super::terminal::format_field;
use crate::boolean_algebra::{StepTable, TruthTable};
use crate::networking::{SubnetReport, SubnetRow};
use itertools::Itertools;

/// Render subnet rows as CSV, header first.
pub fn subnet_rows_csv<'a, I>(rows: I) -> String
where
    I: IntoIterator<Item = &'a SubnetRow>,
{
    let mut out = String::new();
    out.push_str(
        r#" "subnet",          "network",       "first_host",        "last_host",        "broadcast",      "hosts""#,
    );
    out.push('\n');

    let mut count = 0;
    for row in rows {
        out.push_str(&format!(
            "{index},{network},{first},{last},{broadcast},{hosts}\n",
            index = format_field(row.index, 9),
            network = format_field(row.network, 18),
            first = format_field(row.first_host, 18),
            last = format_field(row.last_host, 18),
            broadcast = format_field(row.broadcast, 18),
            hosts = format_field(row.hosts, 12),
        ));
        count += 1;
    }
    log::debug!("subnet_rows_csv: {count} rows");
    out
}

/// Render a truth table as CSV with `0`/`1` cells and a final `result` column.
pub fn truth_table_csv(table: &TruthTable) -> String {
    let header = table
        .variables
        .iter()
        .map(|name| format_field(name, 0))
        .chain(std::iter::once(format_field("result", 0)))
        .join(",");

    let mut out = header;
    out.push('\n');
    for row in &table.rows {
        let line = row
            .values
            .iter()
            .chain(std::iter::once(&row.result))
            .map(|value| format_field(u8::from(*value), 0))
            .join(",");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Render a step table; the final column is headed by the whole expression.
pub fn step_table_csv(table: &StepTable) -> String {
    let header = table
        .variables
        .iter()
        .chain(&table.steps)
        .chain(std::iter::once(&table.expression))
        .map(|name| format_field(name, 0))
        .join(",");

    let mut out = header;
    out.push('\n');
    for row in &table.rows {
        let line = row
            .values
            .iter()
            .chain(&row.steps)
            .chain(std::iter::once(&row.result))
            .map(|value| format_field(u8::from(*value), 0))
            .join(",");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Render a subnet summary as `key,value` rows.
pub fn report_csv(report: &SubnetReport) -> String {
    let mut out = String::from("key,value\n");
    for (label, value) in report.fields() {
        out.push_str(&format!("{},{}\n", format_field(label, 0), format_field(value, 0)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boolean_algebra::BooleanExpr;
    use crate::networking::SubnetCalculator;

    #[test]
    fn test_subnet_rows_csv() {
        let calc = SubnetCalculator::new("192.168.1.1", 2).unwrap();
        let rows: Vec<SubnetRow> = calc.subnets().collect();
        let csv = subnet_rows_csv(&rows);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("\"network\""));
        assert_eq!(
            lines[1],
            r#"      "1",     "192.168.1.0",     "192.168.1.1",   "192.168.1.126",   "192.168.1.127",       "126""#
        );
        assert!(lines[2].contains("\"192.168.1.128\""));
    }

    #[test]
    fn test_report_csv() {
        let report = SubnetCalculator::new("192.168.1.1", 5).unwrap().report();
        let csv = report_csv(&report);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "key,value");
        assert_eq!(lines[1], r#""Address","192.168.1.1""#);
        assert_eq!(lines[7], r#""Prefix length","/27""#);
        assert_eq!(lines[11], r#""Host range","192.168.1.1 - 192.168.1.30""#);
        assert_eq!(lines[12], r#""Usable hosts","30""#);
    }

    #[test]
    fn test_step_table_csv() {
        let table = BooleanExpr::new("A OR NOT B").unwrap().step_table().unwrap();
        let csv = step_table_csv(&table);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], r#""A","B","NOT B","A OR NOT B""#);
        assert_eq!(lines[2], r#""0","1","0","0""#);
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_truth_table_csv() {
        let table = BooleanExpr::new("A AND B").unwrap().truth_table().unwrap();
        assert_eq!(
            truth_table_csv(&table),
            "\"A\",\"B\",\"result\"\n\
             \"0\",\"0\",\"0\"\n\
             \"0\",\"1\",\"0\"\n\
             \"1\",\"0\",\"0\"\n\
             \"1\",\"1\",\"1\"\n"
        );
    }
}
