//! Markdown tables for subnet listings, summaries and truth tables.

use crate::boolean_algebra::{StepTable, TruthTable};
use crate::networking::{SubnetReport, SubnetRow};
use itertools::Itertools;

fn cell<T: ToString>(value: T) -> String {
    value.to_string().replace('|', "\\|")
}

fn bit(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

fn table_row<I, T>(cells: I) -> String
where
    I: IntoIterator<Item = T>,
    T: ToString,
{
    format!("| {} |\n", cells.into_iter().map(cell).join(" | "))
}

fn rule(columns: usize) -> String {
    format!("|{}\n", "---|".repeat(columns))
}

/// Subnet rows as a Markdown table.
pub fn subnet_rows_markdown<'a, I>(rows: I) -> String
where
    I: IntoIterator<Item = &'a SubnetRow>,
{
    let headers = ["subnet", "network", "first host", "last host", "broadcast", "hosts"];
    let mut out = table_row(headers);
    out.push_str(&rule(headers.len()));
    for row in rows {
        out.push_str(&table_row([
            row.index.to_string(),
            row.network.to_string(),
            row.first_host.to_string(),
            row.last_host.to_string(),
            row.broadcast.to_string(),
            row.hosts.to_string(),
        ]));
    }
    out
}

/// Subnet summary as a bold-label list.
pub fn report_markdown(report: &SubnetReport) -> String {
    report
        .fields()
        .into_iter()
        .map(|(label, value)| format!("- **{label}**: {}\n", cell(value)))
        .collect()
}

/// Truth table with a final `result` column.
pub fn truth_table_markdown(table: &TruthTable) -> String {
    let mut out = table_row(table.variables.iter().map(String::as_str).chain(["result"]));
    out.push_str(&rule(table.variables.len() + 1));
    for row in &table.rows {
        out.push_str(&table_row(row.values.iter().chain([&row.result]).map(|v| bit(*v))));
    }
    out
}

/// Step table; the last column is headed by the whole expression.
pub fn step_table_markdown(table: &StepTable) -> String {
    let headers = table
        .variables
        .iter()
        .chain(&table.steps)
        .chain([&table.expression]);
    let mut out = table_row(headers);
    out.push_str(&rule(table.variables.len() + table.steps.len() + 1));
    for row in &table.rows {
        let cells = row.values.iter().chain(&row.steps).chain([&row.result]);
        out.push_str(&table_row(cells.map(|v| bit(*v))));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boolean_algebra::BooleanExpr;
    use crate::networking::SubnetCalculator;

    #[test]
    fn test_truth_table_markdown() {
        let table = BooleanExpr::new("A OR B").unwrap().truth_table().unwrap();
        assert_eq!(
            truth_table_markdown(&table),
            "| A | B | result |\n\
             |---|---|---|\n\
             | 0 | 0 | 0 |\n\
             | 0 | 1 | 1 |\n\
             | 1 | 0 | 1 |\n\
             | 1 | 1 | 1 |\n"
        );
    }

    #[test]
    fn test_step_table_markdown() {
        let table = BooleanExpr::new("NOT A AND B").unwrap().step_table().unwrap();
        let md = step_table_markdown(&table);
        let lines: Vec<&str> = md.lines().collect();
        assert_eq!(lines[0], "| A | B | NOT A | NOT A AND B |");
        assert_eq!(lines[1], "|---|---|---|---|");
        assert_eq!(lines[3], "| 0 | 1 | 1 | 1 |");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_subnet_markdown() {
        let calc = SubnetCalculator::new("192.168.1.1", 2).unwrap();
        let rows: Vec<SubnetRow> = calc.subnets().collect();
        let md = subnet_rows_markdown(&rows);
        let lines: Vec<&str> = md.lines().collect();
        assert_eq!(lines[0], "| subnet | network | first host | last host | broadcast | hosts |");
        assert_eq!(
            lines[3],
            "| 2 | 192.168.1.128 | 192.168.1.129 | 192.168.1.254 | 192.168.1.255 | 126 |"
        );

        let summary = report_markdown(&calc.report());
        assert!(summary.starts_with("- **Address**: 192.168.1.1\n"));
        assert!(summary.contains("- **Prefix length**: /25\n"));
        assert_eq!(summary.lines().count(), 12);
    }

    #[test]
    fn test_cell_escapes_pipes() {
        assert_eq!(table_row(["a|b", "c"]), "| a\\|b | c |\n");
    }
}
