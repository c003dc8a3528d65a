//! Truth tables over the variables of an expression.

use super::ast::Node;
use crate::error::{Error, Result};
use itertools::Itertools;
use serde::Serialize;
use std::fmt;

/// Largest number of variables a truth table may span.
pub const MAX_TRUTH_TABLE_VARS: usize = 16;

/// One assignment of the table's variables and the resulting value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TruthRow {
    /// Values in the same order as [`TruthTable::variables`].
    pub values: Vec<bool>,
    pub result: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TruthTable {
    pub variables: Vec<String>,
    pub rows: Vec<TruthRow>,
}

/// One assignment with the value of every intermediate step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRow {
    pub values: Vec<bool>,
    /// Values in the same order as [`StepTable::steps`].
    pub steps: Vec<bool>,
    pub result: bool,
}

/// Truth table with an extra column per compound sub-expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepTable {
    pub variables: Vec<String>,
    /// Normalized sub-expressions, operands before the operators using them.
    pub steps: Vec<String>,
    /// Normalized text of the whole expression.
    pub expression: String,
    pub rows: Vec<StepRow>,
}

pub(crate) fn check_size(n: usize) -> Result<()> {
    if n > MAX_TRUTH_TABLE_VARS {
        return Err(Error::range(format!(
            "truth table over {n} variables, at most {MAX_TRUTH_TABLE_VARS} supported"
        )));
    }
    Ok(())
}

/// Every assignment of `n` variables in binary counting order, first
/// variable most significant.
pub(crate) fn assignments(n: usize) -> impl Iterator<Item = Vec<bool>> {
    (0..(1usize << n)).map(move |i| (0..n).map(|j| (i >> (n - 1 - j)) & 1 == 1).collect())
}

fn evaluate_row(node: &Node, variables: &[String], values: &[bool]) -> Result<bool> {
    let lookup = |name: &str| variables.iter().position(|v| v == name).map(|idx| values[idx]);
    node.evaluate(&lookup)
}

impl TruthTable {
    /// Evaluate `ast` for every assignment of `variables`.
    ///
    /// The first row is all `false`.
    pub(crate) fn build(ast: &Node, variables: &[String]) -> Result<Self> {
        check_size(variables.len())?;

        let mut rows = Vec::with_capacity(1 << variables.len());
        for values in assignments(variables.len()) {
            let result = evaluate_row(ast, variables, &values)?;
            rows.push(TruthRow { values, result });
        }
        log::debug!("truth table over [{}]: {} rows", variables.iter().join(", "), rows.len());

        Ok(TruthTable {
            variables: variables.to_vec(),
            rows,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows whose result equals `result`.
    pub fn filter(&self, result: bool) -> impl Iterator<Item = &TruthRow> + '_ {
        self.rows.iter().filter(move |row| row.result == result)
    }

    pub fn results(&self) -> Vec<bool> {
        self.rows.iter().map(|row| row.result).collect()
    }
}

impl StepTable {
    pub(crate) fn build(ast: &Node, variables: &[String]) -> Result<Self> {
        check_size(variables.len())?;
        let nodes = ast.subexpressions();

        let mut rows = Vec::with_capacity(1 << variables.len());
        for values in assignments(variables.len()) {
            let steps = nodes
                .iter()
                .map(|node| evaluate_row(node, variables, &values))
                .collect::<Result<Vec<bool>>>()?;
            let result = evaluate_row(ast, variables, &values)?;
            rows.push(StepRow {
                values,
                steps,
                result,
            });
        }
        log::debug!("step table of {ast}: {} steps, {} rows", nodes.len(), rows.len());

        Ok(StepTable {
            variables: variables.to_vec(),
            steps: nodes.iter().map(|node| node.to_string()).collect(),
            expression: ast.to_string(),
            rows,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn bit(value: bool) -> char {
    if value {
        '1'
    } else {
        '0'
    }
}

/// Column-aligned `0`/`1` grid; cells are centered under their headers.
fn write_grid<I>(f: &mut fmt::Formatter<'_>, headers: &[&str], rows: I) -> fmt::Result
where
    I: IntoIterator<Item = Vec<bool>>,
{
    let widths: Vec<usize> = headers.iter().map(|h| h.len().max(1)).collect();
    let header = headers
        .iter()
        .zip(&widths)
        .map(|(name, w)| format!("{name:^w$}"))
        .join(" | ");
    writeln!(f, "{header}")?;
    let rule = widths.iter().map(|w| "-".repeat(w + 2)).join("+");
    writeln!(f, "{}", &rule[1..rule.len() - 1])?;
    for row in rows {
        let cells = row
            .iter()
            .zip(&widths)
            .map(|(value, w)| format!("{:^w$}", bit(*value)))
            .join(" | ");
        writeln!(f, "{cells}")?;
    }
    Ok(())
}

/// Aligned text table with `0`/`1` cells and a final `=` column.
impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<&str> = self
            .variables
            .iter()
            .map(String::as_str)
            .chain(std::iter::once("="))
            .collect();
        let rows = self.rows.iter().map(|row| {
            let mut cells = row.values.clone();
            cells.push(row.result);
            cells
        });
        write_grid(f, &headers, rows)
    }
}

/// Like [`TruthTable`]'s text form, with one column per step before `=`.
impl fmt::Display for StepTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<&str> = self
            .variables
            .iter()
            .chain(&self.steps)
            .map(String::as_str)
            .chain(std::iter::once("="))
            .collect();
        let rows = self.rows.iter().map(|row| {
            let mut cells = row.values.clone();
            cells.extend(&row.steps);
            cells.push(row.result);
            cells
        });
        write_grid(f, &headers, rows)
    }
}
