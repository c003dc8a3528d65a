use crate::cli::{parse_assignment, parse_results, Format};
use anyhow::{Context, Result};
use calckit::boolean_algebra::BooleanExpr;
use calckit::config::Config;
use calckit::conversions::{to_decimal, Base, NumberConverter};
use calckit::networking::{SubnetCalculator, SubnetRow};
use calckit::output::{
    report_csv, report_markdown, step_table_csv, step_table_markdown, subnet_rows_csv,
    subnet_rows_markdown, to_json, truth_table_csv, truth_table_markdown,
};
use calckit::smoke::run_smoke_checks;
use colored::Colorize;
use std::collections::HashMap;

pub fn convert(value: i64) -> Result<()> {
    let n = NumberConverter::new(value);
    for base in Base::ALL {
        println!("{:<12} {}", format!("{base}:"), n.to_base(base));
    }
    Ok(())
}

pub fn decode(digits: &str, radix: u32) -> Result<()> {
    let base = Base::try_from(radix)?;
    let value = to_decimal(digits, base).with_context(|| format!("decoding {base} '{digits}'"))?;
    println!("{value}");
    Ok(())
}

pub fn eval(expression: &str, assignments: &[String]) -> Result<()> {
    let expr = BooleanExpr::new(expression)?;
    let env = assignments
        .iter()
        .map(|a| parse_assignment(a))
        .collect::<Result<HashMap<String, bool>>>()?;
    log::info!("evaluating {expr} with {} bindings", env.len());
    println!("{}", expr.evaluate(&env)?);
    Ok(())
}

pub fn table(expression: &str, steps: bool, format: Format, cfg: &Config) -> Result<()> {
    let expr = BooleanExpr::new(expression)?;
    let n = expr.variables().len();
    if n > cfg.truth_table_max_vars {
        anyhow::bail!(
            "{n} variables exceed the configured limit of {} (CALCKIT_TRUTH_TABLE_MAX_VARS)",
            cfg.truth_table_max_vars
        );
    }
    if steps {
        let table = expr.step_table()?;
        match format {
            Format::Pretty => {
                println!("{}", expr.to_string().bold());
                print!("{table}");
            }
            Format::Csv => print!("{}", step_table_csv(&table)),
            Format::Json => println!("{}", to_json(&table)?),
            Format::Markdown => print!("{}", step_table_markdown(&table)),
        }
        return Ok(());
    }

    let table = expr.truth_table()?;
    match format {
        Format::Pretty => {
            println!("{}", expr.to_string().bold());
            print!("{table}");
        }
        Format::Csv => print!("{}", truth_table_csv(&table)),
        Format::Json => println!("{}", to_json(&table)?),
        Format::Markdown => print!("{}", truth_table_markdown(&table)),
    }
    Ok(())
}

pub fn from_table(results: &str, variables: &[String]) -> Result<()> {
    let results = parse_results(results)?;
    let expr = BooleanExpr::from_truth_table(variables, &results)?;
    println!("{expr}");
    Ok(())
}

pub fn subnet(address: &str, subnets: u32, list: bool, format: Format) -> Result<()> {
    let calc = SubnetCalculator::new(address, subnets)?;
    if !list {
        let report = calc.report();
        match format {
            Format::Pretty => print!("{report}"),
            Format::Csv => print!("{}", report_csv(&report)),
            Format::Json => println!("{}", to_json(&report)?),
            Format::Markdown => print!("{}", report_markdown(&report)),
        }
        return Ok(());
    }

    let count = calc.subnet_count();
    if count > 4096 {
        log::warn!("listing {count} subnets");
    }
    let rows: Vec<SubnetRow> = calc.subnets().collect();
    match format {
        Format::Pretty => {
            println!("{}", calc.to_string().bold());
            for row in &rows {
                println!("{row}");
            }
        }
        Format::Csv => print!("{}", subnet_rows_csv(&rows)),
        Format::Json => println!("{}", to_json(&rows)?),
        Format::Markdown => print!("{}", subnet_rows_markdown(&rows)),
    }
    Ok(())
}

/// Print each self-check with a pass/fail marker; fails if any step failed.
pub fn smoke() -> Result<()> {
    let checks = run_smoke_checks();
    for check in &checks {
        match &check.outcome {
            Ok(value) => println!("{} {}: {}", "✓".green().bold(), check.name, value.trim_end()),
            Err(e) => println!("{} {}: {}", "✗".red().bold(), check.name, e),
        }
    }
    let failed = checks.iter().filter(|c| !c.passed()).count();
    if failed > 0 {
        anyhow::bail!("{failed} of {} checks failed", checks.len());
    }
    println!("{}", "all checks passed".green());
    Ok(())
}
