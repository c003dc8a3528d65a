use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "calckit")]
#[command(about = "Base conversion, boolean expressions and IPv4 subnetting.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Pretty,
    Csv,
    Json,
    Markdown,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show a decimal integer in binary, octal, decimal and hex
    #[command(alias = "c")]
    Convert {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    /// Read a digit string in the given base back to decimal
    #[command(alias = "d")]
    Decode {
        #[arg(allow_hyphen_values = true)]
        digits: String,
        /// 2, 8, 10 or 16
        #[arg(short, long, default_value_t = 2)]
        base: u32,
    },
    /// Evaluate a boolean expression, e.g. `eval "A AND NOT B" A=true B=false`
    #[command(alias = "e")]
    Eval {
        expression: String,
        /// Variable assignments NAME=true|false (also 1/0)
        assignments: Vec<String>,
    },
    /// Print the truth table of a boolean expression
    #[command(alias = "t")]
    Table {
        expression: String,
        /// Add a column per intermediate sub-expression
        #[arg(short, long)]
        steps: bool,
        #[arg(short, long, value_enum, default_value_t = Format::Pretty)]
        format: Format,
    },
    /// Build a sum-of-products expression, e.g. `from-table 0110 A B`
    FromTable {
        /// One 0/1 result per row, first row all variables false
        results: String,
        variables: Vec<String>,
    },
    /// Divide the network of ADDRESS into at least SUBNETS subnets
    #[command(alias = "s")]
    Subnet {
        /// Dotted quad, optionally with /prefix (classful default otherwise)
        address: String,
        subnets: u32,
        /// List every subnet instead of the summary
        #[arg(short, long)]
        list: bool,
        #[arg(short, long, value_enum, default_value_t = Format::Pretty)]
        format: Format,
    },
    /// Run each component once with known inputs
    Smoke,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Parse a `0`/`1` result column such as `0110`.
pub fn parse_results(text: &str) -> anyhow::Result<Vec<bool>> {
    text.chars()
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            other => anyhow::bail!("'{other}' in '{text}' is not 0 or 1"),
        })
        .collect()
}

/// Parse `NAME=value` into a variable binding.
pub fn parse_assignment(text: &str) -> anyhow::Result<(String, bool)> {
    let (name, value) = text
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("expected NAME=true|false, got '{text}'"))?;
    let value = match value.to_ascii_lowercase().as_str() {
        "true" | "1" => true,
        "false" | "0" => false,
        other => anyhow::bail!("'{other}' is not a boolean in '{text}'"),
    };
    Ok((name.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        CommandLine::command().debug_assert();
    }

    #[test]
    fn test_parse_subnet_command() {
        let cli = CommandLine::parse_from(["calckit", "subnet", "192.168.1.1", "5", "--list"]);
        match cli.command {
            Commands::Subnet {
                address,
                subnets,
                list,
                format,
            } => {
                assert_eq!(address, "192.168.1.1");
                assert_eq!(subnets, 5);
                assert!(list);
                assert_eq!(format, Format::Pretty);
            }
            _ => panic!("expected subnet command"),
        }
    }

    #[test]
    fn test_negative_convert_value() {
        let cli = CommandLine::parse_from(["calckit", "convert", "-42"]);
        assert!(matches!(cli.command, Commands::Convert { value: -42 }));
    }

    #[test]
    fn test_parse_table_options() {
        let cli = CommandLine::parse_from(["calckit", "table", "A OR B", "--steps", "-f", "markdown"]);
        assert!(matches!(
            cli.command,
            Commands::Table {
                steps: true,
                format: Format::Markdown,
                ..
            }
        ));

        let cli = CommandLine::parse_from(["calckit", "from-table", "0110", "A", "B"]);
        match cli.command {
            Commands::FromTable { results, variables } => {
                assert_eq!(results, "0110");
                assert_eq!(variables, vec!["A", "B"]);
            }
            _ => panic!("expected from-table command"),
        }
    }

    #[test]
    fn test_parse_results() {
        assert_eq!(parse_results("0110").unwrap(), vec![false, true, true, false]);
        assert!(parse_results("01x0").is_err());
        assert!(parse_results("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(parse_assignment("A=true").unwrap(), ("A".to_string(), true));
        assert_eq!(parse_assignment("x1=0").unwrap(), ("x1".to_string(), false));
        assert!(parse_assignment("A").is_err());
        assert!(parse_assignment("A=maybe").is_err());
    }
}
