mod cli;
mod commands;
mod logging;

use calckit::config::Config;
use cli::{CommandLine, Commands};

fn main() -> anyhow::Result<()> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cfg = Config::from_env()?;
    let args = CommandLine::parse_args();
    logging::init_logging(&cfg, args.verbose)?;
    log::info!("#Start main()");

    let result = match args.command {
        Commands::Convert { value } => commands::convert(value),
        Commands::Decode { digits, base } => commands::decode(&digits, base),
        Commands::Eval {
            expression,
            assignments,
        } => commands::eval(&expression, &assignments),
        Commands::Table {
            expression,
            steps,
            format,
        } => commands::table(&expression, steps, format, &cfg),
        Commands::FromTable { results, variables } => commands::from_table(&results, &variables),
        Commands::Subnet {
            address,
            subnets,
            list,
            format,
        } => commands::subnet(&address, subnets, list, format),
        Commands::Smoke => commands::smoke(),
    };
    if let Err(e) = &result {
        log::error!("{e:#}");
    }
    result
}
