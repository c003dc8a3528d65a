use calckit::config::Config;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;

/// Initialize log4rs from the configured YAML file, or a stderr console
/// logger when the file does not exist.
///
/// `verbose` only applies to the console logger; a YAML file sets its own levels.
pub fn init_logging(cfg: &Config, verbose: bool) -> anyhow::Result<()> {
    if cfg.log_config.exists() {
        log4rs::init_file(&cfg.log_config, Default::default())?;
        log::debug!("logging configured from {}", cfg.log_config.display());
        return Ok(());
    }

    let level = if verbose { LevelFilter::Debug } else { cfg.log_level };
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l:5})} {t} - {m}{n}")))
        .build();
    let config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}
