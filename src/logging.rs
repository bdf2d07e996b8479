//! log4rs setup.

use crate::error::{Result, SubnetError};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::Path;

/// Stderr-only logging at `warn`, used when no log4rs file is found.
pub fn fallback_config() -> Result<Config> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} {t} - {m}{n}")))
        .build();
    Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))
        .map_err(|e| SubnetError::Config(format!("Error building log config: {e}")))
}

/// Initialise logging from a log4rs YAML file, or the stderr fallback.
pub fn init_logging(path: &Path) -> Result<()> {
    match log4rs::init_file(path, Default::default()) {
        Ok(()) => {
            log::debug!("Logging configured from {}", path.display());
            Ok(())
        }
        Err(file_err) => {
            log4rs::init_config(fallback_config()?)
                .map_err(|e| SubnetError::Config(format!("Error initializing log4rs: {e}")))?;
            log::info!(
                "Log config {} not loaded ({file_err}), using stderr",
                path.display()
            );
            Ok(())
        }
    }
}
