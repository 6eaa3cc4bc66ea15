use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::config::General;
use crate::errors::ConfigError;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

/// Sets up the log4rs logger given the general section of the configuration.
/// Logging always goes to the configured log file, and optionally also to stdout.
///
/// # Arguments
///
/// * 'general' - the general configuration section
pub fn setup_logger(general: &General) -> Result<(), ConfigError> {
    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(&general.log_path)
        .map_err(|e| ConfigError(format!("log file error: {}", e)))?;

    let mut config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(file)));
    let mut root = Root::builder().appender("file");

    if general.log_to_stdout {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();
        config = config.appender(Appender::builder().build("stdout", Box::new(stdout)));
        root = root.appender("stdout");
    }

    let config = config
        .build(root.build(general.log_level))
        .map_err(|e| ConfigError(format!("log configuration error: {}", e)))?;

    log4rs::init_config(config)
        .map_err(|e| ConfigError(format!("log configuration error: {}", e)))?;

    Ok(())
}
