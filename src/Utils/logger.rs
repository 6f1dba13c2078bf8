//! Logger setup: a terminal logger and an optional file logger combined with simplelog.
use crate::Utils::settings::{LogFile, LogSettings};
use crate::symbolic::errors::ConfigError;
use chrono::Local;
use simplelog::*;
use std::fs::File;
use std::path::PathBuf;

/// Name of the log file for the given setting.
pub fn log_file_path(file: &LogFile) -> PathBuf {
    match file {
        LogFile::Path(path) => path.clone(),
        LogFile::Timestamped => {
            let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
            PathBuf::from(format!("log_{}.txt", date_and_time))
        }
    }
}

/// Installs the global logger. Returns the path of the log file, if any.
///
/// Installing a logger twice is not an error: the first one stays active.
pub fn init_logger(settings: &LogSettings) -> Result<Option<PathBuf>, ConfigError> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    if settings.console {
        loggers.push(TermLogger::new(
            settings.level,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }

    let path = settings.file.as_ref().map(log_file_path);
    if let Some(ref path) = path {
        let file = File::create(path)?;
        loggers.push(WriteLogger::new(settings.level, Config::default(), file));
    }

    if !loggers.is_empty() {
        let _ = CombinedLogger::init(loggers);
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamped_log_file_name() {
        let name = log_file_path(&LogFile::Timestamped);
        let name = name.to_string_lossy();
        assert!(name.starts_with("log_"));
        assert!(name.ends_with(".txt"));
    }

    #[test]
    fn test_init_logger_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calculus.log");
        let settings = LogSettings {
            level: LevelFilter::Debug,
            console: false,
            file: Some(LogFile::Path(path.clone())),
        };
        assert_eq!(init_logger(&settings).unwrap(), Some(path.clone()));
        assert!(path.exists());
    }

    #[test]
    fn test_init_logger_unwritable_file() {
        let settings = LogSettings {
            level: LevelFilter::Info,
            console: false,
            file: Some(LogFile::Path(PathBuf::from("/definitely/not/here/calculus.log"))),
        };
        assert!(matches!(init_logger(&settings), Err(ConfigError::Io(_))));
    }
}
