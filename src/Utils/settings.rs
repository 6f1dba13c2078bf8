//! Runtime settings, read from a TOML document.
//!
//! ```toml
//! [logging]
//! level = "debug"      # off, error, warn, info, debug, trace
//! console = true
//! file = "auto"        # a path, or "auto" for log_<date>_<time>.txt
//!
//! [validation]
//! samples = 100        # points compared against finite differences
//! tolerance = 1e-6     # maximal norm of the difference
//! step = 1e-6          # finite difference step
//!
//! [evaluation]
//! parallel_threshold = 1024
//! ```
//! Every section and key is optional; missing ones keep their default value.
use crate::symbolic::errors::ConfigError;
use simplelog::LevelFilter;
use std::path::{Path, PathBuf};
use toml::{Table, Value};

/// Where the file logger writes.
#[derive(Debug, Clone, PartialEq)]
pub enum LogFile {
    Path(PathBuf),
    /// a new file named after the current date and time
    Timestamped,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogSettings {
    pub level: LevelFilter,
    pub console: bool,
    pub file: Option<LogFile>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            console: true,
            file: None,
        }
    }
}

/// Parameters of the comparison between analytical and numerical derivatives.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationSettings {
    pub samples: usize,
    pub tolerance: f64,
    pub step: f64,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            samples: 100,
            tolerance: 1e-6,
            step: 1e-6,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvalSettings {
    /// number of points from which grids are evaluated in parallel
    pub parallel_threshold: usize,
}

impl Default for EvalSettings {
    fn default() -> Self {
        Self {
            parallel_threshold: 1024,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Settings {
    pub logging: LogSettings,
    pub validation: ValidationSettings,
    pub evaluation: EvalSettings,
}

impl Settings {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let document: Table = content.parse()?;
        let mut settings = Settings::default();

        if let Some(logging) = section(&document, "logging")? {
            if let Some(level) = string(logging, "logging.level")? {
                settings.logging.level = level.parse::<LevelFilter>().map_err(|_| {
                    invalid("logging.level", format!("unknown log level `{}`", level))
                })?;
            }
            if let Some(console) = boolean(logging, "logging.console")? {
                settings.logging.console = console;
            }
            if let Some(file) = string(logging, "logging.file")? {
                settings.logging.file = Some(match file {
                    "auto" => LogFile::Timestamped,
                    path => LogFile::Path(PathBuf::from(path)),
                });
            }
        }

        if let Some(validation) = section(&document, "validation")? {
            if let Some(samples) = integer(validation, "validation.samples")? {
                if samples < 2 {
                    return Err(invalid("validation.samples", "at least 2 points are needed"));
                }
                settings.validation.samples = samples;
            }
            if let Some(tolerance) = positive_float(validation, "validation.tolerance")? {
                settings.validation.tolerance = tolerance;
            }
            if let Some(step) = positive_float(validation, "validation.step")? {
                settings.validation.step = step;
            }
        }

        if let Some(evaluation) = section(&document, "evaluation")? {
            if let Some(threshold) = integer(evaluation, "evaluation.parallel_threshold")? {
                if threshold == 0 {
                    return Err(invalid("evaluation.parallel_threshold", "must be at least 1"));
                }
                settings.evaluation.parallel_threshold = threshold;
            }
        }

        Ok(settings)
    }
}

fn invalid(key: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        reason: reason.into(),
    }
}

fn leaf(key: &str) -> &str {
    key.rsplit('.').next().unwrap_or(key)
}

fn section<'a>(document: &'a Table, name: &str) -> Result<Option<&'a Table>, ConfigError> {
    match document.get(name) {
        None => Ok(None),
        Some(Value::Table(table)) => Ok(Some(table)),
        Some(_) => Err(invalid(name, "expected a table")),
    }
}

fn string<'a>(table: &'a Table, key: &str) -> Result<Option<&'a str>, ConfigError> {
    match table.get(leaf(key)) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(invalid(key, "expected a string")),
    }
}

fn boolean(table: &Table, key: &str) -> Result<Option<bool>, ConfigError> {
    match table.get(leaf(key)) {
        None => Ok(None),
        Some(Value::Boolean(b)) => Ok(Some(*b)),
        Some(_) => Err(invalid(key, "expected a boolean")),
    }
}

fn integer(table: &Table, key: &str) -> Result<Option<usize>, ConfigError> {
    match table.get(leaf(key)) {
        None => Ok(None),
        Some(Value::Integer(i)) => usize::try_from(*i)
            .map(Some)
            .map_err(|_| invalid(key, "expected a non-negative integer")),
        Some(_) => Err(invalid(key, "expected an integer")),
    }
}

fn positive_float(table: &Table, key: &str) -> Result<Option<f64>, ConfigError> {
    let value = match table.get(leaf(key)) {
        None => return Ok(None),
        Some(Value::Float(f)) => *f,
        Some(Value::Integer(i)) => *i as f64,
        Some(_) => return Err(invalid(key, "expected a number")),
    };
    if value > 0.0 {
        Ok(Some(value))
    } else {
        Err(invalid(key, "must be positive"))
    }
}
