//! utility modules used around the symbolic engine
/// logger setup: terminal and file loggers
pub mod logger;
/// runtime settings read from a TOML document
pub mod settings;
