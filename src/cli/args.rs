use crate::session::SessionConfig;
use crate::types::CountryCode;
use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Manage bank accounts in memory from an interactive console
#[derive(Parser, Debug)]
#[command(name = "bank-accounts")]
#[command(about = "Manage bank accounts in memory from an interactive console", long_about = None)]
pub struct CliArgs {
    /// Prefix of generated account identifiers
    #[arg(
        long = "country",
        value_name = "CODE",
        default_value = "FR",
        help = "Two-letter prefix of generated IBANs"
    )]
    pub country: CountryCode,

    /// Seed for identifier generation
    #[arg(
        long = "seed",
        value_name = "SEED",
        help = "Seed the identifier generator for reproducible IBANs"
    )]
    pub seed: Option<u64>,

    /// Verbosity of the diagnostics written to stderr
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log level for stderr diagnostics (RUST_LOG overrides it)"
    )]
    pub log_level: LogLevel,
}

/// Log levels selectable from the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl CliArgs {
    /// Create a SessionConfig from CLI arguments
    pub fn to_session_config(&self) -> SessionConfig {
        SessionConfig {
            country: self.country.clone(),
            seed: self.seed,
        }
    }
}
