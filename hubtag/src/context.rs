//! Application context that holds resolved configuration
//!
//! The context is built following the precedence order:
//! 1. Default values
//! 2. Config file values
//! 3. Environment variables
//! 4. CLI flags
//!
//! Once built, the context is passed as read-only into every handler. There
//! is no process-global logger; reporting always goes through this context.

use crate::config::{self, Config};
use crate::format::ColorChoice;
use std::env;

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;

/// How chatty the CLI should be on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VerbosityLevel {
    Normal,
    Verbose,
    VeryVerbose,
}

impl VerbosityLevel {
    /// Maps the number of `-v` flags to a level.
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::VeryVerbose,
        }
    }
}

/// Application context with resolved configuration and runtime state
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Resolved configuration
    pub config: Config,
    /// When to emit ANSI colors
    pub color: ColorChoice,
    /// Verbosity requested on the command line
    pub verbosity: VerbosityLevel,
}

impl AppContext {
    /// Build context with precedence: defaults > config file > env vars > CLI flags
    pub fn build(cli_color: ColorChoice, verbosity: VerbosityLevel) -> Self {
        // 1. Start with defaults
        let mut config = Config::default();

        // 2. Load and merge config file if it exists
        let config_path = config::get_config_path();
        if let Ok(file_config) = Config::load(&config_path) {
            config = file_config;
        }

        // 3. Apply environment variable overrides
        let mut color = config.style.color;
        if let Ok(value) = env::var("HUBTAG_COLOR") {
            color = ColorChoice::from(value.as_str());
        }
        if let Ok(url) = env::var("HUBTAG_HUB_URL") {
            config.hub.base_url = url;
        }

        // 4. Apply CLI flag overrides (highest priority); Auto is clap's
        // default, so an explicit config/env choice survives it
        if cli_color != ColorChoice::Auto {
            color = cli_color;
        }

        Self {
            config,
            color,
            verbosity,
        }
    }
}
