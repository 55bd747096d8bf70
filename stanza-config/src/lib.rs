//! Stanza Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all Stanza crates.

use serde::Deserialize;

/// Processing phase, used to route log output per component
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Lexer,
    Stream,
    Cli,
}

impl Phase {
    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Lexer => "lexer",
            Phase::Stream => "stream",
            Phase::Cli => "cli",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("stanza::{}", self.as_str())
    }
}

/// Log verbosity, ordered from most to least verbose
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    /// Nothing is logged
    Off,
}

impl LogLevel {
    /// Parse a level name, case-insensitive. `silent` is an alias of `off`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "silent" | "off" => Some(LogLevel::Off),
            "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

/// Logging configuration: a global level plus optional per-phase overrides
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    pub global: LogLevel,
    pub lexer: Option<LogLevel>,
    pub stream: Option<LogLevel>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: LogLevel::Warn,
            lexer: None,
            stream: None,
        }
    }
}

impl LogConfig {
    /// Get the effective log level for a phase
    pub fn level_for(&self, phase: Phase) -> LogLevel {
        match phase {
            Phase::Lexer => self.lexer.unwrap_or(self.global),
            Phase::Stream => self.stream.unwrap_or(self.global),
            Phase::Cli => self.global,
        }
    }

    /// Build a config from a JSON settings document.
    ///
    /// Missing fields fall back to [`LogConfig::default`].
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let settings: LogSettings = serde_json::from_str(text)?;
        let defaults = Self::default();
        Ok(Self {
            global: settings.log_level.unwrap_or(defaults.global),
            lexer: settings.lexer,
            stream: settings.stream,
        })
    }
}

/// On-disk shape of the logging settings file
#[derive(Debug, Deserialize)]
struct LogSettings {
    log_level: Option<LogLevel>,
    lexer: Option<LogLevel>,
    stream: Option<LogLevel>,
}
