//! Configuration for [`Traced`](crate::Traced) functions.

use thiserror::Error;

const DEFAULT_LABEL: &str = "function";

/// The level at which a traced function emits its events.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TraceLevel {
    /// Emit at `ERROR`, visible under the strictest filters.
    Error,
    /// Emit at `WARN`.
    Warn,
    /// Emit at `INFO`.
    Info,
    /// Emit at `DEBUG`, the default.
    #[default]
    Debug,
    /// Emit at `TRACE`, for per-call detail in hot paths.
    Trace,
}

impl From<TraceLevel> for tracing::Level {
    fn from(level: TraceLevel) -> Self {
        match level {
            TraceLevel::Error => tracing::Level::ERROR,
            TraceLevel::Warn => tracing::Level::WARN,
            TraceLevel::Info => tracing::Level::INFO,
            TraceLevel::Debug => tracing::Level::DEBUG,
            TraceLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Configuration for a traced function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceConfig {
    label: String,
    level: TraceLevel,
}

/// Errors that can occur when validating a trace config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("label must not be empty")]
    EmptyLabel,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_owned(),
            level: TraceLevel::default(),
        }
    }
}

impl TraceConfig {
    /// Creates a new config with a validated label.
    ///
    /// # Errors
    ///
    /// Returns an error if the label is empty or only whitespace.
    pub fn new(label: impl Into<String>, level: TraceLevel) -> Result<Self, ConfigError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(ConfigError::EmptyLabel);
        }

        Ok(Self { label, level })
    }

    /// Returns a copy of this config emitting at `level`.
    #[must_use]
    pub fn with_level(mut self, level: TraceLevel) -> Self {
        self.level = level;
        self
    }

    /// Returns the label attached to every event.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the level of the `applying` and `applied` events.
    #[must_use]
    pub fn level(&self) -> TraceLevel {
        self.level
    }
}
