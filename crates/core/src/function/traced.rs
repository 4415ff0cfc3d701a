use std::fmt::Debug;

use crate::{
    Equivalent, Function,
    trace::{TraceConfig, TraceLevel},
};

/// Emits an event at a level chosen at runtime.
macro_rules! event_at {
    ($level:expr, $($arg:tt)+) => {
        match $level {
            TraceLevel::Error => tracing::error!($($arg)+),
            TraceLevel::Warn => tracing::warn!($($arg)+),
            TraceLevel::Info => tracing::info!($($arg)+),
            TraceLevel::Debug => tracing::debug!($($arg)+),
            TraceLevel::Trace => tracing::trace!($($arg)+),
        }
    };
}

/// A wrapper that emits `tracing` events around each application.
///
/// Created by [`Function::traced()`]. Each call emits:
/// - an `applying` event with the `input`, at the configured level,
/// - an `applied` event with the `output` on success, at the configured level,
/// - a `warn` event with the `error` on failure.
///
/// Every event carries a `function` field set to the configured label.
/// Nothing is recorded unless the application installs a subscriber.
#[derive(Debug, Clone)]
pub struct Traced<F> {
    function: F,
    config: TraceConfig,
}

impl<F> Traced<F> {
    pub(crate) fn new(function: F, config: TraceConfig) -> Self {
        Self { function, config }
    }

    /// Returns the configuration used for emitted events.
    #[must_use]
    pub fn config(&self) -> &TraceConfig {
        &self.config
    }
}

impl<F> Function for Traced<F>
where
    F: Function,
    F::Input: Debug,
    F::Output: Debug,
{
    type Input = F::Input;
    type Output = F::Output;
    type Error = F::Error;

    fn apply(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        let label = self.config.label();
        let level = self.config.level();

        event_at!(level, function = label, input = ?input, "applying");

        match self.function.apply(input) {
            Ok(output) => {
                event_at!(level, function = label, output = ?output, "applied");
                Ok(output)
            }
            Err(error) => {
                tracing::warn!(function = label, %error, "apply failed");
                Err(error)
            }
        }
    }
}

impl<F: Equivalent> Equivalent for Traced<F> {
    fn equivalent(&self, other: &Self) -> bool {
        self.function.equivalent(&other.function)
    }
}
