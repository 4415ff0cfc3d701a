use std::convert::Infallible;

use thiserror::Error;

/// Errors raised by a [`Function`](crate::Function) given an input it cannot process.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FunctionError {
    /// The input is outside what this function accepts.
    ///
    /// For example, an absent input given to a function that requires a
    /// present value, or a key missing from a lookup table.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl FunctionError {
    /// Creates an [`FunctionError::InvalidArgument`] with the given reason.
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }

    /// The error returned when an absent input reaches a function that
    /// requires a present one.
    #[must_use]
    pub fn absent_input() -> Self {
        Self::invalid_argument("input must be present")
    }

    /// Returns `true` if this is an [`FunctionError::InvalidArgument`].
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

/// Lets infallible functions join fallible chains via `map_error(FunctionError::from)`.
impl From<Infallible> for FunctionError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_message() {
        let error = FunctionError::invalid_argument("key `7` is not present");

        assert!(error.is_invalid_argument());
        assert_eq!(error.to_string(), "invalid argument: key `7` is not present");
    }

    #[test]
    fn absent_input_is_invalid_argument() {
        let error = FunctionError::absent_input();

        assert!(error.is_invalid_argument());
        assert_eq!(error.to_string(), "invalid argument: input must be present");
    }
}
