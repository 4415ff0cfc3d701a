use crate::{Equivalent, Function, FunctionError};

/// A wrapper that rejects an absent input.
///
/// Created by [`Function::require_present()`]. A present input is passed to
/// the wrapped function; `None` fails with [`FunctionError::InvalidArgument`],
/// converted into the wrapped function's error type.
#[derive(Debug, Clone, Copy)]
pub struct RequirePresent<F> {
    function: F,
}

impl<F> RequirePresent<F> {
    pub(crate) const fn new(function: F) -> Self {
        Self { function }
    }
}

impl<F> Function for RequirePresent<F>
where
    F: Function,
    F::Error: From<FunctionError>,
{
    type Input = Option<F::Input>;
    type Output = F::Output;
    type Error = F::Error;

    fn apply(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        let value = input.ok_or_else(FunctionError::absent_input)?;
        self.function.apply(value)
    }
}

impl<F: Equivalent> Equivalent for RequirePresent<F> {
    fn equivalent(&self, other: &Self) -> bool {
        self.function.equivalent(&other.function)
    }
}
