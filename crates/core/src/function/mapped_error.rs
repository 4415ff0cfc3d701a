use std::{error::Error as StdError, marker::PhantomData};

use crate::Function;

/// A wrapper that adapts a function by transforming its error type.
///
/// Created by [`Function::map_error()`].
pub struct MappedError<F, ErrorMap, NewError> {
    function: F,
    error_map: ErrorMap,
    _marker: PhantomData<fn() -> NewError>,
}

impl<F, ErrorMap, NewError> MappedError<F, ErrorMap, NewError> {
    pub(crate) fn new(function: F, error_map: ErrorMap) -> Self {
        Self {
            function,
            error_map,
            _marker: PhantomData,
        }
    }
}

impl<F, ErrorMap, NewError> Function for MappedError<F, ErrorMap, NewError>
where
    F: Function,
    ErrorMap: Fn(F::Error) -> NewError,
    NewError: StdError + Send + Sync + 'static,
{
    type Input = F::Input;
    type Output = F::Output;
    type Error = NewError;

    /// Applies the wrapped function and maps the error if it fails.
    fn apply(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        self.function.apply(input).map_err(&self.error_map)
    }
}
