use crate::{Equivalent, Function};

/// A wrapper that accepts an absent input and returns an absent output.
///
/// Created by [`Function::optional()`]. A present input is passed to the
/// wrapped function; `None` yields `Ok(None)` without calling it.
#[derive(Debug, Clone, Copy)]
pub struct Optional<F> {
    function: F,
}

impl<F> Optional<F> {
    pub(crate) const fn new(function: F) -> Self {
        Self { function }
    }
}

impl<F: Function> Function for Optional<F> {
    type Input = Option<F::Input>;
    type Output = Option<F::Output>;
    type Error = F::Error;

    fn apply(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        input.map(|value| self.function.apply(value)).transpose()
    }
}

impl<F: Equivalent> Equivalent for Optional<F> {
    fn equivalent(&self, other: &Self) -> bool {
        self.function.equivalent(&other.function)
    }
}
