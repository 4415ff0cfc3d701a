use crate::{Equivalent, Function};

/// A function that applies two functions in sequence.
///
/// Created by [`Function::then()`] and [`compose()`](crate::compose).
///
/// The first function's output type must match the second's input, and both
/// must share the same error type so errors propagate unchanged. An error
/// from the first function is returned without calling the second.
#[derive(Debug, Clone, Copy)]
pub struct Then<A, B> {
    first: A,
    second: B,
}

impl<A, B> Then<A, B> {
    /// Creates a sequential composition of two functions.
    pub(crate) const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Function for Then<A, B>
where
    A: Function,
    B: Function<Input = A::Output, Error = A::Error>,
{
    type Input = A::Input;
    type Output = B::Output;
    type Error = A::Error;

    /// Applies the first function and passes its output to the second.
    fn apply(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        let output = self.first.apply(input)?;
        self.second.apply(output)
    }
}

impl<A, B> Equivalent for Then<A, B>
where
    A: Equivalent,
    B: Equivalent,
{
    fn equivalent(&self, other: &Self) -> bool {
        self.first.equivalent(&other.first) && self.second.equivalent(&other.second)
    }
}
