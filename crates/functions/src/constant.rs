use std::{convert::Infallible, fmt, marker::PhantomData};

use tether_core::{Equivalent, Function};

/// A function that ignores its input and returns a clone of a fixed value.
pub struct Constant<I, T> {
    value: T,
    _marker: PhantomData<fn(I)>,
}

/// Returns a function that always produces `value`.
pub const fn constant<I, T>(value: T) -> Constant<I, T>
where
    T: Clone,
{
    Constant {
        value,
        _marker: PhantomData,
    }
}

impl<I, T> Constant<I, T> {
    /// Returns the value this function produces.
    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<I, T> Function for Constant<I, T>
where
    T: Clone,
{
    type Input = I;
    type Output = T;
    type Error = Infallible;

    fn apply(&self, _input: Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.value.clone())
    }
}

impl<I, T: PartialEq> Equivalent for Constant<I, T> {
    fn equivalent(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<I, T: Clone> Clone for Constant<I, T> {
    fn clone(&self) -> Self {
        constant(self.value.clone())
    }
}

impl<I, T: fmt::Debug> fmt::Debug for Constant<I, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Constant").field(&self.value).finish()
    }
}
