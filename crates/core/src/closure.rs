use std::{convert::Infallible, error::Error as StdError, marker::PhantomData};

use crate::Function;

/// A wrapper that allows using an infallible closure as a [`Function`].
///
/// Created by [`from_fn()`].
pub struct FromFn<F, I, O> {
    function: F,
    _marker: PhantomData<fn(I) -> O>,
}

/// Wraps `function` so it can be used as a [`Function`] that never fails.
///
/// # Example
///
/// ```
/// use tether_core::{Function, from_fn};
///
/// let shout = from_fn(|text: &str| text.to_uppercase());
/// assert_eq!(shout.apply("hi").unwrap(), "HI");
/// ```
pub const fn from_fn<F, I, O>(function: F) -> FromFn<F, I, O>
where
    F: Fn(I) -> O,
{
    FromFn {
        function,
        _marker: PhantomData,
    }
}

impl<F, I, O> Function for FromFn<F, I, O>
where
    F: Fn(I) -> O,
{
    type Input = I;
    type Output = O;
    type Error = Infallible;

    fn apply(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        Ok((self.function)(input))
    }
}

/// A wrapper that allows using a fallible closure as a [`Function`].
///
/// Created by [`try_from_fn()`].
pub struct TryFromFn<F, I, O, E> {
    function: F,
    _marker: PhantomData<fn(I) -> Result<O, E>>,
}

/// Wraps `function` so it can be used as a [`Function`] with error type `E`.
pub const fn try_from_fn<F, I, O, E>(function: F) -> TryFromFn<F, I, O, E>
where
    F: Fn(I) -> Result<O, E>,
    E: StdError + Send + Sync + 'static,
{
    TryFromFn {
        function,
        _marker: PhantomData,
    }
}

impl<F, I, O, E> Function for TryFromFn<F, I, O, E>
where
    F: Fn(I) -> Result<O, E>,
    E: StdError + Send + Sync + 'static,
{
    type Input = I;
    type Output = O;
    type Error = E;

    fn apply(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        (self.function)(input)
    }
}
