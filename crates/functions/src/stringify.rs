use std::{convert::Infallible, fmt, marker::PhantomData};

use tether_core::{Equivalent, Function};

/// A function that formats its input with [`Display`](fmt::Display).
pub struct Stringify<T> {
    _marker: PhantomData<fn(T)>,
}

/// Returns a function converting any `T: Display` to a `String`.
#[must_use]
pub const fn stringify<T>() -> Stringify<T>
where
    T: fmt::Display,
{
    Stringify {
        _marker: PhantomData,
    }
}

impl<T> Function for Stringify<T>
where
    T: fmt::Display,
{
    type Input = T;
    type Output = String;
    type Error = Infallible;

    fn apply(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(input.to_string())
    }
}

impl<T> Equivalent for Stringify<T> {
    fn equivalent(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> Clone for Stringify<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Stringify<T> {}

impl<T> fmt::Debug for Stringify<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Stringify")
    }
}
