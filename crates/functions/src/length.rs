use std::{convert::Infallible, fmt, marker::PhantomData};

use tether_core::{Equivalent, Function};

/// A function that counts the characters of a string.
///
/// Characters are Unicode scalar values, so `"héllo"` has length 5.
pub struct Length<S> {
    _marker: PhantomData<fn(S)>,
}

/// Returns a function counting the characters of any `S: AsRef<str>`.
#[must_use]
pub const fn length<S>() -> Length<S>
where
    S: AsRef<str>,
{
    Length {
        _marker: PhantomData,
    }
}

impl<S> Function for Length<S>
where
    S: AsRef<str>,
{
    type Input = S;
    type Output = usize;
    type Error = Infallible;

    fn apply(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(input.as_ref().chars().count())
    }
}

impl<S> Equivalent for Length<S> {
    fn equivalent(&self, _other: &Self) -> bool {
        true
    }
}

impl<S> Clone for Length<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Length<S> {}

impl<S> fmt::Debug for Length<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Length")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_characters() {
        let length = length::<&str>();

        assert_eq!(length.apply(""), Ok(0));
        assert_eq!(length.apply("abc"), Ok(3));
        assert_eq!(length.apply("héllo"), Ok(5));
    }

    #[test]
    fn accepts_owned_strings() {
        assert_eq!(length().apply(String::from("tether")), Ok(6));
    }
}
