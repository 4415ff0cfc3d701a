use std::{convert::Infallible, fmt, marker::PhantomData};

use tether_core::{Equivalent, Function};

/// A function that returns its input unchanged.
pub struct Identity<T> {
    _marker: PhantomData<fn(T) -> T>,
}

/// Returns the identity function for `T`.
#[must_use]
pub const fn identity<T>() -> Identity<T> {
    Identity {
        _marker: PhantomData,
    }
}

impl<T> Function for Identity<T> {
    type Input = T;
    type Output = T;
    type Error = Infallible;

    fn apply(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(input)
    }
}

/// All identity functions over the same type behave identically.
impl<T> Equivalent for Identity<T> {
    fn equivalent(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> Clone for Identity<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Identity<T> {}

impl<T> Default for Identity<T> {
    fn default() -> Self {
        identity()
    }
}

impl<T> fmt::Debug for Identity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Identity")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_input_unchanged() {
        assert_eq!(identity().apply(7), Ok(7));
        assert_eq!(identity().apply("text"), Ok("text"));
        assert_eq!(identity().apply(vec![1, 2, 3]), Ok(vec![1, 2, 3]));
        assert_eq!(identity::<Option<u8>>().apply(None), Ok(None));
    }

    #[test]
    fn is_neutral_in_chains() {
        let double = tether_core::from_fn(|x: i32| x * 2);

        assert_eq!(identity().then(&double).apply(4), Ok(8));
        assert_eq!((&double).then(identity()).apply(4), Ok(8));
    }
}
