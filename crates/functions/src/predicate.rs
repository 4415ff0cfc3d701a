use std::{convert::Infallible, marker::PhantomData};

use tether_core::Function;

/// A function that evaluates a predicate on its input.
pub struct ForPredicate<P, T> {
    predicate: P,
    _marker: PhantomData<fn(T)>,
}

/// Returns a function producing `predicate(&input)`.
pub const fn for_predicate<T, P>(predicate: P) -> ForPredicate<P, T>
where
    P: Fn(&T) -> bool,
{
    ForPredicate {
        predicate,
        _marker: PhantomData,
    }
}

impl<P, T> Function for ForPredicate<P, T>
where
    P: Fn(&T) -> bool,
{
    type Input = T;
    type Output = bool;
    type Error = Infallible;

    fn apply(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        Ok((self.predicate)(&input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_predicate() {
        let is_even = for_predicate(|n: &i32| n % 2 == 0);

        assert_eq!(is_even.apply(4), Ok(true));
        assert_eq!(is_even.apply(7), Ok(false));
    }

    #[test]
    fn filters_with_mapped_input() {
        let is_blank = for_predicate(|text: &String| text.trim().is_empty())
            .map_input(|text: &str| text.to_owned());

        assert_eq!(is_blank.apply("   "), Ok(true));
        assert_eq!(is_blank.apply(" x "), Ok(false));
    }
}
