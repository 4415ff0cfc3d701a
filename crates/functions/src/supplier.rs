use std::{convert::Infallible, marker::PhantomData};

use tether_core::Function;

/// A function that ignores its input and returns whatever a supplier produces.
///
/// The supplier is called once per application. It is expected, but not
/// required, to return equal values on every call.
pub struct ForSupplier<S, I> {
    supplier: S,
    _marker: PhantomData<fn(I)>,
}

/// Returns a function producing `supplier()` for any input.
pub const fn for_supplier<I, S, T>(supplier: S) -> ForSupplier<S, I>
where
    S: Fn() -> T,
{
    ForSupplier {
        supplier,
        _marker: PhantomData,
    }
}

impl<S, I, T> Function for ForSupplier<S, I>
where
    S: Fn() -> T,
{
    type Input = I;
    type Output = T;
    type Error = Infallible;

    fn apply(&self, _input: Self::Input) -> Result<Self::Output, Self::Error> {
        Ok((self.supplier)())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn calls_supplier_per_application() {
        let calls = AtomicUsize::new(0);
        let counter = for_supplier::<&str, _, _>(|| calls.fetch_add(1, Ordering::SeqCst));

        assert_eq!(counter.apply("a"), Ok(0));
        assert_eq!(counter.apply("b"), Ok(1));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn supplies_for_any_input() {
        let greeting = for_supplier::<u8, _, _>(|| String::from("hello"));

        assert_eq!(greeting.apply(0).unwrap(), "hello");
        assert_eq!(greeting.apply(255).unwrap(), "hello");
    }
}
