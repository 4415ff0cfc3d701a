/// An advisory check that two functions behave identically.
///
/// [`equivalent()`](Equivalent::equivalent) *may* return `true` when `other`
/// would produce the same result as `self` for every input. It may also
/// return `false` for functions that do behave identically.
///
/// **Do not depend** on the result. Implementations are free to compare
/// structurally, compare identity, or always return `false`, and they must
/// never panic. Functions backed by closures cannot be compared and do not
/// implement this trait.
pub trait Equivalent {
    /// Returns `true` if `other` is known to behave identically to `self`.
    fn equivalent(&self, other: &Self) -> bool;
}

impl<T: Equivalent> Equivalent for &T {
    fn equivalent(&self, other: &Self) -> bool {
        (**self).equivalent(*other)
    }
}
