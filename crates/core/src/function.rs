mod inspect;
mod mapped_error;
mod mapped_input;
mod mapped_output;
mod optional;
mod require_present;
mod then;
mod traced;

use std::{fmt::Debug, sync::Arc};

use crate::{FunctionError, trace::TraceConfig};

pub use inspect::Inspect;
pub use mapped_error::MappedError;
pub use mapped_input::MappedInput;
pub use mapped_output::MappedOutput;
pub use optional::Optional;
pub use require_present::RequirePresent;
pub use then::Then;
pub use traced::Traced;

/// A boxed, thread-safe [`Function`] trait object.
pub type BoxFunction<'a, I, O, E> =
    Box<dyn Function<Input = I, Output = O, Error = E> + Send + Sync + 'a>;

/// Determines an output value based on an input value.
///
/// A `Function` takes an input and produces an output, or fails with its own
/// `Error` type. It is the core contract of Tether: anything that converts or
/// derives one value from another can implement it and then be composed,
/// adapted, and passed around wherever a pluggable transform is needed.
///
/// ## Expected properties
///
/// Implementations are *generally expected*, but not required, to:
/// - Cause no observable side effects when applied.
/// - Be consistent with equality: if `a == b`, then
///   `f.apply(a) == f.apply(b)`.
///
/// Neither property is checked.
///
/// ## Absent inputs
///
/// A function that accepts an absent input says so in its type by using
/// `Option<_>` as its `Input`. A function taking a bare type cannot be given
/// an absent value at all. Use [`Function::optional()`] to let absence pass
/// through, or [`Function::require_present()`] to reject it with
/// [`FunctionError::InvalidArgument`].
///
/// ## Composing and adapting
///
/// - [`Function::then()`] applies two functions in sequence.
/// - [`Function::map_input()`], [`Function::map_output()`] and
///   [`Function::map_error()`] adapt the types at the edges.
/// - [`Function::inspect()`] and [`Function::traced()`] observe calls.
/// - [`Function::boxed()`] erases the concrete type.
///
/// # Example
///
/// ```
/// use std::convert::Infallible;
/// use tether_core::Function;
///
/// struct Double;
///
/// impl Function for Double {
///     type Input = i32;
///     type Output = i32;
///     type Error = Infallible;
///
///     fn apply(&self, input: i32) -> Result<i32, Self::Error> {
///         Ok(input * 2)
///     }
/// }
///
/// assert_eq!(Double.apply(21), Ok(42));
/// ```
pub trait Function {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the result of applying this function to `input`.
    ///
    /// This is the only method required when implementing `Function`.
    ///
    /// # Errors
    ///
    /// Each function defines its own `Error` type. A function given an input
    /// it does not support should fail with [`FunctionError::InvalidArgument`]
    /// or an error converted from it.
    fn apply(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;

    /// Chains this function with another.
    ///
    /// The returned function applies `self`, then passes its output to `next`.
    /// An error from `self` is returned without calling `next`.
    ///
    /// # Example
    ///
    /// ```
    /// use tether_core::{Function, from_fn};
    ///
    /// let add_one = from_fn(|x: i32| x + 1);
    /// let double = from_fn(|x: i32| x * 2);
    ///
    /// assert_eq!(add_one.then(double).apply(3), Ok(8));
    /// ```
    fn then<Next>(self, next: Next) -> Then<Self, Next>
    where
        Self: Sized,
        Next: Function<Input = Self::Output, Error = Self::Error>,
    {
        Then::new(self, next)
    }

    /// Adapts this function to accept a different input type.
    fn map_input<InputMap, NewInput>(
        self,
        input_map: InputMap,
    ) -> MappedInput<Self, InputMap, NewInput>
    where
        Self: Sized,
        InputMap: Fn(NewInput) -> Self::Input,
    {
        MappedInput::new(self, input_map)
    }

    /// Transforms this function's successful output.
    ///
    /// # Example
    ///
    /// ```
    /// use tether_core::{Function, from_fn};
    ///
    /// let labeled = from_fn(|x: u8| u32::from(x) * 10).map_output(|n| format!("{n} units"));
    ///
    /// assert_eq!(labeled.apply(4).unwrap(), "40 units");
    /// ```
    fn map_output<OutputMap, NewOutput>(
        self,
        output_map: OutputMap,
    ) -> MappedOutput<Self, OutputMap, NewOutput>
    where
        Self: Sized,
        OutputMap: Fn(Self::Output) -> NewOutput,
    {
        MappedOutput::new(self, output_map)
    }

    /// Transforms this function's error into a different type.
    fn map_error<ErrorMap, NewError>(
        self,
        error_map: ErrorMap,
    ) -> MappedError<Self, ErrorMap, NewError>
    where
        Self: Sized,
        ErrorMap: Fn(Self::Error) -> NewError,
        NewError: std::error::Error + Send + Sync + 'static,
    {
        MappedError::new(self, error_map)
    }

    /// Inspects inputs and outputs without modifying behavior.
    ///
    /// `input_handler` sees every input before it is applied and
    /// `output_handler` sees every successful output.
    fn inspect<InputHandler, OutputHandler>(
        self,
        input_handler: InputHandler,
        output_handler: OutputHandler,
    ) -> Inspect<Self, InputHandler, OutputHandler>
    where
        Self: Sized,
        InputHandler: Fn(&Self::Input),
        OutputHandler: Fn(&Self::Output),
    {
        Inspect::new(self, input_handler, output_handler)
    }

    /// Lets an absent input pass through as an absent output.
    ///
    /// The returned function accepts `Option<Self::Input>`. `None` produces
    /// `Ok(None)` without applying `self`.
    fn optional(self) -> Optional<Self>
    where
        Self: Sized,
    {
        Optional::new(self)
    }

    /// Rejects an absent input with [`FunctionError::InvalidArgument`].
    ///
    /// The returned function accepts `Option<Self::Input>` and applies `self`
    /// to present values.
    ///
    /// # Example
    ///
    /// ```
    /// use tether_core::{Function, FunctionError, from_fn};
    ///
    /// let strict = from_fn(|x: i32| x + 1)
    ///     .map_error(FunctionError::from)
    ///     .require_present();
    ///
    /// assert_eq!(strict.apply(Some(1)), Ok(2));
    /// assert_eq!(strict.apply(None), Err(FunctionError::absent_input()));
    /// ```
    fn require_present(self) -> RequirePresent<Self>
    where
        Self: Sized,
        Self::Error: From<FunctionError>,
    {
        RequirePresent::new(self)
    }

    /// Emits `tracing` events around each application.
    ///
    /// See [`Traced`] for the events emitted.
    fn traced(self, config: TraceConfig) -> Traced<Self>
    where
        Self: Sized,
        Self::Input: Debug,
        Self::Output: Debug,
    {
        Traced::new(self, config)
    }

    /// Erases this function's concrete type.
    fn boxed<'a>(self) -> BoxFunction<'a, Self::Input, Self::Output, Self::Error>
    where
        Self: Sized + Send + Sync + 'a,
    {
        Box::new(self)
    }
}

/// Returns a function that applies `f`, then `g`.
///
/// `compose(g, f)` behaves like `f.then(g)`.
pub fn compose<G, F>(g: G, f: F) -> Then<F, G>
where
    F: Function,
    G: Function<Input = F::Output, Error = F::Error>,
{
    f.then(g)
}

impl<F> Function for &F
where
    F: Function + ?Sized,
{
    type Input = F::Input;
    type Output = F::Output;
    type Error = F::Error;

    fn apply(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        (**self).apply(input)
    }
}

impl<F> Function for Box<F>
where
    F: Function + ?Sized,
{
    type Input = F::Input;
    type Output = F::Output;
    type Error = F::Error;

    fn apply(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        (**self).apply(input)
    }
}

impl<F> Function for Arc<F>
where
    F: Function + ?Sized,
{
    type Input = F::Input;
    type Output = F::Output;
    type Error = F::Error;

    fn apply(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        (**self).apply(input)
    }
}

#[cfg(test)]
mod tests {
    use std::{convert::Infallible, error::Error as StdError, fmt, thread};

    use approx::assert_relative_eq;

    use super::*;

    struct Doubler;

    impl Function for Doubler {
        type Input = i32;
        type Output = i32;
        type Error = Infallible;

        fn apply(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
            Ok(input * 2)
        }
    }

    struct Adder {
        increment: i32,
    }

    impl Function for Adder {
        type Input = i32;
        type Output = i32;
        type Error = Infallible;

        fn apply(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
            Ok(input + self.increment)
        }
    }

    struct Halver;

    impl Function for Halver {
        type Input = i32;
        type Output = f64;
        type Error = Infallible;

        fn apply(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
            Ok(f64::from(input) / 2.0)
        }
    }

    /// Accepts only even numbers.
    struct HalveEven;

    impl Function for HalveEven {
        type Input = i32;
        type Output = i32;
        type Error = FunctionError;

        fn apply(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
            if input % 2 == 0 {
                Ok(input / 2)
            } else {
                Err(FunctionError::invalid_argument(format!("{input} is odd")))
            }
        }
    }

    #[derive(Debug)]
    struct WrappedError(String);

    impl fmt::Display for WrappedError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl StdError for WrappedError {}

    #[test]
    fn basic_functions() {
        assert_eq!(Doubler.apply(2), Ok(4));
        assert_eq!(Doubler.apply(5), Ok(10));

        let add_five = Adder { increment: 5 };
        assert_eq!(add_five.apply(3), Ok(8));

        assert_relative_eq!(Halver.apply(3).unwrap(), 1.5);
    }

    #[test]
    fn then_applies_in_order() {
        let add_one = Adder { increment: 1 };
        let add_ten = Adder { increment: 10 };
        let chain = add_one.then(Doubler).then(add_ten);

        assert_eq!(chain.apply(2), Ok(16));
        assert_eq!(chain.apply(20), Ok(52));
    }

    #[test]
    fn compose_applies_right_to_left() {
        let composed = compose(Adder { increment: 1 }, Doubler);

        assert_eq!(composed.apply(5), Ok(11)); // (5 * 2) + 1
    }

    #[test]
    fn then_short_circuits_on_error() {
        let chain = HalveEven.then(HalveEven);

        assert_eq!(chain.apply(8), Ok(2));
        assert_eq!(
            chain.apply(6),
            Err(FunctionError::invalid_argument("3 is odd"))
        );
        assert_eq!(
            chain.apply(5),
            Err(FunctionError::invalid_argument("5 is odd"))
        );
    }

    #[test]
    fn map_input_and_output() {
        let mapped = Doubler
            .map_input(|text: &str| text.len() as i32)
            .map_output(|n| format!("twice the length is {n}"));

        assert_eq!(mapped.apply("four").unwrap(), "twice the length is 8");
    }

    #[test]
    fn map_error_transforms_error() {
        let wrapped = HalveEven.map_error(|err| WrappedError(format!("halving failed: {err}")));

        assert_eq!(
            wrapped.apply(3).unwrap_err().to_string(),
            "halving failed: invalid argument: 3 is odd"
        );
    }

    #[test]
    fn infallible_joins_fallible_chain() {
        let chain = Doubler.map_error(FunctionError::from).then(HalveEven);

        assert_eq!(chain.apply(7), Ok(7));
    }

    #[test]
    fn inspect_observes_calls() {
        use std::sync::Mutex;

        // Handlers usually log inline; the logs here only exist for assertions.
        let input_log = Arc::new(Mutex::new(Vec::new()));
        let output_log = Arc::new(Mutex::new(Vec::new()));

        let inspected = HalveEven.inspect(
            {
                let input_log = Arc::clone(&input_log);
                move |input| input_log.lock().unwrap().push(*input)
            },
            {
                let output_log = Arc::clone(&output_log);
                move |output| output_log.lock().unwrap().push(*output)
            },
        );

        assert_eq!(inspected.apply(4), Ok(2));
        assert!(inspected.apply(5).is_err());
        assert_eq!(inspected.apply(10), Ok(5));

        assert_eq!(*input_log.lock().unwrap(), vec![4, 5, 10]);
        assert_eq!(*output_log.lock().unwrap(), vec![2, 5]);
    }

    #[test]
    fn optional_passes_absence_through() {
        let lifted = Doubler.optional();

        assert_eq!(lifted.apply(Some(4)), Ok(Some(8)));
        assert_eq!(lifted.apply(None), Ok(None));
    }

    #[test]
    fn require_present_rejects_absence() {
        let strict = HalveEven.require_present();

        assert_eq!(strict.apply(Some(4)), Ok(2));

        let error = strict.apply(None).unwrap_err();
        assert!(error.is_invalid_argument());
    }

    #[test]
    fn dynamic_dispatch() {
        let functions: Vec<BoxFunction<'static, i32, i32, Infallible>> = vec![
            Doubler.boxed(),
            Adder { increment: 3 }.boxed(),
            Doubler.then(Adder { increment: 1 }).boxed(),
        ];

        let outputs: Vec<i32> = functions
            .iter()
            .map(|function| function.apply(10).unwrap())
            .collect();

        assert_eq!(outputs, vec![20, 13, 21]);
    }

    #[test]
    fn references_are_functions() {
        let add_two = Adder { increment: 2 };
        let chain = (&add_two).then(&add_two);

        assert_eq!(chain.apply(1), Ok(5));
        assert_eq!(add_two.apply(1), Ok(3));
    }

    #[test]
    fn shared_across_threads() {
        let shared = Arc::new(Doubler.then(Adder { increment: 1 }));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let function = Arc::clone(&shared);
                thread::spawn(move || function.apply(i))
            })
            .collect();

        let outputs: Vec<i32> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap().unwrap())
            .collect();

        assert_eq!(outputs, vec![1, 3, 5, 7]);
    }
}
