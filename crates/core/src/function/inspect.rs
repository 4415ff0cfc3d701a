use crate::Function;

/// A wrapper that observes input and output without modifying behavior.
///
/// Created by [`Function::inspect()`]. The output handler only sees
/// successful outputs; errors pass through untouched.
pub struct Inspect<F, InputHandler, OutputHandler> {
    function: F,
    input_handler: InputHandler,
    output_handler: OutputHandler,
}

impl<F, InputHandler, OutputHandler> Inspect<F, InputHandler, OutputHandler> {
    pub(crate) fn new(
        function: F,
        input_handler: InputHandler,
        output_handler: OutputHandler,
    ) -> Self {
        Self {
            function,
            input_handler,
            output_handler,
        }
    }
}

impl<F, InputHandler, OutputHandler> Function for Inspect<F, InputHandler, OutputHandler>
where
    F: Function,
    InputHandler: Fn(&F::Input),
    OutputHandler: Fn(&F::Output),
{
    type Input = F::Input;
    type Output = F::Output;
    type Error = F::Error;

    fn apply(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        (self.input_handler)(&input);
        let output = self.function.apply(input)?;
        (self.output_handler)(&output);
        Ok(output)
    }
}
