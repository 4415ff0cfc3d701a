use std::marker::PhantomData;

use crate::Function;

/// A wrapper that transforms a function's input type.
///
/// Created by [`Function::map_input()`] to adapt a function so it can accept
/// a different input type.
pub struct MappedInput<F, InputMap, NewInput> {
    function: F,
    input_map: InputMap,
    _marker: PhantomData<fn(NewInput)>,
}

impl<F, InputMap, NewInput> MappedInput<F, InputMap, NewInput> {
    pub(crate) fn new(function: F, input_map: InputMap) -> Self {
        Self {
            function,
            input_map,
            _marker: PhantomData,
        }
    }
}

impl<F, InputMap, NewInput> Function for MappedInput<F, InputMap, NewInput>
where
    F: Function,
    InputMap: Fn(NewInput) -> F::Input,
{
    type Input = NewInput;
    type Output = F::Output;
    type Error = F::Error;

    /// Applies the wrapped function to a transformed input value.
    fn apply(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        let mapped_input = (self.input_map)(input);
        self.function.apply(mapped_input)
    }
}
