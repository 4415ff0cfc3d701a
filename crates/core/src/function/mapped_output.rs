use std::marker::PhantomData;

use crate::Function;

/// A wrapper that transforms a function's successful output.
///
/// Created by [`Function::map_output()`].
pub struct MappedOutput<F, OutputMap, NewOutput> {
    function: F,
    output_map: OutputMap,
    _marker: PhantomData<fn() -> NewOutput>,
}

impl<F, OutputMap, NewOutput> MappedOutput<F, OutputMap, NewOutput> {
    pub(crate) fn new(function: F, output_map: OutputMap) -> Self {
        Self {
            function,
            output_map,
            _marker: PhantomData,
        }
    }
}

impl<F, OutputMap, NewOutput> Function for MappedOutput<F, OutputMap, NewOutput>
where
    F: Function,
    OutputMap: Fn(F::Output) -> NewOutput,
{
    type Input = F::Input;
    type Output = NewOutput;
    type Error = F::Error;

    fn apply(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        self.function.apply(input).map(&self.output_map)
    }
}
