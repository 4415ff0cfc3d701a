//! The single-argument function contract for Tether.
//!
//! This crate defines the shared abstractions that reusable functions and
//! their callers build on:
//!
//! - [`Function`]: maps a typed input to a typed output, or fails with a typed error
//! - [`Equivalent`]: an advisory check that two functions behave identically
//! - [`FunctionError`]: the error raised for inputs a function does not accept
//! - [`from_fn`], [`try_from_fn`]: adapt closures into functions
//! - [`trace`]: configuration for functions that emit `tracing` events
//!
//! The adapter types ([`Then`], [`MappedInput`], [`Optional`], ...) are
//! returned by the provided methods on [`Function`] and rarely need to be
//! named directly.

mod closure;
mod equivalent;
mod error;
mod function;
pub mod trace;

pub use closure::{FromFn, TryFromFn, from_fn, try_from_fn};
pub use equivalent::Equivalent;
pub use error::FunctionError;
pub use function::{
    BoxFunction, Function, Inspect, MappedError, MappedInput, MappedOutput, Optional,
    RequirePresent, Then, Traced, compose,
};
