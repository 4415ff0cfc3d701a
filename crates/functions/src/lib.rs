//! Reusable functions built on the [`tether_core::Function`] contract.
//!
//! - [`identity`]: returns its input unchanged
//! - [`length`]: counts the characters of a string
//! - [`stringify`]: formats a value with `Display`
//! - [`constant`]: ignores its input and returns a fixed value
//! - [`for_map`], [`for_map_with_default`]: look the input up in a map
//! - [`for_predicate`]: evaluates a predicate on the input
//! - [`for_supplier`]: ignores its input and calls a supplier
//!
//! Functions with comparable state also implement
//! [`tether_core::Equivalent`].

mod constant;
mod for_map;
mod identity;
mod length;
mod predicate;
mod stringify;
mod supplier;

pub use constant::{Constant, constant};
pub use for_map::{ForMap, ForMapWithDefault, for_map, for_map_with_default};
pub use identity::{Identity, identity};
pub use length::{Length, length};
pub use predicate::{ForPredicate, for_predicate};
pub use stringify::{Stringify, stringify};
pub use supplier::{ForSupplier, for_supplier};
