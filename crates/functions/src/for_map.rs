use std::{collections::HashMap, convert::Infallible, fmt::Debug, hash::Hash};

use tether_core::{Equivalent, Function, FunctionError};

/// A function that looks its input up in a map, rejecting missing keys.
///
/// A key missing from the map fails with [`FunctionError::InvalidArgument`]
/// naming the key, so keys must implement `Debug`.
#[derive(Debug, Clone)]
pub struct ForMap<K, V> {
    map: HashMap<K, V>,
}

/// A function that looks its input up in a map, falling back to a default.
///
/// Missing keys produce a clone of the default, so applying never fails.
#[derive(Debug, Clone)]
pub struct ForMapWithDefault<K, V> {
    map: HashMap<K, V>,
    default: V,
}

/// Returns a function that looks keys up in `map`, rejecting missing keys.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
///
/// use tether_core::Function;
/// use tether_functions::for_map;
///
/// let ports = for_map(HashMap::from([("http", 80), ("https", 443)]));
///
/// assert_eq!(ports.apply("https"), Ok(443));
/// assert!(ports.apply("gopher").unwrap_err().is_invalid_argument());
/// ```
#[must_use]
pub fn for_map<K, V>(map: HashMap<K, V>) -> ForMap<K, V>
where
    K: Eq + Hash + Debug,
    V: Clone,
{
    ForMap { map }
}

/// Returns a function that looks keys up in `map`, producing `default` for
/// missing keys.
#[must_use]
pub fn for_map_with_default<K, V>(map: HashMap<K, V>, default: V) -> ForMapWithDefault<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    ForMapWithDefault { map, default }
}

impl<K, V> ForMap<K, V> {
    /// Returns the map backing this function.
    pub fn map(&self) -> &HashMap<K, V> {
        &self.map
    }
}

impl<K, V> ForMapWithDefault<K, V> {
    /// Returns the map backing this function.
    pub fn map(&self) -> &HashMap<K, V> {
        &self.map
    }

    /// Returns the value produced for missing keys.
    pub fn default_value(&self) -> &V {
        &self.default
    }
}

impl<K, V> Function for ForMap<K, V>
where
    K: Eq + Hash + Debug,
    V: Clone,
{
    type Input = K;
    type Output = V;
    type Error = FunctionError;

    fn apply(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        self.map.get(&input).cloned().ok_or_else(|| {
            FunctionError::invalid_argument(format!("key `{input:?}` is not present in map"))
        })
    }
}

impl<K, V> Function for ForMapWithDefault<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    type Input = K;
    type Output = V;
    type Error = Infallible;

    fn apply(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.map.get(&input).unwrap_or(&self.default).clone())
    }
}

impl<K, V> Equivalent for ForMap<K, V>
where
    K: Eq + Hash,
    V: PartialEq,
{
    fn equivalent(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<K, V> Equivalent for ForMapWithDefault<K, V>
where
    K: Eq + Hash,
    V: PartialEq,
{
    fn equivalent(&self, other: &Self) -> bool {
        self.map == other.map && self.default == other.default
    }
}
