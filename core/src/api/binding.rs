//! Parameter bindings supplied per evaluation.

use core::hash::BuildHasher;
use std::collections::BTreeMap;

use hashbrown::HashMap;

use crate::values::HostValue;

/// Name → value lookup consulted by the `@` operator.
///
/// Implemented for [`Parameters`], standard and hashbrown maps keyed by
/// `String`, slices and vectors of `(name, value)` pairs, and `()` for an
/// empty binding.
pub trait ParameterBinding {
    fn lookup(&self, name: &str) -> Option<&HostValue>;
}

/// Builder-style parameter map.
///
/// # Example
///
/// ```
/// use scalc_core::api::{ParameterBinding, Parameters};
///
/// let params = Parameters::new().with("limit", 10).with("unit", "kg");
/// assert!(params.lookup("limit").is_some());
/// assert!(params.lookup("missing").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parameters {
    entries: HashMap<String, HostValue>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<HostValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Bind `name`, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<HostValue>) {
        self.entries.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<HostValue>> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Parameters::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

impl ParameterBinding for Parameters {
    fn lookup(&self, name: &str) -> Option<&HostValue> {
        self.entries.get(name)
    }
}

impl ParameterBinding for () {
    fn lookup(&self, _name: &str) -> Option<&HostValue> {
        None
    }
}

impl<S: BuildHasher> ParameterBinding for HashMap<String, HostValue, S> {
    fn lookup(&self, name: &str) -> Option<&HostValue> {
        self.get(name)
    }
}

impl<S: BuildHasher> ParameterBinding for std::collections::HashMap<String, HostValue, S> {
    fn lookup(&self, name: &str) -> Option<&HostValue> {
        self.get(name)
    }
}

impl ParameterBinding for BTreeMap<String, HostValue> {
    fn lookup(&self, name: &str) -> Option<&HostValue> {
        self.get(name)
    }
}

impl<K: AsRef<str>> ParameterBinding for [(K, HostValue)] {
    fn lookup(&self, name: &str) -> Option<&HostValue> {
        self.iter()
            .find(|(key, _)| key.as_ref() == name)
            .map(|(_, value)| value)
    }
}

impl<K: AsRef<str>> ParameterBinding for Vec<(K, HostValue)> {
    fn lookup(&self, name: &str) -> Option<&HostValue> {
        self.as_slice().lookup(name)
    }
}

impl<T: ParameterBinding + ?Sized> ParameterBinding for &T {
    fn lookup(&self, name: &str) -> Option<&HostValue> {
        (**self).lookup(name)
    }
}
