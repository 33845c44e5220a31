//! # Parameter Binder
//!
//! Turns the tokens that follow the command into a [`ParameterMap`] with a
//! single forward pass and one slot of lookahead, the *pending flag*:
//!
//! 1. `FlagWithValue(name, value)` stores `name = value` at once and leaves the
//!    pending slot alone.
//! 2. `FlagOnly(name)` becomes the pending flag. A flag that was already
//!    pending never got a value, so it is stored as [`Value::Flag`].
//! 3. `BareValue(value)` is stored under the pending flag, clearing the slot.
//!    With nothing pending the value has no name and is dropped.
//!
//! A dash-only argument (`-`, `--`) is a flag with an empty name. It takes the
//! pending slot like any flag, but nothing is ever stored under it.
//! 4. A flag still pending at the end is stored as [`Value::Flag`].
//!
//! Later occurrences of a name overwrite earlier ones. The binder never fails.

use crate::args::Token;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// A parameter value: some text, or a switch given without a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Flag,
}

impl Value {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Flag => None,
        }
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, Value::Flag)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Flag => f.write_str("true"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

/// Parameter name to value, one value per name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterMap {
    values: BTreeMap<String, Value>,
}

impl ParameterMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value, replacing any earlier value for the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for ParameterMap {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

/// Binds tokens to parameter names.
pub fn bind(tokens: &[Token]) -> ParameterMap {
    let mut params = ParameterMap::new();
    let mut pending: Option<&str> = None;

    for token in tokens {
        match token {
            Token::FlagWithValue(name, value) => {
                params.insert(name.as_str(), Value::Text(value.clone()));
            }
            Token::FlagOnly(name) => {
                if let Some(previous) = pending.replace(name) {
                    store(&mut params, previous, Value::Flag);
                }
            }
            Token::BareValue(value) => match pending.take() {
                Some(name) => store(&mut params, name, Value::Text(value.clone())),
                None => debug!(value = %value, "dropping value that follows no flag"),
            },
            Token::Command(name) => debug!(command = %name, "ignoring command token"),
        }
    }

    if let Some(name) = pending {
        store(&mut params, name, Value::Flag);
    }
    params
}

// A bare `-` or `--` is a flag without a name; whatever it resolves to is lost.
fn store(params: &mut ParameterMap, name: &str, value: Value) {
    if name.is_empty() {
        debug!(value = %value, "dropping value of unnamed flag");
    } else {
        params.insert(name, value);
    }
}

/// Tokenizes and binds the arguments that follow the command name.
pub fn parse<I, S>(args: I) -> ParameterMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tokens: Vec<Token> = args
        .into_iter()
        .map(|arg| crate::args::classify(arg.as_ref()))
        .collect();
    bind(&tokens)
}
