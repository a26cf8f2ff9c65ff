//! Typed values exchanged with the printer's call protocol

use serde::{Deserialize, Serialize};
use std::fmt;

/// A loosely-typed protocol value.
///
/// Call arguments are only ever `Int`, `Bool` or `Text`. Output arguments
/// may additionally be arrays of those.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Variant {
    Int(i32),
    Bool(bool),
    Text(String),
    Array(Vec<Variant>),
}

impl Variant {
    /// Elements of an array value; a scalar is a one-element sequence
    pub fn to_list(&self) -> Vec<Variant> {
        match self {
            Self::Array(items) => items.clone(),
            other => vec![other.clone()],
        }
    }

    /// Short name of the value's kind, for logs and help output
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Bool(_) => "bool",
            Self::Text(_) => "string",
            Self::Array(_) => "array",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Bool(v) => write!(f, "{}", v),
            Self::Text(v) => f.write_str(v),
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<i32> for Variant {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<bool> for Variant {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Variant {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Variant {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl<T: Into<Variant>> From<Vec<T>> for Variant {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}
