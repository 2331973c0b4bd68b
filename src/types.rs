use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Dynamic runtime value inspected by matchers.
///
/// Assertion call sites hand the framework loosely-typed data; `Value` is the
/// closed set of runtime shapes the dispatch core understands. Compound
/// variants share their payload through `Arc` so that cloning a value (e.g.
/// into a matcher's expected slot) preserves object identity, which the
/// `is_identical_to` check depends on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    /// Absent value. Matchers must classify it like any other input.
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Arc<str>),
    List(Arc<[Value]>),
    Tuple(Arc<[Value]>),
    Map(Arc<BTreeMap<String, Value>>),
}

/// Runtime type tag of a [`Value`].
///
/// Exact-type checks (`is_a`) compare these tags directly; there is no
/// subtype hierarchy. In particular `Bool` is not `Int`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    None,
    Bool,
    Int,
    Float,
    Str,
    List,
    Tuple,
    Map,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::None => "none",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::Str => "str",
            Kind::List => "list",
            Kind::Tuple => "tuple",
            Kind::Map => "map",
        };
        f.write_str(name)
    }
}

impl Value {
    /// The runtime type tag of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::None => Kind::None,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::Str(_) => Kind::Str,
            Value::List(_) => Kind::List,
            Value::Tuple(_) => Kind::Tuple,
            Value::Map(_) => Kind::Map,
        }
    }

    /// Build a list value from anything convertible to values.
    pub fn list<I, T>(elements: I) -> Value
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::List(elements.into_iter().map(Into::into).collect())
    }

    /// Build a tuple value from anything convertible to values.
    pub fn tuple<I, T>(elements: I) -> Value
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Tuple(elements.into_iter().map(Into::into).collect())
    }

    /// Element or character count for the sized shapes (`str`, `list`,
    /// `tuple`); `None` for everything else.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Str(s) => Some(s.chars().count()),
            Value::List(xs) | Value::Tuple(xs) => Some(xs.len()),
            _ => None,
        }
    }

    /// Whether this value has a length of zero. `false` for unsized shapes.
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// Object identity, the `is` relation: shared-payload variants compare
    /// by pointer, the interned scalar kinds by value (`Float` by bit
    /// pattern, so an identical NaN is identical to itself).
    pub fn is_identical_to(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Str(a), Value::Str(b)) => Arc::ptr_eq(a, b),
            (Value::List(a), Value::List(b)) => Arc::ptr_eq(a, b),
            (Value::Tuple(a), Value::Tuple(b)) => Arc::ptr_eq(a, b),
            (Value::Map(a), Value::Map(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "'{s}'"),
            other => fmt::Display::fmt(other, f),
        }
    }
}

// An integer and a float are equal when the float is integral and inside the
// range where f64 represents integers exactly.
fn int_eq_float(i: i64, f: f64) -> bool {
    const EXACT: f64 = 9_007_199_254_740_992.0; // 2^53
    f.is_finite() && f == f.trunc() && f.abs() <= EXACT && f as i64 == i
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                int_eq_float(*a, *b)
            }
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            _ => false,
        }
    }
}

/// Renders the way assertion output expects: scalars and strings bare at the
/// top level, container elements repr-style with strings single-quoted, e.g.
/// `['spam', 'eggs']`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => f.write_str("None"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::List(xs) => {
                f.write_str("[")?;
                for (i, x) in xs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    x.fmt_repr(f)?;
                }
                f.write_str("]")
            }
            Value::Tuple(xs) => {
                f.write_str("(")?;
                for (i, x) in xs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    x.fmt_repr(f)?;
                }
                if xs.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            Value::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "'{key}': ")?;
                    value.fmt_repr(f)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(Arc::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(Arc::from(value.as_str()))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::list(value)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(value: BTreeMap<String, Value>) -> Self {
        Value::Map(Arc::new(value))
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::None,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    // u64 beyond i64::MAX or a true float.
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Str(Arc::from(s.as_str())),
            serde_json::Value::Array(xs) => Value::list(xs),
            serde_json::Value::Object(entries) => {
                let map: BTreeMap<String, Value> =
                    entries.into_iter().map(|(k, v)| (k, Value::from(v))).collect();
                Value::Map(Arc::new(map))
            }
        }
    }
}

/// Errors produced while resolving a named check.
///
/// A `matches` returning `false` is a normal outcome, not an error; these
/// variants cover misuse of the registry itself and surface synchronously at
/// the point of resolution.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The check name has no registrations at all.
    #[error("unknown check `{0}`")]
    UnknownCheck(String),
    /// The name is registered but no candidate accepts the actual's shape.
    #[error("no matcher registered under `{name}` accepts {kind} values")]
    NoAcceptingMatcher { name: String, kind: Kind },
    /// The expectation payload has the wrong shape for the named matcher.
    #[error("invalid expectation for `{name}`: expected {expected}, got {got}")]
    InvalidExpectation {
        name: String,
        expected: &'static str,
        got: &'static str,
    },
}
