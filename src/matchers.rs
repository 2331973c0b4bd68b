//! Matcher implementations and the contract they satisfy.
//!
//! Every matcher answers three questions about an actual value: does this
//! implementation apply to the value's runtime shape ([`Matcher::accepts`]),
//! does the value satisfy the expectation ([`Matcher::matches`]), and how
//! should a mismatch be reported ([`Matcher::describe`]). Applicability is
//! capability-based: each matcher composes the [`shape`] predicates it
//! claims, rather than participating in a type hierarchy.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::types::{Kind, Value};

pub mod composite;
pub mod object;
pub mod sequence;

pub use composite::{all_of, any_of, Composite};
pub use object::{EqualsMatcher, IsAMatcher, IsIdenticalToMatcher};
pub use sequence::{ContainsExpected, ContainsMatcher, IsEmptyMatcher, IsNotEmptyMatcher};

/// The contract every matcher satisfies.
///
/// Matchers are immutable after construction; all three operations are pure.
/// `accepts` must never panic, whatever the input — it answers `false` for
/// anything it cannot classify.
pub trait Matcher: fmt::Debug {
    /// Whether this matcher applies to the runtime shape of `actual`.
    fn accepts(&self, actual: &Value) -> bool;

    /// Whether `actual` satisfies the expectation. A `false` here is a
    /// normal assertion-failure outcome, not an error.
    fn matches(&self, actual: &Value) -> bool;

    /// Human-readable account of the mismatch, rendered for `actual`.
    fn describe(&self, actual: &Value) -> String;
}

/// Runtime shape predicates matchers compose their acceptance from.
///
/// Dual-shape matchers (e.g. `is_empty`, valid for sequences and strings) OR
/// these together instead of inheriting acceptance from two bases.
pub mod shape {
    use crate::types::Value;

    /// A list or tuple.
    pub fn sequence(actual: &Value) -> bool {
        matches!(actual, Value::List(_) | Value::Tuple(_))
    }

    /// A string.
    pub fn text(actual: &Value) -> bool {
        matches!(actual, Value::Str(_))
    }

    /// Any value at all.
    pub fn any(_actual: &Value) -> bool {
        true
    }

    /// A list, tuple, or string.
    pub fn sequence_or_text(actual: &Value) -> bool {
        sequence(actual) || text(actual)
    }
}

/// Constructor payload captured at the assertion call site and carried into
/// [`Registry::resolve`](crate::registry::Registry::resolve).
///
/// Which variant a given check expects is part of its contract: `is_empty`
/// takes no payload, `equals` a plain value, `is_a` a kind, and `contains`
/// either a plain value or a nested [`Composite`] matcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expectation {
    /// No payload.
    None,
    /// A plain expected value.
    Value(Value),
    /// An expected runtime kind.
    Kind(Kind),
    /// A nested supplementary matcher.
    Matcher(Composite),
}

impl Expectation {
    /// Short label used in `InvalidExpectation` errors.
    pub(crate) fn label(&self) -> &'static str {
        match self {
            Expectation::None => "no payload",
            Expectation::Value(_) => "a value",
            Expectation::Kind(_) => "a kind",
            Expectation::Matcher(_) => "a nested matcher",
        }
    }
}

impl From<Value> for Expectation {
    fn from(value: Value) -> Self {
        Expectation::Value(value)
    }
}

impl From<Kind> for Expectation {
    fn from(kind: Kind) -> Self {
        Expectation::Kind(kind)
    }
}

impl From<Composite> for Expectation {
    fn from(matcher: Composite) -> Self {
        Expectation::Matcher(matcher)
    }
}

/// A resolved, constructed matcher ready for evaluation.
///
/// The built-in implementations form a closed enum dispatched by `match`;
/// downstream registrations return [`Check::Custom`] instead.
#[derive(Debug, Clone)]
pub enum Check {
    Equals(EqualsMatcher),
    IsIdenticalTo(IsIdenticalToMatcher),
    IsA(IsAMatcher),
    Contains(ContainsMatcher),
    IsEmpty(IsEmptyMatcher),
    IsNotEmpty(IsNotEmptyMatcher),
    /// A matcher implemented outside this crate.
    Custom(Arc<dyn Matcher + Send + Sync>),
}

impl Check {
    fn inner(&self) -> &dyn Matcher {
        match self {
            Check::Equals(m) => m,
            Check::IsIdenticalTo(m) => m,
            Check::IsA(m) => m,
            Check::Contains(m) => m,
            Check::IsEmpty(m) => m,
            Check::IsNotEmpty(m) => m,
            Check::Custom(m) => m.as_ref(),
        }
    }
}

impl Matcher for Check {
    fn accepts(&self, actual: &Value) -> bool {
        self.inner().accepts(actual)
    }

    fn matches(&self, actual: &Value) -> bool {
        self.inner().matches(actual)
    }

    fn describe(&self, actual: &Value) -> String {
        self.inner().describe(actual)
    }
}
