//! Supplementary matchers: logical combinators over a set of expected
//! values.
//!
//! These are never registered under a check name. Callers construct one via
//! [`any_of`] / [`all_of`] and pass it as the expectation of `contains`,
//! which delegates evaluation and description to it wholesale. Nesting
//! matchers as data keeps the registry flat — one dispatch level — while
//! still allowing logical combination.

use serde::{Deserialize, Serialize};

use crate::matchers::sequence::sequence_contains;
use crate::matchers::{shape, Matcher};
use crate::types::Value;

/// A logical combinator over a set of expected values, evaluated against a
/// sequence by membership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Composite {
    /// At least one expected value is a member of the actual sequence.
    AnyOf { expected: Vec<Value> },
    /// Every expected value is a member of the actual sequence.
    All { expected: Vec<Value> },
}

impl Composite {
    fn expected(&self) -> &[Value] {
        match self {
            Composite::AnyOf { expected } | Composite::All { expected } => expected,
        }
    }

    fn joined_expected(&self) -> String {
        let mut joined = String::new();
        for (i, value) in self.expected().iter().enumerate() {
            if i > 0 {
                joined.push_str(", ");
            }
            joined.push_str(&value.to_string());
        }
        joined
    }
}

impl Matcher for Composite {
    fn accepts(&self, actual: &Value) -> bool {
        shape::sequence(actual)
    }

    fn matches(&self, actual: &Value) -> bool {
        match self {
            // Short-circuits on the first membership hit.
            Composite::AnyOf { expected } => expected
                .iter()
                .any(|element| sequence_contains(actual, element)),
            // Short-circuits on the first miss.
            Composite::All { expected } => expected
                .iter()
                .all(|element| sequence_contains(actual, element)),
        }
    }

    /// Lists the full expected set, independent of which elements failed.
    fn describe(&self, actual: &Value) -> String {
        match self {
            Composite::AnyOf { .. } => format!(
                "'{actual}' does not contain any of '{}'",
                self.joined_expected()
            ),
            Composite::All { .. } => format!(
                "'{actual}' does not contain all elements of '{}'",
                self.joined_expected()
            ),
        }
    }
}

/// Matcher that is satisfied when any of the expected values is contained
/// in the actual sequence.
pub fn any_of<I, T>(expected: I) -> Composite
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    Composite::AnyOf {
        expected: expected.into_iter().map(Into::into).collect(),
    }
}

/// Matcher that is satisfied when all of the expected values are contained
/// in the actual sequence.
pub fn all_of<I, T>(expected: I) -> Composite
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    Composite::All {
        expected: expected.into_iter().map(Into::into).collect(),
    }
}
