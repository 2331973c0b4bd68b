//! Matchers over list and tuple values: membership and emptiness.

use serde::{Deserialize, Serialize};

use crate::matchers::{shape, Check, Composite, Expectation, Matcher};
use crate::registry::{Registration, Registry};
use crate::types::{CheckError, Value};

/// Registers this family: `contains`, `is_empty`, `is_not_empty`.
pub(crate) fn register(registry: &mut Registry) {
    registry.register("contains", Registration::new(shape::sequence, build_contains));
    registry.register(
        "is_empty",
        Registration::new(shape::sequence_or_text, build_is_empty),
    );
    registry.register(
        "is_not_empty",
        Registration::new(shape::sequence_or_text, build_is_not_empty),
    );
}

pub(crate) fn build_contains(expectation: Expectation) -> Result<Check, CheckError> {
    match expectation {
        Expectation::Value(expected) => Ok(Check::Contains(ContainsMatcher::new(
            ContainsExpected::Literal(expected),
        ))),
        Expectation::Matcher(nested) => Ok(Check::Contains(ContainsMatcher::new(
            ContainsExpected::Matcher(nested),
        ))),
        other => Err(CheckError::InvalidExpectation {
            name: "contains".to_string(),
            expected: "a value or a nested matcher",
            got: other.label(),
        }),
    }
}

pub(crate) fn build_is_empty(expectation: Expectation) -> Result<Check, CheckError> {
    match expectation {
        Expectation::None => Ok(Check::IsEmpty(IsEmptyMatcher)),
        other => Err(CheckError::InvalidExpectation {
            name: "is_empty".to_string(),
            expected: "no payload",
            got: other.label(),
        }),
    }
}

pub(crate) fn build_is_not_empty(expectation: Expectation) -> Result<Check, CheckError> {
    match expectation {
        Expectation::None => Ok(Check::IsNotEmpty(IsNotEmptyMatcher)),
        other => Err(CheckError::InvalidExpectation {
            name: "is_not_empty".to_string(),
            expected: "no payload",
            got: other.label(),
        }),
    }
}

/// Membership test: whether `element` occurs in the sequence `actual`.
/// `false` for non-sequence values.
pub(crate) fn sequence_contains(actual: &Value, element: &Value) -> bool {
    match actual {
        Value::List(xs) | Value::Tuple(xs) => xs.iter().any(|x| x == element),
        _ => false,
    }
}

/// What a [`ContainsMatcher`] was constructed with: a literal element to
/// look up, or a nested matcher to delegate to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainsExpected {
    Literal(Value),
    Matcher(Composite),
}

/// Tests that an element is contained in the actual sequence.
///
/// When constructed with a nested matcher, evaluation and description both
/// delegate to it entirely — the combinator decides what membership means.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainsMatcher {
    expected: ContainsExpected,
}

impl ContainsMatcher {
    pub fn new(expected: ContainsExpected) -> Self {
        Self { expected }
    }
}

impl Matcher for ContainsMatcher {
    fn accepts(&self, actual: &Value) -> bool {
        shape::sequence(actual)
    }

    fn matches(&self, actual: &Value) -> bool {
        match &self.expected {
            ContainsExpected::Literal(element) => sequence_contains(actual, element),
            ContainsExpected::Matcher(nested) => nested.matches(actual),
        }
    }

    fn describe(&self, actual: &Value) -> String {
        match &self.expected {
            ContainsExpected::Literal(element) => {
                format!("'{actual}' does not contain '{element}'")
            }
            ContainsExpected::Matcher(nested) => nested.describe(actual),
        }
    }
}

/// Tests that the actual sequence or string has no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsEmptyMatcher;

impl Matcher for IsEmptyMatcher {
    fn accepts(&self, actual: &Value) -> bool {
        shape::sequence_or_text(actual)
    }

    fn matches(&self, actual: &Value) -> bool {
        actual.is_empty()
    }

    fn describe(&self, actual: &Value) -> String {
        format!("'{actual}' is not empty")
    }
}

/// Tests that the actual sequence or string has at least one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsNotEmptyMatcher;

impl Matcher for IsNotEmptyMatcher {
    fn accepts(&self, actual: &Value) -> bool {
        shape::sequence_or_text(actual)
    }

    fn matches(&self, actual: &Value) -> bool {
        matches!(actual.len(), Some(n) if n > 0)
    }

    fn describe(&self, actual: &Value) -> String {
        format!("'{actual}' is empty")
    }
}
