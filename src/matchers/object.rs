//! Matchers that accept any value: equality, identity, and exact-type
//! checks.

use serde::{Deserialize, Serialize};

use crate::matchers::{shape, Check, Expectation, Matcher};
use crate::registry::{Registration, Registry};
use crate::types::{CheckError, Kind, Value};

/// Registers this family: `equals`, `is_identical_to`, `is_a`.
pub(crate) fn register(registry: &mut Registry) {
    registry.register("equals", Registration::new(shape::any, build_equals));
    registry.register(
        "is_identical_to",
        Registration::new(shape::any, build_is_identical_to),
    );
    registry.register("is_a", Registration::new(shape::any, build_is_a));
}

pub(crate) fn build_equals(expectation: Expectation) -> Result<Check, CheckError> {
    match expectation {
        Expectation::Value(expected) => Ok(Check::Equals(EqualsMatcher::new(expected))),
        other => Err(invalid("equals", "a value", &other)),
    }
}

pub(crate) fn build_is_identical_to(expectation: Expectation) -> Result<Check, CheckError> {
    match expectation {
        Expectation::Value(expected) => {
            Ok(Check::IsIdenticalTo(IsIdenticalToMatcher::new(expected)))
        }
        other => Err(invalid("is_identical_to", "a value", &other)),
    }
}

pub(crate) fn build_is_a(expectation: Expectation) -> Result<Check, CheckError> {
    match expectation {
        Expectation::Kind(expected) => Ok(Check::IsA(IsAMatcher::new(expected))),
        other => Err(invalid("is_a", "a kind", &other)),
    }
}

fn invalid(name: &str, expected: &'static str, got: &Expectation) -> CheckError {
    CheckError::InvalidExpectation {
        name: name.to_string(),
        expected,
        got: got.label(),
    }
}

/// Tests whether the actual value equals the expected one, `actual == expected`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EqualsMatcher {
    expected: Value,
}

impl EqualsMatcher {
    pub fn new(expected: Value) -> Self {
        Self { expected }
    }
}

impl Matcher for EqualsMatcher {
    fn accepts(&self, actual: &Value) -> bool {
        shape::any(actual)
    }

    fn matches(&self, actual: &Value) -> bool {
        self.expected == *actual
    }

    fn describe(&self, actual: &Value) -> String {
        format!(
            "Actual '{actual}' does not equal expected '{}'",
            self.expected
        )
    }
}

/// Tests whether the actual value *is* the expected one — same object, not
/// merely an equal value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IsIdenticalToMatcher {
    expected: Value,
}

impl IsIdenticalToMatcher {
    pub fn new(expected: Value) -> Self {
        Self { expected }
    }
}

impl Matcher for IsIdenticalToMatcher {
    fn accepts(&self, actual: &Value) -> bool {
        shape::any(actual)
    }

    fn matches(&self, actual: &Value) -> bool {
        self.expected.is_identical_to(actual)
    }

    fn describe(&self, actual: &Value) -> String {
        format!("'{actual}' is not '{}'", self.expected)
    }
}

/// Tests whether the actual value's runtime kind is exactly the expected
/// one. No hierarchy leniency: `Bool` is not `Int`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsAMatcher {
    expected: Kind,
}

impl IsAMatcher {
    pub fn new(expected: Kind) -> Self {
        Self { expected }
    }
}

impl Matcher for IsAMatcher {
    fn accepts(&self, actual: &Value) -> bool {
        shape::any(actual)
    }

    fn matches(&self, actual: &Value) -> bool {
        actual.kind() == self.expected
    }

    fn describe(&self, actual: &Value) -> String {
        format!(
            "'{actual}' of type {} is not of expected type {}",
            actual.kind(),
            self.expected
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equals_is_reflexive_for_equal_values() {
        let matcher = EqualsMatcher::new(Value::from("spam"));
        assert!(matcher.matches(&Value::from("spam")));
        assert!(!matcher.matches(&Value::from("eggs")));
    }

    #[test]
    fn equals_accepts_every_shape() {
        let matcher = EqualsMatcher::new(Value::Int(7));
        for value in [Value::None, Value::Int(7), Value::list([1]), Value::from("x")] {
            assert!(matcher.accepts(&value));
        }
    }

    #[test]
    fn equals_describes_both_sides() {
        let matcher = EqualsMatcher::new(Value::Int(7));
        assert_eq!(
            matcher.describe(&Value::Int(8)),
            "Actual '8' does not equal expected '7'"
        );
    }

    #[test]
    fn identical_requires_the_same_object() {
        let expected = Value::list(["spam"]);
        let matcher = IsIdenticalToMatcher::new(expected.clone());

        assert!(matcher.matches(&expected));
        let equal_but_distinct = Value::list(["spam"]);
        assert!(!matcher.matches(&equal_but_distinct));
        assert_eq!(
            matcher.describe(&equal_but_distinct),
            "'['spam']' is not '['spam']'"
        );
    }

    #[test]
    fn is_a_matches_exact_kind_only() {
        let matcher = IsAMatcher::new(Kind::Int);
        assert!(matcher.matches(&Value::Int(7)));
        assert!(!matcher.matches(&Value::Float(7.0)));
        assert!(!matcher.matches(&Value::Bool(true)));
        assert_eq!(
            matcher.describe(&Value::from("7")),
            "'7' of type str is not of expected type int"
        );
    }

    #[test]
    fn builders_reject_mismatched_payloads() {
        let err = build_is_a(Expectation::Value(Value::Int(7))).unwrap_err();
        assert!(matches!(err, CheckError::InvalidExpectation { .. }));
        assert_eq!(
            err.to_string(),
            "invalid expectation for `is_a`: expected a kind, got a value"
        );

        assert!(build_equals(Expectation::None).is_err());
        assert!(build_is_identical_to(Expectation::Kind(Kind::Int)).is_err());
    }
}
