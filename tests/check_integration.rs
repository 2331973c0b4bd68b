use attest::{
    all_of, any_of, default_registry, Expectation, Kind, Matcher, Registry, Value,
};

fn resolve_and_match(registry: &Registry, name: &str, actual: &Value, expectation: Expectation) -> bool {
    registry
        .resolve(name, actual, expectation)
        .expect("check should resolve")
        .matches(actual)
}

#[test]
fn equals_matches_equal_values_only() {
    let registry = default_registry();
    assert!(resolve_and_match(
        registry,
        "equals",
        &Value::Int(7),
        Expectation::Value(Value::Int(7)),
    ));
    assert!(!resolve_and_match(
        registry,
        "equals",
        &Value::Int(7),
        Expectation::Value(Value::Int(8)),
    ));
    assert!(resolve_and_match(
        registry,
        "equals",
        &Value::from("spam"),
        Expectation::Value(Value::from("spam")),
    ));
}

#[test]
fn identity_distinguishes_equal_but_distinct_objects() {
    let registry = default_registry();
    let object = Value::list(["spam"]);
    let equal_but_distinct = Value::list(["spam"]);

    assert!(resolve_and_match(
        registry,
        "is_identical_to",
        &object,
        Expectation::Value(object.clone()),
    ));
    assert!(!resolve_and_match(
        registry,
        "is_identical_to",
        &equal_but_distinct,
        Expectation::Value(object.clone()),
    ));
    // The same two values are equal by value.
    assert!(resolve_and_match(
        registry,
        "equals",
        &equal_but_distinct,
        Expectation::Value(object),
    ));
}

#[test]
fn is_a_uses_exact_kind_semantics() {
    let registry = default_registry();
    assert!(resolve_and_match(
        registry,
        "is_a",
        &Value::Int(7),
        Expectation::Kind(Kind::Int),
    ));
    assert!(!resolve_and_match(
        registry,
        "is_a",
        &Value::Int(7),
        Expectation::Kind(Kind::Float),
    ));
    // No hierarchy leniency: a bool is not an int.
    assert!(!resolve_and_match(
        registry,
        "is_a",
        &Value::Bool(true),
        Expectation::Kind(Kind::Int),
    ));
    assert!(resolve_and_match(
        registry,
        "is_a",
        &Value::Float(7.2),
        Expectation::Kind(Kind::Float),
    ));
}

#[test]
fn contains_tests_membership() {
    let registry = default_registry();
    let actual = Value::list(["spam", "eggs"]);

    assert!(resolve_and_match(
        registry,
        "contains",
        &actual,
        Expectation::Value(Value::from("spam")),
    ));
    assert!(!resolve_and_match(
        registry,
        "contains",
        &actual,
        Expectation::Value(Value::from("bacon")),
    ));
}

#[test]
fn contains_delegates_to_supplementary_matchers() {
    let registry = default_registry();
    let actual = Value::list(["spam", "eggs"]);

    // Only one of the two is present, which satisfies any_of.
    assert!(resolve_and_match(
        registry,
        "contains",
        &actual,
        Expectation::Matcher(any_of(["spam", "bacon"])),
    ));
    // Bacon is missing, which fails all_of.
    assert!(!resolve_and_match(
        registry,
        "contains",
        &actual,
        Expectation::Matcher(all_of(["spam", "bacon"])),
    ));
}

#[test]
fn contains_works_over_tuples() {
    let registry = default_registry();
    let actual = Value::tuple(["spam", "eggs"]);
    assert!(resolve_and_match(
        registry,
        "contains",
        &actual,
        Expectation::Value(Value::from("eggs")),
    ));
    assert!(resolve_and_match(
        registry,
        "contains",
        &actual,
        Expectation::Matcher(all_of(["spam", "eggs"])),
    ));
}

#[test]
fn emptiness_covers_sequences_and_strings() {
    let registry = default_registry();

    assert!(resolve_and_match(
        registry,
        "is_empty",
        &Value::list(Vec::<Value>::new()),
        Expectation::None,
    ));
    assert!(resolve_and_match(
        registry,
        "is_empty",
        &Value::from(""),
        Expectation::None,
    ));
    assert!(!resolve_and_match(
        registry,
        "is_empty",
        &Value::list([1]),
        Expectation::None,
    ));

    assert!(!resolve_and_match(
        registry,
        "is_not_empty",
        &Value::from(""),
        Expectation::None,
    ));
    assert!(resolve_and_match(
        registry,
        "is_not_empty",
        &Value::list([1]),
        Expectation::None,
    ));
    assert!(resolve_and_match(
        registry,
        "is_not_empty",
        &Value::from("spam"),
        Expectation::None,
    ));
}

#[test]
fn describe_reports_the_mismatch() {
    let registry = default_registry();
    let actual = Value::list(["spam", "eggs"]);

    let check = registry
        .resolve("contains", &actual, Expectation::Value(Value::from("bacon")))
        .unwrap();
    assert!(!check.matches(&actual));
    assert_eq!(
        check.describe(&actual),
        "'['spam', 'eggs']' does not contain 'bacon'"
    );

    let check = registry
        .resolve("equals", &Value::Int(8), Expectation::Value(Value::Int(7)))
        .unwrap();
    assert_eq!(check.describe(&Value::Int(8)), "Actual '8' does not equal expected '7'");

    let check = registry
        .resolve("is_a", &Value::from("7"), Expectation::Kind(Kind::Int))
        .unwrap();
    assert_eq!(
        check.describe(&Value::from("7")),
        "'7' of type str is not of expected type int"
    );
}

#[test]
fn values_built_from_json_flow_through_checks() {
    let registry = default_registry();
    let actual = Value::from(serde_json::json!(["spam", "eggs"]));

    assert!(resolve_and_match(
        registry,
        "contains",
        &actual,
        Expectation::Value(Value::from("spam")),
    ));
    assert!(resolve_and_match(
        registry,
        "is_a",
        &actual,
        Expectation::Kind(Kind::List),
    ));
}
