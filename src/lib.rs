//! # attest
//!
//! ## Purpose
//!
//! `attest` is the registry and dispatch core of an extensible assertion
//! framework. Callers name a check (`"contains"`, `"equals"`, `"is_a"`, ...)
//! and hand over an actual value; the registry decides which registered
//! matcher implementation applies to the value's runtime shape, constructs
//! it with the call's expectation payload, and the resulting matcher
//! evaluates to a boolean with a human-readable failure description on
//! mismatch.
//!
//! The fluent `assert_that` wrapper that turns check names into methods, and
//! the rendering of failures to a test runner, live outside this crate; they
//! consume [`Registry::resolve`] and the [`Matcher`] contract.
//!
//! ## Core Types
//!
//! - [`Value`]: dynamic runtime value (none, bool, int, float, str, list,
//!   tuple, map) with structural equality, object identity, and a [`Kind`]
//!   type tag.
//! - [`Matcher`]: the contract every matcher satisfies — `accepts` (does
//!   this implementation apply to the value's shape), `matches`, `describe`.
//! - [`Registry`]: check name → ordered candidate implementations; resolves
//!   the first candidate accepting the actual value, in registration order.
//! - [`Expectation`]: constructor payload carried from the call site — no
//!   payload, a plain value, a kind, or a nested matcher.
//! - [`Composite`]: supplementary combinators ([`any_of`], [`all_of`])
//!   nested as the expectation of `contains` rather than registered under
//!   their own names.
//!
//! ## Example Usage
//!
//! ```
//! use attest::{any_of, Expectation, Matcher, Registry, Value};
//!
//! let registry = Registry::builtin();
//! let actual = Value::list(["spam", "eggs"]);
//!
//! let check = registry.resolve("contains", &actual, Expectation::Value(Value::from("spam")))?;
//! assert!(check.matches(&actual));
//!
//! let check = registry.resolve(
//!     "contains",
//!     &actual,
//!     Expectation::Matcher(any_of(["toast", "bacon"])),
//! )?;
//! assert!(!check.matches(&actual));
//! assert_eq!(
//!     check.describe(&actual),
//!     "'['spam', 'eggs']' does not contain any of 'toast, bacon'"
//! );
//! # Ok::<(), attest::CheckError>(())
//! ```
//!
//! ## Extending
//!
//! Downstream crates implement [`Matcher`] and register a
//! [`Registration`](registry::Registration) whose constructor returns
//! [`Check::Custom`]; several implementations may share one name as long as
//! their acceptance predicates cover different shapes. Registration happens
//! while the registry is being built, typically once at process startup —
//! after that every assertion call is a read-only lookup, so sharing
//! [`default_registry`] across test threads is safe.

pub mod matchers;
pub mod registry;
pub mod types;

pub use crate::matchers::{
    all_of, any_of, shape, Check, Composite, ContainsExpected, ContainsMatcher, EqualsMatcher,
    Expectation, IsAMatcher, IsEmptyMatcher, IsIdenticalToMatcher, IsNotEmptyMatcher, Matcher,
};
pub use crate::registry::{default_registry, Registration, Registry};
pub use crate::types::{CheckError, Kind, Value};
