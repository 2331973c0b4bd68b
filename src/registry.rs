//! Check-name registry and call-time dispatch.
//!
//! The registry owns the mapping from a check name (`"contains"`,
//! `"equals"`, ...) to the matcher implementations registered under it.
//! Several implementations may share one name as long as they accept
//! different value shapes; [`Registry::resolve`] picks the first candidate,
//! in registration order, whose acceptance predicate is satisfied by the
//! actual value, then constructs it with the call's expectation payload.
//!
//! [`Registry::builtin`] performs the whole built-in registration up front,
//! so a registry is immutable from the evaluator's point of view once
//! construction returns. The process-wide [`default_registry`] is built
//! exactly once and safe to share across test threads.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::{debug, warn};

use crate::matchers::{object, sequence, Check, Expectation};
use crate::types::{CheckError, Value};


type AcceptsFn = fn(&Value) -> bool;
type BuildFn = fn(Expectation) -> Result<Check, CheckError>;

/// One candidate implementation under a check name: the shape predicate
/// consulted during dispatch, paired with the constructor invoked once the
/// candidate is selected.
#[derive(Clone, Copy)]
pub struct Registration {
    accepts: AcceptsFn,
    build: BuildFn,
}

impl Registration {
    pub fn new(accepts: AcceptsFn, build: BuildFn) -> Self {
        Self { accepts, build }
    }

    /// Whether this candidate applies to the runtime shape of `actual`.
    pub fn accepts(&self, actual: &Value) -> bool {
        (self.accepts)(actual)
    }
}

/// Mapping from check name to the matcher implementations registered under
/// it, in registration order.
#[derive(Default)]
pub struct Registry {
    checks: HashMap<String, Vec<Registration>>,
}

impl Registry {
    /// A registry with no checks registered.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A registry holding every built-in matcher, registered in a fixed
    /// order: the any-object family first, then the sequence family.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        object::register(&mut registry);
        sequence::register(&mut registry);
        registry
    }

    /// Registers a candidate implementation under `name`.
    ///
    /// Additive: existing candidates stay, and re-registering the same pair
    /// leaves lookup intact — the earlier registration keeps winning.
    pub fn register(&mut self, name: impl Into<String>, registration: Registration) {
        self.checks.entry(name.into()).or_default().push(registration);
    }

    /// Whether any implementation is registered under `name`.
    pub fn contains_check(&self, name: &str) -> bool {
        self.checks.contains_key(name)
    }

    /// Registered check names, sorted. The fluent layer uses this to decide
    /// which method names to expose.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.checks.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Resolves `name` against the runtime shape of `actual` and constructs
    /// the selected matcher with `expectation`.
    ///
    /// Pure lookup plus a single dispatch: the first candidate in
    /// registration order whose `accepts` is satisfied wins. Overlapping
    /// acceptance between candidates is legal; order breaks the tie.
    pub fn resolve(
        &self,
        name: &str,
        actual: &Value,
        expectation: Expectation,
    ) -> Result<Check, CheckError> {
        let Some(candidates) = self.checks.get(name) else {
            warn!(check = name, kind = %actual.kind(), "unknown_check");
            return Err(CheckError::UnknownCheck(name.to_string()));
        };

        let selected = candidates
            .iter()
            .enumerate()
            .find(|(_, registration)| registration.accepts(actual));
        let Some((candidate, registration)) = selected else {
            warn!(
                check = name,
                kind = %actual.kind(),
                candidates = candidates.len(),
                "no_accepting_matcher"
            );
            return Err(CheckError::NoAcceptingMatcher {
                name: name.to_string(),
                kind: actual.kind(),
            });
        };

        debug!(check = name, kind = %actual.kind(), candidate, "check_resolved");
        (registration.build)(expectation)
    }
}

/// The process-wide registry of built-in checks, initialized on first use
/// and never mutated afterwards.
pub fn default_registry() -> &'static Registry {
    static DEFAULT: Lazy<Registry> = Lazy::new(Registry::builtin);
    &DEFAULT
}
