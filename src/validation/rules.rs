//! Validation rules for configurations.

use crate::core::{Configuration, StateId};
use crate::validation::violations::ConfigViolation;
use std::collections::{HashSet, VecDeque};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for validation check functions
pub type ConfigCheck =
    Box<dyn Fn(&Configuration) -> Validation<(), NonEmptyVec<ConfigViolation>> + Send + Sync>;

/// Set of checks run against a [`Configuration`].
///
/// Every enabled check runs, and all violations are reported together.
///
/// # Example
///
/// ```rust
/// use rewind::core::{Configuration, StateDefinition};
/// use rewind::validation::ConfigRules;
///
/// let config = Configuration::new("start")
///     .with_state("start", StateDefinition::new().with_transition("go", "end"))
///     .with_state("end", StateDefinition::new())
///     .with_state("orphan", StateDefinition::new());
///
/// assert!(ConfigRules::strict().enforce(&config).is_success());
/// assert!(ConfigRules::strict().forbid_unreachable().enforce(&config).is_failure());
/// ```
#[derive(Default)]
pub struct ConfigRules {
    initial_defined: bool,
    known_targets: bool,
    non_empty: bool,
    reachable: bool,
    custom_checks: Vec<ConfigCheck>,
}

impl ConfigRules {
    /// Rules with no checks enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state defined, every transition target defined, and at
    /// least one state present.
    pub fn strict() -> Self {
        Self::new()
            .require_initial_defined()
            .require_known_targets()
            .require_states()
    }

    /// The initial state must be a defined state
    pub fn require_initial_defined(mut self) -> Self {
        self.initial_defined = true;
        self
    }

    /// Every transition must target a defined state
    pub fn require_known_targets(mut self) -> Self {
        self.known_targets = true;
        self
    }

    /// At least one state must be defined
    pub fn require_states(mut self) -> Self {
        self.non_empty = true;
        self
    }

    /// Every defined state must be reachable from the initial state
    pub fn forbid_unreachable(mut self) -> Self {
        self.reachable = true;
        self
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&Configuration) -> Validation<(), NonEmptyVec<ConfigViolation>>
            + Send
            + Sync
            + 'static,
    {
        self.custom_checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&Configuration) -> bool + Send + Sync + 'static,
    {
        let check = move |config: &Configuration| {
            if predicate(config) {
                Validation::success(())
            } else {
                Validation::fail(ConfigViolation::CustomCheckFailed {
                    message: error_msg.clone(),
                })
            }
        };
        self.custom_checks.push(Box::new(check));
        self
    }

    /// Enforce all rules, accumulating ALL violations.
    /// Returns Validation::Success(()) if all checks pass.
    /// Returns Validation::Failure with ALL violations if any fail.
    pub fn enforce(&self, config: &Configuration) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        if self.non_empty && config.states.is_empty() {
            checks.push(Validation::fail(ConfigViolation::NoStates));
        }

        if self.initial_defined && !config.contains_state(config.initial.as_str()) {
            checks.push(Validation::fail(ConfigViolation::UnknownInitialState {
                initial: config.initial.clone(),
            }));
        }

        if self.known_targets {
            for (state, definition) in &config.states {
                for (event, target) in &definition.transitions {
                    if !config.contains_state(target.as_str()) {
                        checks.push(Validation::fail(ConfigViolation::UnknownTarget {
                            state: state.clone(),
                            event: event.clone(),
                            target: target.clone(),
                        }));
                    }
                }
            }
        }

        if self.reachable {
            let reached = reachable_from(config, &config.initial);
            for state in config.states.keys() {
                if !reached.contains(state) {
                    checks.push(Validation::fail(ConfigViolation::UnreachableState {
                        state: state.clone(),
                    }));
                }
            }
        }

        for check_fn in &self.custom_checks {
            checks.push(check_fn(config));
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

/// Breadth-first walk of the transition tables starting at `start`.
fn reachable_from<'a>(config: &'a Configuration, start: &'a StateId) -> HashSet<&'a StateId> {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(state) = queue.pop_front() {
        let Some(definition) = config.state(state.as_str()) else {
            continue;
        };
        for target in definition.transitions.values() {
            if seen.insert(target) {
                queue.push_back(target);
            }
        }
    }

    seen
}
