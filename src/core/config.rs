//! Declarative machine configuration.
//!
//! A [`Configuration`] names the initial state and, for every state, the
//! table of events it reacts to. Both tables keep insertion order, so
//! queries over states and events are reported in the order they were
//! declared (document order when loaded from JSON).

use super::error::ConfigError;
use super::ids::{EventId, StateId};
use crate::validation::{ConfigRules, ConfigViolation};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;

/// Transition table of a single state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateDefinition {
    /// Event to target-state mapping
    #[serde(default)]
    pub transitions: IndexMap<EventId, StateId>,
}

impl StateDefinition {
    /// Create a state with no outgoing transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition, replacing any existing target for `event`.
    pub fn with_transition(
        mut self,
        event: impl Into<EventId>,
        target: impl Into<StateId>,
    ) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Target state for `event`, if this state handles it.
    pub fn target(&self, event: &str) -> Option<&StateId> {
        self.transitions.get(event)
    }

    /// Whether `event` has a transition from this state.
    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }
}

/// Static description of a machine: its states, their transitions, and
/// the state it starts in.
///
/// Construction does not check that `initial` names a defined state; use
/// [`Configuration::validate`] when that guarantee is needed.
///
/// # Example
///
/// ```rust
/// use rewind::core::{Configuration, StateDefinition};
///
/// let config = Configuration::new("idle")
///     .with_state("idle", StateDefinition::new().with_transition("run", "running"))
///     .with_state("running", StateDefinition::new().with_transition("stop", "idle"));
///
/// assert!(config.contains_state("running"));
/// assert_eq!(config.target("idle", "run").map(|s| s.as_str()), Some("running"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// State the machine starts in and returns to on reset
    pub initial: StateId,

    /// All states, in declaration order
    #[serde(default)]
    pub states: IndexMap<StateId, StateDefinition>,
}

impl Configuration {
    /// Create a configuration with no states yet.
    pub fn new(initial: impl Into<StateId>) -> Self {
        Self {
            initial: initial.into(),
            states: IndexMap::new(),
        }
    }

    /// Add a state, replacing any existing definition with the same id.
    pub fn with_state(mut self, id: impl Into<StateId>, definition: StateDefinition) -> Self {
        self.states.insert(id.into(), definition);
        self
    }

    /// Definition of a state, if it exists.
    pub fn state(&self, id: &str) -> Option<&StateDefinition> {
        self.states.get(id)
    }

    /// Whether `id` is a defined state.
    pub fn contains_state(&self, id: &str) -> bool {
        self.states.contains_key(id)
    }

    /// Target of `event` when fired from `state`.
    pub fn target(&self, state: &str, event: &str) -> Option<&StateId> {
        self.state(state).and_then(|definition| definition.target(event))
    }

    /// Parse a configuration from JSON.
    ///
    /// ```rust
    /// use rewind::core::Configuration;
    ///
    /// let config = Configuration::from_json(
    ///     r#"{"initial": "off", "states": {"off": {"transitions": {"toggle": "on"}}, "on": {}}}"#,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(config.initial, "off");
    /// assert_eq!(config.states.len(), 2);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::DeserializationFailed(e.to_string()))
    }

    /// Serialize the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))
    }

    /// Run the strict rule set: the initial state and every transition
    /// target must be defined, and at least one state must exist.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match ConfigRules::strict().enforce(self) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => Err(ConfigError::ValidationFailed {
                violations: errors.iter().cloned().collect::<Vec<ConfigViolation>>(),
            }),
        }
    }
}
