//! Builder for constructing configurations.

use crate::builder::error::BuildError;
use crate::builder::state::StateBuilder;
use crate::core::{Configuration, StateDefinition, StateId};
use indexmap::IndexMap;

/// Builder for constructing configurations with a fluent API.
///
/// # Example
///
/// ```rust
/// use rewind::builder::{ConfigurationBuilder, StateBuilder};
///
/// let config = ConfigurationBuilder::new()
///     .initial("draft")
///     .state(StateBuilder::new("draft").on("submit", "review"))?
///     .state(StateBuilder::new("review").on("approve", "published").on("reject", "draft"))?
///     .state(StateBuilder::new("published"))?
///     .build()?;
///
/// assert_eq!(config.states.len(), 3);
/// # Ok::<(), rewind::builder::BuildError>(())
/// ```
pub struct ConfigurationBuilder {
    initial: Option<StateId>,
    states: IndexMap<StateId, StateDefinition>,
}

impl ConfigurationBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: IndexMap::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateId>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Add a state using a builder.
    /// Returns an error if the builder fails or the state already exists.
    pub fn state(self, builder: StateBuilder) -> Result<Self, BuildError> {
        let (id, definition) = builder.build()?;
        self.add_state(id, definition)
    }

    /// Add a pre-built state definition.
    pub fn add_state(
        mut self,
        id: impl Into<StateId>,
        definition: StateDefinition,
    ) -> Result<Self, BuildError> {
        let id = id.into();
        if self.states.contains_key(&id) {
            return Err(BuildError::DuplicateState(id));
        }
        self.states.insert(id, definition);
        Ok(self)
    }

    /// Build the configuration.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Configuration, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        Ok(Configuration {
            initial,
            states: self.states,
        })
    }
}

impl Default for ConfigurationBuilder {
    fn default() -> Self {
        Self::new()
    }
}
