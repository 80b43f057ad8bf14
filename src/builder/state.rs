//! Builder for a single state and its transitions.

use crate::builder::error::BuildError;
use crate::core::{EventId, StateDefinition, StateId};

/// Builder for one state's transition table.
pub struct StateBuilder {
    id: StateId,
    transitions: Vec<(EventId, StateId)>,
}

impl StateBuilder {
    /// Start describing the state `id`.
    pub fn new(id: impl Into<StateId>) -> Self {
        Self {
            id: id.into(),
            transitions: Vec::new(),
        }
    }

    /// Move to `target` when `event` fires in this state.
    pub fn on(mut self, event: impl Into<EventId>, target: impl Into<StateId>) -> Self {
        self.transitions.push((event.into(), target.into()));
        self
    }

    /// Build the state. Fails if an event was given two targets.
    pub fn build(self) -> Result<(StateId, StateDefinition), BuildError> {
        let mut definition = StateDefinition::new();
        for (event, target) in self.transitions {
            if definition.handles(event.as_str()) {
                return Err(BuildError::DuplicateTransition {
                    state: self.id,
                    event,
                });
            }
            definition.transitions.insert(event, target);
        }
        Ok((self.id, definition))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_transition_table_in_order() {
        let (id, definition) = StateBuilder::new("running")
            .on("stop", "idle")
            .on("pause", "paused")
            .build()
            .unwrap();

        assert_eq!(id, "running");
        let events: Vec<&str> = definition.transitions.keys().map(|e| e.as_str()).collect();
        assert_eq!(events, vec!["stop", "pause"]);
        assert_eq!(definition.target("pause").unwrap(), "paused");
    }

    #[test]
    fn state_without_transitions_builds() {
        let (_, definition) = StateBuilder::new("done").build().unwrap();
        assert!(definition.transitions.is_empty());
    }

    #[test]
    fn duplicate_event_is_rejected() {
        let result = StateBuilder::new("idle")
            .on("run", "running")
            .on("run", "sprinting")
            .build();

        assert_eq!(
            result.unwrap_err(),
            BuildError::DuplicateTransition {
                state: StateId::from("idle"),
                event: EventId::from("run"),
            }
        );
    }
}
