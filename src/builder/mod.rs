//! Builder API for ergonomic configuration construction.
//!
//! This module provides fluent builders and a macro for creating
//! configurations with minimal boilerplate. Builders catch structural
//! mistakes (missing initial state, duplicate states or events); use
//! [`crate::validation`] to check that the graph itself is sound.

pub mod config;
pub mod error;
pub mod macros;
pub mod state;

pub use config::ConfigurationBuilder;
pub use error::BuildError;
pub use state::StateBuilder;

use crate::core::{Configuration, EventId, StateDefinition, StateId};

/// Create a configuration where a single event steps through `states` in
/// order and wraps around from the last state to the first.
///
/// The first state is the initial state. An empty list gives a
/// configuration with no states.
///
/// # Example
///
/// ```
/// use rewind::builder::cycle;
///
/// let config = cycle("next", ["red", "green", "yellow"]);
///
/// assert_eq!(config.initial, "red");
/// assert_eq!(config.target("yellow", "next").unwrap(), "red");
/// ```
pub fn cycle<I, S>(event: impl Into<EventId>, states: I) -> Configuration
where
    I: IntoIterator<Item = S>,
    S: Into<StateId>,
{
    let event = event.into();
    let ids: Vec<StateId> = states.into_iter().map(Into::into).collect();

    let Some(first) = ids.first() else {
        return Configuration::new("");
    };

    let mut config = Configuration::new(first.clone());
    for (position, id) in ids.iter().enumerate() {
        let next = &ids[(position + 1) % ids.len()];
        config = config.with_state(
            id.clone(),
            StateDefinition::new().with_transition(event.clone(), next.clone()),
        );
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::StateMachine;

    #[test]
    fn cycle_wraps_around() {
        let config = cycle("tick", ["a", "b", "c"]);
        let mut machine = StateMachine::new(config);

        for expected in ["b", "c", "a", "b"] {
            machine.trigger("tick").unwrap();
            assert_eq!(machine.state(), expected);
        }
    }

    #[test]
    fn single_state_cycle_loops_on_itself() {
        let config = cycle("again", ["only"]);
        assert_eq!(config.target("only", "again").unwrap(), "only");
    }

    #[test]
    fn empty_cycle_has_no_states() {
        let config = cycle("tick", Vec::<&str>::new());
        assert!(config.states.is_empty());
        assert!(config.validate().is_err());
    }
}
