//! Build errors for configuration and state builders.

use crate::core::{EventId, StateId};
use thiserror::Error;

/// Errors that can occur when building configurations and states.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states defined. Add at least one state")]
    NoStates,

    #[error("State '{0}' is defined more than once")]
    DuplicateState(StateId),

    #[error("State '{state}' defines event '{event}' more than once")]
    DuplicateTransition { state: StateId, event: EventId },
}
