//! Errors raised by state machine operations.

use crate::core::{EventId, StateId};
use thiserror::Error;

/// Errors that can occur when moving the machine between states.
///
/// Every failing operation leaves the machine exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError {
    /// `change_state` was asked to enter a state the configuration does not define
    #[error("State '{state}' is not defined in the configuration")]
    InvalidState { state: StateId },

    /// `trigger` fired an event the current state has no transition for
    #[error("No transition for event '{event}' from state '{from}'")]
    InvalidTransition { event: EventId, from: StateId },
}
