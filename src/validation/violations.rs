//! Configuration violations.

use crate::core::{EventId, StateId};
use thiserror::Error;

/// Problems found when validating a configuration
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("Initial state '{initial}' is not defined")]
    UnknownInitialState { initial: StateId },

    #[error("Transition '{event}' from '{state}' targets undefined state '{target}'")]
    UnknownTarget {
        state: StateId,
        event: EventId,
        target: StateId,
    },

    #[error("Configuration defines no states")]
    NoStates,

    #[error("State '{state}' cannot be reached from the initial state")]
    UnreachableState { state: StateId },

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}
