//! Core data model of the state machine.
//!
//! This module contains the plain data the engine works on:
//! - State and event identifiers
//! - The declarative `Configuration` of states and transitions
//! - The linear undo/redo `History`
//!
//! Nothing here knows about a running machine; see [`crate::machine`].

mod config;
mod error;
mod history;
mod ids;

pub use config::{Configuration, StateDefinition};
pub use error::ConfigError;
pub use history::{History, HistoryEntry, HistoryError};
pub use ids::{EventId, StateId};
