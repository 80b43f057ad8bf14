//! Rewind: a declarative finite-state machine with linear undo/redo
//!
//! A machine is described by a [`Configuration`]: the initial state plus,
//! for every state, which events lead to which states. A [`StateMachine`]
//! tracks the current state on top of that configuration and keeps a
//! single-branch history of visited states, so any sequence of transitions
//! can be undone and redone.
//!
//! # Core Concepts
//!
//! - **Configuration**: Static states and event-driven transition tables
//! - **StateMachine**: Current state, transitions, and time travel
//! - **History**: Linear log of entered states with an undo/redo cursor
//! - **Validation**: Opt-in checks that report every configuration problem at once
//!
//! # Example
//!
//! ```rust
//! use rewind::{Configuration, StateMachine};
//!
//! let config = Configuration::from_json(r#"{
//!     "initial": "idle",
//!     "states": {
//!         "idle": { "transitions": { "run": "running" } },
//!         "running": { "transitions": { "stop": "idle", "pause": "paused" } },
//!         "paused": { "transitions": { "run": "running" } }
//!     }
//! }"#)?;
//!
//! let mut machine = StateMachine::new(config);
//! machine.trigger("run")?;
//! machine.trigger("pause")?;
//!
//! assert!(machine.undo());
//! assert_eq!(machine.state(), "running");
//! assert_eq!(machine.states(Some("run")), vec!["idle", "paused"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, Configuration, EventId, History, HistoryEntry, HistoryError, StateDefinition,
    StateId,
};
pub use crate::machine::{MachineError, StateMachine};
