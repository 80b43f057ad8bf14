//! The running state machine.
//!
//! [`StateMachine`] owns a [`Configuration`](crate::core::Configuration),
//! the current state, and the undo/redo history. Transitions either go
//! through the configured transition tables (`trigger`) or jump directly to
//! a defined state (`change_state`); both are recorded and can be undone.

mod error;
mod state_machine;

pub use error::MachineError;
pub use state_machine::StateMachine;
