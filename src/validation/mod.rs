//! Validation of machine configurations.
//!
//! [`StateMachine::new`](crate::machine::StateMachine::new) takes any
//! configuration as-is. This module is the opt-in way to check one first.
//! Checks use Stillwater's `Validation` type, so every violation is
//! collected instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use rewind::core::{Configuration, StateDefinition};
//! use rewind::validation::{ConfigRules, ConfigViolation};
//! use stillwater::validation::Validation;
//!
//! let config = Configuration::new("missing")
//!     .with_state("a", StateDefinition::new().with_transition("go", "nowhere"));
//!
//! match ConfigRules::strict().enforce(&config) {
//!     Validation::Failure(errors) => assert_eq!(errors.len(), 2),
//!     Validation::Success(_) => unreachable!(),
//! }
//! ```

pub mod rules;
pub mod violations;

pub use rules::{ConfigCheck, ConfigRules};
pub use violations::ConfigViolation;
