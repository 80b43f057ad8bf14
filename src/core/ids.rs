//! Opaque identifiers for states and events.
//!
//! Both identifiers are thin wrappers around `String`. They serialize as
//! plain strings and can be looked up in maps by `&str`.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an identifier from anything string-like.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the raw identifier.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&$name> for $name {
            fn from(id: &$name) -> Self {
                id.clone()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

define_id! {
    /// Name of a state in a [`Configuration`](super::Configuration).
    ///
    /// # Example
    ///
    /// ```rust
    /// use rewind::core::StateId;
    ///
    /// let idle = StateId::from("idle");
    /// assert_eq!(idle, "idle");
    /// assert_eq!(idle.to_string(), "idle");
    /// ```
    StateId
}

define_id! {
    /// Name of an event that drives a transition.
    EventId
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn ids_compare_with_str() {
        let state = StateId::new("running");
        assert_eq!(state, "running");
        assert_eq!(state.as_str(), "running");
        assert_ne!(state, "paused");
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let event = EventId::from("pause");
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, "\"pause\"");

        let back: EventId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn ids_can_be_looked_up_by_str() {
        let mut map = HashMap::new();
        map.insert(StateId::from("idle"), 1);

        assert_eq!(map.get("idle"), Some(&1));
        assert_eq!(map.get("missing"), None);
    }
}
