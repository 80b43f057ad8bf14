//! State machine driven by a declarative configuration.

use crate::core::{ConfigError, Configuration, EventId, History, HistoryEntry, StateId};
use crate::machine::error::MachineError;
use tracing::{debug, trace};

/// Finite-state machine with linear undo/redo.
///
/// The transition graph comes from the [`Configuration`]; the machine layers
/// its current state and a [`History`] of visited states on top of it.
///
/// # Example
///
/// ```rust
/// use rewind::fsm_config;
/// use rewind::machine::StateMachine;
///
/// let config = fsm_config! {
///     initial: idle,
///     idle { run => running },
///     running { stop => idle, pause => paused },
///     paused { run => running },
/// };
///
/// let mut machine = StateMachine::new(config);
/// machine.trigger("run").unwrap();
/// machine.trigger("pause").unwrap();
/// assert_eq!(machine.state(), "paused");
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "running");
/// assert!(machine.redo());
/// assert_eq!(machine.state(), "paused");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: Configuration,
    current: StateId,
    history: History,
}

impl StateMachine {
    /// Create a machine in the configuration's initial state.
    ///
    /// The configuration is taken as-is. An initial state missing from
    /// `config.states` only surfaces later, when `trigger` finds no
    /// transitions for it.
    pub fn new(config: Configuration) -> Self {
        let current = config.initial.clone();
        debug!(initial = %current, states = config.states.len(), "state machine created");
        Self {
            config,
            current,
            history: History::new(),
        }
    }

    /// Validate the configuration with the strict rule set, then create
    /// the machine.
    pub fn try_new(config: Configuration) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Get current state (pure)
    pub fn state(&self) -> &StateId {
        &self.current
    }

    /// Get the initial state (pure)
    pub fn initial(&self) -> &StateId {
        &self.config.initial
    }

    /// Get the configuration (pure)
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Get state history (pure)
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Move directly to `target`, recording it in the history.
    ///
    /// Any redoable entries are discarded. Fails with
    /// [`MachineError::InvalidState`] if `target` is not a defined state.
    pub fn change_state(&mut self, target: impl AsRef<str>) -> Result<(), MachineError> {
        let target = target.as_ref();
        let Some((state, _)) = self.config.states.get_key_value(target) else {
            trace!(from = %self.current, requested = target, "rejected change to undefined state");
            return Err(MachineError::InvalidState {
                state: StateId::from(target),
            });
        };

        let state = state.clone();
        self.enter(state, None);
        Ok(())
    }

    /// Fire `event` from the current state.
    ///
    /// The target comes straight from the transition table and is not
    /// checked against the defined states. Fails with
    /// [`MachineError::InvalidTransition`] if the current state has no
    /// transition for `event`.
    pub fn trigger(&mut self, event: impl AsRef<str>) -> Result<(), MachineError> {
        let event = event.as_ref();
        let found = self
            .config
            .state(self.current.as_str())
            .and_then(|definition| definition.transitions.get_key_value(event));

        let Some((event, target)) = found else {
            trace!(from = %self.current, event, "rejected event with no transition");
            return Err(MachineError::InvalidTransition {
                event: EventId::from(event),
                from: self.current.clone(),
            });
        };

        let (event, target) = (event.clone(), target.clone());
        self.enter(target, Some(event));
        Ok(())
    }

    fn enter(&mut self, target: StateId, event: Option<EventId>) {
        debug!(
            from = %self.current,
            to = %target,
            event = event.as_ref().map(EventId::as_str),
            "state changed"
        );
        self.history.record(HistoryEntry::new(target.clone(), event));
        self.current = target;
    }

    /// Return to the initial state without touching the history.
    ///
    /// The cursor stays where it was, so a following `undo` or `redo`
    /// still moves relative to the pre-reset history.
    pub fn reset(&mut self) {
        debug!(from = %self.current, to = %self.config.initial, "state machine reset");
        self.current = self.config.initial.clone();
    }

    /// List state ids in configuration order.
    ///
    /// Without an event, every state is returned. With an event, only the
    /// states that have a transition for it.
    pub fn states(&self, event: Option<&str>) -> Vec<&StateId> {
        self.config
            .states
            .iter()
            .filter(|(_, definition)| event.is_none_or(|event| definition.handles(event)))
            .map(|(id, _)| id)
            .collect()
    }

    /// Events that have a transition from the current state (pure)
    pub fn available_events(&self) -> Vec<&EventId> {
        self.config
            .state(self.current.as_str())
            .map(|definition| definition.transitions.keys().collect())
            .unwrap_or_default()
    }

    /// Whether `undo` would change anything (pure)
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether `redo` would change anything (pure)
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Step back to the previously entered state.
    ///
    /// Stepping back past the first recorded entry lands on the initial
    /// state. Returns `false`, changing nothing, if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if !self.history.step_back() {
            trace!(state = %self.current, "nothing to undo");
            return false;
        }

        let target = self
            .history
            .current()
            .map(|entry| entry.state.clone())
            .unwrap_or_else(|| self.config.initial.clone());
        debug!(from = %self.current, to = %target, index = self.history.index(), "undo");
        self.current = target;
        true
    }

    /// Replay the next undone state.
    ///
    /// Returns `false`, changing nothing, if the cursor is already on the
    /// most recent entry.
    pub fn redo(&mut self) -> bool {
        if !self.history.step_forward() {
            trace!(state = %self.current, "nothing to redo");
            return false;
        }

        if let Some(entry) = self.history.current() {
            debug!(from = %self.current, to = %entry.state, index = self.history.index(), "redo");
            self.current = entry.state.clone();
        }
        true
    }

    /// Forget all history. The current state is kept.
    pub fn clear_history(&mut self) {
        debug!(entries = self.history.len(), "history cleared");
        self.history.clear();
    }

    /// States visited on the active timeline: the initial state followed by
    /// every entry up to the cursor.
    pub fn path(&self) -> Vec<&StateId> {
        std::iter::once(&self.config.initial)
            .chain(self.history.active().iter().map(|entry| &entry.state))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateDefinition;

    fn player() -> Configuration {
        Configuration::new("idle")
            .with_state("idle", StateDefinition::new().with_transition("run", "running"))
            .with_state(
                "running",
                StateDefinition::new()
                    .with_transition("stop", "idle")
                    .with_transition("pause", "paused"),
            )
            .with_state("paused", StateDefinition::new().with_transition("run", "running"))
    }

    #[test]
    fn starts_in_initial_state() {
        let machine = StateMachine::new(player());
        assert_eq!(machine.state(), "idle");
        assert_eq!(machine.initial(), "idle");
        assert!(machine.history().is_empty());
    }

    #[test]
    fn change_state_to_defined_state() {
        let mut machine = StateMachine::new(player());
        machine.change_state("paused").unwrap();

        assert_eq!(machine.state(), "paused");
        assert_eq!(machine.history().len(), 1);
        assert!(machine.history().entries()[0].event.is_none());
    }

    #[test]
    fn change_state_rejects_undefined_state() {
        let mut machine = StateMachine::new(player());
        let result = machine.change_state("flying");

        assert_eq!(
            result,
            Err(MachineError::InvalidState {
                state: StateId::from("flying"),
            })
        );
        assert_eq!(machine.state(), "idle");
        assert!(machine.history().is_empty());
    }

    #[test]
    fn change_state_accepts_state_ids() {
        let mut machine = StateMachine::new(player());
        let target = StateId::from("running");
        machine.change_state(&target).unwrap();
        assert_eq!(machine.state(), &target);
    }

    #[test]
    fn trigger_follows_transition_table() {
        let mut machine = StateMachine::new(player());
        machine.trigger("run").unwrap();

        assert_eq!(machine.state(), "running");
        let entry = &machine.history().entries()[0];
        assert_eq!(entry.state, "running");
        assert_eq!(entry.event.as_ref().unwrap(), "run");
    }

    #[test]
    fn trigger_rejects_unknown_event() {
        let mut machine = StateMachine::new(player());
        let result = machine.trigger("pause");

        assert_eq!(
            result,
            Err(MachineError::InvalidTransition {
                event: EventId::from("pause"),
                from: StateId::from("idle"),
            })
        );
        assert_eq!(machine.state(), "idle");
        assert!(machine.history().is_empty());
    }

    #[test]
    fn trigger_trusts_transition_targets() {
        let config = Configuration::new("a")
            .with_state("a", StateDefinition::new().with_transition("jump", "limbo"));
        let mut machine = StateMachine::new(config);

        machine.trigger("jump").unwrap();
        assert_eq!(machine.state(), "limbo");

        // "limbo" has no definition, so nothing can be triggered from it.
        assert!(matches!(
            machine.trigger("jump"),
            Err(MachineError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn undefined_initial_state_is_accepted_by_new() {
        let config = Configuration::new("ghost").with_state("a", StateDefinition::new());
        let mut machine = StateMachine::new(config);

        assert_eq!(machine.state(), "ghost");
        assert!(machine.available_events().is_empty());
        assert!(matches!(
            machine.trigger("anything"),
            Err(MachineError::InvalidTransition { .. })
        ));
        machine.change_state("a").unwrap();
        assert!(machine.undo());
        assert_eq!(machine.state(), "ghost");
    }

    #[test]
    fn try_new_rejects_undefined_initial_state() {
        let config = Configuration::new("ghost").with_state("a", StateDefinition::new());
        assert!(matches!(
            StateMachine::try_new(config),
            Err(ConfigError::ValidationFailed { .. })
        ));
        assert!(StateMachine::try_new(player()).is_ok());
    }

    #[test]
    fn undo_walks_back_to_initial_state() {
        let mut machine = StateMachine::new(player());
        machine.trigger("run").unwrap();
        machine.trigger("pause").unwrap();

        assert!(machine.undo());
        assert_eq!(machine.state(), "running");
        assert!(machine.undo());
        assert_eq!(machine.state(), "idle");
        assert!(!machine.undo());
        assert_eq!(machine.state(), "idle");
    }

    #[test]
    fn redo_replays_undone_states() {
        let mut machine = StateMachine::new(player());
        machine.trigger("run").unwrap();
        machine.trigger("pause").unwrap();
        machine.undo();
        machine.undo();

        assert!(machine.redo());
        assert_eq!(machine.state(), "running");
        assert!(machine.redo());
        assert_eq!(machine.state(), "paused");
        assert!(!machine.redo());
        assert_eq!(machine.state(), "paused");
    }

    #[test]
    fn new_transition_after_undo_discards_redo() {
        let mut machine = StateMachine::new(player());
        machine.change_state("running").unwrap();
        machine.change_state("paused").unwrap();
        machine.change_state("idle").unwrap();

        assert!(machine.undo());
        machine.change_state("running").unwrap();

        assert!(!machine.redo());
        assert_eq!(machine.state(), "running");
        assert_eq!(machine.history().len(), 3);
    }

    #[test]
    fn reset_keeps_history() {
        let mut machine = StateMachine::new(player());
        machine.trigger("run").unwrap();
        machine.trigger("pause").unwrap();

        machine.reset();
        assert_eq!(machine.state(), "idle");
        assert!(machine.can_undo());
        assert!(!machine.can_redo());

        assert!(machine.undo());
        assert_eq!(machine.state(), "running");
    }

    #[test]
    fn clear_history_keeps_current_state() {
        let mut machine = StateMachine::new(player());
        machine.trigger("run").unwrap();
        machine.trigger("pause").unwrap();
        machine.undo();

        machine.clear_history();
        assert_eq!(machine.state(), "running");
        assert!(!machine.undo());
        assert!(!machine.redo());
    }

    #[test]
    fn states_lists_all_in_configuration_order() {
        let machine = StateMachine::new(player());
        assert_eq!(machine.states(None), vec!["idle", "running", "paused"]);
    }

    #[test]
    fn states_filters_by_event() {
        let machine = StateMachine::new(player());
        assert_eq!(machine.states(Some("run")), vec!["idle", "paused"]);
        assert_eq!(machine.states(Some("stop")), vec!["running"]);
        assert!(machine.states(Some("fly")).is_empty());
    }

    #[test]
    fn available_events_follow_current_state() {
        let mut machine = StateMachine::new(player());
        assert_eq!(machine.available_events(), vec!["run"]);

        machine.trigger("run").unwrap();
        assert_eq!(machine.available_events(), vec!["stop", "pause"]);
    }

    #[test]
    fn path_tracks_active_timeline() {
        let mut machine = StateMachine::new(player());
        machine.trigger("run").unwrap();
        machine.trigger("pause").unwrap();
        assert_eq!(machine.path(), vec!["idle", "running", "paused"]);

        machine.undo();
        assert_eq!(machine.path(), vec!["idle", "running"]);
    }
}
