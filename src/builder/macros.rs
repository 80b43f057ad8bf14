//! Macros for ergonomic configuration construction.

/// Declare a [`Configuration`](crate::core::Configuration) inline.
///
/// State and event names are identifiers and become their own string ids.
/// States appear in the configuration in the order they are written. A
/// state written twice keeps its last definition.
///
/// # Example
///
/// ```
/// use rewind::fsm_config;
///
/// let config = fsm_config! {
///     initial: idle,
///     idle { run => running },
///     running { stop => idle, pause => paused },
///     paused { run => running },
/// };
///
/// assert_eq!(config.initial, "idle");
/// assert_eq!(config.target("running", "pause").unwrap(), "paused");
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:ident
        $(,
            $state:ident { $($event:ident => $target:ident),* $(,)? }
        )* $(,)?
    ) => {
        $crate::core::Configuration::new(stringify!($initial))
        $(
            .with_state(
                stringify!($state),
                $crate::core::StateDefinition::new()
                $(
                    .with_transition(stringify!($event), stringify!($target))
                )*,
            )
        )*
    };
}
