//! Counter state and user actions.
//!
//! # Responsibility
//! - Define the `(count, sound_enabled)` pair the widget owns.
//! - Define the pure transitions for each user action.
//!
//! # Invariants
//! - `count >= 0` at all times; decrement clamps at zero.
//! - Only `toggle_sound` changes `sound_enabled`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// In-memory widget state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterState {
    pub count: u64,
    pub sound_enabled: bool,
}

impl Default for CounterState {
    /// Placeholder shown until hydration: `(0, true)`.
    fn default() -> Self {
        Self {
            count: 0,
            sound_enabled: true,
        }
    }
}

impl CounterState {
    /// Applies `action` and reports what changed.
    pub fn apply(&mut self, action: CounterAction) -> Transition {
        let before = *self;
        match action {
            CounterAction::Increment => self.count = self.count.saturating_add(1),
            CounterAction::Decrement => self.count = self.count.saturating_sub(1),
            CounterAction::Reset => self.count = 0,
            CounterAction::ToggleSound => self.sound_enabled = !self.sound_enabled,
        }
        Transition {
            action,
            before,
            after: *self,
        }
    }
}

/// Result of one state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub action: CounterAction,
    pub before: CounterState,
    pub after: CounterState,
}

impl Transition {
    /// False for no-op transitions such as decrement at zero.
    pub fn changed(&self) -> bool {
        self.before != self.after
    }
}

/// User-triggered widget action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterAction {
    Increment,
    Decrement,
    Reset,
    ToggleSound,
}

/// Stable id for `CounterAction::Increment`.
pub const ACTION_INCREMENT: &str = "increment";
/// Stable id for `CounterAction::Decrement`.
pub const ACTION_DECREMENT: &str = "decrement";
/// Stable id for `CounterAction::Reset`.
pub const ACTION_RESET: &str = "reset";
/// Stable id for `CounterAction::ToggleSound`.
pub const ACTION_TOGGLE_SOUND: &str = "toggle_sound";

impl CounterAction {
    pub const ALL: [CounterAction; 4] = [
        Self::Decrement,
        Self::Increment,
        Self::Reset,
        Self::ToggleSound,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Increment => ACTION_INCREMENT,
            Self::Decrement => ACTION_DECREMENT,
            Self::Reset => ACTION_RESET,
            Self::ToggleSound => ACTION_TOGGLE_SOUND,
        }
    }

    /// Whether this action changes (or re-asserts) the count.
    ///
    /// Count actions give click feedback; the sound toggle does not.
    pub fn touches_count(self) -> bool {
        !matches!(self, Self::ToggleSound)
    }
}

impl Display for CounterAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses an action id coming from a host (FFI, CLI).
pub fn parse_counter_action(value: &str) -> Result<CounterAction, CounterActionError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(CounterActionError::EmptyAction);
    }

    match normalized {
        ACTION_INCREMENT => Ok(CounterAction::Increment),
        ACTION_DECREMENT => Ok(CounterAction::Decrement),
        ACTION_RESET => Ok(CounterAction::Reset),
        ACTION_TOGGLE_SOUND => Ok(CounterAction::ToggleSound),
        other => Err(CounterActionError::UnsupportedAction(other.to_string())),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterActionError {
    EmptyAction,
    UnsupportedAction(String),
}

impl Display for CounterActionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAction => write!(f, "counter action must not be empty"),
            Self::UnsupportedAction(value) => write!(
                f,
                "counter action is unsupported: {value}; expected increment|decrement|reset|toggle_sound"
            ),
        }
    }
}

impl Error for CounterActionError {}
