//! Render surface for host front ends.
//!
//! Hosts draw pixels; this module decides what is shown and how each
//! control is labeled for assistive technology.

use crate::model::counter::{CounterAction, CounterState};
use serde::Serialize;

/// Snapshot of what the widget displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CounterView {
    /// Count rendered as decimal text.
    pub display: String,
    pub sound_enabled: bool,
    /// Controls in display order: decrement, increment, reset, sound toggle.
    pub controls: Vec<ControlView>,
}

/// One interactive control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlView {
    pub action: CounterAction,
    /// Short visible caption.
    pub caption: String,
    /// Accessible label describing what activating the control does.
    pub label: String,
}

impl CounterView {
    pub fn from_state(state: CounterState) -> Self {
        let controls = CounterAction::ALL
            .iter()
            .map(|action| ControlView {
                action: *action,
                caption: caption(*action, state.sound_enabled).to_string(),
                label: accessible_label(*action, state.sound_enabled).to_string(),
            })
            .collect();
        Self {
            display: state.count.to_string(),
            sound_enabled: state.sound_enabled,
            controls,
        }
    }

    pub fn control(&self, action: CounterAction) -> Option<&ControlView> {
        self.controls.iter().find(|control| control.action == action)
    }
}

fn caption(action: CounterAction, sound_enabled: bool) -> &'static str {
    match action {
        CounterAction::Decrement => "-",
        CounterAction::Increment => "+",
        CounterAction::Reset => "Reset",
        CounterAction::ToggleSound if sound_enabled => "Sound: on",
        CounterAction::ToggleSound => "Sound: off",
    }
}

/// Toggle labels name the current state and the resulting action.
fn accessible_label(action: CounterAction, sound_enabled: bool) -> &'static str {
    match action {
        CounterAction::Decrement => "Decrease count by one",
        CounterAction::Increment => "Increase count by one",
        CounterAction::Reset => "Reset count to zero",
        CounterAction::ToggleSound if sound_enabled => "Click sound is on; turn click sound off",
        CounterAction::ToggleSound => "Click sound is off; turn click sound on",
    }
}
