//! Counter widget state machine.
//!
//! # Invariants
//! - State before `mount()` is the `(0, true)` placeholder.
//! - Actions before `mount()` update memory only; hydration then replaces
//!   the placeholder, so nothing unhydrated is ever written back.
//! - Store and playback failures are logged and never change state.

use crate::model::counter::{CounterAction, CounterState, Transition};
use crate::repo::kv_repo::KeyValueStore;
use crate::repo::snapshot::{
    load_snapshot, write_count, write_sound_enabled, COUNTER_VALUE_KEY, SOUND_ENABLED_KEY,
};
use crate::sound::{AudioBackend, ClickPlayer};
use crate::widget::view::CounterView;
use log::{debug, error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Constructed,
    Mounted,
    Unmounted,
}

/// One counter widget bound to a store and an audio backend.
pub struct CounterWidget<S: KeyValueStore, A: AudioBackend> {
    state: CounterState,
    store: S,
    click: ClickPlayer<A>,
    lifecycle: Lifecycle,
}

impl<S: KeyValueStore, A: AudioBackend> CounterWidget<S, A> {
    /// Constructs the widget in its placeholder state without touching the store.
    pub fn new(store: S, audio: A, click_asset: impl Into<String>) -> Self {
        Self {
            state: CounterState::default(),
            store,
            click: ClickPlayer::new(audio, click_asset),
            lifecycle: Lifecycle::Constructed,
        }
    }

    /// Post-mount phase: hydrates from the store and preloads the click.
    ///
    /// Calling `mount` on an already mounted widget is a no-op. A widget
    /// mounted again after `unmount` hydrates again.
    pub fn mount(&mut self) -> CounterState {
        if self.lifecycle == Lifecycle::Mounted {
            return self.state;
        }

        // Pre-mount changes are discarded even when the store is unreadable.
        self.state = CounterState::default();
        load_snapshot(&self.store).apply_to(&mut self.state);
        self.click.preload();
        self.lifecycle = Lifecycle::Mounted;

        info!(
            "event=counter_mount module=widget status=ok count={} sound_enabled={}",
            self.state.count, self.state.sound_enabled
        );
        self.state
    }

    /// Releases the preload handle. State stays readable.
    pub fn unmount(&mut self) {
        if self.lifecycle != Lifecycle::Mounted {
            return;
        }
        self.click.release();
        self.lifecycle = Lifecycle::Unmounted;
        info!(
            "event=counter_unmount module=widget status=ok count={}",
            self.state.count
        );
    }

    pub fn increment(&mut self) -> CounterState {
        self.dispatch(CounterAction::Increment)
    }

    pub fn decrement(&mut self) -> CounterState {
        self.dispatch(CounterAction::Decrement)
    }

    pub fn reset(&mut self) -> CounterState {
        self.dispatch(CounterAction::Reset)
    }

    pub fn toggle_sound(&mut self) -> CounterState {
        self.dispatch(CounterAction::ToggleSound)
    }

    /// Applies one user action: transition, write-through, click feedback.
    pub fn dispatch(&mut self, action: CounterAction) -> CounterState {
        let transition = self.state.apply(action);
        debug!(
            "event=counter_action module=widget status=ok action={} count={} sound_enabled={} changed={}",
            action,
            transition.after.count,
            transition.after.sound_enabled,
            transition.changed()
        );

        if self.lifecycle == Lifecycle::Mounted {
            self.persist(&transition);
        }
        if action.touches_count() {
            self.play_click_sound();
        }
        self.state
    }

    /// Plays the click when sound is enabled; otherwise does nothing.
    pub fn play_click_sound(&self) {
        if !self.state.sound_enabled {
            return;
        }
        self.click.play();
    }

    pub fn state(&self) -> CounterState {
        self.state
    }

    pub fn count(&self) -> u64 {
        self.state.count
    }

    pub fn sound_enabled(&self) -> bool {
        self.state.sound_enabled
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    pub fn click_asset(&self) -> &str {
        self.click.asset()
    }

    pub fn audio(&self) -> &A {
        self.click.backend()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn view(&self) -> CounterView {
        CounterView::from_state(self.state)
    }

    fn persist(&mut self, transition: &Transition) {
        let after = transition.after;
        let (key, result) = if transition.action.touches_count() {
            (COUNTER_VALUE_KEY, write_count(&mut self.store, after.count))
        } else {
            (
                SOUND_ENABLED_KEY,
                write_sound_enabled(&mut self.store, after.sound_enabled),
            )
        };
        if let Err(err) = result {
            error!(
                "event=counter_persist module=widget status=error key={key} action={} error={err}",
                transition.action
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CounterWidget;
    use crate::repo::memory::MemoryKeyValueStore;
    use crate::sound::SilentAudio;

    fn widget() -> CounterWidget<MemoryKeyValueStore, SilentAudio> {
        CounterWidget::new(MemoryKeyValueStore::new(), SilentAudio, "/sounds/click.mp3")
    }

    #[test]
    fn actions_before_mount_are_not_persisted() {
        let mut widget = widget();
        widget.increment();
        assert_eq!(widget.count(), 1);
        assert!(widget.store().is_empty());
    }

    #[test]
    fn mount_replaces_pre_mount_changes_with_stored_state() {
        let mut widget = widget();
        widget.increment();
        widget.increment();
        let state = widget.mount();
        assert_eq!(state.count, 0);
        assert!(widget.is_mounted());
    }

    #[test]
    fn second_mount_does_not_rehydrate() {
        let mut widget = widget();
        widget.mount();
        widget.increment();
        widget.mount();
        assert_eq!(widget.count(), 1);
    }

    #[test]
    fn unmount_then_mount_hydrates_again() {
        let mut widget = widget();
        widget.mount();
        widget.increment();
        widget.unmount();
        assert!(!widget.is_mounted());
        assert_eq!(widget.mount().count, 1);
    }
}
