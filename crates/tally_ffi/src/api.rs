//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the counter widget lifecycle and actions to Dart via FRB.
//! - Keep one widget session per process, mirroring one mounted component.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Every counter call returns a full envelope so Dart can re-render
//!   without extra round trips.

use crate::host_audio::HostAudio;
use log::warn;
use std::sync::Mutex;
use tally_core::{
    core_version as core_version_inner, init_logging as init_logging_inner,
    open_configured_store, parse_counter_action, CounterAction, CounterWidget,
    SqliteKeyValueStore, TallyConfig,
};

type Session = CounterWidget<SqliteKeyValueStore, HostAudio>;

static SESSION: Mutex<Option<Session>> = Mutex::new(None);

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One control as the Flutter view should render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterControl {
    /// Action id to pass back into `counter_dispatch`.
    pub action: String,
    pub caption: String,
    /// Semantics label for screen readers.
    pub label: String,
}

/// Response envelope for every counter call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterResponse {
    pub ok: bool,
    /// Human-readable diagnostics; empty on success.
    pub message: String,
    pub count: u64,
    pub sound_enabled: bool,
    pub display: String,
    pub controls: Vec<CounterControl>,
    /// How many clicks Dart must play for this call.
    pub click_requests: u32,
    /// Asset Dart should play for each click request.
    pub click_asset: String,
}

impl CounterResponse {
    fn from_session(session: &Session) -> Self {
        let view = session.view();
        Self {
            ok: true,
            message: String::new(),
            count: session.count(),
            sound_enabled: session.sound_enabled(),
            display: view.display,
            controls: view
                .controls
                .into_iter()
                .map(|control| CounterControl {
                    action: control.action.as_str().to_string(),
                    caption: control.caption,
                    label: control.label,
                })
                .collect(),
            click_requests: session.audio().take_pending(),
            click_asset: session.click_asset().to_string(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            count: 0,
            sound_enabled: true,
            display: String::new(),
            controls: Vec::new(),
            click_requests: 0,
            click_asset: String::new(),
        }
    }
}

/// Mounts the counter: opens the configured store and hydrates state.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Idempotent while mounted; the store is read only on the first call.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn counter_mount() -> CounterResponse {
    let mut guard = match SESSION.lock() {
        Ok(guard) => guard,
        Err(_) => return CounterResponse::failure("counter_mount failed: session lock poisoned"),
    };

    if guard.is_none() {
        match open_session() {
            Ok(session) => *guard = Some(session),
            Err(err) => return CounterResponse::failure(format!("counter_mount failed: {err}")),
        }
    }

    match guard.as_mut() {
        Some(session) => {
            session.mount();
            CounterResponse::from_session(session)
        }
        None => CounterResponse::failure("counter_mount failed: session missing"),
    }
}

/// Applies an action id (`increment|decrement|reset|toggle_sound`).
///
/// # FFI contract
/// - Sync call; writes through to the store before returning.
/// - Fails when the counter is not mounted or the id is unknown.
#[flutter_rust_bridge::frb(sync)]
pub fn counter_dispatch(action: String) -> CounterResponse {
    match parse_counter_action(action.as_str()) {
        Ok(action) => dispatch(action),
        Err(err) => CounterResponse::failure(format!("counter_dispatch failed: {err}")),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn counter_increment() -> CounterResponse {
    dispatch(CounterAction::Increment)
}

#[flutter_rust_bridge::frb(sync)]
pub fn counter_decrement() -> CounterResponse {
    dispatch(CounterAction::Decrement)
}

#[flutter_rust_bridge::frb(sync)]
pub fn counter_reset() -> CounterResponse {
    dispatch(CounterAction::Reset)
}

#[flutter_rust_bridge::frb(sync)]
pub fn counter_toggle_sound() -> CounterResponse {
    dispatch(CounterAction::ToggleSound)
}

/// Returns current state without applying any action.
#[flutter_rust_bridge::frb(sync)]
pub fn counter_view() -> CounterResponse {
    with_session("counter_view", |session| CounterResponse::from_session(session))
}

/// Releases the click preload and drops the session.
///
/// # FFI contract
/// - Returns empty string on success, error message otherwise.
/// - Unmounting when nothing is mounted succeeds.
#[flutter_rust_bridge::frb(sync)]
pub fn counter_unmount() -> String {
    let mut guard = match SESSION.lock() {
        Ok(guard) => guard,
        Err(_) => return "counter_unmount failed: session lock poisoned".to_string(),
    };
    if let Some(mut session) = guard.take() {
        session.unmount();
    }
    String::new()
}

fn open_session() -> Result<Session, String> {
    let config = TallyConfig::from_env().map_err(|err| err.to_string())?;
    let store = open_configured_store(&config).map_err(|err| err.to_string())?;
    Ok(CounterWidget::new(
        store,
        HostAudio::default(),
        config.click_asset,
    ))
}

fn dispatch(action: CounterAction) -> CounterResponse {
    with_session(action.as_str(), |session| {
        session.dispatch(action);
        CounterResponse::from_session(session)
    })
}

fn with_session(
    operation: &str,
    f: impl FnOnce(&mut Session) -> CounterResponse,
) -> CounterResponse {
    let mut guard = match SESSION.lock() {
        Ok(guard) => guard,
        Err(_) => {
            return CounterResponse::failure(format!("{operation} failed: session lock poisoned"))
        }
    };
    match guard.as_mut() {
        Some(session) => f(session),
        None => {
            warn!("event=ffi_call module=ffi status=error op={operation} error_code=not_mounted");
            CounterResponse::failure(format!(
                "{operation} failed: counter is not mounted; call counter_mount first"
            ))
        }
    }
}
