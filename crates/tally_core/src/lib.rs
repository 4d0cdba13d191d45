//! Core logic for the Tally counter widget.
//! Hosts (Flutter via FFI, the terminal CLI) render and forward clicks;
//! every invariant about count, sound preference and persistence lives here.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod sound;
pub mod widget;

pub use config::{ConfigError, TallyConfig};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::counter::{
    parse_counter_action, CounterAction, CounterActionError, CounterState, Transition,
};
pub use repo::kv_repo::{KeyValueStore, StoreError, StoreResult};
pub use repo::memory::MemoryKeyValueStore;
pub use repo::snapshot::{
    load_snapshot, PersistedSnapshot, COUNTER_VALUE_KEY, SOUND_ENABLED_KEY,
};
pub use repo::sqlite::SqliteKeyValueStore;
pub use sound::{AudioBackend, ClickPlayer, PlaybackHandle, SilentAudio, SoundError, SoundResult};
pub use widget::counter::CounterWidget;
pub use widget::view::{ControlView, CounterView};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Opens the SQLite store at `config.db_path`.
pub fn open_configured_store(config: &TallyConfig) -> StoreResult<SqliteKeyValueStore> {
    let conn = db::open_db(&config.db_path)?;
    SqliteKeyValueStore::try_new(conn)
}
