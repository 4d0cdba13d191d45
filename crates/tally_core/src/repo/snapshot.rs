//! Persisted snapshot layout and codec.
//!
//! # Responsibility
//! - Own the two store keys and their string encodings.
//! - Decide how stored text maps back into widget state.
//!
//! # Invariants
//! - `counter-value` holds a base-10 integer; `sound-enabled` holds
//!   `true` or `false`.
//! - Malformed or unreadable stored values never reach widget state; they
//!   read as absent, per key.
//! - Negative stored counts read as `0`.

use super::kv_repo::{KeyValueStore, StoreResult};
use crate::model::counter::CounterState;
use log::{error, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store key holding the decimal count.
pub const COUNTER_VALUE_KEY: &str = "counter-value";
/// Store key holding the sound preference.
pub const SOUND_ENABLED_KEY: &str = "sound-enabled";

const MAX_LOGGED_VALUE_CHARS: usize = 32;

/// Values recovered from the store during hydration.
///
/// `None` means "keep the in-memory default", either because the key is
/// absent or because its content was unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PersistedSnapshot {
    pub count: Option<u64>,
    pub sound_enabled: Option<bool>,
}

impl PersistedSnapshot {
    /// Overlays present values onto `state`.
    pub fn apply_to(self, state: &mut CounterState) {
        if let Some(count) = self.count {
            state.count = count;
        }
        if let Some(sound_enabled) = self.sound_enabled {
            state.sound_enabled = sound_enabled;
        }
    }
}

/// Stored text that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotValueError {
    pub key: &'static str,
    pub raw: String,
}

impl Display for SnapshotValueError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "malformed value for `{}`: {:?}", self.key, self.raw)
    }
}

impl Error for SnapshotValueError {}

/// Decodes stored count text.
///
/// Surrounding whitespace is ignored and negative values clamp to `0`.
pub fn parse_count(raw: &str) -> Result<u64, SnapshotValueError> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<u64>() {
        return Ok(value);
    }
    match trimmed.parse::<i64>() {
        Ok(value) if value < 0 => Ok(0),
        _ => Err(SnapshotValueError {
            key: COUNTER_VALUE_KEY,
            raw: raw.to_string(),
        }),
    }
}

/// Decodes stored sound preference text; only `true` and `false` are accepted.
pub fn parse_sound_enabled(raw: &str) -> Result<bool, SnapshotValueError> {
    match raw.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(SnapshotValueError {
            key: SOUND_ENABLED_KEY,
            raw: raw.to_string(),
        }),
    }
}

pub fn encode_count(count: u64) -> String {
    count.to_string()
}

pub fn encode_sound_enabled(sound_enabled: bool) -> &'static str {
    if sound_enabled {
        "true"
    } else {
        "false"
    }
}

/// Reads both keys once, each independently.
///
/// A read error on one key is logged and treated as absent; it never hides
/// a valid value stored under the other key. Malformed values are logged
/// and reported as absent too.
pub fn load_snapshot<S: KeyValueStore + ?Sized>(store: &S) -> PersistedSnapshot {
    PersistedSnapshot {
        count: read_key(store, COUNTER_VALUE_KEY)
            .and_then(|raw| decode_or_warn(&raw, parse_count)),
        sound_enabled: read_key(store, SOUND_ENABLED_KEY)
            .and_then(|raw| decode_or_warn(&raw, parse_sound_enabled)),
    }
}

pub fn write_count<S: KeyValueStore + ?Sized>(store: &mut S, count: u64) -> StoreResult<()> {
    store.set(COUNTER_VALUE_KEY, &encode_count(count))
}

pub fn write_sound_enabled<S: KeyValueStore + ?Sized>(
    store: &mut S,
    sound_enabled: bool,
) -> StoreResult<()> {
    store.set(SOUND_ENABLED_KEY, encode_sound_enabled(sound_enabled))
}

fn read_key<S: KeyValueStore + ?Sized>(store: &S, key: &'static str) -> Option<String> {
    match store.get(key) {
        Ok(raw) => raw,
        Err(err) => {
            error!(
                "event=snapshot_read module=snapshot status=error key={key} error_code=store_read_failed error={err}"
            );
            None
        }
    }
}

fn decode_or_warn<T>(
    raw: &str,
    decode: impl FnOnce(&str) -> Result<T, SnapshotValueError>,
) -> Option<T> {
    match decode(raw) {
        Ok(value) => Some(value),
        Err(err) => {
            // Stored text is user-editable; cap it before logging.
            let preview = raw.chars().take(MAX_LOGGED_VALUE_CHARS).collect::<String>();
            warn!(
                "event=snapshot_decode module=snapshot status=fallback key={} raw={:?}",
                err.key, preview
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        encode_sound_enabled, load_snapshot, parse_count, parse_sound_enabled,
        PersistedSnapshot, COUNTER_VALUE_KEY, SOUND_ENABLED_KEY,
    };
    use crate::model::counter::CounterState;
    use crate::repo::kv_repo::{KeyValueStore, StoreError, StoreResult};
    use crate::repo::memory::MemoryKeyValueStore;

    /// Fails reads of one key, serves the rest from memory.
    struct BrokenKeyStore {
        broken: &'static str,
        inner: MemoryKeyValueStore,
    }

    impl KeyValueStore for BrokenKeyStore {
        fn get(&self, key: &str) -> StoreResult<Option<String>> {
            if key == self.broken {
                return Err(StoreError::Unavailable("disk read failed".to_string()));
            }
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
            self.inner.set(key, value)
        }
    }

    #[test]
    fn parse_count_accepts_padded_decimal() {
        assert_eq!(parse_count(" 42\n").expect("padded decimal"), 42);
    }

    #[test]
    fn parse_count_clamps_negative_values() {
        assert_eq!(parse_count("-3").expect("negative clamps"), 0);
    }

    #[test]
    fn parse_count_rejects_non_numeric_text() {
        let err = parse_count("seven").expect_err("text must fail");
        assert_eq!(err.key, COUNTER_VALUE_KEY);
        assert!(parse_count("").is_err());
        assert!(parse_count("1.5").is_err());
        assert!(parse_count("99999999999999999999999").is_err());
    }

    #[test]
    fn parse_sound_enabled_is_strict() {
        assert!(parse_sound_enabled("true").expect("true"));
        assert!(!parse_sound_enabled("false").expect("false"));
        assert!(parse_sound_enabled("TRUE").is_err());
        assert!(parse_sound_enabled("1").is_err());
    }

    #[test]
    fn encode_sound_enabled_matches_stored_layout() {
        assert_eq!(encode_sound_enabled(true), "true");
        assert_eq!(encode_sound_enabled(false), "false");
    }

    #[test]
    fn load_snapshot_treats_malformed_values_as_absent() {
        let store = MemoryKeyValueStore::with_entries([
            (COUNTER_VALUE_KEY, "NaN"),
            (SOUND_ENABLED_KEY, "false"),
        ]);
        let snapshot = load_snapshot(&store);
        assert_eq!(
            snapshot,
            PersistedSnapshot {
                count: None,
                sound_enabled: Some(false),
            }
        );
    }

    #[test]
    fn apply_to_keeps_defaults_for_absent_values() {
        let mut state = CounterState::default();
        PersistedSnapshot {
            count: Some(9),
            sound_enabled: None,
        }
        .apply_to(&mut state);
        assert_eq!(state.count, 9);
        assert!(state.sound_enabled);
    }

    #[test]
    fn read_error_on_one_key_keeps_the_other_value() {
        let store = BrokenKeyStore {
            broken: COUNTER_VALUE_KEY,
            inner: MemoryKeyValueStore::with_entries([
                (COUNTER_VALUE_KEY, "5"),
                (SOUND_ENABLED_KEY, "false"),
            ]),
        };

        assert_eq!(
            load_snapshot(&store),
            PersistedSnapshot {
                count: None,
                sound_enabled: Some(false),
            }
        );
    }
}
