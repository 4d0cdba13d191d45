//! Click-sound playback seam.
//!
//! # Responsibility
//! - Abstract the host audio device behind `AudioBackend`/`PlaybackHandle`.
//! - Own the click asset lifecycle (`ClickPlayer`).
//!
//! # Invariants
//! - Playback failures never propagate into widget state.

pub mod click;

use std::error::Error;
use std::fmt::{Display, Formatter};

pub use click::{ClickPlayer, DEFAULT_CLICK_ASSET};

pub type SoundResult<T> = Result<T, SoundError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoundError {
    /// Asset could not be resolved or decoded.
    AssetUnavailable(String),
    /// Host refused playback (autoplay policy, muted device, ...).
    PlaybackRejected(String),
}

impl Display for SoundError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AssetUnavailable(asset) => write!(f, "audio asset unavailable: {asset}"),
            Self::PlaybackRejected(reason) => write!(f, "playback rejected: {reason}"),
        }
    }
}

impl Error for SoundError {}

/// Host audio facility able to open playable handles for an asset.
pub trait AudioBackend {
    type Handle: PlaybackHandle;

    fn open(&self, asset: &str) -> SoundResult<Self::Handle>;
}

/// One playable instance of an asset.
pub trait PlaybackHandle {
    /// Hints the host to fetch/decode ahead of the first play.
    fn preload(&mut self) -> SoundResult<()> {
        Ok(())
    }

    fn seek_to_start(&mut self) -> SoundResult<()>;

    fn play(&mut self) -> SoundResult<()>;

    fn pause(&mut self);

    /// Detaches the asset so the host can free decode buffers.
    fn clear_source(&mut self);
}

/// Backend for hosts without an audio device.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

#[derive(Debug, Clone, Copy, Default)]
pub struct SilentHandle;

impl AudioBackend for SilentAudio {
    type Handle = SilentHandle;

    fn open(&self, _asset: &str) -> SoundResult<Self::Handle> {
        Ok(SilentHandle)
    }
}

impl PlaybackHandle for SilentHandle {
    fn seek_to_start(&mut self) -> SoundResult<()> {
        Ok(())
    }

    fn play(&mut self) -> SoundResult<()> {
        Ok(())
    }

    fn pause(&mut self) {}

    fn clear_source(&mut self) {}
}
