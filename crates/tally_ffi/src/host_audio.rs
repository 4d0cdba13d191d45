//! Audio backend that defers playback to the Flutter host.
//!
//! Rust cannot reach the platform audio device from here; each requested
//! play is counted and handed back in the next response so Dart plays the
//! asset that many times.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use tally_core::{AudioBackend, PlaybackHandle, SoundResult};

#[derive(Debug, Clone, Default)]
pub(crate) struct HostAudio {
    pending: Arc<AtomicU32>,
}

impl HostAudio {
    /// Returns and clears the number of plays requested since the last call.
    pub(crate) fn take_pending(&self) -> u32 {
        self.pending.swap(0, Ordering::AcqRel)
    }
}

pub(crate) struct HostHandle {
    pending: Arc<AtomicU32>,
}

impl AudioBackend for HostAudio {
    type Handle = HostHandle;

    fn open(&self, _asset: &str) -> SoundResult<Self::Handle> {
        Ok(HostHandle {
            pending: Arc::clone(&self.pending),
        })
    }
}

impl PlaybackHandle for HostHandle {
    fn seek_to_start(&mut self) -> SoundResult<()> {
        Ok(())
    }

    fn play(&mut self) -> SoundResult<()> {
        self.pending.fetch_add(1, Ordering::AcqRel);
        Ok(())
    }

    fn pause(&mut self) {}

    fn clear_source(&mut self) {}
}
