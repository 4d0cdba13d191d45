//! Terminal bell as the click sound.
//!
//! The asset path is meaningless to a terminal; every play rings BEL on
//! stderr so stdout stays clean for `--json`.

use std::io::Write;
use tally_core::{AudioBackend, PlaybackHandle, SoundError, SoundResult};

#[derive(Debug, Clone, Copy)]
pub struct TerminalBell;

pub struct BellHandle;

impl AudioBackend for TerminalBell {
    type Handle = BellHandle;

    fn open(&self, _asset: &str) -> SoundResult<Self::Handle> {
        Ok(BellHandle)
    }
}

impl PlaybackHandle for BellHandle {
    fn seek_to_start(&mut self) -> SoundResult<()> {
        Ok(())
    }

    fn play(&mut self) -> SoundResult<()> {
        let mut stderr = std::io::stderr();
        stderr
            .write_all(b"\x07")
            .and_then(|()| stderr.flush())
            .map_err(|err| SoundError::PlaybackRejected(err.to_string()))
    }

    fn pause(&mut self) {}

    fn clear_source(&mut self) {}
}
