//! Click asset lifecycle.
//!
//! # Invariants
//! - At most one preload handle exists per mount; it is paused and its
//!   source cleared on release.
//! - Every `play` opens a fresh handle, so rapid clicks overlap instead of
//!   queueing behind an unfinished one.

use super::{AudioBackend, PlaybackHandle, SoundResult};
use log::{debug, warn};

/// Fixed click asset path used when configuration does not override it.
pub const DEFAULT_CLICK_ASSET: &str = "/sounds/click.mp3";

pub struct ClickPlayer<A: AudioBackend> {
    backend: A,
    asset: String,
    preloaded: Option<A::Handle>,
}

impl<A: AudioBackend> ClickPlayer<A> {
    pub fn new(backend: A, asset: impl Into<String>) -> Self {
        Self {
            backend,
            asset: asset.into(),
            preloaded: None,
        }
    }

    pub fn asset(&self) -> &str {
        &self.asset
    }

    pub fn backend(&self) -> &A {
        &self.backend
    }

    pub fn is_preloaded(&self) -> bool {
        self.preloaded.is_some()
    }

    /// Opens and preloads the long-lived handle. Idempotent.
    ///
    /// Failures are logged; the widget keeps working without a preload.
    pub fn preload(&mut self) {
        if self.preloaded.is_some() {
            return;
        }
        let opened = self.backend.open(&self.asset).and_then(|mut handle| {
            handle.preload()?;
            Ok(handle)
        });
        match opened {
            Ok(handle) => {
                debug!("event=click_preload module=sound status=ok asset={}", self.asset);
                self.preloaded = Some(handle);
            }
            Err(err) => warn!(
                "event=click_preload module=sound status=error asset={} error={err}",
                self.asset
            ),
        }
    }

    /// Pauses and detaches the preload handle, if any.
    pub fn release(&mut self) {
        if let Some(mut handle) = self.preloaded.take() {
            handle.pause();
            handle.clear_source();
            debug!("event=click_release module=sound status=ok asset={}", self.asset);
        }
    }

    /// Plays one click on a fresh handle. Errors are logged and discarded.
    pub fn play(&self) {
        if let Err(err) = self.play_fresh() {
            warn!(
                "event=click_play module=sound status=error asset={} error={err}",
                self.asset
            );
        }
    }

    fn play_fresh(&self) -> SoundResult<()> {
        let mut handle = self.backend.open(&self.asset)?;
        handle.seek_to_start()?;
        handle.play()
    }
}

impl<A: AudioBackend> Drop for ClickPlayer<A> {
    fn drop(&mut self) {
        self.release();
    }
}
