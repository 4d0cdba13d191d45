#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use tally_core::{
    AudioBackend, KeyValueStore, MemoryKeyValueStore, PlaybackHandle, SoundError, SoundResult,
    StoreError, StoreResult,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioEvent {
    Open { handle: usize, asset: String },
    Preload { handle: usize },
    Seek { handle: usize },
    Play { handle: usize },
    Pause { handle: usize },
    Clear { handle: usize },
}

/// Audio backend that records every call; optionally rejects playback.
#[derive(Debug, Clone, Default)]
pub struct RecordingAudio {
    events: Rc<RefCell<Vec<AudioEvent>>>,
    next_handle: Rc<RefCell<usize>>,
    reject_play: bool,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting() -> Self {
        Self {
            reject_play: true,
            ..Self::default()
        }
    }

    pub fn events(&self) -> Vec<AudioEvent> {
        self.events.borrow().clone()
    }

    pub fn play_count(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| matches!(event, AudioEvent::Play { .. }))
            .count()
    }

    pub fn open_count(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| matches!(event, AudioEvent::Open { .. }))
            .count()
    }
}

pub struct RecordingHandle {
    id: usize,
    events: Rc<RefCell<Vec<AudioEvent>>>,
    reject_play: bool,
}

impl AudioBackend for RecordingAudio {
    type Handle = RecordingHandle;

    fn open(&self, asset: &str) -> SoundResult<Self::Handle> {
        let id = {
            let mut next = self.next_handle.borrow_mut();
            *next += 1;
            *next
        };
        self.events.borrow_mut().push(AudioEvent::Open {
            handle: id,
            asset: asset.to_string(),
        });
        Ok(RecordingHandle {
            id,
            events: Rc::clone(&self.events),
            reject_play: self.reject_play,
        })
    }
}

impl PlaybackHandle for RecordingHandle {
    fn preload(&mut self) -> SoundResult<()> {
        self.events
            .borrow_mut()
            .push(AudioEvent::Preload { handle: self.id });
        Ok(())
    }

    fn seek_to_start(&mut self) -> SoundResult<()> {
        self.events
            .borrow_mut()
            .push(AudioEvent::Seek { handle: self.id });
        Ok(())
    }

    fn play(&mut self) -> SoundResult<()> {
        if self.reject_play {
            return Err(SoundError::PlaybackRejected(
                "autoplay blocked".to_string(),
            ));
        }
        self.events
            .borrow_mut()
            .push(AudioEvent::Play { handle: self.id });
        Ok(())
    }

    fn pause(&mut self) {
        self.events
            .borrow_mut()
            .push(AudioEvent::Pause { handle: self.id });
    }

    fn clear_source(&mut self) {
        self.events
            .borrow_mut()
            .push(AudioEvent::Clear { handle: self.id });
    }
}

pub const CLICK_ASSET: &str = "/sounds/click.mp3";

/// Store whose reads and/or writes fail; successful writes land in `inner`.
#[derive(Debug, Default)]
pub struct FaultyStore {
    pub fail_get: bool,
    pub fail_set: bool,
    pub inner: MemoryKeyValueStore,
}

impl FaultyStore {
    pub fn unreadable() -> Self {
        Self {
            fail_get: true,
            ..Self::default()
        }
    }

    pub fn unwritable() -> Self {
        Self {
            fail_set: true,
            ..Self::default()
        }
    }
}

impl KeyValueStore for FaultyStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        if self.fail_get {
            return Err(StoreError::Unavailable("read failed".to_string()));
        }
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        if self.fail_set {
            return Err(StoreError::Unavailable("quota exceeded".to_string()));
        }
        self.inner.set(key, value)
    }
}
