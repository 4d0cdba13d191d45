//! Flutter-facing bindings for the Tally counter widget.

pub mod api;
mod host_audio;
