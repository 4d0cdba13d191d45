//! Counter widget component.
//!
//! # Responsibility
//! - Run the two-phase lifecycle: construct with a placeholder, then mount
//!   (hydrate from the store, preload the click).
//! - Route user actions to state transitions, persistence and feedback.
//! - Produce the render surface for hosts.
//!
//! # Invariants
//! - The store is read at most once per mount.
//! - Every action after mount writes its key synchronously.

pub mod counter;
pub mod view;
