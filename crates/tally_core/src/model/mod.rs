//! Counter domain model.
//!
//! # Invariants
//! - Count is never negative; the type makes this unrepresentable.

pub mod counter;
