//! Key-value storage contracts and implementations.
//!
//! # Responsibility
//! - Define the string-keyed store the widget persists into.
//! - Keep SQL details out of widget logic.
//!
//! # Invariants
//! - Stores never interpret values; parsing belongs to `snapshot`.

pub mod kv_repo;
pub mod memory;
pub mod snapshot;
pub mod sqlite;
