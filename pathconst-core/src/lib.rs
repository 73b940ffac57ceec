//! Core utilities and types for the pathconst source generator.
//!
//! This crate provides the pieces that don't know anything about the
//! generated language: identifier sanitizing, order-preserving
//! deduplication and the write-only-if-changed file policy.

mod file;
mod utils;

// File operations
pub use file::{File, Overwrite, WriteResult};
// String utilities
pub use utils::{dedup_preserving_order, sanitize_identifier};
