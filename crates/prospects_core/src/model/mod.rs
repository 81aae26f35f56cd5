//! Domain model for the prospect tracker.
//!
//! # Responsibility
//! - Define the canonical record shape owned by the store.
//!
//! # Invariants
//! - Every prospect is identified by a stable `ProspectId`.
//! - Identity is the only basis for record equality.

pub mod prospect;
