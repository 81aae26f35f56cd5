//! Owning store for the prospect collection.
//!
//! # Responsibility
//! - Keep the single mutable copy of the prospect list in memory.
//! - Route every mutation through persist-then-notify.
//!
//! # Invariants
//! - External callers only ever see read-only views of the collection.
//! - In-memory state stays authoritative even when a save fails.

pub mod prospect_store;
