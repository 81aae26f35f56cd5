//! Derived read-only projections for display.
//!
//! # Responsibility
//! - Turn the store's canonical sequence into what a screen renders.
//!
//! # Invariants
//! - Projections never mutate their input and are recomputed per call.

pub mod projection;
