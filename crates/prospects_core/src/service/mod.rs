//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store, scanner and reminder calls into screen-action APIs.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod prospect_service;
