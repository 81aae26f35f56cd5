//! Flutter-facing FFI crate for the Prospects core.
//! Exposes use-case level functions to Dart via flutter_rust_bridge.

pub mod api;
