//! Core domain logic for the Prospects contact tracker.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod reminder;
pub mod scan;
pub mod service;
pub mod storage;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::prospect::{Prospect, ProspectId, PLACEHOLDER_NAME};
pub use reminder::{
    schedule_contact_reminder, AuthorizationStatus, NotificationGateway, ReminderContent,
    ReminderRequest, REMINDER_DELAY,
};
pub use scan::{parse_scan_payload, ScannedContact};
pub use service::prospect_service::ProspectService;
pub use storage::{load_prospects, save_prospects, StorageError, StorageResult};
pub use store::prospect_store::{ProspectStore, StoreEvent};
pub use view::projection::{display_list, filtered, sorted, ContactFilter, SortKey};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
