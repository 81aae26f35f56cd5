//! Prospect domain model.
//!
//! # Responsibility
//! - Define the single record shape tracked by the prospect store.
//! - Keep identity semantics (id-only equality) in one place.
//!
//! # Invariants
//! - `id` is assigned at construction and never regenerated or reused.
//! - Equality and hashing use `id` alone, regardless of other fields.
//! - `is_contacted` is writable only inside this crate; external callers
//!   flip it through the store's toggle operation.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for one prospect.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProspectId = Uuid;

/// Name stored for a prospect created without one.
pub const PLACEHOLDER_NAME: &str = "Anonymous";

/// One contact entry: identity, contact details, creation time, contacted flag.
///
/// Serialized field names follow the external document schema
/// (`emailAddress`, `dateAdded`, `isContacted`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prospect {
    /// Stable global ID used for lookup and equality.
    pub id: ProspectId,
    /// Display name; the placeholder until a real one is known.
    pub name: String,
    /// Contact email; may be empty.
    pub email_address: String,
    /// Creation time in Unix epoch milliseconds. Immutable after construction.
    pub date_added: i64,
    /// Contact state. Flipped only by the owning store.
    pub(crate) is_contacted: bool,
}

impl Prospect {
    /// Creates a prospect with all defaults: fresh id, placeholder name,
    /// empty email, current timestamp, not contacted.
    pub fn new() -> Self {
        Self::with_contact(PLACEHOLDER_NAME, "")
    }

    /// Creates a prospect from known contact details.
    pub fn with_contact(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name, email)
    }

    /// Creates a prospect with a caller-provided stable ID.
    ///
    /// Used by import/test paths where identity already exists externally.
    ///
    /// # Invariants
    /// - The provided `id` must remain stable for this prospect's lifetime.
    pub fn with_id(id: ProspectId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email_address: email.into(),
            date_added: now_epoch_ms(),
            is_contacted: false,
        }
    }

    /// Whether this prospect has been contacted.
    pub fn is_contacted(&self) -> bool {
        self.is_contacted
    }
}

impl Default for Prospect {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Prospect {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Prospect {}

impl Hash for Prospect {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

// A clock before the Unix epoch degrades to 0 rather than failing record
// construction.
fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
