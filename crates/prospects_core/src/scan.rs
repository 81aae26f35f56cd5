//! Scanner payload handling for the QR input boundary.
//!
//! # Responsibility
//! - Decode the two-line `"<name>\n<email>"` payload a code scan produces.
//!
//! # Invariants
//! - A payload that does not split into exactly two lines yields no contact;
//!   a trailing newline counts as a third, empty line and is rejected.

use crate::model::prospect::Prospect;

/// Contact details decoded from one scanner payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedContact {
    pub name: String,
    pub email: String,
}

impl ScannedContact {
    /// Converts the scanned details into a fresh prospect record.
    pub fn into_prospect(self) -> Prospect {
        Prospect::with_contact(self.name, self.email)
    }
}

/// Splits `payload` into name and email, or `None` when it is malformed.
pub fn parse_scan_payload(payload: &str) -> Option<ScannedContact> {
    let details: Vec<&str> = payload.split('\n').collect();
    if details.len() != 2 {
        return None;
    }
    Some(ScannedContact {
        name: details[0].to_string(),
        email: details[1].to_string(),
    })
}
