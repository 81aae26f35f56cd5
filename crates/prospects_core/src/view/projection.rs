//! Filtered and sorted projections over the prospect collection.
//!
//! # Responsibility
//! - Provide the contacted-state filters and display orderings of the
//!   prospects screen.
//!
//! # Invariants
//! - Inputs are borrowed read-only; the store's insertion order is unchanged
//!   by any projection.
//! - Both sort orders are stable and ascending.

use crate::model::prospect::Prospect;
use std::cmp::Ordering;

/// Which contact states the screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactFilter {
    Everyone,
    Contacted,
    Uncontacted,
}

impl ContactFilter {
    /// Screen title for this filter.
    pub fn title(self) -> &'static str {
        match self {
            Self::Everyone => "Everyone",
            Self::Contacted => "Contacted people",
            Self::Uncontacted => "Uncontacted people",
        }
    }

    fn matches(self, prospect: &Prospect) -> bool {
        match self {
            Self::Everyone => true,
            Self::Contacted => prospect.is_contacted(),
            Self::Uncontacted => !prospect.is_contacted(),
        }
    }
}

/// Display ordering selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Lexicographic by name, ascending.
    Name,
    /// Chronological by creation time, ascending.
    DateAdded,
}

/// Prospects matching `filter`, in insertion order.
pub fn filtered(people: &[Prospect], filter: ContactFilter) -> Vec<Prospect> {
    people
        .iter()
        .filter(|prospect| filter.matches(prospect))
        .cloned()
        .collect()
}

/// All prospects reordered by `key`. Stable: equal keys keep insertion order.
pub fn sorted(people: &[Prospect], key: SortKey) -> Vec<Prospect> {
    let mut out = people.to_vec();
    out.sort_by(|a, b| compare(a, b, key));
    out
}

/// The projection the screen renders: filter, then stable ascending sort.
pub fn display_list(people: &[Prospect], filter: ContactFilter, key: SortKey) -> Vec<Prospect> {
    let mut out = filtered(people, filter);
    out.sort_by(|a, b| compare(a, b, key));
    out
}

fn compare(a: &Prospect, b: &Prospect, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::DateAdded => a.date_added.cmp(&b.date_added),
    }
}
