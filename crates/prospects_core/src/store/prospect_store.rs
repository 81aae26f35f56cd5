//! Disk-backed prospect store.
//!
//! # Responsibility
//! - Own the ordered prospect collection and its backing document file.
//! - Provide add/toggle/remove mutations with synchronous persistence.
//! - Notify registered observers after each successful mutation.
//!
//! # Invariants
//! - Insertion order of `people` is the canonical order before projection.
//! - Each mutation persists the full collection before observers run.
//! - A failed save is logged and never rolls back the mutation.

use crate::model::prospect::{Prospect, ProspectId};
use crate::storage::{load_prospects, save_prospects};
use log::{error, warn};
use std::path::PathBuf;

/// Change notification emitted after a successful mutation has been
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// A prospect was appended to the collection.
    Added(ProspectId),
    /// A prospect's contacted flag now holds the carried value.
    ContactedToggled(ProspectId, bool),
    /// A prospect was removed from the collection.
    Removed(ProspectId),
}

type Subscriber = Box<dyn FnMut(&StoreEvent) + Send>;

/// In-memory, disk-backed owner of the prospect collection.
///
/// Single-threaded by contract: mutations take `&mut self` and complete,
/// including persistence and observer callbacks, before returning.
pub struct ProspectStore {
    path: PathBuf,
    people: Vec<Prospect>,
    subscribers: Vec<Subscriber>,
}

impl ProspectStore {
    /// Opens the store over `path`, loading any previously persisted
    /// collection.
    ///
    /// Construction is infallible: a missing or malformed document falls
    /// back to an empty collection, with the failure logged only.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let people = match load_prospects(&path) {
            Ok(people) => people,
            Err(err) => {
                warn!(
                    "event=store_open module=store status=fallback_empty path={} error={}",
                    path.display(),
                    err
                );
                Vec::new()
            }
        };
        Self {
            path,
            people,
            subscribers: Vec::new(),
        }
    }

    /// Read-only view of the collection in insertion order.
    pub fn people(&self) -> &[Prospect] {
        &self.people
    }

    /// Number of prospects currently tracked.
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Path of the backing document file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Registers an observer invoked synchronously after each successful
    /// mutation has been persisted.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&StoreEvent) + Send + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Appends `prospect` to the end of the collection and persists.
    pub fn add(&mut self, prospect: Prospect) -> ProspectId {
        let id = prospect.id;
        self.people.push(prospect);
        self.persist();
        self.notify(StoreEvent::Added(id));
        id
    }

    /// Inverts the contacted flag of the prospect with `id` and persists.
    ///
    /// Returns `false` without side effects when no prospect matches.
    pub fn toggle(&mut self, id: ProspectId) -> bool {
        let now = match self.people.iter_mut().find(|person| person.id == id) {
            Some(person) => {
                person.is_contacted = !person.is_contacted;
                person.is_contacted
            }
            None => return false,
        };
        self.persist();
        self.notify(StoreEvent::ContactedToggled(id, now));
        true
    }

    /// Removes the first prospect matching `id` and persists.
    ///
    /// Removing an absent id is a no-op, so repeated removal is idempotent.
    pub fn remove(&mut self, id: ProspectId) -> bool {
        let found = match self.people.iter().position(|person| person.id == id) {
            Some(index) => index,
            None => return false,
        };
        self.people.remove(found);
        self.persist();
        self.notify(StoreEvent::Removed(id));
        true
    }

    // Full-document overwrite after every mutation. A failed write keeps the
    // in-memory collection authoritative; the error is logged, not surfaced.
    fn persist(&self) {
        if let Err(err) = save_prospects(&self.path, &self.people) {
            error!(
                "event=store_persist module=store status=error path={} error={}",
                self.path.display(),
                err
            );
        }
    }

    fn notify(&mut self, event: StoreEvent) {
        for subscriber in &mut self.subscribers {
            subscriber(&event);
        }
    }
}
