//! Prospect use-case service.
//!
//! # Responsibility
//! - Provide one entry point per screen action over the owning store.
//! - Route scanner payloads and reminder scheduling.
//!
//! # Invariants
//! - All collection mutations go through the store.
//! - Malformed scanner payloads are discarded without surfacing an error.

use crate::model::prospect::{Prospect, ProspectId};
use crate::reminder::{schedule_contact_reminder, NotificationGateway};
use crate::scan::parse_scan_payload;
use crate::store::prospect_store::{ProspectStore, StoreEvent};
use crate::view::projection::{display_list, ContactFilter, SortKey};
use log::{debug, warn};

/// Use-case wrapper binding the store to a platform notification gateway.
pub struct ProspectService<G: NotificationGateway> {
    store: ProspectStore,
    gateway: G,
}

impl<G: NotificationGateway> ProspectService<G> {
    /// Creates a service over an opened store and a notification gateway.
    pub fn new(store: ProspectStore, gateway: G) -> Self {
        Self { store, gateway }
    }

    /// Adds a prospect from a raw scanner payload.
    ///
    /// # Contract
    /// - A payload that does not split into exactly two lines is dropped
    ///   silently; no record is created and no error is surfaced.
    /// - Returns the created id when a record was added.
    pub fn add_from_scan(&mut self, payload: &str) -> Option<ProspectId> {
        let contact = match parse_scan_payload(payload) {
            Some(contact) => contact,
            None => {
                debug!("event=scan_discard module=service status=ignored reason=malformed_payload");
                return None;
            }
        };
        Some(self.store.add(contact.into_prospect()))
    }

    /// Records a scanner-side failure. Log-only by contract.
    pub fn scan_failed(&self, reason: &str) {
        warn!("event=scan_failed module=service status=error reason={reason}");
    }

    /// Inverts the contacted flag for `id`; `false` when the id is unknown.
    pub fn toggle_contacted(&mut self, id: ProspectId) -> bool {
        self.store.toggle(id)
    }

    /// Removes the prospect with `id`; repeated removal is a no-op.
    pub fn remove(&mut self, id: ProspectId) -> bool {
        self.store.remove(id)
    }

    /// Read-only view of the collection in insertion order.
    pub fn people(&self) -> &[Prospect] {
        self.store.people()
    }

    /// The projection the screen renders: filter, then stable sort.
    pub fn display_list(&self, filter: ContactFilter, key: SortKey) -> Vec<Prospect> {
        display_list(self.store.people(), filter, key)
    }

    /// Schedules the one-shot contact reminder for `id`.
    ///
    /// Returns whether a request reached the gateway; an unknown id or a
    /// denied authorization both yield `false`.
    pub fn remind(&mut self, id: ProspectId) -> bool {
        let prospect = match self.store.people().iter().find(|person| person.id == id) {
            Some(prospect) => prospect,
            None => return false,
        };
        schedule_contact_reminder(&mut self.gateway, prospect)
    }

    /// Registers a store observer; see [`ProspectStore::subscribe`].
    pub fn subscribe(&mut self, subscriber: impl FnMut(&StoreEvent) + Send + 'static) {
        self.store.subscribe(subscriber);
    }
}
