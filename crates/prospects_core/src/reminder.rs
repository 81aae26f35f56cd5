//! One-shot contact reminder scheduling.
//!
//! # Responsibility
//! - Build the reminder notification request for a prospect.
//! - Drive lazy notification authorization against the platform gateway.
//!
//! # Invariants
//! - Scheduling is fire-and-forget: outcomes are logged, never written back
//!   into the store.
//! - Authorization is requested at most once per schedule attempt.

use crate::model::prospect::Prospect;
use log::{info, warn};
use std::time::Duration;
use uuid::Uuid;

/// Delay before a scheduled contact reminder fires.
pub const REMINDER_DELAY: Duration = Duration::from_secs(5);

/// User-visible payload of one reminder notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderContent {
    pub title: String,
    pub subtitle: String,
    pub with_sound: bool,
}

/// One-shot notification request handed to the platform gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderRequest {
    /// Unique request identifier, unrelated to prospect identity.
    pub id: Uuid,
    pub content: ReminderContent,
    /// Relative one-shot trigger delay.
    pub delay: Duration,
}

impl ReminderRequest {
    /// Builds the "contact this prospect" reminder for `prospect`.
    pub fn for_prospect(prospect: &Prospect) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: ReminderContent {
                title: format!("Contact {}", prospect.name),
                subtitle: prospect.email_address.clone(),
                with_sound: true,
            },
            delay: REMINDER_DELAY,
        }
    }
}

/// Platform notification authorization state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationStatus {
    NotDetermined,
    Authorized,
    Denied,
}

/// Seam to the platform notification facility.
pub trait NotificationGateway {
    /// Current authorization state.
    fn authorization_status(&self) -> AuthorizationStatus;

    /// Prompts for notification permission; returns whether it was granted.
    ///
    /// A previously denied gateway is expected to answer `false` without
    /// prompting again.
    fn request_authorization(&mut self) -> bool;

    /// Enqueues a one-shot reminder. Delivery is the platform's concern.
    fn schedule(&mut self, request: ReminderRequest);
}

/// Schedules the contact reminder for `prospect`, requesting authorization
/// lazily on first use.
///
/// Returns whether a request was handed to the gateway. Denial is logged
/// and otherwise ignored.
pub fn schedule_contact_reminder<G: NotificationGateway>(
    gateway: &mut G,
    prospect: &Prospect,
) -> bool {
    match gateway.authorization_status() {
        AuthorizationStatus::Authorized => {}
        AuthorizationStatus::NotDetermined | AuthorizationStatus::Denied => {
            if !gateway.request_authorization() {
                warn!(
                    "event=reminder_schedule module=reminder status=denied prospect={}",
                    prospect.id
                );
                return false;
            }
        }
    }

    let request = ReminderRequest::for_prospect(prospect);
    info!(
        "event=reminder_schedule module=reminder status=ok prospect={} delay_secs={}",
        prospect.id,
        request.delay.as_secs()
    );
    gateway.schedule(request);
    true
}
