//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Hold the single per-process store instance behind one lock.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - The store path is provided once by the host app (it owns the documents
//!   directory); reconfiguration attempts are rejected.
//! - Reminder authorization and delivery stay on the platform side; this
//!   layer only builds the request payload.

use prospects_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, parse_scan_payload,
    ping as ping_inner, ContactFilter, Prospect, ProspectStore, ReminderRequest, SortKey,
};
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock, PoisonError};
use uuid::Uuid;

struct StoreState {
    path: PathBuf,
    store: Mutex<ProspectStore>,
}

static STORE_STATE: OnceLock<StoreState> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts return an error message.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Opens the prospect store over the host-provided document path.
///
/// The host app resolves its private documents directory and passes the
/// full file path here exactly once per process.
///
/// # FFI contract
/// - Sync call; reads the persisted document (a missing or corrupt file
///   yields an empty collection, never an error).
/// - Idempotent for the same path; a different path returns an error.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_store(path: String) -> String {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return "store path cannot be empty".to_string();
    }
    let path = PathBuf::from(trimmed);

    let state = STORE_STATE.get_or_init(|| {
        log::info!(
            "event=store_init module=ffi status=ok path={}",
            path.display()
        );
        StoreState {
            path: path.clone(),
            store: Mutex::new(ProspectStore::open(&path)),
        }
    });

    if state.path != path {
        return format!(
            "store already initialized at `{}`; refusing to switch to `{}`",
            state.path.display(),
            path.display()
        );
    }
    String::new()
}

/// Prospect record projected for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfiProspect {
    /// Stable prospect ID in string form.
    pub id: String,
    pub name: String,
    pub email_address: String,
    /// Creation time in Unix epoch milliseconds.
    pub date_added: i64,
    pub is_contacted: bool,
}

/// List response envelope for the prospects screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProspectListResponse {
    /// Prospects after filter and sort are applied.
    pub items: Vec<FfiProspect>,
    /// Screen title matching the applied filter.
    pub title: String,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Generic action response envelope for store mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProspectActionResponse {
    /// Whether the operation changed the collection.
    pub ok: bool,
    /// Affected prospect ID, when one exists.
    pub prospect_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ProspectActionResponse {
    fn success(message: impl Into<String>, prospect_id: String) -> Self {
        Self {
            ok: true,
            prospect_id: Some(prospect_id),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            prospect_id: None,
            message: message.into(),
        }
    }
}

/// Reminder payload handed back to the platform notification scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfiReminderRequest {
    /// Unique request identifier in string form.
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub with_sound: bool,
    /// One-shot trigger delay in seconds.
    pub delay_secs: u64,
}

/// Response envelope for reminder building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderResponse {
    pub ok: bool,
    /// Request for the platform to schedule after its authorization check.
    pub request: Option<FfiReminderRequest>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Lists prospects for display using filter and sort labels.
///
/// Input semantics:
/// - `filter`: `everyone|contacted|uncontacted` (unknown labels fall back
///   to `everyone`).
/// - `sort`: `name|date_added` (unknown labels fall back to `name`).
///
/// # FFI contract
/// - Sync call over in-memory state.
/// - Never panics; an uninitialized store yields an empty list with a
///   diagnostic message.
#[flutter_rust_bridge::frb(sync)]
pub fn prospect_list(filter: String, sort: String) -> ProspectListResponse {
    let filter = contact_filter_from_label(&filter);
    let sort = sort_key_from_label(&sort);

    match with_store(|store| {
        prospects_core::display_list(store.people(), filter, sort)
            .into_iter()
            .map(to_ffi_prospect)
            .collect::<Vec<_>>()
    }) {
        Ok(items) => {
            let message = format!("{} prospect(s).", items.len());
            ProspectListResponse {
                items,
                title: filter.title().to_string(),
                message,
            }
        }
        Err(err) => ProspectListResponse {
            items: Vec::new(),
            title: filter.title().to_string(),
            message: format!("prospect_list failed: {err}"),
        },
    }
}

/// Adds a prospect from a raw scanner payload.
///
/// # FFI contract
/// - Sync call; persists before returning.
/// - A malformed payload is discarded: `ok=false`, no record created, no
///   error raised toward the user.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn prospect_add_from_scan(payload: String) -> ProspectActionResponse {
    let contact = match parse_scan_payload(&payload) {
        Some(contact) => contact,
        None => return ProspectActionResponse::failure("scan payload ignored: not two lines"),
    };

    match with_store(move |store| store.add(contact.into_prospect())) {
        Ok(id) => ProspectActionResponse::success("Prospect added.", id.to_string()),
        Err(err) => ProspectActionResponse::failure(format!("prospect_add_from_scan failed: {err}")),
    }
}

/// Inverts the contacted flag of one prospect.
///
/// # FFI contract
/// - Sync call; persists before returning.
/// - Unknown or unparseable ids return `ok=false`.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn prospect_toggle(id: String) -> ProspectActionResponse {
    let id = match parse_prospect_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match with_store(move |store| store.toggle(id)) {
        Ok(true) => ProspectActionResponse::success("Contact state toggled.", id.to_string()),
        Ok(false) => ProspectActionResponse::failure(format!("prospect not found: {id}")),
        Err(err) => ProspectActionResponse::failure(format!("prospect_toggle failed: {err}")),
    }
}

/// Removes one prospect from the collection.
///
/// # FFI contract
/// - Sync call; persists before returning.
/// - Removing an already-removed id returns `ok=false` without an error.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn prospect_remove(id: String) -> ProspectActionResponse {
    let id = match parse_prospect_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match with_store(move |store| store.remove(id)) {
        Ok(true) => ProspectActionResponse::success("Prospect removed.", id.to_string()),
        Ok(false) => ProspectActionResponse::failure(format!("prospect not found: {id}")),
        Err(err) => ProspectActionResponse::failure(format!("prospect_remove failed: {err}")),
    }
}

/// Builds the one-shot contact reminder payload for one prospect.
///
/// The platform requests notification authorization lazily and schedules
/// the returned request itself; core only shapes the content and delay.
///
/// # FFI contract
/// - Sync call over in-memory state.
/// - Unknown ids return `ok=false` with no request.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn prospect_reminder(id: String) -> ReminderResponse {
    let id = match parse_prospect_id(&id) {
        Ok(id) => id,
        Err(response) => {
            return ReminderResponse {
                ok: false,
                request: None,
                message: response.message,
            }
        }
    };

    let built = with_store(move |store| {
        store
            .people()
            .iter()
            .find(|person| person.id == id)
            .map(ReminderRequest::for_prospect)
    });

    match built {
        Ok(Some(request)) => ReminderResponse {
            ok: true,
            request: Some(FfiReminderRequest {
                id: request.id.to_string(),
                title: request.content.title,
                subtitle: request.content.subtitle,
                with_sound: request.content.with_sound,
                delay_secs: request.delay.as_secs(),
            }),
            message: "Reminder request built.".to_string(),
        },
        Ok(None) => ReminderResponse {
            ok: false,
            request: None,
            message: format!("prospect not found: {id}"),
        },
        Err(err) => ReminderResponse {
            ok: false,
            request: None,
            message: format!("prospect_reminder failed: {err}"),
        },
    }
}

fn with_store<T>(f: impl FnOnce(&mut ProspectStore) -> T) -> Result<T, String> {
    let state = STORE_STATE
        .get()
        .ok_or_else(|| "store not initialized; call init_store first".to_string())?;
    let mut store = state
        .store
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    Ok(f(&mut store))
}

fn parse_prospect_id(raw: &str) -> Result<Uuid, ProspectActionResponse> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| ProspectActionResponse::failure(format!("invalid prospect id `{raw}`")))
}

fn to_ffi_prospect(prospect: Prospect) -> FfiProspect {
    FfiProspect {
        id: prospect.id.to_string(),
        is_contacted: prospect.is_contacted(),
        name: prospect.name,
        email_address: prospect.email_address,
        date_added: prospect.date_added,
    }
}

fn contact_filter_from_label(label: &str) -> ContactFilter {
    match label.trim().to_ascii_lowercase().as_str() {
        "contacted" => ContactFilter::Contacted,
        "uncontacted" => ContactFilter::Uncontacted,
        _ => ContactFilter::Everyone,
    }
}

fn sort_key_from_label(label: &str) -> SortKey {
    match label.trim().to_ascii_lowercase().as_str() {
        "date_added" => SortKey::DateAdded,
        _ => SortKey::Name,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, init_logging, init_store, ping, prospect_add_from_scan, prospect_list,
        prospect_reminder, prospect_remove, prospect_toggle,
    };
    use std::path::PathBuf;
    use std::sync::OnceLock;
    use std::time::{SystemTime, UNIX_EPOCH};

    // All tests share one per-process store file, so records carry unique
    // tokens instead of assuming an empty collection.
    fn shared_store_path() -> PathBuf {
        static PATH: OnceLock<PathBuf> = OnceLock::new();
        PATH.get_or_init(|| {
            std::env::temp_dir().join(format!(
                "prospects-ffi-{}-{}.json",
                std::process::id(),
                unique_token("store")
            ))
        })
        .clone()
    }

    fn init_shared_store() {
        let error = init_store(shared_store_path().display().to_string());
        assert!(error.is_empty(), "{error}");
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_store_is_idempotent_and_rejects_a_different_path() {
        init_shared_store();
        init_shared_store();

        let other = std::env::temp_dir().join("prospects-ffi-other.json");
        let error = init_store(other.display().to_string());
        assert!(error.contains("refusing to switch"));
    }

    #[test]
    fn scan_add_toggle_remove_round_trip() {
        init_shared_store();
        let name = unique_token("scan-add");

        let added = prospect_add_from_scan(format!("{name}\n{name}@example.com"));
        assert!(added.ok, "{}", added.message);
        let id = added.prospect_id.clone().expect("created id");

        let listed = prospect_list("everyone".to_string(), "name".to_string());
        let row = listed
            .items
            .iter()
            .find(|item| item.id == id)
            .expect("created prospect should be listed");
        assert_eq!(row.name, name);
        assert!(!row.is_contacted);

        let toggled = prospect_toggle(id.clone());
        assert!(toggled.ok, "{}", toggled.message);
        let listed = prospect_list("contacted".to_string(), "name".to_string());
        assert!(listed.items.iter().any(|item| item.id == id));

        let removed = prospect_remove(id.clone());
        assert!(removed.ok, "{}", removed.message);
        let removed_again = prospect_remove(id.clone());
        assert!(!removed_again.ok);
        let listed = prospect_list("everyone".to_string(), "name".to_string());
        assert!(listed.items.iter().all(|item| item.id != id));
    }

    #[test]
    fn malformed_scan_payload_is_discarded() {
        init_shared_store();

        let response = prospect_add_from_scan("OnlyOneLine".to_string());
        assert!(!response.ok);
        assert!(response.prospect_id.is_none());

        let after = prospect_list("everyone".to_string(), "name".to_string());
        assert!(after.items.iter().all(|item| item.name != "OnlyOneLine"));
    }

    #[test]
    fn reminder_request_carries_contact_content() {
        init_shared_store();
        let name = unique_token("remind");

        let added = prospect_add_from_scan(format!("{name}\n{name}@example.com"));
        let id = added.prospect_id.expect("created id");

        let response = prospect_reminder(id);
        assert!(response.ok, "{}", response.message);
        let request = response.request.expect("request should be built");
        assert_eq!(request.title, format!("Contact {name}"));
        assert_eq!(request.subtitle, format!("{name}@example.com"));
        assert!(request.with_sound);
        assert_eq!(request.delay_secs, 5);
    }

    #[test]
    fn unknown_and_invalid_ids_fail_closed() {
        init_shared_store();

        let toggled = prospect_toggle("not-a-uuid".to_string());
        assert!(!toggled.ok);

        // Valid uuid shape that no store mutation ever handed out.
        let reminder = prospect_reminder("00000000-0000-4000-8000-000000000001".to_string());
        assert!(!reminder.ok);
        assert!(reminder.request.is_none());
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}
