use prospects_core::{
    AuthorizationStatus, ContactFilter, NotificationGateway, ProspectService, ProspectStore,
    ReminderRequest, SortKey, REMINDER_DELAY,
};
use std::sync::{Arc, Mutex};
use tempfile::tempdir;
use uuid::Uuid;

// Always-authorized gateway sharing its schedule log with the test body.
struct GrantingGateway {
    scheduled: Arc<Mutex<Vec<ReminderRequest>>>,
}

impl GrantingGateway {
    fn new() -> (Self, Arc<Mutex<Vec<ReminderRequest>>>) {
        let scheduled = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                scheduled: Arc::clone(&scheduled),
            },
            scheduled,
        )
    }
}

impl NotificationGateway for GrantingGateway {
    fn authorization_status(&self) -> AuthorizationStatus {
        AuthorizationStatus::Authorized
    }

    fn request_authorization(&mut self) -> bool {
        true
    }

    fn schedule(&mut self, request: ReminderRequest) {
        self.scheduled.lock().unwrap().push(request);
    }
}

fn service_in(dir: &tempfile::TempDir) -> ProspectService<GrantingGateway> {
    let store = ProspectStore::open(dir.path().join("SavedData.json"));
    let (gateway, _) = GrantingGateway::new();
    ProspectService::new(store, gateway)
}

#[test]
fn scan_payload_with_two_lines_adds_a_prospect() {
    let dir = tempdir().unwrap();
    let mut service = service_in(&dir);

    let id = service
        .add_from_scan("Damla Arslan\narslanbas@gmail.com")
        .expect("two-line payload should create a record");

    assert_eq!(service.people().len(), 1);
    let person = &service.people()[0];
    assert_eq!(person.id, id);
    assert_eq!(person.name, "Damla Arslan");
    assert_eq!(person.email_address, "arslanbas@gmail.com");
    assert!(!person.is_contacted());
}

#[test]
fn malformed_scan_payloads_are_discarded_silently() {
    let dir = tempdir().unwrap();
    let mut service = service_in(&dir);
    service.add_from_scan("Existing\nexisting@example.com");

    assert_eq!(service.add_from_scan("OnlyOneLine"), None);
    assert_eq!(service.add_from_scan("three\nlines\nhere"), None);
    assert_eq!(service.add_from_scan("trailing\nnewline\n"), None);

    assert_eq!(service.people().len(), 1);
}

#[test]
fn scanner_failure_is_log_only() {
    let dir = tempdir().unwrap();
    let service = service_in(&dir);

    service.scan_failed("camera unavailable");
    assert!(service.people().is_empty());
}

#[test]
fn service_projects_the_display_list() {
    let dir = tempdir().unwrap();
    let mut service = service_in(&dir);

    service.add_from_scan("Cem\ncem@example.com");
    service.add_from_scan("Ayse\nayse@example.com");
    let burak = service.add_from_scan("Burak\nburak@example.com").unwrap();
    service.toggle_contacted(burak);

    let everyone = service.display_list(ContactFilter::Everyone, SortKey::Name);
    let names: Vec<_> = everyone.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Ayse", "Burak", "Cem"]);

    let uncontacted = service.display_list(ContactFilter::Uncontacted, SortKey::Name);
    let names: Vec<_> = uncontacted.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Ayse", "Cem"]);
}

#[test]
fn service_toggle_and_remove_mirror_store_semantics() {
    let dir = tempdir().unwrap();
    let mut service = service_in(&dir);
    let id = service.add_from_scan("Alice\nalice@example.com").unwrap();

    assert!(service.toggle_contacted(id));
    assert!(service.people()[0].is_contacted());

    assert!(service.remove(id));
    assert!(!service.remove(id));
    assert!(service.people().is_empty());
}

#[test]
fn remind_unknown_id_schedules_nothing() {
    let dir = tempdir().unwrap();
    let mut service = service_in(&dir);

    assert!(!service.remind(Uuid::new_v4()));
}

#[test]
fn remind_builds_the_contact_reminder() {
    let dir = tempdir().unwrap();
    let store = ProspectStore::open(dir.path().join("SavedData.json"));
    let (gateway, scheduled) = GrantingGateway::new();
    let mut service = ProspectService::new(store, gateway);

    let id = service
        .add_from_scan("Damla Arslan\narslanbas@gmail.com")
        .unwrap();
    assert!(service.remind(id));

    let scheduled = scheduled.lock().unwrap();
    assert_eq!(scheduled.len(), 1);
    assert_eq!(scheduled[0].content.title, "Contact Damla Arslan");
    assert_eq!(scheduled[0].content.subtitle, "arslanbas@gmail.com");
    assert!(scheduled[0].content.with_sound);
    assert_eq!(scheduled[0].delay, REMINDER_DELAY);
}
