use prospects_core::{Prospect, PLACEHOLDER_NAME};
use std::collections::HashSet;
use uuid::Uuid;

#[test]
fn new_sets_defaults() {
    let prospect = Prospect::new();

    assert!(!prospect.id.is_nil());
    assert_eq!(prospect.name, PLACEHOLDER_NAME);
    assert_eq!(prospect.email_address, "");
    assert!(prospect.date_added > 0);
    assert!(!prospect.is_contacted());
}

#[test]
fn with_contact_sets_details() {
    let prospect = Prospect::with_contact("Damla Arslan", "arslanbas@gmail.com");

    assert_eq!(prospect.name, "Damla Arslan");
    assert_eq!(prospect.email_address, "arslanbas@gmail.com");
    assert!(!prospect.is_contacted());
}

#[test]
fn equality_uses_id_only() {
    let id = Uuid::new_v4();
    let a = Prospect::with_id(id, "Alice", "alice@example.com");
    let b = Prospect::with_id(id, "Completely Different", "other@example.com");
    assert_eq!(a, b);

    let c = Prospect::with_contact("Alice", "alice@example.com");
    assert_ne!(a, c);
}

#[test]
fn hashing_agrees_with_identity_equality() {
    let id = Uuid::new_v4();
    let mut set = HashSet::new();
    set.insert(Prospect::with_id(id, "Alice", "alice@example.com"));
    set.insert(Prospect::with_id(id, "Renamed", ""));

    assert_eq!(set.len(), 1);
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let prospect = Prospect::with_id(id, "Damla Arslan", "arslanbas@gmail.com");

    let json = serde_json::to_value(&prospect).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["name"], "Damla Arslan");
    assert_eq!(json["emailAddress"], "arslanbas@gmail.com");
    assert_eq!(json["isContacted"], false);
    assert!(json["dateAdded"].is_i64());

    let decoded: Prospect = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, prospect);
    assert_eq!(decoded.name, prospect.name);
    assert_eq!(decoded.email_address, prospect.email_address);
    assert_eq!(decoded.date_added, prospect.date_added);
    assert_eq!(decoded.is_contacted(), prospect.is_contacted());
}
