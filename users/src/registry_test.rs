use super::*;

fn user(id: &str) -> MockUser {
    MockUser {
        id: id.to_owned(),
        first_name: "First".to_owned(),
        last_name: "Last".to_owned(),
        image_url: "/logo.png".to_owned(),
        email_addresses: Vec::new(),
    }
}

// =============================================================================
// construction
// =============================================================================

#[test]
fn builtin_has_alice_bob_carol_in_order() {
    let registry = Registry::builtin();
    let names: Vec<_> = registry.users().iter().map(|u| u.first_name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    assert_eq!(registry.default_user_id(), DEFAULT_MOCK_USER_ID);
}

#[test]
fn new_rejects_empty_roster() {
    assert!(matches!(Registry::new(Vec::new()), Err(RegistryError::Empty)));
}

#[test]
fn new_rejects_duplicate_ids() {
    let err = Registry::new(vec![user("a"), user("b"), user("a")]).unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateId(ref id) if id == "a"));
}

#[test]
fn default_is_first_entry_of_custom_roster() {
    let registry = Registry::new(vec![user("zed"), user("amy")]).unwrap();
    assert_eq!(registry.default_user_id(), "zed");
}

#[test]
fn from_yaml_reads_camel_case_fields() {
    let raw = r#"
- id: dev-1
  firstName: Dana
  lastName: Dev
  imageUrl: https://img.clerk.com/dana.png
  emailAddresses:
    - emailAddress: dana@dev.test
- id: dev-2
  firstName: Eli
  lastName: Dev
  imageUrl: /logo.png
"#;
    let registry = Registry::from_yaml(raw).unwrap();
    assert_eq!(registry.default_user_id(), "dev-1");
    assert_eq!(registry.get("dev-1").primary_email(), Some("dana@dev.test"));
    assert!(registry.get("dev-2").email_addresses.is_empty());
}

#[test]
fn from_yaml_reports_parse_errors() {
    assert!(matches!(Registry::from_yaml("not: [a list"), Err(RegistryError::Parse(_))));
}

#[test]
fn from_yaml_empty_sequence_is_empty_error() {
    assert!(matches!(Registry::from_yaml("[]"), Err(RegistryError::Empty)));
}

// =============================================================================
// lookup
// =============================================================================

#[test]
fn get_returns_matching_record_for_every_registered_id() {
    let registry = Registry::builtin();
    for u in registry.users() {
        assert_eq!(registry.get(&u.id).id, u.id);
    }
}

#[test]
fn get_unknown_id_returns_default_record() {
    let registry = Registry::builtin();
    let default = registry.get(DEFAULT_MOCK_USER_ID);
    for id in ["nonexistent", "", "MOCK-USER-2", " mock-user-2"] {
        assert_eq!(registry.get(id), default, "id {id:?}");
    }
}

#[test]
fn find_distinguishes_absence() {
    let registry = Registry::builtin();
    assert!(registry.find("mock-user-3").is_some());
    assert!(registry.find("nonexistent").is_none());
    assert!(registry.contains("mock-user-2"));
    assert!(!registry.contains("nonexistent"));
}

#[test]
fn resolve_id_falls_back_to_default() {
    let registry = Registry::builtin();
    assert_eq!(registry.resolve_id(None), DEFAULT_MOCK_USER_ID);
    assert_eq!(registry.resolve_id(Some("nonexistent")), DEFAULT_MOCK_USER_ID);
    assert_eq!(registry.resolve_id(Some("mock-user-2")), "mock-user-2");
}

#[test]
fn resolve_scenario_alice_bob_carol() {
    let registry = Registry::builtin();
    assert_eq!(registry.resolve(None).first_name, "Alice");
    assert_eq!(registry.resolve(Some("mock-user-2")).first_name, "Bob");
    assert_eq!(registry.resolve(Some("nonexistent")).first_name, "Alice");
}

// =============================================================================
// MockUser
// =============================================================================

#[test]
fn full_name_joins_and_trims() {
    let mut u = user("x");
    assert_eq!(u.full_name(), "First Last");
    u.last_name.clear();
    assert_eq!(u.full_name(), "First");
}

#[test]
fn serializes_with_provider_field_names() {
    let json = serde_json::to_value(Registry::builtin().default_user()).unwrap();
    assert_eq!(json["id"], "mock-user-1");
    assert_eq!(json["firstName"], "Alice");
    assert_eq!(json["lastName"], "Test");
    assert_eq!(json["imageUrl"], "/logo.png");
    assert_eq!(json["emailAddresses"][0]["emailAddress"], "alice@test.com");
}
