//! Integration tests for Presentify
//!
//! These tests exercise the presenter layer end to end, from typed source
//! records to serialized JSON views.

use presentify::prelude::*;
use serde::Serialize;

// =============================================================================
// Test Fixtures
// =============================================================================

#[derive(Debug, Clone, Serialize)]
struct Profile {
    email: String,
    city: String,
}

#[derive(Debug, Clone, Serialize)]
struct User {
    username: String,
    password: String,
    first_name: String,
    last_name: String,
    sign_in_count: u64,
    profile: Profile,
}

impl User {
    fn new(username: &str, first: &str, last: &str, email: &str, city: &str) -> Self {
        Self {
            username: username.to_string(),
            password: "hunter2".to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            sign_in_count: 42,
            profile: Profile {
                email: email.to_string(),
                city: city.to_string(),
            },
        }
    }

    fn sample() -> Self {
        Self::new("anna", "Anna", "Petrenko", "anna@example.com", "Kyiv")
    }
}

fn sample_users() -> Vec<User> {
    vec![
        User::new("anna", "Anna", "Petrenko", "anna@example.com", "Kyiv"),
        User::new("boris", "Boris", "Danyliv", "boris@example.com", "Lviv"),
        User::new("clara", "Clara", "Moroz", "clara@example.com", "Odesa"),
    ]
}

/// The public view of a user record
struct UserPresenter;

impl Present for UserPresenter {
    fn attribute_map() -> AttributeMap {
        AttributeMap::builder()
            .path("name", "username")
            .path("email", "profile.email")
            .path("city", "profile.city")
            .derived("full_name", |model| {
                let first = model
                    .path("first_name")
                    .and_then(|v| v.as_str())
                    .unwrap_or_default();
                let last = model
                    .path("last_name")
                    .and_then(|v| v.as_str())
                    .unwrap_or_default();
                Ok(json!(format!("{} {}", first, last)))
            })
            .build()
    }
}

/// An internal view exposing account activity
struct AdminUserPresenter;

impl Present for AdminUserPresenter {
    fn attribute_map() -> AttributeMap {
        AttributeMap::builder()
            .path("name", "username")
            .path("email", "profile.email")
            .path("sign_ins", "sign_in_count")
            .build()
    }
}

/// A view whose derivation always fails
struct FlakyPresenter;

impl Present for FlakyPresenter {
    fn attribute_map() -> AttributeMap {
        AttributeMap::builder()
            .path("name", "username")
            .derived("broken", |_model| Err("upstream unavailable".into()))
            .build()
    }
}

// =============================================================================
// Attribute Resolution Tests
// =============================================================================

#[test]
fn test_declared_path_resolves_to_model_value() {
    let presenter = UserPresenter::present(User::sample()).unwrap();

    assert_eq!(presenter.get("name").unwrap(), json!("anna"));
}

#[test]
fn test_nested_path_traversal() {
    let presenter = UserPresenter::present(User::sample()).unwrap();

    assert_eq!(presenter.get("email").unwrap(), json!("anna@example.com"));
    assert_eq!(presenter.get("city").unwrap(), json!("Kyiv"));
}

#[test]
fn test_partial_path_resolves_to_null() {
    let map = AttributeMap::builder()
        .path("phone", "profile.phone")
        .path("deep", "profile.email.domain")
        .build();
    let presenter = Presenter::wrap(map, User::sample()).unwrap();

    // Missing tail segment
    assert_eq!(presenter.get("phone").unwrap(), Value::Null);
    // Traversal into a scalar
    assert_eq!(presenter.get("deep").unwrap(), Value::Null);
}

#[test]
fn test_derived_attribute_computes_from_model() {
    let presenter = UserPresenter::present(User::sample()).unwrap();

    assert_eq!(presenter.get("full_name").unwrap(), json!("Anna Petrenko"));
}

#[test]
fn test_undeclared_attribute_is_an_error() {
    let presenter = UserPresenter::present(User::sample()).unwrap();

    let err = presenter.get("nickname").unwrap_err();
    assert!(matches!(err, PresenterError::AttributeNotFound(_)));
}

#[test]
fn test_undeclared_source_fields_stay_hidden() {
    let presenter = UserPresenter::present(User::sample()).unwrap();

    // The wrapped model carries the field, the declared surface does not
    assert!(presenter.model().contains("password"));
    assert!(matches!(
        presenter.get("password").unwrap_err(),
        PresenterError::AttributeNotFound(_)
    ));
}

#[test]
fn test_declared_order_is_preserved() {
    let presenter = UserPresenter::present(User::sample()).unwrap();

    assert_eq!(
        presenter.attribute_map().names(),
        vec!["name", "email", "city", "full_name"]
    );
}

#[test]
fn test_presenting_a_non_record_source_fails() {
    let err = UserPresenter::present(json!([1, 2, 3])).unwrap_err();

    match err {
        PresentifyError::Model(ModelError::NotAnObject(kind)) => assert_eq!(kind, "array"),
        other => panic!("expected a model error, got {:?}", other),
    }
}

// =============================================================================
// Write Protection Tests
// =============================================================================

#[test]
fn test_every_write_is_denied() {
    let presenter = UserPresenter::present(User::sample()).unwrap();

    for name in ["name", "full_name", "undeclared"] {
        let err = presenter.set(name, json!("new value")).unwrap_err();
        assert!(matches!(err, PresenterError::ModificationDenied(_)));
    }
}

#[test]
fn test_denied_write_leaves_the_view_intact() {
    let presenter = UserPresenter::present(User::sample()).unwrap();
    let before = presenter.to_value().unwrap();

    let _ = presenter.set("name", json!("mallory"));

    assert_eq!(presenter.to_value().unwrap(), before);
    assert_eq!(presenter.model().get("username").unwrap(), &json!("anna"));
}

// =============================================================================
// Serialization Tests
// =============================================================================

#[test]
fn test_to_json_follows_declared_order() {
    let presenter = UserPresenter::present(User::sample()).unwrap();

    assert_eq!(
        presenter.to_json().unwrap(),
        r#"{"name":"anna","email":"anna@example.com","city":"Kyiv","full_name":"Anna Petrenko"}"#
    );
}

#[test]
fn test_serde_serialization_matches_to_json() {
    let presenter = UserPresenter::present(User::sample()).unwrap();

    let direct = serde_json::to_string(&presenter).unwrap();
    assert_eq!(direct, presenter.to_json().unwrap());
}

#[test]
fn test_json_round_trip() {
    let presenter = UserPresenter::present(User::sample()).unwrap();

    let json = presenter.to_json().unwrap();
    let parsed: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, presenter.to_value().unwrap());
}

#[test]
fn test_display_writes_json() {
    let presenter = UserPresenter::present(User::sample()).unwrap();

    assert_eq!(format!("{}", presenter), presenter.to_json().unwrap());
}

// =============================================================================
// Collection Tests
// =============================================================================

#[test]
fn test_collection_presents_in_input_order() {
    let presented = sample_users().present::<UserPresenter>().unwrap();

    assert_eq!(presented.len(), 3);
    let names: Vec<Value> = presented.iter().map(|p| p.get("name").unwrap()).collect();
    assert_eq!(names, vec![json!("anna"), json!("boris"), json!("clara")]);
}

#[test]
fn test_present_all_equals_collection_ext() {
    let via_trait = UserPresenter::present_all(sample_users()).unwrap();
    let via_ext = sample_users().present::<UserPresenter>().unwrap();

    assert_eq!(via_trait.to_value().unwrap(), via_ext.to_value().unwrap());
}

#[test]
fn test_collection_failure_returns_no_partial_result() {
    let items = vec![
        json!({ "username": "anna" }),
        json!("not a record"),
        json!({ "username": "clara" }),
    ];

    let err = items.present::<UserPresenter>().unwrap_err();
    match err {
        PresentifyError::Model(ModelError::NotAnObject(kind)) => assert_eq!(kind, "string"),
        other => panic!("expected a model error, got {:?}", other),
    }
}

#[test]
fn test_collection_serializes_as_an_array() {
    let presented = sample_users().present::<UserPresenter>().unwrap();

    let body = serde_json::to_string(&presented).unwrap();
    assert!(body.starts_with('['));
    assert_eq!(body, presented.to_json().unwrap());
}

// =============================================================================
// Error Tests
// =============================================================================

#[test]
fn test_attribute_not_found_display() {
    let error = PresenterError::AttributeNotFound("nickname".to_string());
    let msg = format!("{}", error);
    assert!(msg.contains("nickname"));
    assert!(msg.contains("not found"));
}

#[test]
fn test_modification_denied_display() {
    let error = PresenterError::ModificationDenied("name".to_string());
    let msg = format!("{}", error);
    assert!(msg.contains("name"));
    assert!(msg.contains("not allowed"));
}

#[test]
fn test_model_error_display() {
    let error = ModelError::NotAnObject("string");
    let msg = format!("{}", error);
    assert!(msg.contains("should be an object"));
    assert!(msg.contains("string"));
}

#[test]
fn test_derivation_failure_carries_its_cause() {
    let presenter = FlakyPresenter::present(User::sample()).unwrap();

    let err = presenter.get("broken").unwrap_err();
    assert!(matches!(err, PresenterError::Derivation { .. }));
    assert!(format!("{}", err).contains("broken"));

    let source = std::error::Error::source(&err);
    assert!(source.is_some());
    assert_eq!(format!("{}", source.unwrap()), "upstream unavailable");
}

// =============================================================================
// Concurrency Tests
// =============================================================================

#[test]
fn test_presenters_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<Model>();
    assert_send_sync::<AttributeMap>();
    assert_send_sync::<Presenter>();
    assert_send_sync::<Presented>();

    let presenter = std::sync::Arc::new(UserPresenter::present(User::sample()).unwrap());
    let workers: Vec<_> = (0..4)
        .map(|_| {
            let shared = std::sync::Arc::clone(&presenter);
            std::thread::spawn(move || shared.get("full_name").unwrap())
        })
        .collect();

    for worker in workers {
        assert_eq!(worker.join().unwrap(), json!("Anna Petrenko"));
    }
}

// =============================================================================
// Real-World Scenario Tests
// =============================================================================

/// Simulates building an API response body from a query result
#[test]
fn test_api_response_scenario() {
    let body = sample_users()
        .present::<UserPresenter>()
        .unwrap()
        .to_json()
        .unwrap();

    // Sensitive fields never leak into the response body
    assert!(!body.contains("password"));
    assert!(!body.contains("hunter2"));

    let parsed: Value = serde_json::from_str(&body).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["name"], json!("anna"));
    assert_eq!(rows[2]["full_name"], json!("Clara Moroz"));
}

/// Two presenter types expose different views of the same record
#[test]
fn test_multiple_views_over_one_record_scenario() {
    let user = User::sample();

    let public = UserPresenter::present(&user).unwrap();
    let admin = AdminUserPresenter::present(&user).unwrap();

    assert_eq!(
        public.attribute_map().names(),
        vec!["name", "email", "city", "full_name"]
    );
    assert_eq!(
        admin.attribute_map().names(),
        vec!["name", "email", "sign_ins"]
    );

    assert_eq!(admin.get("sign_ins").unwrap(), json!(42));
    assert!(matches!(
        public.get("sign_ins").unwrap_err(),
        PresenterError::AttributeNotFound(_)
    ));
}
