use serde_json::{json, Value};
use small_sdk::models::{
    AgentCreateParams, ChunkLocator, ChunkLocatorVariant, PageLocator, SearchMethod, Vault,
    VaultCreateParams,
};
use small_sdk::{FieldState, SdkError, Validate};

#[test]
fn test_required_name_with_unset_description_serializes_minimally() {
    let mut params = VaultCreateParams::new();
    params.set_name("x").unwrap();
    assert_eq!(serde_json::to_string(&params).unwrap(), r#"{"name":"x"}"#);
}

#[test]
fn test_optional_none_equals_never_set() {
    let mut never_set = VaultCreateParams::new();
    never_set.set_name("x").unwrap();

    let mut set_to_none = VaultCreateParams::new();
    set_to_none.set_name("x").unwrap();
    set_to_none
        .set_description(Some("temporary".to_string()))
        .unwrap();
    set_to_none.set_description(None).unwrap();

    assert_eq!(never_set, set_to_none);
    assert_eq!(set_to_none.field_state("description"), FieldState::Absent);
}

#[test]
fn test_optional_nullable_none_is_explicit_null() {
    let mut params = AgentCreateParams::new();
    params.set_name("a").unwrap();
    params.set_instructions("b").unwrap();
    params.set_description(None).unwrap();

    assert_eq!(params.field_state("description"), FieldState::Null);
    let json = serde_json::to_value(&params).unwrap();
    assert_eq!(json.get("description"), Some(&Value::Null));

    let mut unset = AgentCreateParams::new();
    unset.set_name("a").unwrap();
    unset.set_instructions("b").unwrap();
    assert_ne!(params, unset);
}

#[test]
fn test_serialization_round_trip_keeps_unknown_fields() {
    let input = json!({
        "id": "vault_1",
        "name": "Matters",
        "createdAt": "2025-03-01T12:00:00Z",
        "retention": {"days": 30},
        "labels": ["a", "b"]
    });
    let vault: Vault = serde_json::from_value(input.clone()).unwrap();
    let text = serde_json::to_string(&vault).unwrap();
    let again: Vault = serde_json::from_str(&text).unwrap();

    assert_eq!(vault, again);
    assert_eq!(serde_json::to_value(&again).unwrap(), input);
    assert!(again.validate().is_ok());
}

#[test]
fn test_unknown_enum_serialization_fails() {
    let unknown: SearchMethod = serde_json::from_value(json!("quantum")).unwrap();
    assert_eq!(unknown, SearchMethod::Unknown);
    assert!(unknown.validate().is_err());
    assert!(serde_json::to_string(&unknown).is_err());
}

#[test]
fn test_untyped_union_match_fails() {
    let locator: ChunkLocator = serde_json::from_value(json!({"line": 3})).unwrap();
    assert!(matches!(
        locator.match_with(|_| ()),
        Err(SdkError::InvalidData { .. })
    ));
    assert!(locator.into_variant().is_err());
}

#[test]
fn test_typed_union_from_variant() {
    let mut page = PageLocator::new();
    page.set_page(4).unwrap();
    let locator = ChunkLocator::new(page.clone()).unwrap();
    let page_number = locator
        .match_with(|variant| match variant {
            ChunkLocatorVariant::Page(p) => p.page().unwrap(),
            ChunkLocatorVariant::Span(s) => s.start().unwrap(),
        })
        .unwrap();
    assert_eq!(page_number, 4);
    assert_eq!(locator.json(), &json!({"page": 4}));
}

#[test]
fn test_frozen_model_rejects_writes() {
    let mut params = VaultCreateParams::new();
    params.set_name("x").unwrap();
    params.freeze();
    assert!(matches!(
        params.set_name("y"),
        Err(SdkError::FrozenModel { .. })
    ));
    assert_eq!(params.name().unwrap(), "x");
}
