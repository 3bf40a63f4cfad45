//! Tests for the message boundary between raw and typed roles.

use colloquy_core::{Message, Role, WireMessage};
use colloquy_error::{ColloquyErrorKind, RoleErrorKind};
use serde_json::json;

fn wire(role: &str, content: &str) -> WireMessage {
    WireMessage {
        role: role.to_string(),
        content: content.to_string(),
        name: None,
    }
}

#[test]
fn test_message_new_has_no_name() {
    let message = Message::new(Role::User, "Hello!");
    assert_eq!(*message.role(), Role::User);
    assert_eq!(message.content(), "Hello!");
    assert!(message.name().is_none());
}

#[test]
fn test_message_serializes_role_as_tag() {
    let message = Message::new(Role::System, "Be brief.");
    let value = serde_json::to_value(&message).unwrap();
    assert_eq!(value, json!({"role": "system", "content": "Be brief."}));
}

#[test]
fn test_function_message_carries_name() {
    let message = Message::new(Role::Function, "{\"temp\": 21}").with_name("get_weather");
    let value = serde_json::to_value(&message).unwrap();
    assert_eq!(
        value,
        json!({"role": "function", "content": "{\"temp\": 21}", "name": "get_weather"})
    );
}

#[test]
fn test_message_deserializes_from_api_json() {
    let message: Message =
        serde_json::from_value(json!({"role": "assistant", "content": "Hi there"})).unwrap();
    assert_eq!(message, Message::new(Role::Assistant, "Hi there"));
}

#[test]
fn test_message_rejects_unknown_role_json() {
    let result = serde_json::from_value::<Message>(json!({"role": "tool", "content": "x"}));
    assert!(result.is_err());
}

#[test]
fn test_wire_message_converts_known_roles() {
    for role in Role::ALL {
        let message = Message::try_from(wire(role.as_tag(), "content")).unwrap();
        assert_eq!(*message.role(), role);
        assert_eq!(message.content(), "content");
    }
}

#[test]
fn test_wire_message_rejects_unknown_role() {
    let err = Message::try_from(wire("Assistant", "content")).unwrap_err();
    match err.kind() {
        ColloquyErrorKind::Role(role_err) => {
            assert_eq!(
                role_err.kind,
                RoleErrorKind::UnknownTag("Assistant".to_string())
            );
        }
        other => panic!("expected role error, got {other:?}"),
    }
}

#[test]
fn test_message_to_wire_keeps_fields() {
    let message = Message::new(Role::Function, "done").with_name("run_job");
    let raw = message.to_wire();
    assert_eq!(raw.role, "function");
    assert_eq!(raw.content, "done");
    assert_eq!(raw.name.as_deref(), Some("run_job"));

    assert_eq!(Message::try_from(raw).unwrap(), message);
}
