//! Tests for tracing subscriber setup.

use colloquy_core::{Message, Role, WireMessage, init_tracing};
use colloquy_error::ColloquyErrorKind;

#[test]
fn test_init_tracing_installs_once() {
    init_tracing("colloquy_core=debug").unwrap();

    // Conversion logs through the installed subscriber
    let raw = WireMessage {
        role: "moderator".to_string(),
        content: "hi".to_string(),
        name: None,
    };
    assert!(Message::try_from(raw).is_err());
    assert!(Message::try_from(Message::new(Role::User, "hi").to_wire()).is_ok());

    let err = init_tracing("colloquy_core=debug").unwrap_err();
    assert!(matches!(err.kind(), ColloquyErrorKind::Observability(_)));
}
