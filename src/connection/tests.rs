//! Tests for the connection model

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use test_case::test_case;

// ============================================================================
// Cursor Tests
// ============================================================================

#[test_case(0, "MA==" ; "zero")]
#[test_case(9, "OQ==" ; "single digit")]
#[test_case(42, "NDI=" ; "two digits")]
#[test_case(100, "MTAw" ; "three digits")]
#[test_case(-1, "LTE=" ; "negative")]
fn test_offset_cursor_encoding(offset: i64, token: &str) {
    assert_eq!(Cursor::Offset(offset).encode(), token);
}

#[test]
fn test_offset_cursor_roundtrip() {
    for offset in [0, 1, 9, 10, 99, 1_000_000, -5] {
        let token = Cursor::Offset(offset).encode();
        let decoded = Cursor::opaque(token).to_offset().unwrap();
        assert_eq!(decoded, offset);
    }
}

#[test]
fn test_opaque_cursor_passthrough() {
    let cursor = Cursor::opaque("obj_123");
    assert_eq!(cursor.encode(), "obj_123");
}

#[test]
fn test_offset_cursor_decodes_itself() {
    assert_eq!(Cursor::Offset(7).to_offset().unwrap(), 7);
}

#[test]
fn test_malformed_base64_is_an_error() {
    let err = Cursor::opaque("!!!not-base64!!!").to_offset().unwrap_err();
    assert!(matches!(err, Error::CursorDecode { .. }));
    assert!(err.to_string().contains("!!!not-base64!!!"));
}

#[test]
fn test_non_numeric_token_is_an_error() {
    // base64("hello") - valid base64, not a decimal number
    let err = Cursor::opaque("aGVsbG8=").to_offset().unwrap_err();
    assert!(matches!(err, Error::CursorDecode { .. }));
}

#[test]
fn test_cursor_serializes_as_token() {
    let json = serde_json::to_string(&Cursor::Offset(9)).unwrap();
    assert_eq!(json, "\"OQ==\"");

    let json = serde_json::to_string(&Cursor::opaque("abc")).unwrap();
    assert_eq!(json, "\"abc\"");

    let cursor: Cursor = serde_json::from_str("\"OQ==\"").unwrap();
    assert_eq!(cursor.to_offset().unwrap(), 9);
}

// ============================================================================
// Connection / PageInfo Tests
// ============================================================================

#[test]
fn test_connection_len() {
    let connection = Connection::new(
        vec![Edge::new(Cursor::Offset(0), "a"), Edge::new(Cursor::Offset(1), "b")],
        PageInfo::default(),
    );
    assert_eq!(connection.len(), 2);
    assert!(!connection.is_empty());

    let empty: Connection<&str> = Connection::new(vec![], PageInfo::default());
    assert!(empty.is_empty());
}

#[test]
fn test_page_info_serializes_camel_case() {
    let info = PageInfo {
        has_next_page: true,
        has_previous_page: false,
        start_cursor: Some(Cursor::Offset(0)),
        end_cursor: Some(Cursor::Offset(4)),
    };
    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json["hasNextPage"], true);
    assert_eq!(json["hasPreviousPage"], false);
    assert_eq!(json["startCursor"], "MA==");
    assert_eq!(json["endCursor"], "NA==");
}

// ============================================================================
// PageRequest Tests
// ============================================================================

#[test]
fn test_page_request_default_is_empty() {
    let request = PageRequest::new();
    assert!(request.first.is_none());
    assert!(request.last.is_none());
    assert!(request.before.is_none());
    assert!(request.after.is_none());
}

#[test]
fn test_page_request_forward() {
    let request = PageRequest::forward(Some(Cursor::Offset(9))).with_first(10);
    assert_eq!(request.first, Some(10));
    assert_eq!(request.after, Some(Cursor::Offset(9)));
    assert!(request.before.is_none());
}

#[test]
fn test_page_request_backward() {
    let request = PageRequest::backward(Some(Cursor::Offset(100))).with_last(10);
    assert_eq!(request.last, Some(10));
    assert_eq!(request.before, Some(Cursor::Offset(100)));
    assert!(request.after.is_none());
}
