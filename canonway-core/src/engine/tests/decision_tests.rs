use crate::engine::{RedirectDecision, RedirectTarget};
use crate::request::QueryPairs;

//-----------------------------------------------------------------------------
// Location rendering
//-----------------------------------------------------------------------------
#[test]
fn location_of_site_root_is_bare_slash() {
    let target = RedirectTarget::permanent("", QueryPairs::new());

    assert_eq!(target.location(), "/");
}

#[test]
fn location_joins_path_and_query() {
    let target = RedirectTarget::permanent("node/1", QueryPairs::from_raw("foo=bar&baz=1"));

    assert_eq!(target.location(), "/node/1?foo=bar&baz=1");
}

#[test]
fn location_percent_encodes_path() {
    let target = RedirectTarget::permanent("press kit/2024", QueryPairs::new());

    assert_eq!(target.location(), "/press%20kit/2024");
}

#[test]
fn status_is_always_moved_permanently() {
    let target = RedirectTarget::permanent("node/1", QueryPairs::new());

    assert_eq!(target.status.as_u16(), 301);
}

//-----------------------------------------------------------------------------
// Serialization (consumed by the eval CLI)
//-----------------------------------------------------------------------------
#[test]
fn redirect_serializes_with_tag_and_numeric_status() {
    // Arrange
    let decision = RedirectDecision::redirect("node/1", QueryPairs::from_raw("foo=bar"));

    // Act
    let json = serde_json::to_value(&decision).expect("serializable decision");

    // Assert
    assert_eq!(json["decision"], "redirect");
    assert_eq!(json["target"]["path"], "node/1");
    assert_eq!(json["target"]["status"], 301);
}

#[test]
fn no_redirect_serializes_with_tag() {
    let decision = RedirectDecision::no_redirect();

    let json = serde_json::to_value(&decision).expect("serializable decision");

    assert_eq!(json["decision"], "no_redirect");
    assert!(json["advisory"].is_null());
}
