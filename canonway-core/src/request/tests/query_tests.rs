use crate::request::QueryPairs;

fn assert_pairs(raw: &str, expected: &[(&str, &str)]) {
    // Arrange
    let query = QueryPairs::from_raw(raw);

    // Assert
    let got: Vec<(&str, &str)> = query
        .pairs()
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();

    assert_eq!(got, expected);
}

//-----------------------------------------------------------------------------
// Parsing
//-----------------------------------------------------------------------------
#[test]
fn parse_single_pair() {
    assert_pairs("foo=bar", &[("foo", "bar")]);
}

#[test]
fn parse_preserves_arrival_order() {
    assert_pairs("b=2&a=1&c=3", &[("b", "2"), ("a", "1"), ("c", "3")]);
}

#[test]
fn parse_preserves_duplicates() {
    assert_pairs("a=1&a=2", &[("a", "1"), ("a", "2")]);
}

#[test]
fn parse_key_without_value() {
    assert_pairs("flag&foo=bar", &[("flag", ""), ("foo", "bar")]);
}

#[test]
fn parse_empty_string() {
    assert_pairs("", &[]);
}

#[test]
fn parse_decodes_percent_sequences() {
    assert_pairs("name=caf%C3%A9", &[("name", "café")]);
}

#[test]
fn parse_decodes_plus_as_space() {
    assert_pairs("q=hello+world", &[("q", "hello world")]);
}

//-----------------------------------------------------------------------------
// Removal
//-----------------------------------------------------------------------------
#[test]
fn remove_returns_first_value_and_keeps_order() {
    // Arrange
    let mut query = QueryPairs::from_raw("q=node/1&foo=bar&q=other&baz=1");

    // Act
    let removed = query.remove("q");

    // Assert
    assert_eq!(removed.as_deref(), Some("node/1"));
    assert_pairs_eq(&query, &[("foo", "bar"), ("baz", "1")]);
}

#[test]
fn remove_missing_key_is_noop() {
    // Arrange
    let mut query = QueryPairs::from_raw("foo=bar");

    // Act
    let removed = query.remove("q");

    // Assert
    assert_eq!(removed, None);
    assert_pairs_eq(&query, &[("foo", "bar")]);
}

//-----------------------------------------------------------------------------
// Rendering
//-----------------------------------------------------------------------------
#[test]
fn render_round_trips_plain_pairs() {
    let query = QueryPairs::from_raw("foo=bar&baz=1");

    assert_eq!(query.render(), "foo=bar&baz=1");
}

#[test]
fn render_escapes_delimiters() {
    // Arrange
    let mut query = QueryPairs::new();
    query.push("redirect", "a&b=c");

    // Act
    let rendered = query.render();

    // Assert
    assert_eq!(rendered, "redirect=a%26b%3Dc");
    assert_eq!(QueryPairs::from_raw(&rendered), query);
}

#[test]
fn render_empty_is_empty_string() {
    assert_eq!(QueryPairs::new().render(), "");
}

fn assert_pairs_eq(query: &QueryPairs, expected: &[(&str, &str)]) {
    let got: Vec<(&str, &str)> = query
        .pairs()
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();

    assert_eq!(got, expected);
}
