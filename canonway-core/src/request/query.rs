use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use serde::Serialize;

/// Characters escaped when a key or value is rendered back onto the wire.
/// Delimiters (`&`, `=`, `+`, `#`) must round-trip through a parse without
/// changing the pair structure.
const QUERY_COMPONENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'&')
    .add(b'=')
    .add(b'+')
    .add(b'%');

/// Query parameters of one request, in arrival order.
///
/// Duplicate keys are preserved: `a=1&a=2` stays two pairs, and removing a
/// key never reorders the survivors. Values are stored decoded; rendering
/// re-applies percent-encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryPairs {
    pairs: Vec<(String, String)>,
}

impl QueryPairs {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Parses a raw query string (`foo=bar&baz=1`). A part without `=` becomes
    /// a pair with an empty value. `+` decodes to a space, matching how form
    /// submissions arrive.
    pub fn from_raw(raw: &str) -> Self {
        let mut pairs = Vec::new();

        for part in raw.split('&') {
            if part.is_empty() {
                continue;
            }

            let (key, value) = match part.split_once('=') {
                Some((k, v)) => (k, v),
                None => (part, ""),
            };

            pairs.push((decode_component(key), decode_component(value)));
        }

        Self { pairs }
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Removes every pair with the given key, returning the first removed
    /// value. The remaining pairs keep their order.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let mut removed = None;

        self.pairs.retain(|(k, v)| {
            if k == key {
                if removed.is_none() {
                    removed = Some(v.clone());
                }
                false
            } else {
                true
            }
        });

        removed
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Renders the pairs back into a wire query string, percent-encoding each
    /// component. Empty pairs render as an empty string.
    pub fn render(&self) -> String {
        let mut out = String::new();

        for (key, value) in &self.pairs {
            if !out.is_empty() {
                out.push('&');
            }
            out.push_str(&utf8_percent_encode(key, QUERY_COMPONENT).to_string());
            out.push('=');
            out.push_str(&utf8_percent_encode(value, QUERY_COMPONENT).to_string());
        }

        out
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");

    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
