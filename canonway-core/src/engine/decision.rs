use crate::request::QueryPairs;
use http::StatusCode;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::{Serialize, Serializer};

/// Characters escaped when a path is rendered into a `Location` value.
/// `/` stays literal: the path is already split into segments.
const PATH_COMPONENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'%');

/// The outcome of one engine invocation.
///
/// Exactly one decision is produced per request. A `NoRedirect` may carry an
/// advisory (canonical link, `Content-Location`) for the caller to emit; a
/// `Redirect` carries the full target. The engine never produces anything
/// else: lookup misses and malformed input all collapse into `NoRedirect`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum RedirectDecision {
    NoRedirect { advisory: Option<Advisory> },
    Redirect { target: RedirectTarget },
}

impl RedirectDecision {
    pub fn no_redirect() -> Self {
        Self::NoRedirect { advisory: None }
    }

    pub fn redirect(path: impl Into<String>, query: QueryPairs) -> Self {
        Self::Redirect {
            target: RedirectTarget::permanent(path, query),
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect { .. })
    }

    pub fn target(&self) -> Option<&RedirectTarget> {
        match self {
            Self::Redirect { target } => Some(target),
            Self::NoRedirect { .. } => None,
        }
    }

    pub fn advisory(&self) -> Option<&Advisory> {
        match self {
            Self::NoRedirect { advisory } => advisory.as_ref(),
            Self::Redirect { .. } => None,
        }
    }
}

/// Where a redirected request should land.
///
/// `path` is host-relative without a leading slash (the site root is the
/// empty string); `query` is carried over from the original request. Every
/// rule in this engine redirects permanently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedirectTarget {
    pub path: String,
    pub query: QueryPairs,
    #[serde(serialize_with = "serialize_status")]
    pub status: StatusCode,
}

impl RedirectTarget {
    pub fn permanent(path: impl Into<String>, query: QueryPairs) -> Self {
        Self {
            path: path.into(),
            query,
            status: StatusCode::MOVED_PERMANENTLY,
        }
    }

    /// Renders the host-relative `Location` value: `/path?query`, with path
    /// segments percent-encoded. The caller prepends scheme and host to make
    /// it absolute, per the wire contract.
    pub fn location(&self) -> String {
        render_location(&self.path, &self.query)
    }
}

/// `/path?query` with the path percent-encoded and the site root rendering
/// as a bare `/`.
pub(crate) fn render_location(path: &str, query: &QueryPairs) -> String {
    let mut out = String::from("/");
    out.push_str(&utf8_percent_encode(path, PATH_COMPONENT).to_string());

    if !query.is_empty() {
        out.push('?');
        out.push_str(&query.render());
    }

    out
}

/// Auxiliary output for requests that stay put: values for a canonical
/// `<link>` and/or a `Content-Location` header. The engine only computes the
/// target strings; injecting them into the response is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advisory {
    pub canonical_link: Option<String>,
    pub content_location: Option<String>,
}

impl Advisory {
    pub fn is_empty(&self) -> bool {
        self.canonical_link.is_none() && self.content_location.is_none()
    }
}

fn serialize_status<S>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u16(status.as_u16())
}
