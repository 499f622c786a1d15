use crate::request::QueryPairs;

/// One inbound request, as seen by the decision engine.
///
/// The descriptor is a plain value: the caller extracts everything from its
/// transport layer up front (path, query, language resolution, body
/// presence), and the engine never reaches back into ambient request state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    path: String,
    query: QueryPairs,
    legacy_query_path: bool,
    langcode: Option<String>,
    language_prefix: Option<String>,
    has_post_body: bool,
}

impl RequestDescriptor {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: QueryPairs::new(),
            legacy_query_path: false,
            langcode: None,
            language_prefix: None,
            has_post_body: false,
        }
    }

    pub fn with_query(mut self, query: QueryPairs) -> Self {
        self.query = query;
        self
    }

    /// Marks the path as having arrived through legacy `?q=` indirection
    /// rather than as real path segments. The caller is expected to have
    /// already moved the `q` value into `path` and dropped it from the query.
    pub fn with_legacy_query_path(mut self) -> Self {
        self.legacy_query_path = true;
        self
    }

    /// Language code used to scope alias lookups.
    pub fn with_language(mut self, langcode: impl Into<String>) -> Self {
        self.langcode = Some(langcode.into());
        self
    }

    /// Language path prefix the host would put in front of generated URLs,
    /// e.g. `de`.
    pub fn with_language_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.language_prefix = Some(prefix.trim_matches('/').to_string());
        self
    }

    /// Marks the request as carrying a POST body. The engine refuses to
    /// redirect such requests: the body would be lost in transit.
    pub fn with_post_body(mut self) -> Self {
        self.has_post_body = true;
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The literal request URI as used in rule comparisons: the path with
    /// any leading slash removed. The bare site root becomes `""`.
    pub fn request_uri(&self) -> &str {
        self.path.trim_start_matches('/')
    }

    pub fn query(&self) -> &QueryPairs {
        &self.query
    }

    pub fn is_legacy_query_path(&self) -> bool {
        self.legacy_query_path
    }

    pub fn langcode(&self) -> Option<&str> {
        self.langcode.as_deref()
    }

    pub fn language_prefix(&self) -> Option<&str> {
        self.language_prefix.as_deref()
    }

    pub fn has_post_body(&self) -> bool {
        self.has_post_body
    }
}
