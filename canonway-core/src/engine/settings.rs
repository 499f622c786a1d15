use serde::{Deserialize, Deserializer};

/// Read-only settings snapshot consumed per request.
///
/// Lifecycle (persistence, reload) belongs to the host; the engine only ever
/// reads one immutable snapshot per invocation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct NormalizationSettings {
    /// Strip trailing slashes from request paths.
    pub deslash: bool,
    /// Collapse legacy `?q=` requests onto their clean path.
    pub nonclean_to_clean: bool,
    /// Strip a trailing `/0` argument before alias comparison.
    pub trailing_zero: TrailingZero,
    /// Treat alias casing as significant when comparing against the request.
    pub case_sensitive_urls: bool,
    /// Attach a canonical `<link>` advisory to non-redirected requests.
    pub canonical_link: bool,
    /// Attach a `Content-Location` advisory to non-redirected requests.
    pub content_location_header: bool,
    /// Rewrite `taxonomy/term/N` onto the term's canonical handler path.
    pub term_path_handler: bool,
    /// Send requests for the configured front page to the site root.
    pub frontpage_redirect: bool,
    /// Independently enforce the canonical alias for the requested path.
    pub normalize_aliases: bool,
    /// Menu/access checking is delegated entirely to the host; the flag is
    /// carried so one snapshot can describe a whole installation.
    pub menu_check: bool,
}

impl Default for NormalizationSettings {
    fn default() -> Self {
        Self {
            deslash: true,
            nonclean_to_clean: true,
            trailing_zero: TrailingZero::Disabled,
            case_sensitive_urls: true,
            canonical_link: false,
            content_location_header: false,
            term_path_handler: true,
            frontpage_redirect: true,
            normalize_aliases: false,
            menu_check: false,
        }
    }
}

/// Scope of the trailing-`/0` stripping rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrailingZero {
    #[default]
    Disabled,
    AllPages,
    TaxonomyOnly,
}

impl TrailingZero {
    /// Decodes the persisted integer form. Anything out of range decodes to
    /// `Disabled`: uninterpretable configuration must never cause a redirect.
    pub fn from_raw(raw: u64) -> Self {
        match raw {
            1 => Self::AllPages,
            2 => Self::TaxonomyOnly,
            _ => Self::Disabled,
        }
    }

    pub fn applies_to(self, path: &str) -> bool {
        match self {
            Self::Disabled => false,
            Self::AllPages => true,
            Self::TaxonomyOnly => path.starts_with("taxonomy/term/"),
        }
    }
}

impl<'de> Deserialize<'de> for TrailingZero {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = u64::deserialize(deserializer)?;

        Ok(Self::from_raw(raw))
    }
}
