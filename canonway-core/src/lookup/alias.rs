/// Resolves between user-facing aliases and internal system paths.
///
/// Both directions are scoped by an optional language code and report a miss
/// as `None`. A miss is never an error to the engine: the dependent rule
/// simply does not fire.
pub trait AliasLookup {
    /// Resolves an alias to the system path it routes to. `None` when the
    /// alias does not route anywhere.
    fn path_by_alias(&self, alias: &str, langcode: Option<&str>) -> Option<String>;

    /// Returns the canonical alias defined for a system path. `None` when no
    /// alias is defined.
    fn alias_by_path(&self, system_path: &str, langcode: Option<&str>) -> Option<String>;
}

/// In-memory alias table, used by the CLI and by tests.
///
/// Alias resolution matches case-insensitively, like the collation-backed
/// alias storage of the systems this engine fronts; the reverse direction
/// returns the alias exactly as registered, which is what makes canonical
/// casing enforceable.
#[derive(Debug, Clone, Default)]
pub struct StaticAliases {
    entries: Vec<AliasEntry>,
}

#[derive(Debug, Clone)]
struct AliasEntry {
    alias: String,
    path: String,
    lang: Option<String>,
}

impl StaticAliases {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, alias: impl Into<String>, path: impl Into<String>) {
        self.insert_scoped(alias, path, None);
    }

    pub fn insert_scoped(
        &mut self,
        alias: impl Into<String>,
        path: impl Into<String>,
        lang: Option<String>,
    ) {
        self.entries.push(AliasEntry {
            alias: trim_path(alias.into()),
            path: trim_path(path.into()),
            lang,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn scoped<'a>(
        &'a self,
        langcode: Option<&'a str>,
    ) -> impl Iterator<Item = &'a AliasEntry> + 'a {
        // Unscoped entries apply to every language; scoped entries only to
        // their own.
        self.entries
            .iter()
            .filter(move |e| e.lang.is_none() || e.lang.as_deref() == langcode)
    }
}

impl AliasLookup for StaticAliases {
    fn path_by_alias(&self, alias: &str, langcode: Option<&str>) -> Option<String> {
        let alias = alias.trim_matches('/');

        self.scoped(langcode)
            .find(|e| e.alias.eq_ignore_ascii_case(alias))
            .map(|e| e.path.clone())
    }

    fn alias_by_path(&self, system_path: &str, langcode: Option<&str>) -> Option<String> {
        let system_path = system_path.trim_matches('/');

        // A language-scoped alias wins over an unscoped one for the same path.
        let mut fallback = None;
        for entry in self.scoped(langcode) {
            if entry.path != system_path {
                continue;
            }
            if entry.lang.is_some() {
                return Some(entry.alias.clone());
            }
            if fallback.is_none() {
                fallback = Some(entry.alias.clone());
            }
        }

        fallback
    }
}

fn trim_path(raw: String) -> String {
    raw.trim_matches('/').to_string()
}
