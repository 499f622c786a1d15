use std::collections::HashMap;

/// Maps a taxonomy-term ID to the canonical path its handler serves it at.
pub trait TermPathLookup {
    fn canonical_path_for_term(&self, term_id: u64) -> Option<String>;
}

/// In-memory term-path table, used by the CLI and by tests.
#[derive(Debug, Clone, Default)]
pub struct StaticTermPaths {
    paths: HashMap<u64, String>,
}

impl StaticTermPaths {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, term_id: u64, path: impl Into<String>) {
        self.paths
            .insert(term_id, path.into().trim_matches('/').to_string());
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl TermPathLookup for StaticTermPaths {
    fn canonical_path_for_term(&self, term_id: u64) -> Option<String> {
        self.paths.get(&term_id).cloned()
    }
}
