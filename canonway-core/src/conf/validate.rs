use std::collections::HashSet;

use crate::conf::report::ValidationReport;
use crate::conf::types::ConfigFile;

/// Semantic validation of a parsed config file. IO and TOML syntax failures
/// have already hard-failed by the time this runs.
pub fn validate(config: &ConfigFile) -> ValidationReport {
    let mut report = ValidationReport::new();

    //--------------------------------------------------------------------------
    // Settings
    //--------------------------------------------------------------------------
    if config.settings.trailing_zero > 2 {
        report.trailing_zero_out_of_range(config.settings.trailing_zero);
    }

    //--------------------------------------------------------------------------
    // Alias entries (aliases are unique per language, case-insensitively)
    //--------------------------------------------------------------------------
    let mut seen_aliases: HashSet<(String, Option<&str>)> = HashSet::new();

    for entry in &config.alias {
        let alias = entry.alias.trim_matches('/');
        let path = entry.path.trim_matches('/');

        if alias.is_empty() {
            report.empty_alias(path);
            continue;
        }

        if path.is_empty() {
            report.empty_alias_path(alias);
        }

        if alias.contains("://") || path.contains("://") {
            report.alias_is_not_relative(&entry.alias);
        }

        if !seen_aliases.insert((alias.to_ascii_lowercase(), entry.lang.as_deref())) {
            report.duplicate_alias(alias);
        }

        if alias == path && !path.is_empty() {
            report.alias_matches_its_path(alias);
        }

        if entry.alias != alias || entry.path != path {
            report.alias_has_surrounding_slashes(&entry.alias);
        }
    }

    //--------------------------------------------------------------------------
    // Term entries
    //--------------------------------------------------------------------------
    let mut seen_terms = HashSet::new();

    for entry in &config.term {
        if entry.path.trim_matches('/').is_empty() {
            report.empty_term_path(entry.id);
        }

        if !seen_terms.insert(entry.id) {
            report.duplicate_term(entry.id);
        }
    }

    report
}
