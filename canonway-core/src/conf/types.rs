use serde::Deserialize;

use crate::engine::{NormalizationSettings, TrailingZero};

/// The on-disk configuration format: one TOML file with a `[settings]`
/// table and any number of `[[alias]]` and `[[term]]` entries.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ConfigFile {
    pub settings: SettingsSpec,
    pub alias: Vec<AliasSpec>,
    pub term: Vec<TermSpec>,
}

/// Settings as persisted. `trailing_zero` stays an integer here so that
/// validation can still see an out-of-range raw value before it collapses
/// to disabled.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "snake_case")]
pub struct SettingsSpec {
    pub deslash: bool,
    pub nonclean_to_clean: bool,
    pub trailing_zero: u64,
    pub case_sensitive_urls: bool,
    pub canonical_link: bool,
    pub content_location_header: bool,
    pub term_path_handler: bool,
    pub frontpage_redirect: bool,
    pub normalize_aliases: bool,
    pub menu_check: bool,
}

impl Default for SettingsSpec {
    fn default() -> Self {
        let defaults = NormalizationSettings::default();

        Self {
            deslash: defaults.deslash,
            nonclean_to_clean: defaults.nonclean_to_clean,
            trailing_zero: 0,
            case_sensitive_urls: defaults.case_sensitive_urls,
            canonical_link: defaults.canonical_link,
            content_location_header: defaults.content_location_header,
            term_path_handler: defaults.term_path_handler,
            frontpage_redirect: defaults.frontpage_redirect,
            normalize_aliases: defaults.normalize_aliases,
            menu_check: defaults.menu_check,
        }
    }
}

impl SettingsSpec {
    pub fn build(&self) -> NormalizationSettings {
        NormalizationSettings {
            deslash: self.deslash,
            nonclean_to_clean: self.nonclean_to_clean,
            trailing_zero: TrailingZero::from_raw(self.trailing_zero),
            case_sensitive_urls: self.case_sensitive_urls,
            canonical_link: self.canonical_link,
            content_location_header: self.content_location_header,
            term_path_handler: self.term_path_handler,
            frontpage_redirect: self.frontpage_redirect,
            normalize_aliases: self.normalize_aliases,
            menu_check: self.menu_check,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AliasSpec {
    pub alias: String,
    pub path: String,
    pub lang: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TermSpec {
    pub id: u64,
    pub path: String,
}
