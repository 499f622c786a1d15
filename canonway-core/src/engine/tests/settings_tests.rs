use crate::engine::{NormalizationSettings, TrailingZero};

//-----------------------------------------------------------------------------
// Defaults
//-----------------------------------------------------------------------------
#[test]
fn defaults_match_the_documented_surface() {
    let settings = NormalizationSettings::default();

    assert!(settings.deslash);
    assert!(settings.nonclean_to_clean);
    assert_eq!(settings.trailing_zero, TrailingZero::Disabled);
    assert!(settings.case_sensitive_urls);
    assert!(!settings.canonical_link);
    assert!(!settings.content_location_header);
    assert!(settings.term_path_handler);
    assert!(settings.frontpage_redirect);
    assert!(!settings.normalize_aliases);
    assert!(!settings.menu_check);
}

//-----------------------------------------------------------------------------
// Trailing-zero decoding
//-----------------------------------------------------------------------------
#[test]
fn trailing_zero_decodes_known_values() {
    assert_eq!(TrailingZero::from_raw(0), TrailingZero::Disabled);
    assert_eq!(TrailingZero::from_raw(1), TrailingZero::AllPages);
    assert_eq!(TrailingZero::from_raw(2), TrailingZero::TaxonomyOnly);
}

#[test]
fn out_of_range_trailing_zero_fails_safe_to_disabled() {
    assert_eq!(TrailingZero::from_raw(3), TrailingZero::Disabled);
    assert_eq!(TrailingZero::from_raw(u64::MAX), TrailingZero::Disabled);
}

#[test]
fn trailing_zero_scope() {
    assert!(!TrailingZero::Disabled.applies_to("taxonomy/term/7/0"));
    assert!(TrailingZero::AllPages.applies_to("node/1/0"));
    assert!(TrailingZero::TaxonomyOnly.applies_to("taxonomy/term/7/0"));
    assert!(!TrailingZero::TaxonomyOnly.applies_to("node/1/0"));
}

//-----------------------------------------------------------------------------
// Deserialization
//-----------------------------------------------------------------------------
#[test]
fn missing_fields_fall_back_to_defaults() {
    let settings: NormalizationSettings = toml::from_str("deslash = false").expect("valid toml");

    assert!(!settings.deslash);
    assert_eq!(
        NormalizationSettings {
            deslash: true,
            ..settings
        },
        NormalizationSettings::default()
    );
}

#[test]
fn trailing_zero_deserializes_from_integer() {
    let settings: NormalizationSettings =
        toml::from_str("trailing_zero = 2").expect("valid toml");

    assert_eq!(settings.trailing_zero, TrailingZero::TaxonomyOnly);
}

#[test]
fn out_of_range_trailing_zero_in_config_is_disabled() {
    let settings: NormalizationSettings =
        toml::from_str("trailing_zero = 9").expect("valid toml");

    assert_eq!(settings.trailing_zero, TrailingZero::Disabled);
}
