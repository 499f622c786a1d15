use crate::lookup::{AliasLookup, StaticAliases, StaticTermPaths, TermPathLookup};

fn aliases() -> StaticAliases {
    let mut aliases = StaticAliases::new();
    aliases.insert("About-Us", "node/5");
    aliases.insert_scoped("ueber-uns", "node/5", Some("de".to_string()));
    aliases.insert("contact", "node/9");
    aliases
}

//-----------------------------------------------------------------------------
// Alias to system path
//-----------------------------------------------------------------------------
#[test]
fn path_by_alias_resolves() {
    assert_eq!(
        aliases().path_by_alias("About-Us", None),
        Some("node/5".to_string())
    );
}

#[test]
fn path_by_alias_is_case_insensitive() {
    assert_eq!(
        aliases().path_by_alias("about-us", None),
        Some("node/5".to_string())
    );
}

#[test]
fn path_by_alias_trims_slashes() {
    assert_eq!(
        aliases().path_by_alias("/contact/", None),
        Some("node/9".to_string())
    );
}

#[test]
fn path_by_alias_miss_is_none() {
    assert_eq!(aliases().path_by_alias("node/1", None), None);
}

#[test]
fn scoped_alias_needs_matching_language() {
    let aliases = aliases();

    assert_eq!(
        aliases.path_by_alias("ueber-uns", Some("de")),
        Some("node/5".to_string())
    );
    assert_eq!(aliases.path_by_alias("ueber-uns", None), None);
}

//-----------------------------------------------------------------------------
// System path to alias
//-----------------------------------------------------------------------------
#[test]
fn alias_by_path_returns_registered_casing() {
    assert_eq!(
        aliases().alias_by_path("node/5", None),
        Some("About-Us".to_string())
    );
}

#[test]
fn alias_by_path_prefers_language_scoped_entry() {
    assert_eq!(
        aliases().alias_by_path("node/5", Some("de")),
        Some("ueber-uns".to_string())
    );
}

#[test]
fn alias_by_path_miss_is_none() {
    assert_eq!(aliases().alias_by_path("node/1", None), None);
}

//-----------------------------------------------------------------------------
// Term paths
//-----------------------------------------------------------------------------
#[test]
fn term_path_lookup_round_trip() {
    let mut terms = StaticTermPaths::new();
    terms.insert(7, "/forum/7/");

    assert_eq!(
        terms.canonical_path_for_term(7),
        Some("forum/7".to_string())
    );
    assert_eq!(terms.canonical_path_for_term(8), None);
}
