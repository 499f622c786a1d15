use tracing::{debug, trace};

use crate::engine::decision::{Advisory, RedirectDecision, render_location};
use crate::engine::settings::NormalizationSettings;
use crate::lookup::{AliasLookup, TermPathLookup};
use crate::request::RequestDescriptor;

/// Decides whether one request must be answered with a permanent redirect,
/// and to where.
///
/// The rules run in a fixed order and the first one that fires wins. Rules
/// that adjust the working path (trailing zero, term paths) do not redirect
/// by themselves; their result surfaces through the alias comparison. The
/// function is pure: it never errors, never panics, and a lookup miss only
/// means the dependent rule does not fire.
///
/// `is_front_page` is the host's verdict on whether the resolved path is the
/// configured front page; the engine cannot know that on its own.
pub fn decide(
    request: &RequestDescriptor,
    settings: &NormalizationSettings,
    aliases: &dyn AliasLookup,
    term_paths: &dyn TermPathLookup,
    is_front_page: bool,
) -> RedirectDecision {
    // A full URL in the path slot is not a relative path at all; nothing
    // here applies to it.
    if request.path().contains("://") {
        return RedirectDecision::no_redirect();
    }

    // Redirecting a posted request would drop the body in transit.
    if request.has_post_body() {
        return RedirectDecision::no_redirect();
    }

    let uri = request.request_uri();
    let langcode = request.langcode();
    let prefix = request.language_prefix();

    // Legacy ?q= indirection: act on the raw input before spending alias or
    // language resolution on a path we are about to discard.
    if settings.nonclean_to_clean && request.is_legacy_query_path() {
        debug!(path = %uri, "redirecting legacy query-indirected request");
        return RedirectDecision::redirect(uri, request.query().clone());
    }

    // Deslash. Only fires when the stripped path is routable: stripping must
    // not invent a redirect to nowhere.
    if settings.deslash && uri.ends_with('/') {
        let stripped = uri.trim_end_matches('/');
        let resolvable = strip_language_prefix(stripped, prefix);

        if !resolvable.is_empty() {
            if let Some(system) = aliases.path_by_alias(resolvable, langcode) {
                // Land on the canonical casing in one hop when the alias
                // only differs from the request by case.
                let target = match aliases.alias_by_path(&system, langcode) {
                    Some(alias)
                        if settings.case_sensitive_urls
                            && alias.eq_ignore_ascii_case(resolvable) =>
                    {
                        join_prefix(prefix, &alias)
                    }
                    _ => stripped.to_string(),
                };

                debug!(from = %uri, to = %target, "deslashing request path");
                return RedirectDecision::redirect(target, request.query().clone());
            }
        }
    }

    // Front page. A front-page request that is not already at the root (or
    // its language-prefixed root) goes there; one that is stays put, and no
    // later rule reconsiders it.
    if settings.frontpage_redirect && is_front_page {
        let root = prefix.unwrap_or("");

        if uri == root {
            return RedirectDecision::NoRedirect {
                advisory: advisory(settings, root, request),
            };
        }

        debug!(path = %uri, "redirecting front-page path to site root");
        return RedirectDecision::redirect(root, request.query().clone());
    }

    // Working path threaded through the remaining rules. It starts as the
    // system path behind the request (or the bare request when nothing
    // routes there); the trailing-zero and term-path rules are the only
    // mutation points.
    let literal = strip_language_prefix(uri.trim_matches('/'), prefix);
    let mut working = aliases
        .path_by_alias(literal, langcode)
        .unwrap_or_else(|| literal.to_string());
    let mut rewrote = false;

    // Trailing zero: adjusts the compared path, never redirects alone.
    if settings.trailing_zero.applies_to(&working) {
        if let Some(stripped) = working.strip_suffix("/0") {
            trace!(from = %working, "stripping trailing zero argument");
            working = stripped.to_string();
            rewrote = true;
        }
    }

    // Taxonomy terms: swap in the canonical handler path, feeding the alias
    // comparison below.
    if settings.term_path_handler {
        if let Some(term_id) = taxonomy_term_id(&working) {
            if let Some(canonical) = term_paths.canonical_path_for_term(term_id) {
                let canonical = canonical.trim_matches('/');

                if canonical != working {
                    trace!(term = term_id, to = %canonical, "replacing term path with its handler path");
                    working = canonical.to_string();
                    rewrote = true;
                }
            }
        }
    }

    // Alias comparison: the one place a normalized working path turns into a
    // redirect. On a lookup miss the working path itself is only a valid
    // target if a rule above actually produced it.
    let canonical_alias = aliases.alias_by_path(&working, langcode);
    let alias = match &canonical_alias {
        Some(alias) => Some(alias.clone()),
        None if rewrote => Some(working.clone()),
        None => None,
    };

    if let Some(mut alias) = alias {
        if !settings.case_sensitive_urls && alias.eq_ignore_ascii_case(literal) {
            alias = literal.to_string();
        }

        let expected = join_prefix(prefix, &alias);

        if uri != expected {
            // A delta that is only the trailing slash belongs to the deslash
            // rule; when that rule is off, honor its choice.
            let slash_delta_only = uri.trim_end_matches('/') == expected;

            if !(slash_delta_only && !settings.deslash) {
                debug!(from = %uri, to = %expected, "redirecting to canonical alias");
                return RedirectDecision::redirect(expected, request.query().clone());
            }
        }
    }

    // Normalize aliases: softer, independently flagged enforcement of the
    // canonical alias for what was literally requested.
    if settings.normalize_aliases && !literal.is_empty() {
        let system = aliases
            .path_by_alias(literal, langcode)
            .unwrap_or_else(|| literal.to_string());

        if let Some(canonical) = aliases.alias_by_path(&system, langcode) {
            if canonical != literal {
                debug!(from = %literal, to = %canonical, "normalizing requested alias");
                return RedirectDecision::redirect(
                    join_prefix(prefix, &canonical),
                    request.query().clone(),
                );
            }
        }
    }

    let advisory_target = canonical_alias
        .map(|alias| join_prefix(prefix, &alias))
        .unwrap_or_else(|| uri.to_string());

    RedirectDecision::NoRedirect {
        advisory: advisory(settings, &advisory_target, request),
    }
}

fn advisory(
    settings: &NormalizationSettings,
    target_path: &str,
    request: &RequestDescriptor,
) -> Option<Advisory> {
    if !settings.canonical_link && !settings.content_location_header {
        return None;
    }

    let location = render_location(target_path, request.query());

    Some(Advisory {
        canonical_link: settings.canonical_link.then(|| location.clone()),
        content_location: settings.content_location_header.then_some(location),
    })
}

/// Extracts the term ID from a `taxonomy/term/<digits>` working path.
/// Paths with a depth modifier or any trailing segments do not match.
fn taxonomy_term_id(path: &str) -> Option<u64> {
    let rest = path.strip_prefix("taxonomy/term/")?;

    if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    rest.parse().ok()
}

/// Removes the language prefix segment from a literal path, if present.
fn strip_language_prefix<'a>(path: &'a str, prefix: Option<&str>) -> &'a str {
    match prefix {
        Some(p) if !p.is_empty() => {
            if path == p {
                ""
            } else {
                path.strip_prefix(p)
                    .and_then(|rest| rest.strip_prefix('/'))
                    .unwrap_or(path)
            }
        }
        _ => path,
    }
}

/// Joins the language prefix back onto an alias when building a target.
fn join_prefix(prefix: Option<&str>, alias: &str) -> String {
    match prefix {
        Some(p) if !p.is_empty() && !alias.is_empty() => format!("{p}/{alias}"),
        Some(p) if !p.is_empty() => p.to_string(),
        _ => alias.to_string(),
    }
}
