use canonway_core::engine::{NormalizationSettings, RedirectDecision, decide};
use canonway_core::lookup::{AliasLookup, StaticAliases, StaticTermPaths};
use canonway_core::request::RequestDescriptor;

/// A small in-memory site the way an interceptor would see it: alias and
/// term tables, a settings snapshot, and a configured front-page path.
pub struct Site {
    pub settings: NormalizationSettings,
    pub aliases: StaticAliases,
    pub terms: StaticTermPaths,
    pub front_page: String,
}

impl Site {
    pub fn example() -> Self {
        let mut aliases = StaticAliases::new();
        aliases.insert("About-Us", "node/5");
        aliases.insert("contact", "node/9");
        aliases.insert("community/hardware", "forum/7");
        aliases.insert_scoped("ueber-uns", "node/5", Some("de".to_string()));

        let mut terms = StaticTermPaths::new();
        terms.insert(7, "forum/7");

        Self {
            settings: NormalizationSettings::default(),
            aliases,
            terms,
            front_page: "node/12".to_string(),
        }
    }

    /// Runs the engine the way a request interceptor would, supplying the
    /// front-page verdict from the site's configuration.
    pub fn decide(&self, request: &RequestDescriptor) -> RedirectDecision {
        let is_front = self.is_front_page(request);

        decide(
            request,
            &self.settings,
            &self.aliases,
            &self.terms,
            is_front,
        )
    }

    /// The host-side front-page check: the bare root always resolves to the
    /// front page; any other path counts when its system path matches the
    /// configured one.
    pub fn is_front_page(&self, request: &RequestDescriptor) -> bool {
        let literal = request.request_uri().trim_matches('/');

        if literal.is_empty() {
            return true;
        }

        let resolved = self
            .aliases
            .path_by_alias(literal, request.langcode())
            .unwrap_or_else(|| literal.to_string());

        resolved == self.front_page
    }
}
