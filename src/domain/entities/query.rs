//! Search query - the shared read-only input to every fetcher

use std::collections::HashSet;

use super::result::SearchDomain;

/// Per-domain result limit applied when the caller does not send one
pub const DEFAULT_RESULT_LIMIT: usize = 5;

/// One user search, as seen by the dispatcher and the fetchers.
///
/// The auth token is forwarded unchanged to every downstream call; the
/// target id is forwarded only to domains that support it.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub text: String,
    pub limit: usize,
    pub sections: HashSet<String>,
    pub target_id: Option<i64>,
    pub auth_token: Option<String>,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            limit: DEFAULT_RESULT_LIMIT,
            sections: HashSet::new(),
            target_id: None,
            auth_token: None,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_sections(mut self, sections: HashSet<String>) -> Self {
        self.sections = sections;
        self
    }

    pub fn with_target_id(mut self, target_id: Option<i64>) -> Self {
        self.target_id = target_id;
        self
    }

    pub fn with_auth_token(mut self, auth_token: Option<String>) -> Self {
        self.auth_token = auth_token;
        self
    }

    /// Whether a domain is part of this search.
    ///
    /// An empty section set means every domain; a non-empty set includes
    /// exactly the domains whose section key it names.
    pub fn includes(&self, domain: SearchDomain) -> bool {
        self.sections.is_empty() || self.sections.contains(domain.section_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sections_include_every_domain() {
        let query = SearchQuery::new("travel");
        for domain in SearchDomain::ALL {
            assert!(query.includes(domain));
        }
    }

    #[test]
    fn test_named_sections_include_only_those_domains() {
        let sections: HashSet<String> =
            ["budgets".to_string(), "categories".to_string()].into_iter().collect();
        let query = SearchQuery::new("x").with_sections(sections);

        assert!(query.includes(SearchDomain::Budget));
        assert!(query.includes(SearchDomain::Category));
        assert!(!query.includes(SearchDomain::Expense));
        assert!(!query.includes(SearchDomain::Bill));
        assert!(!query.includes(SearchDomain::PaymentMethod));
        assert!(!query.includes(SearchDomain::Friend));
    }

    #[test]
    fn test_unknown_sections_include_nothing() {
        let sections: HashSet<String> = ["widgets".to_string()].into_iter().collect();
        let query = SearchQuery::new("x").with_sections(sections);

        for domain in SearchDomain::ALL {
            assert!(!query.includes(domain));
        }
    }
}
