//! Common result shape shared by every searched domain

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Business domain covered by the search fan-out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchDomain {
    Expense,
    Budget,
    Category,
    Bill,
    PaymentMethod,
    Friend,
}

impl SearchDomain {
    /// Every searchable domain, in response order
    pub const ALL: [SearchDomain; 6] = [
        SearchDomain::Expense,
        SearchDomain::Budget,
        SearchDomain::Category,
        SearchDomain::Bill,
        SearchDomain::PaymentMethod,
        SearchDomain::Friend,
    ];

    /// Plural token naming this domain in the `sections` parameter
    pub fn section_key(&self) -> &'static str {
        match self {
            SearchDomain::Expense => "expenses",
            SearchDomain::Budget => "budgets",
            SearchDomain::Category => "categories",
            SearchDomain::Bill => "bills",
            SearchDomain::PaymentMethod => "payment-methods",
            SearchDomain::Friend => "friends",
        }
    }
}

impl std::fmt::Display for SearchDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.section_key())
    }
}

/// One row in the aggregated search response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Opaque per-domain identifier
    pub id: String,
    /// Domain tag; a result list never mixes tags
    #[serde(rename = "type")]
    pub kind: SearchDomain,
    /// Primary display string
    pub title: String,
    /// Secondary display string, composed per domain
    #[serde(default)]
    pub subtitle: String,
    /// Presentation hints for the client
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Domain-specific extras, e.g. amount/date for expenses
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub metadata: serde_json::Map<String, Value>,
}

impl SearchResult {
    pub fn new(id: impl Into<String>, kind: SearchDomain, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            subtitle: String::new(),
            icon: None,
            color: None,
            metadata: serde_json::Map::new(),
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_keys_are_unique() {
        let mut keys: Vec<&str> = SearchDomain::ALL.iter().map(|d| d.section_key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), SearchDomain::ALL.len());
    }

    #[test]
    fn test_result_builder() {
        let result = SearchResult::new("42", SearchDomain::Budget, "Travel Fund")
            .with_subtitle("Budget • $500.00")
            .with_icon("account_balance_wallet")
            .with_meta("amount", 500.0.into());

        assert_eq!(result.id, "42");
        assert_eq!(result.kind, SearchDomain::Budget);
        assert_eq!(result.subtitle, "Budget • $500.00");
        assert_eq!(result.metadata.get("amount"), Some(&500.0.into()));
    }

    #[test]
    fn test_type_tag_serializes_screaming_snake() {
        let result = SearchResult::new("1", SearchDomain::PaymentMethod, "Visa");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["type"], "PAYMENT_METHOD");
    }
}
