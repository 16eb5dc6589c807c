//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::application::errors::ConfigError;
use crate::application::search::DEFAULT_TIMEOUT_MS;
use crate::domain::entities::{SearchDomain, DEFAULT_RESULT_LIMIT};

/// Service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub server: ServerConfig,
    pub search: SearchConfig,
    pub domains: DomainsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SearchConfig {
    /// Wall-clock budget for the whole fan-out, and for each outbound call
    pub timeout_ms: u64,
    /// Per-domain result limit applied when the caller does not send one
    pub default_limit: usize,
}

/// Base URLs of the six downstream domain services
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct DomainsConfig {
    pub expense_base_url: String,
    pub budget_base_url: String,
    pub category_base_url: String,
    pub bill_base_url: String,
    pub payment_method_base_url: String,
    pub friend_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8090,
            },
            search: SearchConfig {
                timeout_ms: DEFAULT_TIMEOUT_MS,
                default_limit: DEFAULT_RESULT_LIMIT,
            },
            domains: DomainsConfig {
                expense_base_url: "http://localhost:8081".to_string(),
                budget_base_url: "http://localhost:8082".to_string(),
                category_base_url: "http://localhost:8083".to_string(),
                bill_base_url: "http://localhost:8084".to_string(),
                payment_method_base_url: "http://localhost:8085".to_string(),
                friend_base_url: "http://localhost:8086".to_string(),
            },
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self, path: impl Into<PathBuf>) -> Result<(), ConfigError> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| ConfigError::InvalidValue(e.to_string()))?;
        std::fs::write(path.into(), content)?;
        Ok(())
    }

    /// Build a config from environment variables alone.
    pub fn load_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Overlay environment variables on the current values.
    pub fn apply_env(&mut self) {
        if let Ok(host) = std::env::var("SAKU_SERVER_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("SAKU_SERVER_PORT") {
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Ok(timeout) = std::env::var("SAKU_SEARCH_TIMEOUT_MS") {
            if let Ok(timeout) = timeout.parse() {
                self.search.timeout_ms = timeout;
            }
        }
        if let Ok(limit) = std::env::var("SAKU_SEARCH_DEFAULT_LIMIT") {
            if let Ok(limit) = limit.parse() {
                self.search.default_limit = limit;
            }
        }

        let urls = [
            ("SAKU_EXPENSE_BASE_URL", &mut self.domains.expense_base_url),
            ("SAKU_BUDGET_BASE_URL", &mut self.domains.budget_base_url),
            ("SAKU_CATEGORY_BASE_URL", &mut self.domains.category_base_url),
            ("SAKU_BILL_BASE_URL", &mut self.domains.bill_base_url),
            (
                "SAKU_PAYMENT_METHOD_BASE_URL",
                &mut self.domains.payment_method_base_url,
            ),
            ("SAKU_FRIEND_BASE_URL", &mut self.domains.friend_base_url),
        ];
        for (var, slot) in urls {
            if let Ok(url) = std::env::var(var) {
                *slot = url;
            }
        }
    }

    /// Base URL for a domain's service
    pub fn base_url(&self, domain: SearchDomain) -> &str {
        match domain {
            SearchDomain::Expense => &self.domains.expense_base_url,
            SearchDomain::Budget => &self.domains.budget_base_url,
            SearchDomain::Category => &self.domains.category_base_url,
            SearchDomain::Bill => &self.domains.bill_base_url,
            SearchDomain::PaymentMethod => &self.domains.payment_method_base_url,
            SearchDomain::Friend => &self.domains.friend_base_url,
        }
    }

    /// The global search timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.search.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_round_trips_through_yaml() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(parsed.search.timeout_ms, 3000);
        assert_eq!(parsed.search.default_limit, DEFAULT_RESULT_LIMIT);
        assert_eq!(parsed.server.port, 8090);
    }

    #[test]
    fn test_kebab_case_keys() {
        let yaml = serde_yaml::to_string(&Config::default()).unwrap();
        assert!(yaml.contains("timeout-ms"));
        assert!(yaml.contains("expense-base-url"));
    }

    #[test]
    fn test_every_domain_has_a_base_url() {
        let config = Config::default();
        for domain in SearchDomain::ALL {
            assert!(config.base_url(domain).starts_with("http://"));
        }
    }
}
