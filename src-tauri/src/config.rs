//! Gateway Configuration
//!
//! Where the upstream greeting service lives and how long to wait for it.

use std::time::Duration;

use reqwest::Url;

use crate::domain::{DomainError, DomainResult};

pub const URL_VAR: &str = "KINETIC_GATEWAY_URL";
pub const TIMEOUT_VAR: &str = "KINETIC_GATEWAY_TIMEOUT_SECS";

const DEFAULT_URL: &str = "http://localhost:8080/";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Always ends with `/` so endpoints join under it
    pub base_url: Url,
    pub timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_URL).expect("default gateway URL is valid"),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl GatewayConfig {
    /// Read from process environment
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read through `lookup`; unset or blank values fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(URL_VAR).filter(|v| !v.trim().is_empty()) {
            config.base_url = parse_base_url(raw.trim())?;
        }
        if let Some(raw) = lookup(TIMEOUT_VAR).filter(|v| !v.trim().is_empty()) {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| DomainError::Config(format!("{} must be whole seconds, got {:?}", TIMEOUT_VAR, raw)))?;
            if secs == 0 {
                return Err(DomainError::Config(format!("{} must be positive", TIMEOUT_VAR)));
            }
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// URL of a command endpoint, e.g. `greet`
    pub fn endpoint(&self, path: &str) -> DomainResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| DomainError::Config(format!("Invalid endpoint {:?}: {}", path, e)))
    }
}

fn parse_base_url(raw: &str) -> DomainResult<Url> {
    let mut url = Url::parse(raw)
        .map_err(|e| DomainError::Config(format!("{} is not a valid URL ({}): {}", URL_VAR, raw, e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(DomainError::Config(format!("{} must be http or https, got {}", URL_VAR, url.scheme())));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, GatewayConfig::default());
        assert_eq!(config.endpoint("greet").unwrap().as_str(), "http://localhost:8080/greet");
        assert_eq!(config.endpoint("check").unwrap().as_str(), "http://localhost:8080/check");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_base_url_keeps_path_prefix() {
        let config = GatewayConfig::from_lookup(lookup_from(&[(URL_VAR, "https://example.com/api")])).unwrap();
        assert_eq!(config.endpoint("greet").unwrap().as_str(), "https://example.com/api/greet");
    }

    #[test]
    fn test_timeout_override() {
        let config = GatewayConfig::from_lookup(lookup_from(&[(TIMEOUT_VAR, " 3 ")])).unwrap();
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = GatewayConfig::from_lookup(lookup_from(&[(URL_VAR, "  "), (TIMEOUT_VAR, "")])).unwrap();
        assert_eq!(config, GatewayConfig::default());
    }

    #[test]
    fn test_rejects_bad_values() {
        for pairs in [
            [(URL_VAR, "not a url")],
            [(URL_VAR, "ftp://example.com")],
            [(TIMEOUT_VAR, "soon")],
            [(TIMEOUT_VAR, "0")],
        ] {
            let result = GatewayConfig::from_lookup(lookup_from(&pairs));
            assert!(matches!(result, Err(DomainError::Config(_))), "{:?}", pairs);
        }
    }
}
