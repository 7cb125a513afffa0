//! Stub server configuration

use crate::api::auth::BasicCredentials;

#[derive(Debug, Clone)]
pub struct StubConfig {
    /// Socket address to listen on
    pub bind_addr: String,
    /// Credentials clients must present; `None` disables the check
    pub credentials: Option<BasicCredentials>,
    /// Start with the three default jobs
    pub seed: bool,
}

impl StubConfig {
    /// Reads configuration from the environment
    ///
    /// - JOBCHECK_STUB_BIND_ADDR (default: 0.0.0.0:8080)
    /// - JOBCHECK_STUB_USERNAME (default: user; empty disables auth)
    /// - JOBCHECK_STUB_PASSWORD (default: 1234)
    /// - JOBCHECK_STUB_SEED (true/false, default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr =
            lookup("JOBCHECK_STUB_BIND_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string());
        let username = lookup("JOBCHECK_STUB_USERNAME").unwrap_or_else(|| "user".to_string());
        let password = lookup("JOBCHECK_STUB_PASSWORD").unwrap_or_else(|| "1234".to_string());
        let seed = lookup("JOBCHECK_STUB_SEED")
            .and_then(|s| s.parse::<bool>().ok())
            .unwrap_or(true);

        let credentials = if username.is_empty() {
            None
        } else {
            Some(BasicCredentials::new(username, password))
        };

        Self {
            bind_addr,
            credentials,
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StubConfig::from_lookup(|_| None);
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.credentials, Some(BasicCredentials::new("user", "1234")));
        assert!(config.seed);
    }

    #[test]
    fn test_empty_username_disables_auth() {
        let config = StubConfig::from_lookup(|key| match key {
            "JOBCHECK_STUB_USERNAME" => Some(String::new()),
            _ => None,
        });
        assert!(config.credentials.is_none());
    }
}
