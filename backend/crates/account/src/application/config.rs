//! Application Configuration
//!
//! Configuration for the account application layer.

use std::time::Duration;

pub const DEFAULT_NETWORK_LATENCY: Duration = Duration::from_millis(800);
pub const DEFAULT_CURRENT_USER_KEY: &str = "current_user";
pub const DEFAULT_BAN_LIST_KEY: &str = "banned_users";
pub const DEFAULT_AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/initials/svg?seed=";

/// Account application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountConfig {
    /// Modeled round-trip delay for login and register
    pub network_latency: Duration,
    /// Storage key of the persisted current user
    pub current_user_key: String,
    /// Storage key of the ban list
    pub ban_list_key: String,
    /// Avatar URL prefix; the email handle is appended
    pub avatar_base_url: String,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            network_latency: DEFAULT_NETWORK_LATENCY,
            current_user_key: DEFAULT_CURRENT_USER_KEY.to_string(),
            ban_list_key: DEFAULT_BAN_LIST_KEY.to_string(),
            avatar_base_url: DEFAULT_AVATAR_BASE_URL.to_string(),
        }
    }
}

impl AccountConfig {
    /// Create config for development (no modeled latency)
    pub fn development() -> Self {
        Self {
            network_latency: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Load from the process environment, reading `.env` first if present.
    ///
    /// Entry point for host applications; the crate itself never reads the
    /// environment.
    ///
    /// Recognised variables:
    /// - `ACCOUNT_NETWORK_LATENCY_MS`
    /// - `ACCOUNT_CURRENT_USER_KEY`
    /// - `ACCOUNT_BAN_LIST_KEY`
    /// - `ACCOUNT_AVATAR_BASE_URL`
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Unset or unparsable values
    /// keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("ACCOUNT_NETWORK_LATENCY_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.network_latency = Duration::from_millis(ms),
                Err(e) => tracing::warn!(
                    value = %raw,
                    error = %e,
                    "Ignoring invalid ACCOUNT_NETWORK_LATENCY_MS"
                ),
            }
        }
        if let Some(key) = lookup("ACCOUNT_CURRENT_USER_KEY").filter(|v| !v.trim().is_empty()) {
            config.current_user_key = key;
        }
        if let Some(key) = lookup("ACCOUNT_BAN_LIST_KEY").filter(|v| !v.trim().is_empty()) {
            config.ban_list_key = key;
        }
        if let Some(url) = lookup("ACCOUNT_AVATAR_BASE_URL").filter(|v| !v.trim().is_empty()) {
            config.avatar_base_url = url;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = AccountConfig::default();
        assert_eq!(config.network_latency, Duration::from_millis(800));
        assert_eq!(config.current_user_key, "current_user");
        assert_eq!(config.ban_list_key, "banned_users");
    }

    #[test]
    fn test_development_config() {
        let config = AccountConfig::development();
        assert!(config.network_latency.is_zero());
        assert_eq!(config.current_user_key, DEFAULT_CURRENT_USER_KEY);
    }

    #[test]
    fn test_from_lookup_overrides() {
        let vars: HashMap<&str, &str> = [
            ("ACCOUNT_NETWORK_LATENCY_MS", "25"),
            ("ACCOUNT_CURRENT_USER_KEY", "user"),
            ("ACCOUNT_BAN_LIST_KEY", "bannedUsers"),
        ]
        .into_iter()
        .collect();

        let config = AccountConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.network_latency, Duration::from_millis(25));
        assert_eq!(config.current_user_key, "user");
        assert_eq!(config.ban_list_key, "bannedUsers");
        assert_eq!(config.avatar_base_url, DEFAULT_AVATAR_BASE_URL);
    }

    #[test]
    fn test_from_lookup_ignores_garbage() {
        let config = AccountConfig::from_lookup(|k| match k {
            "ACCOUNT_NETWORK_LATENCY_MS" => Some("soon".to_string()),
            "ACCOUNT_CURRENT_USER_KEY" => Some("   ".to_string()),
            _ => None,
        });
        assert_eq!(config, AccountConfig::default());
    }
}
