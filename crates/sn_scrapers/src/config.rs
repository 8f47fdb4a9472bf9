use std::time::Duration;
use tracing::warn;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const TIMEOUT_ENV: &str = "SN_TIMEOUT_SECS";
pub const USER_AGENT_ENV: &str = "SN_USER_AGENT";

/// Settings for the page fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub timeout: Duration,
    /// Fixed `User-Agent`; a random browser string is used when unset.
    pub user_agent: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: None,
        }
    }
}

impl FetchConfig {
    /// Defaults overridden by `SN_TIMEOUT_SECS` and `SN_USER_AGENT`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => warn!("Ignoring invalid {}={:?}", TIMEOUT_ENV, raw),
            }
        }

        if let Some(agent) = lookup(USER_AGENT_ENV) {
            let agent = agent.trim();
            if agent.is_empty() {
                warn!("Ignoring empty {}", USER_AGENT_ENV);
            } else {
                config.user_agent = Some(agent.to_string());
            }
        }

        config
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> FetchConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        FetchConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.user_agent, None);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[(TIMEOUT_ENV, "3"), (USER_AGENT_ENV, " snap/1.0 ")]);
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.user_agent.as_deref(), Some("snap/1.0"));
    }

    #[test]
    fn test_invalid_values_are_ignored() {
        let config = config_from(&[(TIMEOUT_ENV, "soon"), (USER_AGENT_ENV, "  ")]);
        assert_eq!(config, FetchConfig::default());

        let config = config_from(&[(TIMEOUT_ENV, "0")]);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_builders() {
        let config = FetchConfig::default()
            .with_timeout(Duration::from_secs(1))
            .with_user_agent("agent");
        assert_eq!(config.timeout, Duration::from_secs(1));
        assert_eq!(config.user_agent.as_deref(), Some("agent"));
    }
}
