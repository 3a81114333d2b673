use std::time::Duration;

use anyhow::bail;
use auragold_core::constants::DEFAULT_POLL_INTERVAL_SECS;
use auragold_invoice_api::DEFAULT_BASE_URL;

use crate::cli::GlobalArgs;

const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub poll_interval: Duration,
    pub request_timeout: Duration,
    pub user_id: Option<String>,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("AURA_API_BASE_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let poll_secs = parse_number(&lookup, "AURA_POLL_INTERVAL_SECS", DEFAULT_POLL_INTERVAL_SECS);
        if poll_secs == 0 {
            bail!("AURA_POLL_INTERVAL_SECS must be greater than zero");
        }
        let timeout_ms = parse_number(&lookup, "AURA_REQUEST_TIMEOUT_MS", DEFAULT_REQUEST_TIMEOUT_MS);

        let user_id = lookup("AURA_USER_ID")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let log_format = lookup("AURA_LOG_FORMAT")
            .map(|s| LogFormat::parse(&s))
            .unwrap_or(LogFormat::Text);

        Ok(Self {
            api_base_url,
            poll_interval: Duration::from_secs(poll_secs),
            request_timeout: Duration::from_millis(timeout_ms),
            user_id,
            log_format,
        })
    }

    /// Command-line flags win over the environment.
    pub fn apply_overrides(&mut self, args: &GlobalArgs) -> anyhow::Result<()> {
        if let Some(url) = &args.api_url {
            self.api_base_url = url.clone();
        }
        if let Some(user_id) = &args.user_id {
            self.user_id = Some(user_id.clone()).filter(|id| !id.is_empty());
        }
        if let Some(ms) = args.timeout_ms {
            self.request_timeout = Duration::from_millis(ms);
        }
        if let Some(secs) = args.poll_interval_secs {
            if secs == 0 {
                bail!("--poll-interval-secs must be greater than zero");
            }
            self.poll_interval = Duration::from_secs(secs);
        }
        if let Some(format) = &args.log_format {
            self.log_format = LogFormat::parse(format);
        }
        Ok(())
    }
}

// Invalid numbers fall back to the default; the warning is deferred to
// stderr because logging is not initialised yet.
fn parse_number<F>(lookup: &F, key: &str, default: u64) -> u64
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            eprintln!("Invalid {} '{}', using {}", key, raw, default);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_without_environment() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.api_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.poll_interval, Duration::from_secs(10));
        assert_eq!(config.request_timeout, Duration::from_millis(30_000));
        assert_eq!(config.user_id, None);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn invalid_numbers_fall_back_to_defaults() {
        let config = config_from(&[
            ("AURA_POLL_INTERVAL_SECS", "soon"),
            ("AURA_REQUEST_TIMEOUT_MS", "-1"),
        ])
        .unwrap();

        assert_eq!(config.poll_interval, Duration::from_secs(10));
        assert_eq!(config.request_timeout, Duration::from_millis(30_000));
    }

    #[test]
    fn zero_poll_interval_is_rejected() {
        assert!(config_from(&[("AURA_POLL_INTERVAL_SECS", "0")]).is_err());
    }

    #[test]
    fn flags_override_environment() {
        let mut config = config_from(&[
            ("AURA_USER_ID", "1"),
            ("AURA_LOG_FORMAT", "json"),
        ])
        .unwrap();
        assert_eq!(config.log_format, LogFormat::Json);

        config
            .apply_overrides(&GlobalArgs {
                api_url: Some("http://localhost:8080".to_string()),
                user_id: Some("2".to_string()),
                timeout_ms: Some(500),
                poll_interval_secs: Some(3),
                log_format: None,
            })
            .unwrap();

        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.user_id.as_deref(), Some("2"));
        assert_eq!(config.request_timeout, Duration::from_millis(500));
        assert_eq!(config.poll_interval, Duration::from_secs(3));
        assert_eq!(config.log_format, LogFormat::Json);
    }
}
