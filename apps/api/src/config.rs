use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Which classification backend to run for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierBackend {
    /// Remote when credentials are configured, keyword matcher otherwise.
    Auto,
    Keyword,
    Remote,
}

/// Settings for the hosted orchestration service.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub base_url: String,
    pub api_key: String,
    pub resource_group: String,
    pub model: String,
    pub max_tokens: u32,
    pub timeout: Duration,
    pub content_filtering: bool,
    pub data_masking: bool,
}

/// Application configuration loaded from environment variables.
/// Fails at startup on malformed values.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub backend: ClassifierBackend,
    /// Present only when both the orchestration URL and API key are set.
    pub remote: Option<RemoteConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let backend = match var("CLASSIFIER_BACKEND")
            .unwrap_or_else(|| "auto".to_string())
            .to_lowercase()
            .as_str()
        {
            "auto" => ClassifierBackend::Auto,
            "keyword" => ClassifierBackend::Keyword,
            "remote" => ClassifierBackend::Remote,
            other => bail!("CLASSIFIER_BACKEND must be one of auto, keyword, remote (got '{other}')"),
        };

        let remote = match (
            non_empty(var("ORCHESTRATION_URL")),
            non_empty(var("ORCHESTRATION_API_KEY")),
        ) {
            (Some(base_url), Some(api_key)) => Some(RemoteConfig {
                base_url,
                api_key,
                resource_group: var("AICORE_RESOURCE_GROUP")
                    .unwrap_or_else(|| "default".to_string()),
                model: var("LLM_MODEL").unwrap_or_else(|| "gpt-4o".to_string()),
                max_tokens: parse_or(&var, "LLM_MAX_TOKENS", 500)?,
                timeout: Duration::from_secs(parse_or(&var, "CLASSIFIER_TIMEOUT_SECS", 30)?),
                content_filtering: parse_flag(&var, "CONTENT_FILTERING", true)?,
                data_masking: parse_flag(&var, "DATA_MASKING", true)?,
            }),
            _ => None,
        };

        if backend == ClassifierBackend::Remote && remote.is_none() {
            bail!("CLASSIFIER_BACKEND=remote requires ORCHESTRATION_URL and ORCHESTRATION_API_KEY");
        }

        Ok(Config {
            port: parse_or(&var, "PORT", 8080)?,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            backend,
            remote,
        })
    }

    /// The remote settings if the remote backend was selected, `None` for the keyword matcher.
    pub fn selected_remote(&self) -> Option<&RemoteConfig> {
        match self.backend {
            ClassifierBackend::Keyword => None,
            ClassifierBackend::Auto | ClassifierBackend::Remote => self.remote.as_ref(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_or<T>(var: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match var(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value '{raw}'")),
        None => Ok(default),
    }
}

fn parse_flag(var: &impl Fn(&str) -> Option<String>, key: &str, default: bool) -> Result<bool> {
    match var(key).map(|v| v.trim().to_lowercase()) {
        None => Ok(default),
        Some(v) => match v.as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => bail!("{key} must be a boolean (got '{v}')"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_select_keyword_matcher() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.backend, ClassifierBackend::Auto);
        assert!(config.remote.is_none());
        assert!(config.selected_remote().is_none());
    }

    #[test]
    fn test_auto_selects_remote_when_credentials_present() {
        let config = config_from(&[
            ("ORCHESTRATION_URL", "https://orchestration.example.com/v2/inference/deployments/d1"),
            ("ORCHESTRATION_API_KEY", "secret"),
        ])
        .unwrap();

        let remote = config.selected_remote().unwrap();
        assert_eq!(remote.model, "gpt-4o");
        assert_eq!(remote.max_tokens, 500);
        assert_eq!(remote.resource_group, "default");
        assert_eq!(remote.timeout, Duration::from_secs(30));
        assert!(remote.content_filtering);
        assert!(remote.data_masking);
    }

    #[test]
    fn test_keyword_backend_ignores_credentials() {
        let config = config_from(&[
            ("CLASSIFIER_BACKEND", "keyword"),
            ("ORCHESTRATION_URL", "https://orchestration.example.com"),
            ("ORCHESTRATION_API_KEY", "secret"),
        ])
        .unwrap();
        assert!(config.remote.is_some());
        assert!(config.selected_remote().is_none());
    }

    #[test]
    fn test_remote_backend_without_credentials_fails() {
        let err = config_from(&[("CLASSIFIER_BACKEND", "remote")]).unwrap_err();
        assert!(err.to_string().contains("ORCHESTRATION_URL"));
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let config = config_from(&[
            ("ORCHESTRATION_URL", "https://orchestration.example.com"),
            ("ORCHESTRATION_API_KEY", "  "),
        ])
        .unwrap();
        assert!(config.remote.is_none());
    }

    #[test]
    fn test_remote_overrides() {
        let config = config_from(&[
            ("ORCHESTRATION_URL", "https://orchestration.example.com"),
            ("ORCHESTRATION_API_KEY", "secret"),
            ("LLM_MODEL", "gpt-4o-mini"),
            ("LLM_MAX_TOKENS", "256"),
            ("CLASSIFIER_TIMEOUT_SECS", "5"),
            ("CONTENT_FILTERING", "false"),
            ("DATA_MASKING", "off"),
            ("AICORE_RESOURCE_GROUP", "talent"),
        ])
        .unwrap();

        let remote = config.remote.unwrap();
        assert_eq!(remote.model, "gpt-4o-mini");
        assert_eq!(remote.max_tokens, 256);
        assert_eq!(remote.timeout, Duration::from_secs(5));
        assert!(!remote.content_filtering);
        assert!(!remote.data_masking);
        assert_eq!(remote.resource_group, "talent");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_invalid_backend_is_rejected() {
        assert!(config_from(&[("CLASSIFIER_BACKEND", "gpt")]).is_err());
    }

    #[test]
    fn test_invalid_flag_is_rejected() {
        let err = config_from(&[
            ("ORCHESTRATION_URL", "https://orchestration.example.com"),
            ("ORCHESTRATION_API_KEY", "secret"),
            ("DATA_MASKING", "maybe"),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("DATA_MASKING"));
    }
}
