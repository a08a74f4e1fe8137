use crate::utils::error::{ApiError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

pub const ENV_BASE_URL: &str = "PANTRY_API_URL";
pub const ENV_TIMEOUT_SECONDS: &str = "PANTRY_API_TIMEOUT_SECONDS";
pub const ENV_PUSH_PROJECT_ID: &str = "PANTRY_PUSH_PROJECT_ID";

const MAX_TIMEOUT_SECONDS: u64 = 600;

/// Startup configuration for [`ApiClient`](crate::ApiClient). Read once,
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout. Unset means the transport default.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
    /// Project id used when requesting a push token from the push service.
    #[serde(default)]
    pub push_project_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    client: ClientConfig,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: None,
            push_project_id: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    pub fn with_push_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.push_project_id = Some(project_id.into());
        self
    }

    /// Reads `PANTRY_API_URL` (falling back to the local development server),
    /// `PANTRY_API_TIMEOUT_SECONDS` and `PANTRY_PUSH_PROJECT_ID`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(ENV_BASE_URL)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(default_base_url);

        let timeout_seconds = match lookup(ENV_TIMEOUT_SECONDS) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                ApiError::InvalidConfigValue {
                    field: ENV_TIMEOUT_SECONDS.to_string(),
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?),
            None => None,
        };

        let config = Self {
            base_url,
            timeout_seconds,
            push_project_id: lookup(ENV_PUSH_PROJECT_ID).filter(|v| !v.trim().is_empty()),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses a `[client]` table. `${VAR}` references are replaced from the
    /// environment first; unknown variables are left as written.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content)?;

        let file: ConfigFile = toml::from_str(&processed).map_err(|e| ApiError::Config {
            message: format!("TOML parsing error: {}", e),
        })?;
        file.client.validate()?;
        Ok(file.client)
    }

    /// Base URL with any trailing slash removed, ready for `base + endpoint`.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ApiError::Config {
        message: format!("Invalid substitution pattern: {}", e),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.to_string())
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;

        if let Some(timeout) = self.timeout_seconds {
            validation::validate_range("timeout_seconds", timeout, 1, MAX_TIMEOUT_SECONDS)?;
        }

        if let Some(project_id) = &self.push_project_id {
            validation::validate_non_empty_string("push_project_id", project_id)?;
        }

        Ok(())
    }
}
