use serde::Deserialize;
use thiserror::Error;

use super::theme::DEFAULT_THEME_KEY;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub identity: IdentityConfig,
    pub access: AccessConfig,
    #[serde(default)]
    pub preferences: PreferenceConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct IdentityConfig {
    /// Base URL of the hosted identity service.
    pub endpoint: String,
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AccessConfig {
    /// The one account allowed into the admin shell.
    pub admin_email: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct PreferenceConfig {
    #[serde(default = "default_theme_key")]
    pub theme_key: String,
}

impl Default for PreferenceConfig {
    fn default() -> Self {
        Self {
            theme_key: default_theme_key(),
        }
    }
}

fn default_theme_key() -> String {
    DEFAULT_THEME_KEY.to_string()
}

/// Values that replace fields of a parsed configuration, typically taken
/// from the build environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigOverrides<'a> {
    pub identity_url: Option<&'a str>,
    pub api_key: Option<&'a str>,
    pub admin_email: Option<&'a str>,
}

impl AppConfig {
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply non-empty overrides and re-validate.
    pub fn with_overrides(mut self, overrides: ConfigOverrides<'_>) -> Result<Self, ConfigError> {
        if let Some(url) = overrides.identity_url.filter(|v| !v.trim().is_empty()) {
            self.identity.endpoint = url.trim().to_string();
        }
        if let Some(key) = overrides.api_key.filter(|v| !v.trim().is_empty()) {
            self.identity.api_key = key.trim().to_string();
        }
        if let Some(email) = overrides.admin_email.filter(|v| !v.trim().is_empty()) {
            self.access.admin_email = email.trim().to_string();
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.identity.endpoint.as_str();
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(ConfigError::Invalid {
                field: "identity.endpoint",
                reason: format!("'{}' is not an http(s) URL", endpoint),
            });
        }
        if !self.access.admin_email.contains('@') {
            return Err(ConfigError::Invalid {
                field: "access.admin_email",
                reason: "expected an email address".to_string(),
            });
        }
        if self.preferences.theme_key.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "preferences.theme_key",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Endpoint without a trailing slash.
    pub fn identity_base_url(&self) -> &str {
        self.identity.endpoint.trim_end_matches('/')
    }
}
