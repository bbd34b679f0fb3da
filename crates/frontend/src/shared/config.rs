//! Application configuration.
//!
//! The TOML file next to the crate manifest is embedded at build time;
//! `RENTAL_ADMIN_IDENTITY_URL`, `RENTAL_ADMIN_API_KEY` and
//! `RENTAL_ADMIN_EMAIL` from the build environment override its fields.

use contracts::shared::config::{
    AccessConfig, AppConfig, ConfigOverrides, IdentityConfig, PreferenceConfig,
};

/// Default configuration embedded in the bundle
const EMBEDDED_CONFIG: &str = include_str!("../../config.toml");

pub fn load_config() -> AppConfig {
    let base = match AppConfig::from_toml(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Embedded config.toml is invalid, using built-in values: {}", e);
            fallback_config()
        }
    };

    let overrides = ConfigOverrides {
        identity_url: option_env!("RENTAL_ADMIN_IDENTITY_URL"),
        api_key: option_env!("RENTAL_ADMIN_API_KEY"),
        admin_email: option_env!("RENTAL_ADMIN_EMAIL"),
    };

    match base.clone().with_overrides(overrides) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring build-time configuration overrides: {}", e);
            base
        }
    }
}

fn fallback_config() -> AppConfig {
    AppConfig {
        identity: IdentityConfig {
            endpoint: "https://identitytoolkit.googleapis.com".to_string(),
            api_key: String::new(),
        },
        access: AccessConfig {
            admin_email: "admin@rental.example".to_string(),
        },
        preferences: PreferenceConfig::default(),
    }
}
