//! Persistent user preferences and the presentation context derived from them.

pub mod manager;
pub mod model;

use std::path::PathBuf;

pub use manager::ConfigManager;
pub use model::{AppContext, CatalogSource, Config, Language, Theme};

use crate::errors::ConfigError;

/// Applies a `config set <key> <value>` style update.
pub fn apply_setting(config: &mut Config, key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = || ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    };
    match key.to_ascii_lowercase().as_str() {
        "language" => config.language = Language::parse(value).ok_or_else(invalid)?,
        "theme" => config.theme = Theme::parse(value).ok_or_else(invalid)?,
        "whatsapp" | "whatsapp_number" => {
            if !value.chars().any(|ch| ch.is_ascii_digit()) {
                return Err(invalid());
            }
            config.whatsapp_number = value.trim().to_string();
        }
        "currency" | "currency_symbol" => {
            if value.trim().is_empty() {
                return Err(invalid());
            }
            config.currency_symbol = value.trim().to_string();
        }
        "fallback-rate" | "fallback_daily_rate" => {
            let rate = value.trim().parse::<f64>().map_err(|_| invalid())?;
            if !rate.is_finite() || rate < 0.0 {
                return Err(invalid());
            }
            config.fallback_daily_rate = rate;
        }
        "catalog-bundled" => config.catalog = CatalogSource::Bundled,
        "catalog-file" => {
            if value.trim().is_empty() {
                return Err(invalid());
            }
            config.catalog = CatalogSource::File {
                path: PathBuf::from(value.trim()),
            };
        }
        "catalog-rest" => {
            let mut parts = value.split_whitespace();
            let url = parts.next().ok_or_else(invalid)?;
            let api_key = parts.next().ok_or_else(invalid)?;
            let table = parts
                .next()
                .map(str::to_string)
                .unwrap_or_else(CatalogSource::default_table);
            config.catalog = CatalogSource::Rest {
                url: url.trim_end_matches('/').to_string(),
                api_key: api_key.to_string(),
                table,
            };
        }
        _ => return Err(ConfigError::UnknownKey(key.to_string())),
    }
    Ok(())
}
