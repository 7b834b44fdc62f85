use serde::{Deserialize, Serialize};
use std::{fmt, path::PathBuf};

use crate::booking::pricing::FALLBACK_DAILY_RATE;

/// Language used for prompts and the booking message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Pt,
}

impl Language {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Some(Language::En),
            "pt" | "portuguese" | "português" => Some(Language::Pt),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pt => "pt",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        };
        f.write_str(label)
    }
}

/// Presentation settings threaded explicitly through the wizard and formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppContext {
    pub language: Language,
    pub theme: Theme,
}

impl AppContext {
    pub fn new(language: Language, theme: Theme) -> Self {
        Self { language, theme }
    }
}

/// Where the car catalog is loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CatalogSource {
    /// Use the bundled fallback list only.
    #[default]
    Bundled,
    /// A JSON array of car rows on disk.
    File { path: PathBuf },
    /// The hosted backend's REST endpoint.
    Rest {
        url: String,
        api_key: String,
        #[serde(default = "CatalogSource::default_table")]
        table: String,
    },
}

impl CatalogSource {
    pub fn default_table() -> String {
        "cars".into()
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Bundled => f.write_str("bundled"),
            CatalogSource::File { path } => write!(f, "file {}", path.display()),
            CatalogSource::Rest { url, table, .. } => write!(f, "rest {} ({})", url, table),
        }
    }
}

/// Stores user-configurable preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "Config::default_whatsapp_number")]
    pub whatsapp_number: String,
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "Config::default_fallback_daily_rate")]
    pub fallback_daily_rate: f64,
    #[serde(default)]
    pub catalog: CatalogSource,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::default(),
            theme: Theme::default(),
            whatsapp_number: Self::default_whatsapp_number(),
            currency_symbol: Self::default_currency_symbol(),
            fallback_daily_rate: Self::default_fallback_daily_rate(),
            catalog: CatalogSource::default(),
        }
    }
}

impl Config {
    pub fn default_whatsapp_number() -> String {
        "+351 912 345 678".into()
    }

    pub fn default_currency_symbol() -> String {
        "€".into()
    }

    pub fn default_fallback_daily_rate() -> f64 {
        FALLBACK_DAILY_RATE
    }

    pub fn app_context(&self) -> AppContext {
        AppContext::new(self.language, self.theme)
    }
}
