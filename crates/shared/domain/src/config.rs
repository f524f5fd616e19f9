use crate::constants::{
    DEFAULT_LANGUAGE, DEFAULT_LOCALE, DEFAULT_REGION, DEFAULT_TIME_ZONE, FALLBACK_LOCALE,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration shared by the library crates and the shell.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GlossaConfigInner {
    pub system: SystemConfig,
    pub catalog: CatalogConfig,
    pub taboo: TabooConfig,
    pub format: FormatConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into services.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct GlossaConfig {
    #[serde(flatten, default)]
    inner: Arc<GlossaConfigInner>,
}

impl Deref for GlossaConfig {
    type Target = GlossaConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for GlossaConfig {
    fn deref_mut(&mut self) -> &mut GlossaConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Device-level locale defaults and parameter persistence.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    pub default_locale: String,
    pub default_language: String,
    pub default_region: String,
    /// Region reported by the SIM card, if any.
    pub sim_region: Option<String>,
    /// JSON file holding persisted system parameters; in-memory when absent.
    pub parameters_path: Option<PathBuf>,
}

/// Languages and regions offered to the user.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub supported_locales: Vec<String>,
    pub supported_regions: Vec<String>,
    /// Locales eligible for suggestion; empty means every supported locale.
    pub white_languages: Vec<String>,
    /// Regions removed from every list.
    pub forbidden_regions: Vec<String>,
    /// Hidden from info arrays and country lists.
    pub blocked_languages: Vec<String>,
    pub blocked_regions: Vec<String>,
}

/// Display-name replacements keyed by display locale, then by language or region code.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TabooConfig {
    pub languages: BTreeMap<String, BTreeMap<String, String>>,
    pub regions: BTreeMap<String, BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    pub fallback_locale: String,
    pub default_time_zone: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
    pub path: Option<PathBuf>,
}

// --- Default ---

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE.to_owned(),
            default_language: DEFAULT_LANGUAGE.to_owned(),
            default_region: DEFAULT_REGION.to_owned(),
            sim_region: None,
            parameters_path: None,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| (*s).to_owned()).collect::<Vec<_>>();
        Self {
            supported_locales: owned(&[
                "zh-Hans-CN", "zh-Hant-HK", "zh-Hant-TW", "en-US", "en-GB", "en-AU", "en-IN",
                "fr-FR", "de-DE", "es-ES", "es-MX", "it-IT", "ja-JP", "ko-KR", "pt-BR", "pt-PT",
                "ru-RU", "ar-EG", "ar-SA", "tr-TR", "nl-NL", "pl-PL", "sv-SE", "th-TH", "vi-VN",
                "id-ID", "uk-UA",
            ]),
            supported_regions: owned(&[
                "CN", "HK", "TW", "MO", "SG", "US", "GB", "AU", "CA", "IN", "FR", "DE", "ES",
                "MX", "IT", "JP", "KR", "BR", "PT", "RU", "EG", "SA", "AE", "TR", "NL", "PL",
                "SE", "TH", "VN", "ID", "UA", "CH", "AT", "BE",
            ]),
            white_languages: Vec::new(),
            forbidden_regions: Vec::new(),
            blocked_languages: Vec::new(),
            blocked_regions: Vec::new(),
        }
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            fallback_locale: FALLBACK_LOCALE.to_owned(),
            default_time_zone: DEFAULT_TIME_ZONE.to_owned(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_owned(), json: false, path: None }
    }
}
