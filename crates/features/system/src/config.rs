use crate::builder::LocaleConfigBuilder;
use crate::error::I18nError;
use crate::model::SystemSnapshot;
use crate::store::ParameterStore;
use crate::taboo::Taboo;
use fxhash::FxHashSet;
use glossa_domain::config::{CatalogConfig, SystemConfig};
use glossa_domain::constants::{PARAM_24_HOUR_CLOCK, PARAM_LANGUAGE, PARAM_LOCAL_DIGIT, PARAM_LOCALE};
use glossa_locale::{Locale, LocaleError, digits, names, validate};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Languages and regions offered to the user, as configured.
#[derive(Debug)]
pub(crate) struct Catalog {
    pub(crate) supported_locales: Vec<String>,
    pub(crate) supported_regions: Vec<String>,
    white_languages: Vec<String>,
    forbidden_regions: FxHashSet<String>,
    pub(crate) blocked_languages: FxHashSet<String>,
    pub(crate) blocked_regions: FxHashSet<String>,
}

impl Catalog {
    pub(crate) fn new(config: &CatalogConfig) -> Self {
        let set = |items: &[String]| items.iter().cloned().collect::<FxHashSet<_>>();
        Self {
            supported_locales: config.supported_locales.clone(),
            supported_regions: config.supported_regions.clone(),
            white_languages: config.white_languages.clone(),
            forbidden_regions: set(&config.forbidden_regions),
            blocked_languages: set(&config.blocked_languages),
            blocked_regions: set(&config.blocked_regions),
        }
    }

    /// Locales a language may be suggested through: the white list, else every supported locale.
    fn suggestible(&self) -> &[String] {
        if self.white_languages.is_empty() { &self.supported_locales } else { &self.white_languages }
    }

    pub(crate) fn is_forbidden(&self, region: &str) -> bool {
        self.forbidden_regions.contains(region)
    }
}

/// Values reported while nothing is persisted.
#[derive(Debug)]
pub(crate) struct Defaults {
    language: String,
    region: String,
    locale: String,
    pub(crate) sim_region: Option<String>,
}

impl Defaults {
    pub(crate) fn new(config: &SystemConfig) -> Self {
        Self {
            language: config.default_language.clone(),
            region: config.default_region.clone(),
            locale: config.default_locale.clone(),
            sim_region: config.sim_region.clone().filter(|r| !r.is_empty()),
        }
    }
}

/// The system locale service.
///
/// Reads the catalog and defaults from configuration and persists the user's choices in a
/// [`ParameterStore`]. Every successful mutation publishes a [`SystemSnapshot`] to
/// [`subscribe`](Self::subscribe)rs.
pub struct LocaleConfig {
    pub(crate) catalog: Catalog,
    pub(crate) defaults: Defaults,
    pub(crate) taboo: Taboo,
    pub(crate) store: Arc<dyn ParameterStore>,
    pub(crate) snapshot: watch::Sender<Arc<SystemSnapshot>>,
    /// Serializes read-modify-write sequences on the store.
    pub(crate) mutation: Mutex<()>,
}

impl fmt::Debug for LocaleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleConfig")
            .field("catalog", &self.catalog)
            .field("defaults", &self.defaults)
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

pub(crate) fn invalid_locale(tag: &str) -> I18nError {
    LocaleError::InvalidLocale { tag: tag.to_owned(), context: None }.into()
}

/// Parses `tag` and requires a known ISO language.
pub(crate) fn parse_tag(tag: &str) -> Result<Locale, I18nError> {
    let locale = Locale::try_new(tag)?;
    if !validate::is_valid_language(locale.language()) {
        return Err(invalid_locale(tag));
    }
    Ok(locale)
}

pub(crate) fn check_region(region: &str) -> Result<(), I18nError> {
    if validate::is_valid_region(region) { Ok(()) } else { Err(I18nError::invalid_region(region)) }
}

impl LocaleConfig {
    #[must_use]
    pub fn builder() -> LocaleConfigBuilder {
        LocaleConfigBuilder::new()
    }

    // --- Display names ---

    /// Name of the region of `locale` (a tag or a bare region code) in `display_locale`.
    ///
    /// # Errors
    /// [`I18nError::Locale`] when either argument is malformed.
    pub fn get_display_country(
        &self,
        locale: &str,
        display_locale: &str,
    ) -> Result<String, I18nError> {
        let name = names::display_region(locale, display_locale, true)?;
        if name.is_empty() {
            return Ok(name);
        }
        let region = if names::is_region_code(locale) {
            locale.to_owned()
        } else {
            Locale::try_new(locale)?.region().unwrap_or_default().to_owned()
        };
        Ok(self.taboo.replace_region(&region, display_locale, name))
    }

    /// Name of the language of `locale` in `display_locale`.
    ///
    /// # Errors
    /// [`I18nError::Locale`] when either argument is malformed.
    pub fn get_display_language(
        &self,
        locale: &str,
        display_locale: &str,
        sentence_case: bool,
    ) -> Result<String, I18nError> {
        let name = names::display_language(locale, display_locale, sentence_case)?;
        Ok(self.taboo.replace_language(locale, display_locale, name))
    }

    // --- Catalogs ---

    /// Supported locales outside forbidden regions, in configuration order.
    #[must_use]
    pub fn get_system_languages(&self) -> Vec<String> {
        self.catalog
            .supported_locales
            .iter()
            .filter(|tag| {
                let region = Locale::try_new(tag).ok().and_then(|l| l.region().map(str::to_owned));
                !region.is_some_and(|r| self.catalog.is_forbidden(&r))
            })
            .cloned()
            .collect()
    }

    /// Supported regions that are neither forbidden nor blocked.
    ///
    /// The list does not depend on `language`, which must still be a valid tag.
    ///
    /// # Errors
    /// [`I18nError::Locale`] when `language` is malformed.
    pub fn get_system_countries(&self, language: &str) -> Result<Vec<String>, I18nError> {
        parse_tag(language)?;
        Ok(self
            .catalog
            .supported_regions
            .iter()
            .filter(|r| !self.catalog.is_forbidden(r) && !self.catalog.blocked_regions.contains(*r))
            .cloned()
            .collect())
    }

    /// Whether `language` is a natural choice in `region`.
    ///
    /// True when a suggestible locale has the language (and, after adding likely subtags, the
    /// script) of `language` together with `region`, or when `region` is the likely region of
    /// `language`.
    ///
    /// # Errors
    /// [`I18nError::Locale`] for a malformed language, [`I18nError::InvalidRegion`] for an
    /// unknown region.
    pub fn is_suggested(&self, language: &str, region: &str) -> Result<bool, I18nError> {
        let language = parse_tag(language)?;
        check_region(region)?;

        let maximized = language.maximize();
        if maximized.region() == Some(region) {
            return Ok(true);
        }

        let suggested = self.catalog.suggestible().iter().any(|tag| {
            let Ok(candidate) = Locale::try_new(tag) else {
                warn!(tag = %tag, "Skipping malformed catalog locale");
                return false;
            };
            candidate.language() == language.language()
                && candidate.region() == Some(region)
                && candidate.maximize().script() == maximized.script()
        });
        Ok(suggested)
    }

    /// Whether `language` is suggested with the system region or the SIM region.
    ///
    /// # Errors
    /// [`I18nError::Locale`] when `language` is malformed.
    pub fn is_suggested_language(&self, language: &str) -> Result<bool, I18nError> {
        let region = self.get_system_region();
        if check_region(&region).is_ok() && self.is_suggested(language, &region)? {
            return Ok(true);
        }
        match self.defaults.sim_region.as_deref() {
            Some(sim) if check_region(sim).is_ok() => self.is_suggested(language, sim),
            _ => {
                parse_tag(language)?;
                Ok(false)
            }
        }
    }

    // --- System state ---

    fn parameter(&self, key: &str) -> Option<String> {
        self.store.get(key).filter(|value| !value.is_empty())
    }

    #[must_use]
    pub fn get_system_language(&self) -> String {
        self.parameter(PARAM_LANGUAGE).unwrap_or_else(|| self.defaults.language.clone())
    }

    /// The region of the system locale, or the default region.
    #[must_use]
    pub fn get_system_region(&self) -> String {
        self.parameter(PARAM_LOCALE)
            .and_then(|tag| Locale::try_new(&tag).ok())
            .and_then(|locale| locale.region().map(str::to_owned))
            .unwrap_or_else(|| self.defaults.region.clone())
    }

    #[must_use]
    pub fn get_system_locale(&self) -> String {
        self.parameter(PARAM_LOCALE).unwrap_or_else(|| self.defaults.locale.clone())
    }

    /// Sets the system language; `""` restores the default.
    ///
    /// # Errors
    /// [`I18nError::Locale`] for a malformed tag, store errors otherwise.
    pub fn set_system_language(&self, language: &str) -> Result<(), I18nError> {
        let _guard = self.mutation.lock();
        self.store_language(language)
    }

    pub(crate) fn store_language(&self, language: &str) -> Result<(), I18nError> {
        if language.is_empty() {
            self.store.remove(PARAM_LANGUAGE)?;
        } else {
            parse_tag(language)?;
            self.store.set(PARAM_LANGUAGE, language)?;
        }
        info!(language, "System language changed");
        self.publish();
        Ok(())
    }

    /// Moves the system locale to `region`.
    ///
    /// The language and script of the current locale are kept and its extensions dropped.
    /// Without a persisted locale, one is derived from the likely subtags of the region
    /// (`TW` becomes `zh-Hant-TW`). `""` removes the region from the current locale.
    ///
    /// # Errors
    /// [`I18nError::InvalidRegion`] for an unknown region, store errors otherwise.
    pub fn set_system_region(&self, region: &str) -> Result<(), I18nError> {
        if !region.is_empty() {
            check_region(region)?;
        }
        let _guard = self.mutation.lock();

        let locale = match (self.parameter(PARAM_LOCALE), region.is_empty()) {
            (None, true) => {
                debug!("No system locale to strip a region from");
                return Ok(());
            }
            (Some(current), true) => {
                let current = Locale::try_new(&current)?;
                match current.script() {
                    Some(script) => format!("{}-{script}", current.language()),
                    None => current.language().to_owned(),
                }
            }
            (Some(current), false) => Locale::try_new(&current)?
                .with_region(region)
                .map_err(|_| I18nError::invalid_region(region))?
                .to_string(),
            (None, false) => Locale::try_new(&format!("und-{region}"))
                .map_err(|_| I18nError::invalid_region(region))?
                .maximize()
                .base_name(),
        };

        self.store.set(PARAM_LOCALE, &locale)?;
        info!(region, locale = %locale, "System region changed");
        self.publish();
        Ok(())
    }

    /// Sets the system locale; `""` restores the default.
    ///
    /// # Errors
    /// [`I18nError::Locale`] for a malformed tag, store errors otherwise.
    pub fn set_system_locale(&self, locale: &str) -> Result<(), I18nError> {
        let _guard = self.mutation.lock();
        if locale.is_empty() {
            self.store.remove(PARAM_LOCALE)?;
        } else {
            let parsed = parse_tag(locale)?;
            self.store.set(PARAM_LOCALE, &parsed.to_string())?;
        }
        info!(locale, "System locale changed");
        self.publish();
        Ok(())
    }

    // --- Digits and clock ---

    #[must_use]
    pub fn using_local_digit(&self) -> bool {
        self.parameter(PARAM_LOCAL_DIGIT).is_some_and(|v| v == "true")
    }

    /// Turns native digits on or off for the system locale.
    ///
    /// # Errors
    /// [`I18nError::NotAllowed`] when enabling for a language without native digits.
    pub fn set_using_local_digit(&self, enabled: bool) -> Result<(), I18nError> {
        let _guard = self.mutation.lock();
        if enabled {
            let locale = self.get_system_locale();
            let language = Locale::try_new(&locale)?;
            if !digits::has_native_digits(language.language()) {
                return Err(I18nError::not_allowed(format!(
                    "'{}' has no native digits",
                    language.language()
                )));
            }
        }
        self.store.set(PARAM_LOCAL_DIGIT, if enabled { "true" } else { "false" })?;
        self.publish();
        Ok(())
    }

    /// The persisted clock choice, else the hour cycle of the system locale.
    #[must_use]
    pub fn is_24_hour_clock(&self) -> bool {
        match self.parameter(PARAM_24_HOUR_CLOCK).as_deref() {
            Some("true") => true,
            Some("false") => false,
            _ => Locale::try_new(&self.get_system_locale())
                .map_or(true, |locale| !locale.resolved_hour_cycle().is_12_hour()),
        }
    }

    /// Forces a 24-hour (`Some(true)`) or 12-hour clock; `None` follows the locale again.
    ///
    /// # Errors
    /// Store errors.
    pub fn set_24_hour_clock(&self, value: Option<bool>) -> Result<(), I18nError> {
        let _guard = self.mutation.lock();
        match value {
            Some(flag) => self.store.set(PARAM_24_HOUR_CLOCK, if flag { "true" } else { "false" })?,
            None => self.store.remove(PARAM_24_HOUR_CLOCK)?,
        }
        self.publish();
        Ok(())
    }

    // --- Notifications ---

    #[must_use]
    pub fn snapshot(&self) -> Arc<SystemSnapshot> {
        self.snapshot.borrow().clone()
    }

    /// Receives a new [`SystemSnapshot`] after every successful mutation.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<SystemSnapshot>> {
        self.snapshot.subscribe()
    }

    pub(crate) fn current_snapshot(&self) -> SystemSnapshot {
        SystemSnapshot {
            language: self.get_system_language(),
            region: self.get_system_region(),
            locale: self.get_system_locale(),
        }
    }

    pub(crate) fn publish(&self) {
        self.snapshot.send_replace(Arc::new(self.current_snapshot()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use glossa_domain::config::GlossaConfig;
    use std::collections::BTreeMap;

    fn service() -> LocaleConfig {
        LocaleConfig::builder().store(MemoryStore::new()).build()
    }

    fn service_with(edit: impl FnOnce(&mut GlossaConfig)) -> LocaleConfig {
        let mut config = GlossaConfig::default();
        edit(&mut config);
        LocaleConfig::builder().config(config).store(MemoryStore::new()).build()
    }

    #[test]
    fn display_names() {
        let service = service();
        assert_eq!(service.get_display_country("zh-Hans-CN", "en-US").unwrap(), "China");
        assert_eq!(service.get_display_country("JP", "zh-Hans").unwrap(), "日本");
        assert_eq!(service.get_display_language("pt", "fr", true).unwrap(), "Portugais");
        assert!(matches!(
            service.get_display_country("zh-Hans-CN", "@@"),
            Err(I18nError::Locale { .. })
        ));
        assert!(service.get_display_language("!!", "en", false).is_err());
    }

    #[test]
    fn taboo_names_replace_rendered_names() {
        let service = service_with(|config| {
            config.taboo.regions.insert(
                "en".to_owned(),
                BTreeMap::from([("GB".to_owned(), "Britain".to_owned())]),
            );
        });
        assert_eq!(service.get_display_country("en-GB", "en-US").unwrap(), "Britain");
        assert_eq!(service.get_display_country("GB", "fr").unwrap(), "Royaume-Uni");
    }

    #[test]
    fn forbidden_and_blocked_regions_are_filtered() {
        let service = service_with(|config| {
            config.catalog.forbidden_regions = vec!["GB".to_owned()];
            config.catalog.blocked_regions = vec!["AU".to_owned()];
        });

        let languages = service.get_system_languages();
        assert_eq!(languages.first().map(String::as_str), Some("zh-Hans-CN"));
        assert!(!languages.iter().any(|l| l == "en-GB"));
        assert!(languages.iter().any(|l| l == "en-AU"));

        let countries = service.get_system_countries("en").unwrap();
        assert!(countries.iter().any(|c| c == "US"));
        assert!(!countries.iter().any(|c| c == "GB" || c == "AU"));
        assert_eq!(countries, service.get_system_countries("ja-JP").unwrap());
        assert!(service.get_system_countries("1x").is_err());
    }

    #[test]
    fn suggestions() {
        let service = service();
        assert!(service.is_suggested("zh-Hant", "TW").unwrap());
        assert!(service.is_suggested("zh-Hant", "HK").unwrap());
        assert!(!service.is_suggested("zh-Hans", "TW").unwrap());
        assert!(service.is_suggested("en", "GB").unwrap());
        assert!(service.is_suggested("en", "US").unwrap());
        assert!(!service.is_suggested("ja", "US").unwrap());
        assert!(matches!(service.is_suggested("en", "ZZ"), Err(I18nError::InvalidRegion { .. })));
        assert!(matches!(service.is_suggested("@@", "US"), Err(I18nError::Locale { .. })));
    }

    #[test]
    fn suggested_language_uses_sim_region() {
        let service = service_with(|config| config.system.sim_region = Some("JP".to_owned()));
        assert!(service.is_suggested_language("zh-Hans").unwrap());
        assert!(service.is_suggested_language("ja").unwrap());
        assert!(!service.is_suggested_language("ko").unwrap());
    }

    #[test]
    fn system_values_fall_back_to_defaults() {
        let service = service();
        assert_eq!(service.get_system_language(), "zh-Hans");
        assert_eq!(service.get_system_region(), "CN");
        assert_eq!(service.get_system_locale(), "zh-Hans-CN");

        service.set_system_language("en-Latn-US").unwrap();
        service.set_system_locale("en-US").unwrap();
        assert_eq!(service.get_system_language(), "en-Latn-US");
        assert_eq!(service.get_system_region(), "US");

        service.set_system_language("").unwrap();
        service.set_system_locale("").unwrap();
        assert_eq!(service.get_system_language(), "zh-Hans");
        assert_eq!(service.get_system_locale(), "zh-Hans-CN");

        assert!(service.set_system_language("xx yy").is_err());
        assert!(service.set_system_locale("@@").is_err());
    }

    #[test]
    fn region_changes_rewrite_the_locale() {
        let service = service();
        service.set_system_region("TW").unwrap();
        assert_eq!(service.get_system_locale(), "zh-Hant-TW");

        service.set_system_locale("zh-Hans-CN-u-hc-h12").unwrap();
        service.set_system_region("SG").unwrap();
        assert_eq!(service.get_system_locale(), "zh-Hans-SG");
        assert_eq!(service.get_system_region(), "SG");

        service.set_system_region("").unwrap();
        assert_eq!(service.get_system_locale(), "zh-Hans");
        assert_eq!(service.get_system_region(), "CN");

        assert!(matches!(service.set_system_region("XX1"), Err(I18nError::InvalidRegion { .. })));
    }

    #[test]
    fn mutations_publish_snapshots() {
        let service = service();
        let mut rx = service.subscribe();
        assert_eq!(rx.borrow_and_update().locale, "zh-Hans-CN");

        service.set_system_region("US").unwrap();
        assert!(rx.has_changed().unwrap());
        let snapshot = rx.borrow_and_update().clone();
        assert_eq!(snapshot.region, "US");
        assert_eq!(snapshot.locale, "en-Latn-US");

        assert!(service.set_system_locale("@@").is_err());
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn local_digits_need_native_digits() {
        let service = service();
        assert!(!service.using_local_digit());
        assert!(matches!(service.set_using_local_digit(true), Err(I18nError::NotAllowed { .. })));

        service.set_system_locale("ar-EG").unwrap();
        service.set_using_local_digit(true).unwrap();
        assert!(service.using_local_digit());
        service.set_using_local_digit(false).unwrap();
        assert!(!service.using_local_digit());
    }

    #[test]
    fn clock_follows_locale_until_set() {
        let service = service();
        assert!(service.is_24_hour_clock());
        service.set_system_locale("en-US").unwrap();
        assert!(!service.is_24_hour_clock());

        service.set_24_hour_clock(Some(true)).unwrap();
        assert!(service.is_24_hour_clock());
        service.set_24_hour_clock(None).unwrap();
        assert!(!service.is_24_hour_clock());
    }

    #[test]
    fn concurrent_setters_leave_the_latest_snapshot() {
        let service = Arc::new(service());
        service.set_system_locale("ar-EG").unwrap();

        std::thread::scope(|scope| {
            for worker in 0..4 {
                let service = Arc::clone(&service);
                scope.spawn(move || {
                    for round in 0..50 {
                        match (worker + round) % 3 {
                            0 => service.set_24_hour_clock(Some(round % 2 == 0)).unwrap(),
                            1 => service.set_using_local_digit(round % 2 == 0).unwrap(),
                            _ => service.set_system_region(["EG", "SA"][round % 2]).unwrap(),
                        }
                    }
                });
            }
        });

        let snapshot = service.snapshot();
        assert_eq!(snapshot.locale, service.get_system_locale());
        assert_eq!(snapshot.region, service.get_system_region());
    }
}
