use crate::config::LocaleConfig;
use crate::error::I18nError;
use crate::model::{LocaleItem, SortOptions};
use std::ops::Deref;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Cheap-clone handle over a shared [`LocaleConfig`].
///
/// Every lookup comes in two forms that yield the same value: an `async fn` and a `*_with`
/// variant taking a callback. Both run the lookup on the blocking pool when a Tokio runtime
/// is available and inline otherwise. The synchronous forms live on [`LocaleConfig`], see
/// [`I18n::config`]; methods without an async form are reachable through `Deref`.
///
/// ```rust
/// use glossa_system::{I18n, LocaleConfig, MemoryStore};
///
/// let i18n = I18n::new(LocaleConfig::builder().store(MemoryStore::new()).build());
/// i18n.get_system_locale_with(|locale| assert_eq!(locale.unwrap(), "zh-Hans-CN"));
/// assert_eq!(i18n.config().get_system_region(), "CN");
/// assert_eq!(i18n.preferred_locale(), "zh-CN");
/// ```
#[derive(Debug, Clone)]
pub struct I18n {
    inner: Arc<LocaleConfig>,
}

impl Deref for I18n {
    type Target = LocaleConfig;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl From<LocaleConfig> for I18n {
    fn from(config: LocaleConfig) -> Self {
        Self::new(config)
    }
}

impl I18n {
    #[must_use]
    pub fn new(config: LocaleConfig) -> Self {
        Self { inner: Arc::new(config) }
    }

    #[must_use]
    pub fn config(&self) -> &LocaleConfig {
        &self.inner
    }

    async fn run<T, F>(&self, op: F) -> Result<T, I18nError>
    where
        T: Send + 'static,
        F: FnOnce(&LocaleConfig) -> Result<T, I18nError> + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        match Handle::try_current() {
            Ok(handle) => handle
                .spawn_blocking(move || op(&inner))
                .await
                .map_err(|err| I18nError::from(format!("Lookup task failed: {err}")))?,
            Err(_) => op(&inner),
        }
    }

    fn dispatch<T, F, C>(&self, op: F, callback: C)
    where
        T: Send + 'static,
        F: FnOnce(&LocaleConfig) -> Result<T, I18nError> + Send + 'static,
        C: FnOnce(Result<T, I18nError>) + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        match Handle::try_current() {
            Ok(handle) => {
                handle.spawn_blocking(move || callback(op(&inner)));
            }
            Err(_) => callback(op(&inner)),
        }
    }
}

/// Generates the `async fn` and `*_with` forms of each lookup from one body.
///
/// Arguments are declared as `name: parameter type => owned type`; the owned value moves into
/// the lookup.
macro_rules! deferred {
    ($(
        $(#[$meta:meta])*
        fn $name:ident, $with:ident($($arg:ident: $ty:ty => $owned:ty),*) -> $out:ty
            = |$config:ident| $body:expr;
    )*) => {
        impl I18n {
            $(
                $(#[$meta])*
                ///
                /// # Errors
                #[doc = concat!("Same as [`LocaleConfig::", stringify!($name), "`].")]
                #[allow(clippy::useless_conversion)]
                pub async fn $name(&self, $($arg: $ty),*) -> Result<$out, I18nError> {
                    $(let $arg: $owned = $arg.into();)*
                    self.run(move |$config: &LocaleConfig| $body).await
                }

                #[doc = concat!("Callback form of [`I18n::", stringify!($name), "`].")]
                #[allow(clippy::useless_conversion)]
                pub fn $with(
                    &self,
                    $($arg: $ty,)*
                    callback: impl FnOnce(Result<$out, I18nError>) + Send + 'static,
                ) {
                    $(let $arg: $owned = $arg.into();)*
                    self.dispatch(move |$config: &LocaleConfig| $body, callback);
                }
            )*
        }
    };
}

deferred! {
    /// Name of the region of `locale` in `display_locale`.
    fn get_display_country, get_display_country_with(
        locale: impl Into<String> => String,
        display_locale: impl Into<String> => String
    ) -> String = |config| config.get_display_country(&locale, &display_locale);

    /// Name of the language of `locale` in `display_locale`.
    fn get_display_language, get_display_language_with(
        locale: impl Into<String> => String,
        display_locale: impl Into<String> => String,
        sentence_case: bool => bool
    ) -> String = |config| config.get_display_language(&locale, &display_locale, sentence_case);

    fn get_system_languages, get_system_languages_with() -> Vec<String>
        = |config| Ok(config.get_system_languages());

    fn get_system_countries, get_system_countries_with(
        language: impl Into<String> => String
    ) -> Vec<String> = |config| config.get_system_countries(&language);

    fn is_suggested, is_suggested_with(
        language: impl Into<String> => String,
        region: impl Into<String> => String
    ) -> bool = |config| config.is_suggested(&language, &region);

    fn is_suggested_language, is_suggested_language_with(
        language: impl Into<String> => String
    ) -> bool = |config| config.is_suggested_language(&language);

    fn get_system_language, get_system_language_with() -> String
        = |config| Ok(config.get_system_language());

    fn set_system_language, set_system_language_with(
        language: impl Into<String> => String
    ) -> () = |config| config.set_system_language(&language);

    fn get_system_region, get_system_region_with() -> String
        = |config| Ok(config.get_system_region());

    fn set_system_region, set_system_region_with(
        region: impl Into<String> => String
    ) -> () = |config| config.set_system_region(&region);

    fn get_system_locale, get_system_locale_with() -> String
        = |config| Ok(config.get_system_locale());

    fn set_system_locale, set_system_locale_with(
        locale: impl Into<String> => String
    ) -> () = |config| config.set_system_locale(&locale);

    fn preferred_languages, preferred_languages_with() -> Vec<String>
        = |config| Ok(config.preferred_languages());

    fn add_preferred_language, add_preferred_language_with(
        language: impl Into<String> => String,
        index: usize => usize
    ) -> () = |config| config.add_preferred_language(&language, index);

    fn remove_preferred_language, remove_preferred_language_with(
        index: usize => usize
    ) -> () = |config| config.remove_preferred_language(index);

    fn language_info_array, language_info_array_with(
        languages: Vec<String> => Vec<String>,
        options: SortOptions => SortOptions
    ) -> Vec<LocaleItem> = |config| config.language_info_array(&languages, &options);

    fn country_info_array, country_info_array_with(
        countries: Vec<String> => Vec<String>,
        options: SortOptions => SortOptions
    ) -> Vec<LocaleItem> = |config| config.country_info_array(&countries, &options);

    fn using_local_digit, using_local_digit_with() -> bool
        = |config| Ok(config.using_local_digit());

    fn set_using_local_digit, set_using_local_digit_with(
        enabled: bool => bool
    ) -> () = |config| config.set_using_local_digit(enabled);

    fn is_24_hour_clock, is_24_hour_clock_with() -> bool
        = |config| Ok(config.is_24_hour_clock());

    fn set_24_hour_clock, set_24_hour_clock_with(
        value: Option<bool> => Option<bool>
    ) -> () = |config| config.set_24_hour_clock(value);
}
