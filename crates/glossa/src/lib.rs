//! Facade crate for Glossa.
//! Re-exports the locale, formatting and system crates under two namespaces and wires the
//! system service from configuration.
//! Keep this crate thin: it should compose other crates, not implement locale logic.
//!
//! ## Usage
//! - [`intl`]: stateless locale values and formatters.
//! - [`i18n`]: the stateful system locale service; build it with [`init`].
//!
//! ```rust
//! use glossa::domain::config::GlossaConfig;
//! use glossa::intl::{NumberFormat, NumberOptions};
//!
//! let i18n = glossa::init(&GlossaConfig::default()).unwrap();
//! let locale = i18n.config().get_system_locale();
//!
//! let format = NumberFormat::try_new(locale.as_str(), NumberOptions::default()).unwrap();
//! assert_eq!(format.format(1234.5), "1,234.5");
//! ```

pub use glossa_domain as domain;
pub use glossa_kernel as kernel;

use glossa_domain::config::GlossaConfig;
use glossa_system::{I18n, I18nError, LocaleConfig};

/// Locale values, validation, display names, formatters and time zones.
pub mod intl {
    pub use glossa_datetime::{
        DateTimeError, DateTimeFormat, DateTimeOptions, FormatMatcher, MonthWidth, NumericWidth,
        Style, TextWidth, TimeZoneName, ZoneInfo,
    };
    pub use glossa_locale::{
        Direction, HourCycle, IntoLocaleList, Locale, LocaleError, LocaleMatcher, LocaleOptions,
        digits, direction, is_rtl, names, validate,
    };
    pub use glossa_number::{
        CompactDisplay, CurrencyDisplay, CurrencySign, Notation, NumberError, NumberFormat,
        NumberOptions, NumberStyle, SignDisplay, UnitDisplay,
    };
    pub use glossa_phone::{PhoneError, PhoneFormatType, PhoneNumberFormat, PhoneOptions};
}

/// The system locale service.
pub mod i18n {
    pub use glossa_system::{
        FileStore, I18n, I18nError, I18nErrorExt, LocaleConfig, LocaleConfigBuilder, LocaleItem,
        MemoryStore, ParameterStore, SortOptions, SuggestionType, SystemSnapshot,
    };
}

/// Builds the system locale service for `config`.
///
/// Parameters persist to `system.parameters_path` when set and live in memory otherwise.
///
/// # Errors
/// Returns [`I18nError`] when the parameter file exists but cannot be read or parsed.
pub fn init(config: &GlossaConfig) -> Result<I18n, I18nError> {
    let service = LocaleConfig::builder().config(config.clone()).configured_store()?.build();
    tracing::info!(
        locale = %service.get_system_locale(),
        persistent = config.system.parameters_path.is_some(),
        "Glossa initialized"
    );
    Ok(I18n::new(service))
}
