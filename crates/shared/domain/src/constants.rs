//! Parameter keys and built-in defaults.

/// Persisted system language (e.g. `zh-Hans`).
pub const PARAM_LANGUAGE: &str = "glossa.sys.language";
/// Persisted system locale (e.g. `zh-Hans-CN`).
pub const PARAM_LOCALE: &str = "glossa.sys.locale";
/// Persisted preferred languages, joined by [`PREFERRED_LANGUAGES_SEPARATOR`].
pub const PARAM_PREFERRED_LANGUAGES: &str = "glossa.sys.preferred_languages";
pub const PARAM_LOCAL_DIGIT: &str = "glossa.sys.local_digit";
pub const PARAM_24_HOUR_CLOCK: &str = "glossa.sys.24_hour_clock";

pub const PREFERRED_LANGUAGES_SEPARATOR: char = ';';

pub const DEFAULT_LANGUAGE: &str = "zh-Hans";
pub const DEFAULT_REGION: &str = "CN";
pub const DEFAULT_LOCALE: &str = "zh-Hans-CN";

/// Locale used by formatters when no candidate is usable.
pub const FALLBACK_LOCALE: &str = "en-US";
pub const DEFAULT_TIME_ZONE: &str = "UTC";
pub const DEFAULT_CALENDAR: &str = "gregorian";
pub const DEFAULT_NUMBERING_SYSTEM: &str = "latn";

/// Environment prefix for configuration overrides (`GLOSSA__FORMAT__DEFAULT_TIME_ZONE`).
pub const ENV_PREFIX: &str = "GLOSSA";
