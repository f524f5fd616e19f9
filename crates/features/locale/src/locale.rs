use crate::error::LocaleError;
use icu_locale::extensions::unicode::{Key, Value};
use icu_locale::{Locale as IcuLocale, LocaleExpander};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumString};

pub const KEY_CALENDAR: &str = "ca";
pub const KEY_COLLATION: &str = "co";
pub const KEY_NUMERIC: &str = "kn";
pub const KEY_CASE_FIRST: &str = "kf";
pub const KEY_NUMBERING_SYSTEM: &str = "nu";
pub const KEY_HOUR_CYCLE: &str = "hc";

/// Regions whose preferred clock is 12-hour.
const TWELVE_HOUR_REGIONS: &[&str] = &[
    "AE", "AU", "BD", "CA", "CO", "EG", "IN", "JO", "KR", "MY", "NZ", "PH", "PK", "SA", "SG", "TW",
    "US",
];

/// Unicode `hc` keyword values.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HourCycle {
    /// 0–11, pattern letter `K`.
    H11,
    /// 1–12, pattern letter `h`.
    H12,
    /// 0–23, pattern letter `H`.
    H23,
    /// 1–24, pattern letter `k`.
    H24,
}

impl HourCycle {
    #[must_use]
    pub const fn is_12_hour(self) -> bool {
        matches!(self, Self::H11 | Self::H12)
    }

    /// The LDML pattern letter for hours in this cycle.
    #[must_use]
    pub const fn pattern_char(self) -> char {
        match self {
            Self::H11 => 'K',
            Self::H12 => 'h',
            Self::H23 => 'H',
            Self::H24 => 'k',
        }
    }
}

/// Overrides applied on top of the `-u-` extension of a tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocaleOptions {
    pub calendar: Option<String>,
    pub collation: Option<String>,
    pub hour_cycle: Option<HourCycle>,
    pub case_first: Option<String>,
    pub numeric: Option<bool>,
    pub numbering_system: Option<String>,
}

/// An immutable, parsed BCP-47 locale.
///
/// Field accessors mirror the subtags and Unicode extension keywords of the tag.
/// `Display` yields the canonical form, which parses back to an equal value.
///
/// ```rust
/// use glossa_locale::Locale;
///
/// let locale = Locale::try_new("zh-hans-cn-u-hc-h12").unwrap();
/// assert_eq!(locale.language(), "zh");
/// assert_eq!(locale.script(), Some("Hans"));
/// assert_eq!(locale.base_name(), "zh-Hans-CN");
/// assert_eq!(locale.to_string(), "zh-Hans-CN-u-hc-h12");
/// assert_eq!(locale.minimize().to_string(), "zh-u-hc-h12");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    inner: IcuLocale,
    language: String,
    script: Option<String>,
    region: Option<String>,
    calendar: Option<String>,
    collation: Option<String>,
    hour_cycle: Option<HourCycle>,
    case_first: Option<String>,
    numbering_system: Option<String>,
    numeric: bool,
}

impl Locale {
    /// Parses a language tag.
    ///
    /// # Errors
    /// [`LocaleError::InvalidLocale`] when `tag` is not well-formed.
    pub fn try_new(tag: &str) -> Result<Self, LocaleError> {
        parse_icu(tag).map(Self::from_icu)
    }

    /// Parses a language tag and applies `options` over its Unicode keywords.
    ///
    /// # Errors
    /// [`LocaleError::InvalidLocale`] for a malformed tag, [`LocaleError::InvalidOption`]
    /// when an option value is not a valid keyword value.
    pub fn with_options(tag: &str, options: &LocaleOptions) -> Result<Self, LocaleError> {
        let mut inner = parse_icu(tag)?;

        set_keyword(&mut inner, KEY_CALENDAR, "calendar", options.calendar.as_deref())?;
        set_keyword(&mut inner, KEY_COLLATION, "collation", options.collation.as_deref())?;
        set_keyword(
            &mut inner,
            KEY_HOUR_CYCLE,
            "hourCycle",
            options.hour_cycle.as_ref().map(AsRef::as_ref),
        )?;
        set_keyword(&mut inner, KEY_CASE_FIRST, "caseFirst", options.case_first.as_deref())?;
        set_keyword(
            &mut inner,
            KEY_NUMERIC,
            "numeric",
            options.numeric.map(|n| if n { "true" } else { "false" }),
        )?;
        set_keyword(
            &mut inner,
            KEY_NUMBERING_SYSTEM,
            "numberingSystem",
            options.numbering_system.as_deref(),
        )?;

        Ok(Self::from_icu(inner))
    }

    fn from_icu(inner: IcuLocale) -> Self {
        let keyword = |key: &str| -> Option<String> {
            let key = key.parse::<Key>().ok()?;
            inner.extensions.unicode.keywords.get(&key).map(ToString::to_string)
        };

        let calendar = keyword(KEY_CALENDAR);
        let collation = keyword(KEY_COLLATION);
        let hour_cycle = keyword(KEY_HOUR_CYCLE).and_then(|v| v.parse().ok());
        let case_first = keyword(KEY_CASE_FIRST);
        let numbering_system = keyword(KEY_NUMBERING_SYSTEM);
        // ICU4X elides the `true` value: `kn-true` is stored as a bare `kn`.
        let numeric = keyword(KEY_NUMERIC).is_some_and(|v| v.is_empty() || v == "true");

        Self {
            language: inner.id.language.to_string(),
            script: inner.id.script.map(|s| s.to_string()),
            region: inner.id.region.map(|r| r.to_string()),
            calendar,
            collation,
            hour_cycle,
            case_first,
            numbering_system,
            numeric,
            inner,
        }
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Language, script, region and variants without extensions.
    #[must_use]
    pub fn base_name(&self) -> String {
        self.inner.id.to_string()
    }

    #[must_use]
    pub fn calendar(&self) -> Option<&str> {
        self.calendar.as_deref()
    }

    #[must_use]
    pub fn collation(&self) -> Option<&str> {
        self.collation.as_deref()
    }

    #[must_use]
    pub const fn hour_cycle(&self) -> Option<HourCycle> {
        self.hour_cycle
    }

    #[must_use]
    pub fn case_first(&self) -> Option<&str> {
        self.case_first.as_deref()
    }

    #[must_use]
    pub fn numbering_system(&self) -> Option<&str> {
        self.numbering_system.as_deref()
    }

    #[must_use]
    pub const fn numeric(&self) -> bool {
        self.numeric
    }

    /// Adds likely subtags (`zh` → `zh-Hans-CN`). Extensions are kept.
    #[must_use]
    pub fn maximize(&self) -> Self {
        let mut inner = self.inner.clone();
        LocaleExpander::new_extended().maximize(&mut inner.id);
        Self::from_icu(inner)
    }

    /// Removes subtags implied by likely subtags (`zh-Hans-CN` → `zh`). Extensions are kept.
    #[must_use]
    pub fn minimize(&self) -> Self {
        let mut inner = self.inner.clone();
        LocaleExpander::new_extended().minimize(&mut inner.id);
        Self::from_icu(inner)
    }

    /// Language and script of `self` with `region`, extensions dropped.
    ///
    /// # Errors
    /// [`LocaleError::InvalidRegion`] when `region` is not a region subtag.
    pub fn with_region(&self, region: &str) -> Result<Self, LocaleError> {
        let region = region
            .parse::<icu_locale::subtags::Region>()
            .map_err(|_| LocaleError::invalid_region(region))?;
        let mut id = self.inner.id.clone();
        id.region = Some(region);
        Ok(Self::from_icu(IcuLocale::from(id)))
    }

    /// The clock the locale prefers when no `hc` keyword is present.
    #[must_use]
    pub fn default_hour_cycle(&self) -> HourCycle {
        if self.language == "ja" {
            return HourCycle::H23;
        }
        let maximized;
        let region = match self.region() {
            Some(region) => region,
            None => {
                maximized = self.maximize();
                maximized.region().unwrap_or_default()
            }
        };
        if TWELVE_HOUR_REGIONS.contains(&region) { HourCycle::H12 } else { HourCycle::H23 }
    }

    /// The effective hour cycle: the `hc` keyword, else the locale default.
    #[must_use]
    pub fn resolved_hour_cycle(&self) -> HourCycle {
        self.hour_cycle.unwrap_or_else(|| self.default_hour_cycle())
    }

    #[must_use]
    pub const fn as_icu(&self) -> &IcuLocale {
        &self.inner
    }
}

impl Default for Locale {
    /// The root locale, `und`.
    fn default() -> Self {
        Self::from_icu(IcuLocale::UNKNOWN)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s)
    }
}

impl TryFrom<&str> for Locale {
    type Error = LocaleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Self::try_new(&tag).map_err(serde::de::Error::custom)
    }
}

fn parse_icu(tag: &str) -> Result<IcuLocale, LocaleError> {
    let trimmed = tag.trim();
    if trimmed.is_empty() {
        return Err(LocaleError::invalid_locale(tag));
    }
    trimmed.parse::<IcuLocale>().map_err(|_| LocaleError::invalid_locale(tag))
}

fn set_keyword(
    locale: &mut IcuLocale,
    key: &str,
    option: &'static str,
    value: Option<&str>,
) -> Result<(), LocaleError> {
    let Some(value) = value else { return Ok(()) };
    let invalid = || LocaleError::InvalidOption { option, value: value.to_owned(), context: None };

    let key = key.parse::<Key>().map_err(|_| invalid())?;
    let value = value.parse::<Value>().map_err(|_| invalid())?;
    locale.extensions.unicode.keywords.set(key, value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_subtags() {
        let locale = Locale::try_new("en-GB").unwrap();
        assert_eq!(locale.language(), "en");
        assert_eq!(locale.script(), None);
        assert_eq!(locale.region(), Some("GB"));
        assert_eq!(locale.base_name(), "en-GB");
        assert!(!locale.numeric());
        assert_eq!(locale.case_first(), None);
    }

    #[test]
    fn default_is_root() {
        let root = Locale::default();
        assert_eq!(root.to_string(), "und");
        assert_eq!(root.region(), None);
    }

    #[test]
    fn rejects_malformed_tags() {
        for tag in ["", "   ", "en-", "a", "en_US_", "123", "toolonglanguage"] {
            assert!(
                matches!(Locale::try_new(tag), Err(LocaleError::InvalidLocale { .. })),
                "{tag:?} should be rejected"
            );
        }
    }

    #[test]
    fn reads_unicode_keywords() {
        let locale = Locale::try_new("de-DE-u-co-phonebk-ca-buddhist-kf-upper-kn-nu-arab").unwrap();
        assert_eq!(locale.collation(), Some("phonebk"));
        assert_eq!(locale.calendar(), Some("buddhist"));
        assert_eq!(locale.case_first(), Some("upper"));
        assert_eq!(locale.numbering_system(), Some("arab"));
        assert!(locale.numeric());
        assert_eq!(locale.hour_cycle(), None);
    }

    #[test]
    fn options_override_keywords() {
        let options = LocaleOptions {
            hour_cycle: Some(HourCycle::H11),
            numeric: Some(true),
            numbering_system: Some("jpan".to_owned()),
            ..LocaleOptions::default()
        };
        let locale =
            Locale::with_options("ja-Jpan-JP-u-ca-japanese-hc-h12-co-emoji", &options).unwrap();

        assert_eq!(locale.language(), "ja");
        assert_eq!(locale.script(), Some("Jpan"));
        assert_eq!(locale.region(), Some("JP"));
        assert_eq!(locale.base_name(), "ja-Jpan-JP");
        assert_eq!(locale.calendar(), Some("japanese"));
        assert_eq!(locale.collation(), Some("emoji"));
        assert_eq!(locale.hour_cycle(), Some(HourCycle::H11));
        assert_eq!(locale.numbering_system(), Some("jpan"));
        assert!(locale.numeric());
        assert_eq!(locale.case_first(), None);

        let minimized = locale.minimize();
        assert_eq!(minimized.script(), None);
        assert_eq!(minimized.maximize().script(), Some("Jpan"));
    }

    #[test]
    fn invalid_option_value_is_rejected() {
        let options = LocaleOptions { calendar: Some("x".to_owned()), ..LocaleOptions::default() };
        let err = Locale::with_options("en", &options).unwrap_err();
        assert!(matches!(err, LocaleError::InvalidOption { option: "calendar", .. }));
    }

    #[test]
    fn numeric_false_is_not_numeric() {
        let options = LocaleOptions { numeric: Some(false), ..LocaleOptions::default() };
        let locale = Locale::with_options("en-u-kn", &options).unwrap();
        assert!(!locale.numeric());
    }

    #[test]
    fn maximize_and_minimize() {
        let zh = Locale::try_new("zh").unwrap();
        assert_eq!(zh.maximize().to_string(), "zh-Hans-CN");
        assert_eq!(Locale::try_new("zh-TW").unwrap().maximize().script(), Some("Hant"));
        assert_eq!(Locale::try_new("en-Latn-US").unwrap().minimize().to_string(), "en");
        assert_eq!(Locale::try_new("en-US-u-hc-h23").unwrap().minimize().to_string(), "en-u-hc-h23");
    }

    #[test]
    fn with_region_drops_extensions() {
        let locale = Locale::try_new("zh-Hans-CN-u-nu-hanidec").unwrap();
        let changed = locale.with_region("SG").unwrap();
        assert_eq!(changed.to_string(), "zh-Hans-SG");
        assert!(changed.with_region("toolong").is_err());
    }

    #[test]
    fn default_hour_cycles() {
        let cycle = |tag: &str| Locale::try_new(tag).unwrap().resolved_hour_cycle();
        assert_eq!(cycle("en-US"), HourCycle::H12);
        assert_eq!(cycle("en"), HourCycle::H12);
        assert_eq!(cycle("en-GB"), HourCycle::H23);
        assert_eq!(cycle("zh-CN"), HourCycle::H23);
        assert_eq!(cycle("ja"), HourCycle::H23);
        assert_eq!(cycle("de-u-hc-h12"), HourCycle::H12);
    }

    #[test]
    fn hour_cycle_strings() {
        assert_eq!(HourCycle::H24.to_string(), "h24");
        assert_eq!("h11".parse::<HourCycle>().unwrap(), HourCycle::H11);
        assert_eq!(HourCycle::H12.pattern_char(), 'h');
        assert!(!HourCycle::H23.is_12_hour());
    }

    #[test]
    fn serde_uses_tag_strings() {
        let locale: Locale = serde_json::from_str("\"fr-CA\"").unwrap();
        assert_eq!(locale.region(), Some("CA"));
        assert_eq!(serde_json::to_string(&locale).unwrap(), "\"fr-CA\"");
        assert!(serde_json::from_str::<Locale>("\"--\"").is_err());
    }
}
