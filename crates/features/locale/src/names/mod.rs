//! # Display Names
//!
//! Embedded language and region names rendered in `en`, `zh`, `de`, `fr` and `es`.
//! Languages are also known by their own name (autonym), used when a language is
//! displayed in itself. Any other display language falls back to English.

mod languages;
mod regions;

use crate::error::LocaleError;
use crate::locale::Locale;
use languages::LANGUAGES;
use regions::REGIONS;

/// Column order of the name tables.
const DISPLAY_LANGUAGES: [&str; 5] = ["en", "zh", "de", "fr", "es"];

/// Name of the language of `locale`, rendered for `display`.
///
/// `zh-Hans-CN` looks up `zh-Hans` first, then `zh`. An unknown language yields `locale`
/// unchanged. With `sentence_case` the first letter is upper-cased (`portugais` → `Portugais`).
///
/// # Errors
/// [`LocaleError::InvalidLocale`] when either tag is malformed.
///
/// ```rust
/// use glossa_locale::names::display_language;
///
/// assert_eq!(display_language("pt-BR", "zh-Hans-CN", false).unwrap(), "葡萄牙语");
/// assert_eq!(display_language("de", "de", false).unwrap(), "Deutsch");
/// assert_eq!(display_language("fr", "fr", true).unwrap(), "Français");
/// ```
pub fn display_language(
    locale: &str,
    display: &str,
    sentence_case: bool,
) -> Result<String, LocaleError> {
    let named = Locale::try_new(locale)?;
    let display = Locale::try_new(display)?;

    let scripted = named.script().map(|script| format!("{}-{script}", named.language()));
    let entry = scripted
        .as_deref()
        .and_then(find_language)
        .or_else(|| find_language(named.language()));

    let Some((names, autonym)) = entry else {
        tracing::debug!(locale, "No display name for language");
        return Ok(locale.to_owned());
    };

    let name = match column(display.language()) {
        Some(index) => names[index],
        None if display.language() == named.language() => autonym,
        None => names[0],
    };
    Ok(apply_case(name, sentence_case))
}

/// Name of the region of `locale`, rendered for `display`.
///
/// `locale` is either a tag (`zh-Hans-CN`) or a bare region code (`JP`, `419`). A tag without
/// a region yields an empty string; an unknown region yields the code itself.
///
/// # Errors
/// [`LocaleError::InvalidLocale`] when either tag is malformed.
///
/// ```rust
/// use glossa_locale::names::display_region;
///
/// assert_eq!(display_region("zh-Hans-CN", "en-US", false).unwrap(), "China");
/// assert_eq!(display_region("JP", "zh-Hans-CN", false).unwrap(), "日本");
/// assert_eq!(display_region("zh", "en-US", false).unwrap(), "");
/// ```
pub fn display_region(
    locale: &str,
    display: &str,
    sentence_case: bool,
) -> Result<String, LocaleError> {
    let display = Locale::try_new(display)?;

    let region = if is_region_code(locale) {
        locale.to_owned()
    } else {
        match Locale::try_new(locale)?.region() {
            Some(region) => region.to_owned(),
            None => return Ok(String::new()),
        }
    };

    let Some((_, names)) = REGIONS.iter().find(|(code, _)| *code == region) else {
        tracing::debug!(region = %region, "No display name for region");
        return Ok(region);
    };
    let name = names[column(display.language()).unwrap_or(0)];
    Ok(apply_case(name, sentence_case))
}

/// Whether `value` is a bare region subtag: two upper-case letters or three digits.
#[must_use]
pub fn is_region_code(value: &str) -> bool {
    match value.len() {
        2 => value.bytes().all(|b| b.is_ascii_uppercase()),
        3 => value.bytes().all(|b| b.is_ascii_digit()),
        _ => false,
    }
}

fn find_language(code: &str) -> Option<(&'static [&'static str; 5], &'static str)> {
    LANGUAGES.iter().find(|(c, ..)| *c == code).map(|(_, names, autonym)| (names, *autonym))
}

fn column(language: &str) -> Option<usize> {
    DISPLAY_LANGUAGES.iter().position(|l| *l == language)
}

fn apply_case(name: &str, sentence_case: bool) -> String {
    if sentence_case { to_sentence_case(name) } else { name.to_owned() }
}

/// Upper-cases the first character: `portugais` → `Portugais`.
#[must_use]
pub fn to_sentence_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
