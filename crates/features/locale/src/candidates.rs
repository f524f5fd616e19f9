use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Requested matching algorithm. Both resolve to the first supported candidate.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    AsRefStr,
)]
pub enum LocaleMatcher {
    #[serde(rename = "lookup")]
    #[strum(serialize = "lookup")]
    Lookup,
    #[default]
    #[serde(rename = "best fit")]
    #[strum(serialize = "best fit")]
    BestFit,
}

/// One tag or an ordered list of candidate tags.
pub trait IntoLocaleList {
    fn into_locale_list(self) -> Vec<String>;
}

impl IntoLocaleList for &str {
    fn into_locale_list(self) -> Vec<String> {
        vec![self.to_owned()]
    }
}

impl IntoLocaleList for String {
    fn into_locale_list(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoLocaleList for &String {
    fn into_locale_list(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl IntoLocaleList for &Locale {
    fn into_locale_list(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl<S: AsRef<str>> IntoLocaleList for &[S] {
    fn into_locale_list(self) -> Vec<String> {
        self.iter().map(|s| s.as_ref().to_owned()).collect()
    }
}

impl<S: AsRef<str>, const N: usize> IntoLocaleList for [S; N] {
    fn into_locale_list(self) -> Vec<String> {
        self.iter().map(|s| s.as_ref().to_owned()).collect()
    }
}

impl<S: AsRef<str>> IntoLocaleList for Vec<S> {
    fn into_locale_list(self) -> Vec<String> {
        self.iter().map(|s| s.as_ref().to_owned()).collect()
    }
}

/// First candidate that parses and satisfies `is_supported`, or `fallback`.
///
/// Unparsable candidates are skipped.
pub fn resolve_candidates(
    candidates: impl IntoLocaleList,
    fallback: &str,
    is_supported: impl Fn(&Locale) -> bool,
) -> Locale {
    for candidate in candidates.into_locale_list() {
        match Locale::try_new(&candidate) {
            Ok(locale) if is_supported(&locale) => return locale,
            Ok(_) => tracing::debug!(candidate = %candidate, "Skipping unsupported locale"),
            Err(_) => tracing::debug!(candidate = %candidate, "Skipping malformed locale"),
        }
    }
    tracing::debug!(fallback, "No usable candidate, using fallback locale");
    Locale::try_new(fallback).unwrap_or_default()
}
