use crate::config::LocaleConfig;
use crate::error::I18nError;
use crate::model::{LocaleItem, SortOptions, SuggestionType};
use std::cmp::Reverse;

impl LocaleConfig {
    /// Display data for a language picker.
    ///
    /// Blocked languages are skipped. An entry is [`SuggestionType::Sim`] when suggested with the
    /// SIM region, [`SuggestionType::Related`] when suggested with the system region.
    ///
    /// # Errors
    /// [`I18nError::Locale`] when a language or the display locale is malformed.
    pub fn language_info_array<S: AsRef<str>>(
        &self,
        languages: &[S],
        options: &SortOptions,
    ) -> Result<Vec<LocaleItem>, I18nError> {
        let display = self.display_locale(options);
        let system_region = self.get_system_region();
        let sim_region = self.defaults.sim_region.as_deref();

        let mut items = Vec::with_capacity(languages.len());
        for language in languages.iter().map(AsRef::as_ref) {
            if self.catalog.blocked_languages.contains(language) {
                continue;
            }
            let display_name = self.get_display_language(language, &display, true)?;
            let local_name = options
                .use_local_name
                .then(|| self.get_display_language(language, language, true))
                .transpose()?;

            let suggestion_type = if self.suggested_with(language, sim_region)? {
                SuggestionType::Sim
            } else if self.suggested_with(language, Some(&system_region))? {
                SuggestionType::Related
            } else {
                SuggestionType::None
            };

            items.push(LocaleItem {
                id: language.to_owned(),
                suggestion_type,
                display_name,
                local_name,
            });
        }
        sort_items(&mut items, options);
        Ok(items)
    }

    /// Display data for a region picker.
    ///
    /// Blocked and forbidden regions are skipped. An entry is [`SuggestionType::Related`] when
    /// the system language is suggested in it.
    ///
    /// # Errors
    /// [`I18nError::InvalidRegion`] for an unknown region, [`I18nError::Locale`] when the
    /// display locale is malformed.
    pub fn country_info_array<S: AsRef<str>>(
        &self,
        countries: &[S],
        options: &SortOptions,
    ) -> Result<Vec<LocaleItem>, I18nError> {
        let display = self.display_locale(options);
        let language = self.get_system_language();

        let mut items = Vec::with_capacity(countries.len());
        for region in countries.iter().map(AsRef::as_ref) {
            if self.catalog.blocked_regions.contains(region) || self.catalog.is_forbidden(region) {
                continue;
            }
            let suggestion_type = if self.is_suggested(&language, region)? {
                SuggestionType::Related
            } else {
                SuggestionType::None
            };
            items.push(LocaleItem {
                id: region.to_owned(),
                suggestion_type,
                display_name: self.get_display_country(region, &display)?,
                local_name: None,
            });
        }
        sort_items(&mut items, options);
        Ok(items)
    }

    fn display_locale(&self, options: &SortOptions) -> String {
        if options.locale.is_empty() { self.get_system_locale() } else { options.locale.clone() }
    }

    /// Suggestion check that treats an absent or unusable region as "not suggested".
    fn suggested_with(&self, language: &str, region: Option<&str>) -> Result<bool, I18nError> {
        match region {
            Some(region) if glossa_locale::validate::is_valid_region(region) => {
                self.is_suggested(language, region)
            }
            _ => Ok(false),
        }
    }
}

/// Suggested entries first (SIM before related) when asked, then by name in code point order.
fn sort_items(items: &mut [LocaleItem], options: &SortOptions) {
    if options.suggested_first {
        items.sort_by(|a, b| {
            Reverse(a.suggestion_type)
                .cmp(&Reverse(b.suggestion_type))
                .then_with(|| a.sort_name().cmp(b.sort_name()))
        });
    } else {
        items.sort_by(|a, b| a.sort_name().cmp(b.sort_name()));
    }
}
