//! Ordered list of languages the user reads, headed by the system language.

use crate::config::{LocaleConfig, parse_tag};
use crate::error::I18nError;
use glossa_domain::constants::{PARAM_PREFERRED_LANGUAGES, PREFERRED_LANGUAGES_SEPARATOR};
use glossa_locale::Locale;
use tracing::{info, warn};

impl LocaleConfig {
    /// The persisted preferred languages with the system language moved (or added) to the front.
    #[must_use]
    pub fn preferred_languages(&self) -> Vec<String> {
        let mut list: Vec<String> = self
            .store
            .get(PARAM_PREFERRED_LANGUAGES)
            .unwrap_or_default()
            .split(PREFERRED_LANGUAGES_SEPARATOR)
            .filter(|tag| !tag.is_empty())
            .map(str::to_owned)
            .collect();

        let system = self.get_system_language();
        if system.is_empty() {
            return list;
        }
        match list.iter().position(|tag| *tag == system) {
            Some(0) => {}
            Some(index) => {
                let tag = list.remove(index);
                list.insert(0, tag);
            }
            None => list.insert(0, system),
        }
        list
    }

    /// Inserts `language` at `index`, or moves it there when already listed.
    ///
    /// Indices past the end append. Whatever lands at index 0 becomes the system language.
    ///
    /// # Errors
    /// [`I18nError::Locale`] for a malformed tag, store errors otherwise.
    pub fn add_preferred_language(&self, language: &str, index: usize) -> Result<(), I18nError> {
        parse_tag(language)?;
        let _guard = self.mutation.lock();

        let mut list = self.preferred_languages();
        let mut index = index.min(list.len());
        let head_changed = match list.iter().position(|tag| tag == language) {
            Some(current) => {
                if index == list.len() {
                    index -= 1;
                }
                if current == index {
                    return Ok(());
                }
                let tag = list.remove(current);
                list.insert(index, tag);
                current == 0 || index == 0
            }
            None => {
                list.insert(index, language.to_owned());
                index == 0
            }
        };

        self.commit_preferred(&list, head_changed)?;
        info!(language, index, "Preferred language added");
        Ok(())
    }

    /// Removes the entry at `index` (clamped to the last entry).
    ///
    /// # Errors
    /// [`I18nError::NotAllowed`] when only one language is left, store errors otherwise.
    pub fn remove_preferred_language(&self, index: usize) -> Result<(), I18nError> {
        let _guard = self.mutation.lock();

        let mut list = self.preferred_languages();
        if list.len() <= 1 {
            return Err(I18nError::not_allowed("the last preferred language cannot be removed"));
        }
        let index = index.min(list.len() - 1);
        let removed = list.remove(index);

        self.commit_preferred(&list, index == 0)?;
        info!(language = %removed, index, "Preferred language removed");
        Ok(())
    }

    /// The first preferred language some resource serves, else the head of the list.
    ///
    /// A resource serves a preferred language when both share the language and, after adding
    /// likely subtags, the script.
    #[must_use]
    pub fn first_preferred_language<S: AsRef<str>>(&self, resources: &[S]) -> String {
        let list = self.preferred_languages();
        list.iter()
            .find(|preferred| resources.iter().any(|r| serves(preferred.as_str(), r.as_ref())))
            .or_else(|| list.first())
            .cloned()
            .unwrap_or_default()
    }

    /// Language of the first preferred language in the system region, e.g. `en-CN`.
    #[must_use]
    pub fn preferred_locale(&self) -> String {
        let head = self.preferred_languages().into_iter().next().unwrap_or_default();
        let language = Locale::try_new(&head)
            .map(|locale| locale.language().to_owned())
            .unwrap_or(head);
        format!("{language}-{}", self.get_system_region())
    }

    /// Writes the list, then the new head as system language when `head_changed`.
    ///
    /// A failed language write restores the previous list.
    fn commit_preferred(&self, list: &[String], head_changed: bool) -> Result<(), I18nError> {
        let previous = self.store.get(PARAM_PREFERRED_LANGUAGES);
        self.store_preferred(list)?;
        if !head_changed {
            return Ok(());
        }
        let Err(err) = self.store_language(&list[0]) else {
            return Ok(());
        };

        let restored = match previous {
            Some(previous) => self.store.set(PARAM_PREFERRED_LANGUAGES, &previous),
            None => self.store.remove(PARAM_PREFERRED_LANGUAGES),
        };
        if let Err(restore) = restored {
            warn!(%restore, "Failed to restore preferred languages");
        }
        Err(err)
    }

    fn store_preferred(&self, list: &[String]) -> Result<(), I18nError> {
        let mut buf = [0; 4];
        let separator: &str = PREFERRED_LANGUAGES_SEPARATOR.encode_utf8(&mut buf);
        self.store.set(PARAM_PREFERRED_LANGUAGES, &list.join(separator))
    }
}

fn serves(preferred: &str, resource: &str) -> bool {
    if preferred == resource {
        return true;
    }
    let (Ok(preferred), Ok(resource)) = (Locale::try_new(preferred), Locale::try_new(resource))
    else {
        return false;
    };
    if preferred.language() != resource.language() {
        return false;
    }
    let resource = resource.maximize();
    match resource.script() {
        Some(script) => preferred.maximize().script() == Some(script),
        None => resource.region().is_none() || resource.region() == preferred.region(),
    }
}
