use glossa_domain::config::TabooConfig;
use std::collections::BTreeMap;

/// `display locale -> code -> replacement`, keys lower-cased.
type Table = BTreeMap<String, BTreeMap<String, String>>;

/// Configured replacements for display names that must not be shown as rendered.
///
/// Display locales fall back by dropping trailing subtags (`zh-Hant-TW`, `zh-Hant`, `zh`);
/// codes do the same (`pt-BR` falls back to `pt`). Keys compare case-insensitively.
#[derive(Debug, Clone, Default)]
pub(crate) struct Taboo {
    languages: Table,
    regions: Table,
}

impl Taboo {
    pub(crate) fn new(config: &TabooConfig) -> Self {
        Self { languages: normalize(&config.languages), regions: normalize(&config.regions) }
    }

    pub(crate) fn replace_language(&self, language: &str, display: &str, name: String) -> String {
        lookup(&self.languages, language, display).unwrap_or(name)
    }

    pub(crate) fn replace_region(&self, region: &str, display: &str, name: String) -> String {
        lookup(&self.regions, region, display).unwrap_or(name)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.languages.is_empty() && self.regions.is_empty()
    }
}

fn normalize(table: &BTreeMap<String, BTreeMap<String, String>>) -> Table {
    table
        .iter()
        .map(|(display, names)| {
            let names = names.iter().map(|(code, name)| (key(code), name.clone())).collect();
            (key(display), names)
        })
        .collect()
}

fn key(tag: &str) -> String {
    tag.replace('_', "-").to_ascii_lowercase()
}

/// `zh-hant-tw`, `zh-hant`, `zh`
fn fallbacks(tag: &str) -> impl Iterator<Item = &str> {
    std::iter::successors(Some(tag), |t| t.rsplit_once('-').map(|(head, _)| head))
}

fn lookup(table: &Table, code: &str, display: &str) -> Option<String> {
    if table.is_empty() {
        return None;
    }
    let display_key = key(display);
    let code_key = key(code);

    let names = fallbacks(&display_key).find_map(|d| table.get(d))?;
    let replacement = fallbacks(&code_key).find_map(|c| names.get(c))?;
    tracing::debug!(code = %code_key, display_locale = %display_key, "Applying name replacement");
    Some(replacement.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taboo() -> Taboo {
        let mut config = TabooConfig::default();
        config.regions.insert(
            "zh-Hans".to_owned(),
            BTreeMap::from([("TW".to_owned(), "中国台湾".to_owned())]),
        );
        config.languages.insert(
            "en".to_owned(),
            BTreeMap::from([("pt".to_owned(), "Portuguese (generic)".to_owned())]),
        );
        Taboo::new(&config)
    }

    #[test]
    fn display_locale_falls_back() {
        let taboo = taboo();
        assert_eq!(taboo.replace_region("TW", "zh-Hans-CN", "台湾".into()), "中国台湾");
        assert_eq!(taboo.replace_region("tw", "ZH_hans", "台湾".into()), "中国台湾");
        assert_eq!(taboo.replace_region("TW", "zh", "台湾".into()), "台湾");
        assert_eq!(taboo.replace_region("TW", "en-US", "Taiwan".into()), "Taiwan");
    }

    #[test]
    fn language_code_falls_back() {
        let taboo = taboo();
        assert_eq!(
            taboo.replace_language("pt-BR", "en-GB", "Portuguese".into()),
            "Portuguese (generic)"
        );
        assert_eq!(taboo.replace_language("es", "en", "Spanish".into()), "Spanish");
        assert!(!taboo.is_empty());
        assert!(Taboo::default().is_empty());
    }
}
