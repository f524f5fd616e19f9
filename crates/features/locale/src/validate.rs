//! # Subtag Validation
//!
//! Checks that go beyond BCP-47 well-formedness: a language subtag must be a known
//! ISO 639 code and a region subtag a known ISO 3166-1 alpha-2 code.

use crate::locale::{
    KEY_CALENDAR, KEY_CASE_FIRST, KEY_COLLATION, KEY_HOUR_CYCLE, KEY_NUMBERING_SYSTEM, KEY_NUMERIC,
    Locale,
};

/// ISO 639-1 codes plus the few three-letter codes the catalogs use.
const LANGUAGES: &[&str] = &[
    "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az", "ba", "be", "bg", "bh",
    "bi", "bm", "bn", "bo", "br", "bs", "ca", "ce", "ch", "co", "cr", "cs", "cu", "cv", "cy", "da",
    "de", "dv", "dz", "ee", "el", "en", "eo", "es", "et", "eu", "fa", "ff", "fi", "fj", "fo", "fr",
    "fy", "ga", "gd", "gl", "gn", "gu", "gv", "ha", "he", "hi", "ho", "hr", "ht", "hu", "hy", "hz",
    "ia", "id", "ie", "ig", "ii", "ik", "io", "is", "it", "iu", "ja", "jv", "ka", "kg", "ki", "kj",
    "kk", "kl", "km", "kn", "ko", "kr", "ks", "ku", "kv", "kw", "ky", "la", "lb", "lg", "li", "ln",
    "lo", "lt", "lu", "lv", "mg", "mh", "mi", "mk", "ml", "mn", "mr", "ms", "mt", "my", "na", "nb",
    "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv", "ny", "oc", "oj", "om", "or", "os", "pa", "pi",
    "pl", "ps", "pt", "qu", "rm", "rn", "ro", "ru", "rw", "sa", "sc", "sd", "se", "sg", "si", "sk",
    "sl", "sm", "sn", "so", "sq", "sr", "ss", "st", "su", "sv", "sw", "ta", "te", "tg", "th", "ti",
    "tk", "tl", "tn", "to", "tr", "ts", "tt", "tw", "ty", "ug", "uk", "ur", "uz", "ve", "vi", "vo",
    "wa", "wo", "xh", "yi", "yo", "za", "zh", "zu", "ast", "ceb", "chr", "ckb", "fil", "gsw",
    "haw", "kok", "mai", "mni", "sat", "yue",
];

/// ISO 3166-1 alpha-2 codes.
const REGIONS: &[&str] = &[
    "AD", "AE", "AF", "AG", "AI", "AL", "AM", "AO", "AQ", "AR", "AS", "AT", "AU", "AW", "AX", "AZ",
    "BA", "BB", "BD", "BE", "BF", "BG", "BH", "BI", "BJ", "BL", "BM", "BN", "BO", "BQ", "BR", "BS",
    "BT", "BV", "BW", "BY", "BZ", "CA", "CC", "CD", "CF", "CG", "CH", "CI", "CK", "CL", "CM", "CN",
    "CO", "CR", "CU", "CV", "CW", "CX", "CY", "CZ", "DE", "DJ", "DK", "DM", "DO", "DZ", "EC", "EE",
    "EG", "EH", "ER", "ES", "ET", "FI", "FJ", "FK", "FM", "FO", "FR", "GA", "GB", "GD", "GE", "GF",
    "GG", "GH", "GI", "GL", "GM", "GN", "GP", "GQ", "GR", "GS", "GT", "GU", "GW", "GY", "HK", "HM",
    "HN", "HR", "HT", "HU", "ID", "IE", "IL", "IM", "IN", "IO", "IQ", "IR", "IS", "IT", "JE", "JM",
    "JO", "JP", "KE", "KG", "KH", "KI", "KM", "KN", "KP", "KR", "KW", "KY", "KZ", "LA", "LB", "LC",
    "LI", "LK", "LR", "LS", "LT", "LU", "LV", "LY", "MA", "MC", "MD", "ME", "MF", "MG", "MH", "MK",
    "ML", "MM", "MN", "MO", "MP", "MQ", "MR", "MS", "MT", "MU", "MV", "MW", "MX", "MY", "MZ", "NA",
    "NC", "NE", "NF", "NG", "NI", "NL", "NO", "NP", "NR", "NU", "NZ", "OM", "PA", "PE", "PF", "PG",
    "PH", "PK", "PL", "PM", "PN", "PR", "PS", "PT", "PW", "PY", "QA", "RE", "RO", "RS", "RU", "RW",
    "SA", "SB", "SC", "SD", "SE", "SG", "SH", "SI", "SJ", "SK", "SL", "SM", "SN", "SO", "SR", "SS",
    "ST", "SV", "SX", "SY", "SZ", "TC", "TD", "TF", "TG", "TH", "TJ", "TK", "TL", "TM", "TN", "TO",
    "TR", "TT", "TV", "TW", "TZ", "UA", "UG", "UM", "US", "UY", "UZ", "VA", "VC", "VE", "VG", "VI",
    "VN", "VU", "WF", "WS", "YE", "YT", "ZA", "ZM", "ZW",
];

/// Keywords kept by [`valid_locale`], in output order.
const KEPT_KEYWORDS: [&str; 6] = [
    KEY_CALENDAR,
    KEY_COLLATION,
    KEY_NUMERIC,
    KEY_CASE_FIRST,
    KEY_NUMBERING_SYSTEM,
    KEY_HOUR_CYCLE,
];

#[must_use]
pub fn is_valid_language(language: &str) -> bool {
    LANGUAGES.contains(&language)
}

/// Four ASCII letters in title case, e.g. `Hans`.
#[must_use]
pub fn is_valid_script(script: &str) -> bool {
    let mut chars = script.chars();
    script.len() == 4
        && chars.next().is_some_and(|c| c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_lowercase())
}

#[must_use]
pub fn is_valid_region(region: &str) -> bool {
    REGIONS.contains(&region)
}

/// Whether the first subtag of `tag` is a known language.
#[must_use]
pub fn is_valid_tag(tag: &str) -> bool {
    tag.split(['-', '_']).next().is_some_and(is_valid_language)
}

/// Normalizes `tag` to its base name plus the keywords `ca co kn kf nu hc`, in that order.
///
/// Unknown keywords and other extensions are dropped. Returns an empty string when `tag`
/// does not parse.
///
/// ```rust
/// use glossa_locale::validate::valid_locale;
///
/// assert_eq!(valid_locale("en-US-u-nu-latn-ca-gregory-fw-mon"), "en-US-u-ca-gregory-nu-latn");
/// ```
#[must_use]
pub fn valid_locale(tag: &str) -> String {
    let Ok(locale) = Locale::try_new(tag) else {
        tracing::warn!(tag, "Dropping unparsable locale");
        return String::new();
    };

    let mut out = locale.base_name();
    let mut extension = String::new();
    for key in KEPT_KEYWORDS {
        let value = match key {
            KEY_CALENDAR => locale.calendar().map(str::to_owned),
            KEY_COLLATION => locale.collation().map(str::to_owned),
            KEY_NUMERIC => locale.numeric().then(|| "true".to_owned()),
            KEY_CASE_FIRST => locale.case_first().map(str::to_owned),
            KEY_NUMBERING_SYSTEM => locale.numbering_system().map(str::to_owned),
            _ => locale.hour_cycle().map(|hc| hc.to_string()),
        };
        if let Some(value) = value {
            extension.push('-');
            extension.push_str(key);
            extension.push('-');
            extension.push_str(&value);
        }
    }
    if !extension.is_empty() {
        out.push_str("-u");
        out.push_str(&extension);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn languages() {
        assert!(is_valid_language("zh"));
        assert!(is_valid_language("fil"));
        assert!(!is_valid_language("xx"));
        assert!(!is_valid_language("ZH"));
    }

    #[test]
    fn scripts() {
        assert!(is_valid_script("Hans"));
        assert!(!is_valid_script("hans"));
        assert!(!is_valid_script("HANS"));
        assert!(!is_valid_script("Han"));
    }

    #[test]
    fn regions() {
        assert!(is_valid_region("CN"));
        assert!(is_valid_region("HK"));
        assert!(!is_valid_region("XX"));
        assert!(!is_valid_region("cn"));
        assert!(!is_valid_region("419"));
    }

    #[test]
    fn tags() {
        assert!(is_valid_tag("en-US"));
        assert!(is_valid_tag("zh_Hans"));
        assert!(!is_valid_tag("qq-US"));
        assert!(!is_valid_tag(""));
    }

    #[test]
    fn valid_locale_orders_keywords() {
        assert_eq!(
            valid_locale("zh-u-hc-h12-nu-latn-ca-chinese-co-pinyin-kf-upper-kn-true"),
            "zh-u-ca-chinese-co-pinyin-kn-true-kf-upper-nu-latn-hc-h12"
        );
        assert_eq!(valid_locale("fr-CA"), "fr-CA");
        assert_eq!(valid_locale("en-US-x-private"), "en-US");
        assert_eq!(valid_locale("--"), "");
    }
}
