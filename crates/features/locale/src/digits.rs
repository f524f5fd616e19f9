//! Native digit sets for the numbering systems the formatters render.

use glossa_domain::constants::DEFAULT_NUMBERING_SYSTEM;

/// `(numbering system, digits 0-9)`.
const DIGITS: &[(&str, [char; 10])] = &[
    ("latn", ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9']),
    ("arab", ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩']),
    ("arabext", ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹']),
    ("beng", ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯']),
    ("deva", ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९']),
    ("fullwide", ['０', '１', '２', '３', '４', '５', '６', '７', '８', '９']),
    ("hanidec", ['〇', '一', '二', '三', '四', '五', '六', '七', '八', '九']),
    ("thai", ['๐', '๑', '๒', '๓', '๔', '๕', '๖', '๗', '๘', '๙']),
    ("mymr", ['၀', '၁', '၂', '၃', '၄', '၅', '၆', '၇', '၈', '၉']),
];

/// Languages whose default numbering system is not `latn`.
const NATIVE_DEFAULTS: &[(&str, &str)] = &[
    ("ar", "arab"),
    ("fa", "arabext"),
    ("bn", "beng"),
    ("mr", "deva"),
    ("ne", "deva"),
    ("my", "mymr"),
];

/// Whether `numbering_system` has a digit table here.
#[must_use]
pub fn is_supported_numbering_system(numbering_system: &str) -> bool {
    DIGITS.iter().any(|(name, _)| *name == numbering_system)
}

#[must_use]
pub fn default_numbering_system(language: &str) -> &'static str {
    NATIVE_DEFAULTS
        .iter()
        .find(|(lang, _)| *lang == language)
        .map_or(DEFAULT_NUMBERING_SYSTEM, |(_, nu)| *nu)
}

/// Whether the language writes numbers with its own digits by default.
#[must_use]
pub fn has_native_digits(language: &str) -> bool {
    default_numbering_system(language) != DEFAULT_NUMBERING_SYSTEM
}

/// Replaces ASCII digits in `text` with the digits of `numbering_system`.
///
/// Unknown systems leave the text untouched.
#[must_use]
pub fn localize_digits(text: &str, numbering_system: &str) -> String {
    let Some((_, digits)) = DIGITS.iter().find(|(name, _)| *name == numbering_system) else {
        return text.to_owned();
    };
    text.chars()
        .map(|c| c.to_digit(10).filter(|_| c.is_ascii_digit()).map_or(c, |d| digits[d as usize]))
        .collect()
}
