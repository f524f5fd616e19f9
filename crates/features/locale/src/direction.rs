use crate::locale::Locale;
use icu_locale::LocaleDirectionality;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display};

/// Writing direction of a locale's likely script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[strum(serialize = "ltr")]
    #[serde(rename = "ltr")]
    LeftToRight,
    #[strum(serialize = "rtl")]
    #[serde(rename = "rtl")]
    RightToLeft,
}

/// Resolves the direction from the maximized script (`ar` → `Arab` → right-to-left).
#[must_use]
pub fn direction(locale: &Locale) -> Direction {
    if LocaleDirectionality::new_extended().is_right_to_left(&locale.as_icu().id) {
        Direction::RightToLeft
    } else {
        Direction::LeftToRight
    }
}

/// Convenience over [`direction`] for raw tags; unparsable tags are left-to-right.
#[must_use]
pub fn is_rtl(tag: &str) -> bool {
    Locale::try_new(tag).is_ok_and(|locale| direction(&locale) == Direction::RightToLeft)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripts_decide_direction() {
        assert!(is_rtl("ar"));
        assert!(is_rtl("he-IL"));
        assert!(is_rtl("fa"));
        assert!(is_rtl("ur-PK"));
        assert!(!is_rtl("zh"));
        assert!(!is_rtl("en-US"));
        assert!(!is_rtl("not a tag"));
    }

    #[test]
    fn explicit_script_wins() {
        let latin = Locale::try_new("az-Latn").unwrap();
        assert_eq!(direction(&latin), Direction::LeftToRight);
        let arabic = Locale::try_new("az-Arab").unwrap();
        assert_eq!(direction(&arabic), Direction::RightToLeft);
        assert_eq!(Direction::RightToLeft.to_string(), "rtl");
    }
}
