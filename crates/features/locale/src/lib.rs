//! # Locale
//!
//! BCP-47 locale values and the locale data the formatters and the system service share.
//!
//! * [`Locale`]: an immutable parsed tag with typed access to its subtags and Unicode
//!   extension keywords, plus likely-subtag [`Locale::maximize`] and [`Locale::minimize`].
//! * [`validate`]: ISO language and region checks and keyword normalization.
//! * [`names`]: display names of languages and regions.
//! * [`digits`]: native digit sets and default numbering systems.
//! * [`direction()`]: writing direction.
//! * [`resolve_candidates`]: picks the locale a formatter runs with from a candidate list.
//!
//! Parsing and likely subtags are backed by ICU4X (`icu_locale`) with compiled data.

mod candidates;
pub mod digits;
mod direction;
mod error;
mod locale;
pub mod names;
pub mod validate;

pub use crate::candidates::{IntoLocaleList, LocaleMatcher, resolve_candidates};
pub use crate::direction::{Direction, direction, is_rtl};
pub use crate::error::{LocaleError, LocaleErrorExt};
pub use crate::locale::{
    HourCycle, KEY_CALENDAR, KEY_CASE_FIRST, KEY_COLLATION, KEY_HOUR_CYCLE, KEY_NUMBERING_SYSTEM,
    KEY_NUMERIC, Locale, LocaleOptions,
};
