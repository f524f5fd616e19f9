//! # Date, Time and Time Zone Formatting
//!
//! [`DateTimeFormat`] renders `chrono` instants for a locale. `dateStyle`/`timeStyle` presets
//! or component options (`year`, `month`, `weekday`, `hour`, ...) select an ICU4X field set;
//! patterns and symbols come from ICU4X compiled CLDR data, always in the Gregorian calendar.
//! Time zones come from the IANA database (`chrono-tz`).
//!
//! [`ZoneInfo`] answers zone questions on their own: offsets, localized names, and the zones
//! of a region.

mod error;
mod format;
mod options;
mod shape;
mod zone;

pub use crate::error::{DateTimeError, DateTimeErrorExt};
pub use crate::format::DateTimeFormat;
pub use crate::options::{
    DateTimeOptions, FormatMatcher, MonthWidth, NumericWidth, Style, TextWidth, TimeZoneName,
};
pub use crate::zone::ZoneInfo;
pub use glossa_locale::{HourCycle, LocaleMatcher};
