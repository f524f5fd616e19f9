//! # Number Formatting
//!
//! [`NumberFormat`] renders `f64` values as plain decimals, percentages, currency amounts or
//! unit quantities. Digit grouping and decimal symbols come from ICU4X (`icu_decimal`);
//! rounding, padding and notation are applied to a `fixed_decimal::Decimal` first, and
//! native digits are substituted last.
//!
//! Currency symbols and names, unit labels and compact suffixes come from small embedded
//! tables.

mod currency;
mod error;
mod format;
mod notation;
mod options;
mod unit;

pub use crate::error::{NumberError, NumberErrorExt};
pub use crate::format::NumberFormat;
pub use crate::options::{
    CompactDisplay, CurrencyDisplay, CurrencySign, Notation, NumberOptions, NumberStyle,
    SignDisplay, UnitDisplay,
};
pub use glossa_locale::LocaleMatcher;
