//! # Phone Numbers
//!
//! [`PhoneNumberFormat`] validates and formats phone numbers dialled from a region, using the
//! libphonenumber metadata bundled with the `phonenumber` crate.

mod error;
mod format;
mod options;

pub use crate::error::{PhoneError, PhoneErrorExt};
pub use crate::format::PhoneNumberFormat;
pub use crate::options::{PhoneFormatType, PhoneOptions};
