use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use typed_builder::TypedBuilder;

/// Output layout, named after the libphonenumber formats.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    AsRefStr,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum PhoneFormatType {
    /// `+16502530000`
    E164,
    /// `tel:+1-650-253-0000`
    Rfc3966,
    /// `+1 650-253-0000`
    International,
    /// `(650) 253-0000`
    #[default]
    National,
}

impl PhoneFormatType {
    /// Parses a format name, falling back to [`Self::National`] for anything unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            tracing::debug!(name, "Unknown phone format type, using NATIONAL");
            Self::National
        })
    }

    pub(crate) const fn mode(self) -> phonenumber::Mode {
        match self {
            Self::E164 => phonenumber::Mode::E164,
            Self::Rfc3966 => phonenumber::Mode::Rfc3966,
            Self::International => phonenumber::Mode::International,
            Self::National => phonenumber::Mode::National,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase", default)]
#[builder(field_defaults(default))]
pub struct PhoneOptions {
    #[serde(rename = "type")]
    pub format_type: PhoneFormatType,
}
