use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumString};
use typed_builder::TypedBuilder;

/// The persisted system locale state as observed after a mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSnapshot {
    pub language: String,
    pub region: String,
    pub locale: String,
}

/// Why an entry is offered first. Orders `None < Related < Sim`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Display,
    EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SuggestionType {
    #[default]
    None,
    /// Suggested with the system region (languages) or the system language (regions).
    Related,
    /// Suggested with the region of the SIM card.
    Sim,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleItem {
    /// The language tag or region code as passed in.
    pub id: String,
    pub suggestion_type: SuggestionType,
    pub display_name: String,
    /// Name in the language itself, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_name: Option<String>,
}

impl LocaleItem {
    /// The name entries are ordered by.
    #[must_use]
    pub fn sort_name(&self) -> &str {
        self.local_name.as_deref().filter(|n| !n.is_empty()).unwrap_or(&self.display_name)
    }
}

/// Options of the info-array lookups.
///
/// ```rust
/// use glossa_system::SortOptions;
///
/// let options = SortOptions::builder().locale("en-US").use_local_name(true).build();
/// assert!(options.suggested_first);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct SortOptions {
    /// Locale names are rendered in; the system locale when empty.
    #[builder(default, setter(into))]
    pub locale: String,
    #[builder(default)]
    pub use_local_name: bool,
    #[builder(default = true)]
    pub suggested_first: bool,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}
