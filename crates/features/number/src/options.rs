use glossa_locale::LocaleMatcher;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use typed_builder::TypedBuilder;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NumberStyle {
    #[default]
    Decimal,
    Percent,
    Currency,
    Unit,
}

/// `accounting` wraps negative amounts in parentheses.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CurrencySign {
    #[default]
    Standard,
    Accounting,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum CurrencyDisplay {
    #[default]
    Symbol,
    NarrowSymbol,
    Code,
    Name,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UnitDisplay {
    #[default]
    Short,
    Long,
    Narrow,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum SignDisplay {
    #[default]
    Auto,
    Never,
    Always,
    ExceptZero,
    Negative,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CompactDisplay {
    #[default]
    Short,
    Long,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Notation {
    #[default]
    Standard,
    Scientific,
    Engineering,
    Compact,
}

/// Options of a [`NumberFormat`](crate::NumberFormat).
///
/// Field names serialize in camelCase. The misspelled `minimumSiginificantDigits` and
/// `maximumSiginificantDigits` are accepted when deserializing.
///
/// ```rust
/// use glossa_number::{NumberOptions, NumberStyle};
///
/// let options = NumberOptions::builder()
///     .style(NumberStyle::Currency)
///     .currency("EUR")
///     .maximum_fraction_digits(2_u8)
///     .build();
/// assert_eq!(options.currency.as_deref(), Some("EUR"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase", default)]
#[builder(field_defaults(default, setter(into, strip_option)))]
pub struct NumberOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_sign: Option<CurrencySign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_display: Option<CurrencyDisplay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_display: Option<UnitDisplay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign_display: Option<SignDisplay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compact_display: Option<CompactDisplay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notation: Option<Notation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale_matcher: Option<LocaleMatcher>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<NumberStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numbering_system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_grouping: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_integer_digits: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_fraction_digits: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_fraction_digits: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none", alias = "minimumSiginificantDigits")]
    pub minimum_significant_digits: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none", alias = "maximumSiginificantDigits")]
    pub maximum_significant_digits: Option<u8>,
}

impl NumberOptions {
    pub(crate) const fn uses_significant_digits(&self) -> bool {
        self.minimum_significant_digits.is_some() || self.maximum_significant_digits.is_some()
    }

    pub(crate) const fn has_digit_options(&self) -> bool {
        self.uses_significant_digits()
            || self.minimum_fraction_digits.is_some()
            || self.maximum_fraction_digits.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn misspelled_significant_digits() {
        let options: NumberOptions = serde_json::from_str(
            r#"{"minimumSiginificantDigits": 2, "maximumSiginificantDigits": 4}"#,
        )
        .unwrap();
        assert_eq!(options.minimum_significant_digits, Some(2));
        assert_eq!(options.maximum_significant_digits, Some(4));
        assert!(options.uses_significant_digits());

        let json = serde_json::to_string(&options).unwrap();
        assert!(json.contains("\"minimumSignificantDigits\":2"));
        assert!(!json.contains("Siginificant"));
    }

    #[test]
    fn enum_spellings() {
        let options = NumberOptions::builder()
            .currency_display(CurrencyDisplay::NarrowSymbol)
            .sign_display(SignDisplay::ExceptZero)
            .use_grouping(false)
            .build();
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "currencyDisplay": "narrowSymbol",
                "signDisplay": "exceptZero",
                "useGrouping": false
            })
        );
        assert_eq!("exceptZero".parse::<SignDisplay>().unwrap(), SignDisplay::ExceptZero);
        assert_eq!(NumberStyle::Percent.as_ref(), "percent");
    }
}
