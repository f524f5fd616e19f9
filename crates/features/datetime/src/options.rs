use glossa_locale::{HourCycle, LocaleMatcher};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use typed_builder::TypedBuilder;

/// Preset lengths for `dateStyle` and `timeStyle`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Style {
    Full,
    Long,
    Medium,
    Short,
}

/// Width of a textual field: weekday, era, day period.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TextWidth {
    Long,
    Short,
    Narrow,
}

/// Width of a numeric field.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
pub enum NumericWidth {
    #[serde(rename = "numeric")]
    #[strum(serialize = "numeric")]
    Numeric,
    #[serde(rename = "2-digit")]
    #[strum(serialize = "2-digit")]
    TwoDigit,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
pub enum MonthWidth {
    #[serde(rename = "numeric")]
    #[strum(serialize = "numeric")]
    Numeric,
    #[serde(rename = "2-digit")]
    #[strum(serialize = "2-digit")]
    TwoDigit,
    #[serde(rename = "long")]
    #[strum(serialize = "long")]
    Long,
    #[serde(rename = "short")]
    #[strum(serialize = "short")]
    Short,
    #[serde(rename = "narrow")]
    #[strum(serialize = "narrow")]
    Narrow,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TimeZoneName {
    Long,
    Short,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    AsRefStr,
)]
pub enum FormatMatcher {
    #[serde(rename = "basic")]
    #[strum(serialize = "basic")]
    Basic,
    #[default]
    #[serde(rename = "best fit")]
    #[strum(serialize = "best fit")]
    BestFit,
}

/// Options of a [`DateTimeFormat`](crate::DateTimeFormat).
///
/// Field names serialize in camelCase. `foramtMatcher` is accepted as an alias of
/// `formatMatcher`. `locale` and `calendar` are only filled in resolved options.
///
/// ```rust
/// use glossa_datetime::{DateTimeOptions, Style};
///
/// let options = DateTimeOptions::builder()
///     .date_style(Style::Long)
///     .time_zone("Europe/London")
///     .build();
/// assert_eq!(options.time_zone.as_deref(), Some("Europe/London"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase", default)]
#[builder(field_defaults(default, setter(into, strip_option)))]
pub struct DateTimeOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_style: Option<Style>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_style: Option<Style>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour_cycle: Option<HourCycle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numbering_system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour12: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekday: Option<TextWidth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub era: Option<TextWidth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<NumericWidth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<MonthWidth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<NumericWidth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour: Option<NumericWidth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minute: Option<NumericWidth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second: Option<NumericWidth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fractional_second_digits: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone_name: Option<TimeZoneName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_period: Option<TextWidth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale_matcher: Option<LocaleMatcher>,
    #[serde(skip_serializing_if = "Option::is_none", alias = "foramtMatcher")]
    pub format_matcher: Option<FormatMatcher>,
}

impl DateTimeOptions {
    pub(crate) const fn has_date_fields(&self) -> bool {
        self.weekday.is_some()
            || self.era.is_some()
            || self.year.is_some()
            || self.month.is_some()
            || self.day.is_some()
    }

    pub(crate) const fn has_time_fields(&self) -> bool {
        self.hour.is_some()
            || self.minute.is_some()
            || self.second.is_some()
            || self.fractional_second_digits.is_some()
            || self.day_period.is_some()
    }

    pub(crate) const fn has_style(&self) -> bool {
        self.date_style.is_some() || self.time_style.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_json() {
        let options = DateTimeOptions::builder()
            .hour12(true)
            .month(MonthWidth::TwoDigit)
            .time_zone_name(TimeZoneName::Short)
            .fractional_second_digits(2_u8)
            .build();
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "hour12": true,
                "month": "2-digit",
                "timeZoneName": "short",
                "fractionalSecondDigits": 2
            })
        );
    }

    #[test]
    fn format_matcher_alias() {
        let options: DateTimeOptions =
            serde_json::from_str(r#"{"foramtMatcher": "basic", "localeMatcher": "lookup"}"#)
                .unwrap();
        assert_eq!(options.format_matcher, Some(FormatMatcher::Basic));
        assert_eq!(options.locale_matcher, Some(LocaleMatcher::Lookup));

        let json = serde_json::to_string(&options).unwrap();
        assert!(json.contains("\"formatMatcher\":\"basic\""));
        assert!(!json.contains("foramt"));
    }

    #[test]
    fn field_groups() {
        let date = DateTimeOptions::builder().era(TextWidth::Short).build();
        assert!(date.has_date_fields());
        assert!(!date.has_time_fields());

        let time = DateTimeOptions::builder().day_period(TextWidth::Narrow).build();
        assert!(time.has_time_fields());
        assert!(!time.has_style());
    }
}
