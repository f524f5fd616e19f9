use crate::error::DateTimeError;
use crate::options::{DateTimeOptions, MonthWidth, NumericWidth};
use crate::shape::{self, Formatter, Shape};
use crate::zone::zoned;
use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;
use glossa_domain::constants::{DEFAULT_CALENDAR, DEFAULT_TIME_ZONE, FALLBACK_LOCALE};
use glossa_locale::digits::{default_numbering_system, is_supported_numbering_system, localize_digits};
use glossa_locale::validate::is_valid_language;
use glossa_locale::{HourCycle, IntoLocaleList, Locale, resolve_candidates};
use std::sync::Arc;

/// Separator between the two ends of a range.
const RANGE_SEPARATOR: &str = " – ";

/// Calendars accepted as Gregorian.
const GREGORIAN: &[&str] = &["gregorian", "gregory", "iso8601"];

/// Languages whose 12-hour clock counts `0..=11`.
const ZERO_BASED_TWELVE_HOUR: &[&str] = &["ja"];

/// Formats instants for a locale.
///
/// Construction resolves the locale, time zone, numbering system and hour cycle once and
/// loads an ICU4X formatter for the resulting field set; formatting only converts the
/// instant and renders it.
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use glossa_datetime::{DateTimeFormat, DateTimeOptions, Style};
///
/// let options = DateTimeOptions::builder()
///     .date_style(Style::Long)
///     .time_style(Style::Short)
///     .time_zone("UTC")
///     .build();
/// let format = DateTimeFormat::try_new("en-GB", options).unwrap();
/// let instant = Utc.with_ymd_and_hms(2021, 4, 14, 15, 5, 3).unwrap();
/// assert_eq!(format.format(&instant), "14 April 2021 at 15:05");
/// ```
#[derive(Debug, Clone)]
pub struct DateTimeFormat {
    locale: Locale,
    zone: Tz,
    numbering_system: String,
    formatter: Arc<Formatter>,
    time_formatter: Option<Arc<Formatter>>,
    resolved: DateTimeOptions,
}

impl DateTimeFormat {
    /// Creates a formatter for the first candidate with a valid ISO language, else `en-US`.
    ///
    /// # Errors
    /// * [`DateTimeError::InvalidTimeZone`] for a zone missing from the IANA database.
    /// * [`DateTimeError::InvalidOption`] for `fractionalSecondDigits` outside `1..=3` or a
    ///   malformed `numberingSystem`.
    /// * [`DateTimeError::Data`] when calendar data cannot be loaded.
    pub fn try_new(
        locales: impl IntoLocaleList,
        options: DateTimeOptions,
    ) -> Result<Self, DateTimeError> {
        if let Some(digits) = options.fractional_second_digits
            && !(1..=3).contains(&digits)
        {
            return Err(DateTimeError::invalid_option("fractionalSecondDigits", digits));
        }

        let locale = resolve_candidates(locales, FALLBACK_LOCALE, |l| is_valid_language(l.language()));

        let zone_id = options.time_zone.as_deref().unwrap_or(DEFAULT_TIME_ZONE);
        let zone = zone_id.parse::<Tz>().map_err(|_| DateTimeError::InvalidTimeZone {
            zone: zone_id.to_owned(),
            context: None,
        })?;

        let numbering_system = resolve_numbering_system(&locale, options.numbering_system.as_deref())?;
        let hour_cycle = resolve_hour_cycle(&locale, &options);

        let mut resolved = options;
        if let Some(calendar) = resolved.calendar.as_deref().or(locale.calendar())
            && !GREGORIAN.contains(&calendar)
        {
            tracing::warn!(calendar, "Unsupported calendar, formatting with gregorian");
        }
        if !resolved.has_style() && !resolved.has_date_fields() && !resolved.has_time_fields() {
            resolved.year = Some(NumericWidth::Numeric);
            resolved.month = Some(MonthWidth::Numeric);
            resolved.day = Some(NumericWidth::Numeric);
        }

        let shows_hour = resolved.hour.is_some() || resolved.time_style.is_some();
        if shows_hour {
            resolved.hour_cycle = Some(hour_cycle);
            resolved.hour12 = Some(hour_cycle.is_12_hour());
        }
        resolved.locale = Some(locale.base_name());
        resolved.calendar = Some(DEFAULT_CALENDAR.to_owned());
        resolved.numbering_system = Some(numbering_system.clone());
        resolved.time_zone = Some(zone.name().to_owned());

        let icu_locale = preferences_locale(&locale, &numbering_system, shows_hour.then_some(hour_cycle))?;
        let layout = Shape::from_options(&resolved);
        let formatter = shape::formatter(&icu_locale, layout)?;
        let time_formatter =
            layout.time_only().map(|time| shape::formatter(&icu_locale, time)).transpose()?;

        tracing::debug!(locale = %locale, zone = %zone.name(), %numbering_system, "DateTimeFormat resolved");

        Ok(Self { locale, zone, numbering_system, formatter, time_formatter, resolved })
    }

    /// Renders `instant` in the resolved time zone.
    ///
    /// Instants outside the supported calendar range render as RFC 3339.
    pub fn format<Z: TimeZone>(&self, instant: &DateTime<Z>) -> String {
        self.render(&self.formatter, &instant.with_timezone(&self.zone))
    }

    /// Renders the interval `start`–`end`.
    ///
    /// Equal renderings collapse to one. When both ends fall on the same local day and the
    /// pattern has a time part, the date is written once: `Apr 14, 2021, 9:00 AM – 5:00 PM`.
    pub fn format_range<Z1: TimeZone, Z2: TimeZone>(
        &self,
        start: &DateTime<Z1>,
        end: &DateTime<Z2>,
    ) -> String {
        let first = self.format(start);
        let second = self.format(end);
        if first == second {
            return first;
        }

        let start = start.with_timezone(&self.zone);
        let end = end.with_timezone(&self.zone);
        if let Some(time) = &self.time_formatter
            && start.date_naive() == end.date_naive()
        {
            return format!("{first}{RANGE_SEPARATOR}{}", self.render(time, &end));
        }

        format!("{first}{RANGE_SEPARATOR}{second}")
    }

    /// The options in force: constructor options merged with resolved defaults.
    #[must_use]
    pub fn resolved_options(&self) -> DateTimeOptions {
        self.resolved.clone()
    }

    #[must_use]
    pub fn get_resolved_options(&self) -> DateTimeOptions {
        self.resolved_options()
    }

    #[must_use]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    #[must_use]
    pub const fn time_zone(&self) -> Tz {
        self.zone
    }

    fn render(&self, formatter: &Formatter, local: &DateTime<Tz>) -> String {
        match zoned(local) {
            Ok(input) => localize_digits(&formatter.format(&input).to_string(), &self.numbering_system),
            Err(err) => {
                tracing::warn!(%err, "Instant is outside the calendar range");
                local.to_rfc3339()
            }
        }
    }
}

/// `{base}-u-hc-..-nu-..` for ICU preferences.
fn preferences_locale(
    locale: &Locale,
    numbering_system: &str,
    hour_cycle: Option<HourCycle>,
) -> Result<icu_locale::Locale, DateTimeError> {
    let mut tag = format!("{}-u", locale.base_name());
    if let Some(cycle) = hour_cycle {
        tag.push_str("-hc-");
        tag.push_str(cycle.as_ref());
    }
    tag.push_str("-nu-");
    tag.push_str(numbering_system);
    tag.parse().map_err(|err| DateTimeError::Internal {
        message: format!("Cannot rebuild '{tag}': {err}").into(),
        context: None,
    })
}

/// `hour12` > `hourCycle` > `-u-hc-` > locale default. `h24` renders as `h23`.
fn resolve_hour_cycle(locale: &Locale, options: &DateTimeOptions) -> HourCycle {
    let cycle = match options.hour12 {
        Some(true) if ZERO_BASED_TWELVE_HOUR.contains(&locale.language()) => HourCycle::H11,
        Some(true) => HourCycle::H12,
        Some(false) => HourCycle::H23,
        None => options
            .hour_cycle
            .or(locale.hour_cycle())
            .unwrap_or_else(|| locale.default_hour_cycle()),
    };
    if cycle == HourCycle::H24 { HourCycle::H23 } else { cycle }
}

/// Option, then `-u-nu-`, then the language default. Unknown systems fall back to the default.
fn resolve_numbering_system(locale: &Locale, requested: Option<&str>) -> Result<String, DateTimeError> {
    if let Some(requested) = requested
        && (!(3..=8).contains(&requested.len())
            || !requested.bytes().all(|b| b.is_ascii_alphanumeric()))
    {
        return Err(DateTimeError::invalid_option("numberingSystem", requested));
    }

    let fallback = default_numbering_system(locale.language());
    let chosen = requested.or(locale.numbering_system()).unwrap_or(fallback);
    if is_supported_numbering_system(chosen) {
        Ok(chosen.to_owned())
    } else {
        tracing::warn!(numbering_system = chosen, fallback, "Unsupported numbering system");
        Ok(fallback.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Style, TextWidth, TimeZoneName};
    use chrono::Utc;

    fn instant(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn defaults_to_numeric_date() {
        let format = DateTimeFormat::try_new("en-US", DateTimeOptions::default()).unwrap();
        assert_eq!(format.format(&instant("2021-04-14T15:05:03Z")), "4/14/2021");

        let resolved = format.resolved_options();
        assert_eq!(resolved.locale.as_deref(), Some("en-US"));
        assert_eq!(resolved.calendar.as_deref(), Some("gregorian"));
        assert_eq!(resolved.numbering_system.as_deref(), Some("latn"));
        assert_eq!(resolved.time_zone.as_deref(), Some("UTC"));
        assert_eq!(resolved.year, Some(NumericWidth::Numeric));
        assert_eq!(resolved.month, Some(MonthWidth::Numeric));
        assert_eq!(resolved.hour_cycle, None);
    }

    #[test]
    fn chinese_components_with_zone() {
        let options = DateTimeOptions::builder()
            .year(NumericWidth::Numeric)
            .month(MonthWidth::Long)
            .day(NumericWidth::Numeric)
            .hour(NumericWidth::Numeric)
            .minute(NumericWidth::TwoDigit)
            .second(NumericWidth::Numeric)
            .weekday(TextWidth::Long)
            .time_zone("America/Los_Angeles")
            .time_zone_name(TimeZoneName::Long)
            .build();
        let format = DateTimeFormat::try_new(["jessie", "zh-CN-u-hc-h12"], options).unwrap();

        let text = format.format(&instant("2021-04-14T07:05:03Z"));
        assert!(text.contains("2021年4月14日"), "{text}");
        assert!(text.contains("星期三"), "{text}");
        assert!(text.contains("12:05:03"), "{text}");
        assert!(text.contains("北美太平洋夏令时间"), "{text}");

        let resolved = format.resolved_options();
        assert_eq!(resolved.locale.as_deref(), Some("zh-CN"));
        assert_eq!(resolved.hour_cycle, Some(HourCycle::H12));
        assert_eq!(resolved.hour12, Some(true));
    }

    #[test]
    fn hour12_beats_hour_cycle_and_keyword() {
        let options = DateTimeOptions::builder()
            .hour(NumericWidth::Numeric)
            .minute(NumericWidth::TwoDigit)
            .hour12(false)
            .hour_cycle(HourCycle::H11)
            .build();
        let format = DateTimeFormat::try_new("en-US-u-hc-h12", options).unwrap();
        assert_eq!(format.format(&instant("2021-04-14T15:05:03Z")), "15:05");

        let options = DateTimeOptions::builder()
            .hour(NumericWidth::Numeric)
            .minute(NumericWidth::TwoDigit)
            .hour_cycle(HourCycle::H11)
            .build();
        let format = DateTimeFormat::try_new("en-US-u-hc-h23", options).unwrap();
        assert_eq!(format.format(&instant("2021-04-14T12:05:03Z")), "0:05\u{202f}PM");
    }

    #[test]
    fn japanese_hour12_uses_h11() {
        let options = DateTimeOptions::builder().time_style(Style::Short).hour12(true).build();
        let format = DateTimeFormat::try_new("ja-JP", options).unwrap();
        assert_eq!(format.resolved_options().hour_cycle, Some(HourCycle::H11));
        assert_eq!(format.format(&instant("2021-04-14T00:05:03Z")), "午前0:05");
    }

    #[test]
    fn h24_renders_as_h23() {
        let options = DateTimeOptions::builder().hour(NumericWidth::Numeric).build();
        let format = DateTimeFormat::try_new("de-DE-u-hc-h24", options).unwrap();
        assert_eq!(format.resolved_options().hour_cycle, Some(HourCycle::H23));
    }

    #[test]
    fn any_valid_language_is_kept() {
        let options = DateTimeOptions::builder().date_style(Style::Long).build();
        let format = DateTimeFormat::try_new("ko-KR", options).unwrap();
        assert_eq!(format.locale().to_string(), "ko-KR");
        assert_eq!(format.format(&instant("2021-04-14T15:05:03Z")), "2021년 4월 14일");
    }

    #[test]
    fn unsupported_candidates_fall_back() {
        let format =
            DateTimeFormat::try_new(vec!["not a tag", "xx"], DateTimeOptions::default()).unwrap();
        assert_eq!(format.locale().to_string(), "en-US");
    }

    #[test]
    fn rejects_bad_options() {
        let zone = DateTimeOptions::builder().time_zone("Mars/Olympus_Mons").build();
        assert!(matches!(
            DateTimeFormat::try_new("en", zone),
            Err(DateTimeError::InvalidTimeZone { .. })
        ));

        let digits = DateTimeOptions::builder().fractional_second_digits(4_u8).build();
        assert!(matches!(
            DateTimeFormat::try_new("en", digits),
            Err(DateTimeError::InvalidOption { option: "fractionalSecondDigits", .. })
        ));

        let nu = DateTimeOptions::builder().numbering_system("x").build();
        assert!(matches!(
            DateTimeFormat::try_new("en", nu),
            Err(DateTimeError::InvalidOption { option: "numberingSystem", .. })
        ));
    }

    #[test]
    fn numbering_systems() {
        let options = DateTimeOptions::builder().numbering_system("hanidec").build();
        let format = DateTimeFormat::try_new("zh-CN", options).unwrap();
        assert_eq!(format.format(&instant("2021-04-14T15:05:03Z")), "二〇二一/四/一四");

        let keyword = DateTimeFormat::try_new("en-u-nu-fullwide", DateTimeOptions::default()).unwrap();
        assert_eq!(keyword.format(&instant("2021-04-14T15:05:03Z")), "４/１４/２０２１");

        let unknown = DateTimeOptions::builder().numbering_system("tamldec").build();
        let format = DateTimeFormat::try_new("en", unknown).unwrap();
        assert_eq!(format.resolved_options().numbering_system.as_deref(), Some("latn"));
    }

    #[test]
    fn ranges() {
        let options = DateTimeOptions::builder()
            .year(NumericWidth::Numeric)
            .month(MonthWidth::Short)
            .day(NumericWidth::Numeric)
            .hour(NumericWidth::Numeric)
            .minute(NumericWidth::TwoDigit)
            .build();
        let format = DateTimeFormat::try_new("en-US", options).unwrap();
        let nine = instant("2021-04-14T09:00:00Z");
        let five = instant("2021-04-14T17:00:00Z");
        let next = instant("2021-04-15T09:00:00Z");

        assert_eq!(format.format_range(&nine, &nine), format.format(&nine));
        assert_eq!(
            format.format_range(&nine, &five),
            format!("{} – 5:00\u{202f}PM", format.format(&nine))
        );
        assert_eq!(
            format.format_range(&nine, &next),
            format!("{} – {}", format.format(&nine), format.format(&next))
        );
    }

    #[test]
    fn date_only_ranges() {
        let format = DateTimeFormat::try_new("de-DE", DateTimeOptions::default()).unwrap();
        let a = instant("2021-04-14T09:00:00Z");
        let b = instant("2021-04-14T17:00:00Z");
        let c = instant("2021-05-01T09:00:00Z");
        assert_eq!(format.format_range(&a, &b), format.format(&a));
        assert_eq!(format.format_range(&a, &c), format!("{} – {}", format.format(&a), format.format(&c)));
        assert!(format.format(&a).contains("2021"));
    }

    #[test]
    fn styles_take_precedence_but_components_are_reported() {
        let options = DateTimeOptions::builder()
            .date_style(Style::Short)
            .weekday(TextWidth::Long)
            .build();
        let format = DateTimeFormat::try_new("fr-FR", options).unwrap();
        assert_eq!(format.format(&instant("2021-04-14T15:05:03Z")), "14/04/2021");
        assert_eq!(format.resolved_options().weekday, Some(TextWidth::Long));
    }
}
