use chrono::{DateTime, TimeZone, Utc};
use glossa_datetime::{
    DateTimeFormat, DateTimeOptions, HourCycle, MonthWidth, NumericWidth, Style, TextWidth,
};
use proptest::prelude::*;

fn instant(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc)
}

#[test]
fn british_long_date_short_time() {
    let options = DateTimeOptions::builder()
        .date_style(Style::Long)
        .time_style(Style::Short)
        .time_zone("Europe/London")
        .build();
    let format = DateTimeFormat::try_new(["en-GB"], options).unwrap();

    // 14:05 UTC is 15:05 British Summer Time.
    assert_eq!(format.format(&instant("2021-04-14T14:05:03Z")), "14 April 2021 at 15:05");
    assert_eq!(format.resolved_options().time_zone.as_deref(), Some("Europe/London"));
}

#[test]
fn korean_long_date() {
    let options = DateTimeOptions::builder().date_style(Style::Long).build();
    let format = DateTimeFormat::try_new(["ko-KR"], options).unwrap();

    assert_eq!(format.resolved_options().locale.as_deref(), Some("ko-KR"));
    assert!(format.format(&instant("2021-04-14T03:00:00Z")).starts_with("2021년 4월 14일"));
}

#[test]
fn offsets_do_not_change_the_instant() {
    let format = DateTimeFormat::try_new("en-US", DateTimeOptions::default()).unwrap();
    let utc = Utc.with_ymd_and_hms(2021, 4, 14, 23, 30, 0).unwrap();
    let tokyo = utc.with_timezone(&chrono_tz::Asia::Tokyo);
    assert_eq!(format.format(&utc), format.format(&tokyo));
    assert_eq!(format.format(&utc), "4/14/2021");
}

#[test]
fn resolved_options_serialize_in_camel_case() {
    let options = DateTimeOptions::builder()
        .hour(NumericWidth::Numeric)
        .minute(NumericWidth::TwoDigit)
        .build();
    let format = DateTimeFormat::try_new("en-US", options).unwrap();
    let json = serde_json::to_value(format.get_resolved_options()).unwrap();

    assert_eq!(json["locale"], "en-US");
    assert_eq!(json["calendar"], "gregorian");
    assert_eq!(json["numberingSystem"], "latn");
    assert_eq!(json["timeZone"], "UTC");
    assert_eq!(json["hourCycle"], "h12");
    assert_eq!(json["hour12"], true);
    assert_eq!(json["minute"], "2-digit");
}

const LOCALES: &[&str] = &["en-US", "en-GB", "zh-CN", "ja-JP", "de-DE", "fr-FR", "es-ES"];

fn numeric() -> impl Strategy<Value = Option<NumericWidth>> {
    prop_oneof![Just(None), Just(Some(NumericWidth::Numeric)), Just(Some(NumericWidth::TwoDigit))]
}

fn month() -> impl Strategy<Value = Option<MonthWidth>> {
    prop_oneof![
        Just(None),
        Just(Some(MonthWidth::Numeric)),
        Just(Some(MonthWidth::TwoDigit)),
        Just(Some(MonthWidth::Long)),
        Just(Some(MonthWidth::Short)),
        Just(Some(MonthWidth::Narrow)),
    ]
}

fn text() -> impl Strategy<Value = Option<TextWidth>> {
    prop_oneof![
        Just(None),
        Just(Some(TextWidth::Long)),
        Just(Some(TextWidth::Short)),
        Just(Some(TextWidth::Narrow)),
    ]
}

proptest! {
    #[test]
    fn resolved_options_echo_components(
        locale in prop::sample::select(LOCALES),
        year in numeric(),
        month in month(),
        day in numeric(),
        weekday in text(),
        hour in numeric(),
        minute in numeric(),
        seconds in 0_i64..4_000_000_000,
    ) {
        let options = DateTimeOptions {
            year,
            month,
            day,
            weekday,
            hour,
            minute,
            ..DateTimeOptions::default()
        };
        let format = DateTimeFormat::try_new(locale, options).unwrap();
        let resolved = format.resolved_options();

        prop_assert_eq!(resolved.locale.as_deref(), Some(locale));
        prop_assert_eq!(resolved.weekday, weekday);
        prop_assert_eq!(resolved.hour, hour);
        prop_assert_eq!(resolved.minute, minute);
        if year.is_some() || month.is_some() || day.is_some() || weekday.is_some()
            || hour.is_some() || minute.is_some()
        {
            prop_assert_eq!(resolved.year, year);
            prop_assert_eq!(resolved.month, month);
            prop_assert_eq!(resolved.day, day);
        }
        prop_assert_eq!(resolved.hour_cycle.is_some(), hour.is_some());
        if let Some(cycle) = resolved.hour_cycle {
            prop_assert_eq!(resolved.hour12, Some(cycle.is_12_hour()));
        }

        let instant = Utc.timestamp_opt(seconds, 0).unwrap();
        prop_assert!(!format.format(&instant).is_empty());
    }

    #[test]
    fn hour12_false_always_renders_a_24_hour_clock(
        locale in prop::sample::select(LOCALES),
        hour in 0_u32..24,
    ) {
        let options = DateTimeOptions::builder()
            .hour(NumericWidth::TwoDigit)
            .minute(NumericWidth::TwoDigit)
            .hour12(false)
            .build();
        let format = DateTimeFormat::try_new(locale, options).unwrap();
        prop_assert_eq!(format.resolved_options().hour_cycle, Some(HourCycle::H23));

        let instant = Utc.with_ymd_and_hms(2021, 4, 14, hour, 7, 0).unwrap();
        let rendered = format.format(&instant);
        let expected = format!("{hour}:07");
        prop_assert!(rendered.contains(&expected), "{} lacks {}", rendered, expected);
    }
}
