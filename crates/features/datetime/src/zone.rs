//! IANA time zones: offsets from `chrono-tz`, localized names from ICU4X, and the zones
//! used in each region.

use crate::error::DateTimeError;
use crate::shape::{self, Shape, Zone};
use chrono::{DateTime, Datelike, Offset, TimeZone, Timelike, Utc};
use chrono_tz::{OffsetComponents, TZ_VARIANTS, Tz};
use glossa_domain::constants::{DEFAULT_TIME_ZONE, FALLBACK_LOCALE};
use glossa_locale::validate::is_valid_language;
use glossa_locale::{IntoLocaleList, resolve_candidates};
use icu_calendar::Gregorian;
use icu_datetime::input::{
    Date, DateTime as IcuDateTime, Time, TimeZone as IcuZone, TimeZoneInfo, UtcOffset,
    ZonedDateTime,
};
use icu_time::zone::iana::IanaParserExtended;
use icu_time::zone::models::AtTime;
use std::collections::BTreeSet;

pub(crate) type ZonedInput = ZonedDateTime<Gregorian, TimeZoneInfo<AtTime>>;

/// Zone presented for a region with more than one.
const PRIMARY_ZONES: &[(&str, &str)] = &[
    ("AR", "America/Argentina/Buenos_Aires"),
    ("AU", "Australia/Sydney"),
    ("BR", "America/Sao_Paulo"),
    ("CA", "America/Toronto"),
    ("CL", "America/Santiago"),
    ("CN", "Asia/Shanghai"),
    ("DE", "Europe/Berlin"),
    ("EC", "America/Guayaquil"),
    ("ES", "Europe/Madrid"),
    ("ID", "Asia/Jakarta"),
    ("KZ", "Asia/Almaty"),
    ("MX", "America/Mexico_City"),
    ("MY", "Asia/Kuala_Lumpur"),
    ("NZ", "Pacific/Auckland"),
    ("PT", "Europe/Lisbon"),
    ("RU", "Europe/Moscow"),
    ("UA", "Europe/Kyiv"),
    ("US", "America/New_York"),
    ("UZ", "Asia/Tashkent"),
];

/// A time zone from the IANA database.
///
/// Offsets are in milliseconds, positive east of Greenwich.
///
/// ```rust
/// use glossa_datetime::ZoneInfo;
///
/// let zone = ZoneInfo::try_new("Asia/Kolkata").unwrap();
/// assert_eq!(zone.id(), "Asia/Kolkata");
/// assert_eq!(zone.raw_offset(), 19_800_000);
/// assert_eq!(ZoneInfo::default_for_region("CN").as_deref(), Some("Asia/Shanghai"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneInfo {
    tz: Tz,
}

impl ZoneInfo {
    /// Looks up `id`. An empty id selects the default zone (`UTC`).
    ///
    /// # Errors
    /// [`DateTimeError::InvalidTimeZone`] when `id` is not in the IANA database.
    pub fn try_new(id: &str) -> Result<Self, DateTimeError> {
        let id = if id.trim().is_empty() { DEFAULT_TIME_ZONE } else { id.trim() };
        id.parse::<Tz>()
            .map(|tz| Self { tz })
            .map_err(|_| DateTimeError::InvalidTimeZone { zone: id.to_owned(), context: None })
    }

    #[must_use]
    pub fn id(&self) -> &'static str {
        self.tz.name()
    }

    #[must_use]
    pub const fn tz(&self) -> Tz {
        self.tz
    }

    /// Standard offset now, without daylight saving.
    #[must_use]
    pub fn raw_offset(&self) -> i32 {
        self.raw_offset_at(&Utc::now())
    }

    #[must_use]
    pub fn raw_offset_at<Z: TimeZone>(&self, instant: &DateTime<Z>) -> i32 {
        let offset = self.tz.offset_from_utc_datetime(&instant.naive_utc());
        millis(offset.base_utc_offset().num_milliseconds())
    }

    /// Daylight saving in force at `instant`, `0` outside it.
    #[must_use]
    pub fn dst_offset_at<Z: TimeZone>(&self, instant: &DateTime<Z>) -> i32 {
        let offset = self.tz.offset_from_utc_datetime(&instant.naive_utc());
        millis(offset.dst_offset().num_milliseconds())
    }

    /// Total offset at `instant`: raw plus daylight saving.
    #[must_use]
    pub fn offset_at<Z: TimeZone>(&self, instant: &DateTime<Z>) -> i32 {
        let offset = self.tz.offset_from_utc_datetime(&instant.naive_utc());
        offset.fix().local_minus_utc().saturating_mul(1000)
    }

    /// Generic long name such as `Pacific Time`, in the first usable candidate locale.
    ///
    /// # Errors
    /// [`DateTimeError::Data`] when zone names cannot be loaded.
    pub fn display_name(&self, locales: impl IntoLocaleList) -> Result<String, DateTimeError> {
        self.render(locales, Zone::GenericLong, Utc::now())
    }

    /// Specific long name for standard or daylight time: `Pacific Standard Time`,
    /// `Pacific Daylight Time`. Zones without daylight saving always use the standard name.
    ///
    /// # Errors
    /// [`DateTimeError::Data`] when zone names cannot be loaded.
    pub fn display_name_for(
        &self,
        locales: impl IntoLocaleList,
        daylight: bool,
    ) -> Result<String, DateTimeError> {
        let now = Utc::now();
        let at = self.instant_in(now, daylight).unwrap_or(now);
        self.render(locales, Zone::SpecificLong, at)
    }

    /// Every IANA id known to the database, links included.
    #[must_use]
    pub fn available_ids() -> BTreeSet<&'static str> {
        TZ_VARIANTS.iter().map(|tz| tz.name()).collect()
    }

    /// Canonical zones used in `region` (ISO 3166 alpha-2), sorted by id.
    #[must_use]
    pub fn zones_for_region(region: &str) -> Vec<&'static str> {
        if region.len() != 2 || !region.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Vec::new();
        }
        let prefix = region.to_ascii_lowercase();
        let mut zones: Vec<&'static str> = IanaParserExtended::new()
            .iter()
            .filter(|zone| {
                let bcp47 = zone.time_zone.0.as_str();
                bcp47.len() >= 5
                    && bcp47.starts_with(prefix.as_str())
                    && bcp47.bytes().all(|b| b.is_ascii_alphabetic())
            })
            .map(|zone| zone.canonical)
            .filter(|id| id.parse::<Tz>().is_ok())
            .collect();
        zones.sort_unstable();
        zones.dedup();
        zones
    }

    /// The zone presented first for `region`, if it has any.
    #[must_use]
    pub fn default_for_region(region: &str) -> Option<String> {
        let region = region.to_ascii_uppercase();
        if let Some((_, zone)) = PRIMARY_ZONES.iter().find(|(r, _)| *r == region) {
            return Some((*zone).to_owned());
        }
        Self::zones_for_region(&region).first().map(|zone| (*zone).to_owned())
    }

    fn render(
        &self,
        locales: impl IntoLocaleList,
        style: Zone,
        at: DateTime<Utc>,
    ) -> Result<String, DateTimeError> {
        let locale = resolve_candidates(locales, FALLBACK_LOCALE, |l| is_valid_language(l.language()));
        let icu_locale: icu_locale::Locale =
            locale.base_name().parse().map_err(|err| DateTimeError::Internal {
                message: format!("Cannot rebuild '{}': {err}", locale.base_name()).into(),
                context: None,
            })?;
        let formatter = shape::formatter(&icu_locale, Shape::zone_only(style))?;
        let input = zoned(&at.with_timezone(&self.tz))?;
        Ok(formatter.format(&input).to_string())
    }

    /// An instant near `now` whose daylight state is `daylight`.
    fn instant_in(&self, now: DateTime<Utc>, daylight: bool) -> Option<DateTime<Utc>> {
        let in_state = |at: &DateTime<Utc>| (self.dst_offset_at(at) != 0) == daylight;
        if in_state(&now) {
            return Some(now);
        }
        [1, 7]
            .into_iter()
            .filter_map(|month| Utc.with_ymd_and_hms(now.year(), month, 1, 12, 0, 0).single())
            .find(in_state)
    }
}

impl Default for ZoneInfo {
    fn default() -> Self {
        Self { tz: Tz::UTC }
    }
}

/// ICU input for a wall-clock instant in `local`'s zone.
pub(crate) fn zoned(local: &DateTime<Tz>) -> Result<ZonedInput, DateTimeError> {
    let range = |err: &dyn std::fmt::Display| DateTimeError::Internal {
        message: err.to_string().into(),
        context: Some(format!("Converting {local}").into()),
    };

    let month = u8::try_from(local.month()).map_err(|err| range(&err))?;
    let day = u8::try_from(local.day()).map_err(|err| range(&err))?;
    let date = Date::try_new_gregorian(local.year(), month, day).map_err(|err| range(&err))?;

    let hour = u8::try_from(local.hour()).map_err(|err| range(&err))?;
    let minute = u8::try_from(local.minute()).map_err(|err| range(&err))?;
    let second = u8::try_from(local.second()).map_err(|err| range(&err))?;
    // Leap seconds arrive as nanoseconds past 10^9.
    let nanos = local.nanosecond().min(999_999_999);
    let time = Time::try_new(hour, minute, second, nanos).map_err(|err| range(&err))?;

    let offset = UtcOffset::try_from_seconds(local.offset().fix().local_minus_utc()).ok();
    let zone = IcuZone::from_iana_id(local.timezone().name())
        .with_offset(offset)
        .at_date_time(IcuDateTime { date, time });

    Ok(ZonedDateTime { date, time, zone })
}

fn millis(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}
