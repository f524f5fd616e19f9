//! Field-set selection: style presets or component options become an ICU field set, and
//! the resulting formatters are memoised per locale tag and shape.

use crate::error::DateTimeError;
use crate::options::{DateTimeOptions, MonthWidth, NumericWidth, Style, TextWidth, TimeZoneName};
use icu_datetime::DateTimeFormatter;
use icu_datetime::fieldsets::builder::{DateFields, FieldSetBuilder, ZoneStyle};
use icu_datetime::fieldsets::enums::CompositeFieldSet;
use icu_datetime::options::{Length, SubsecondDigits, TimePrecision, YearStyle};
use moka::sync::Cache;
use std::sync::{Arc, LazyLock};

const FORMATTER_CACHE_CAPACITY: u64 = 512;

pub(crate) type Formatter = DateTimeFormatter<CompositeFieldSet>;

static FORMATTERS: LazyLock<Cache<(String, Shape), Arc<Formatter>>> =
    LazyLock::new(|| Cache::new(FORMATTER_CACHE_CAPACITY));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Width {
    Long,
    Medium,
    Short,
}

/// Which date fields are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Fields {
    D,
    MD,
    YMD,
    DE,
    MDE,
    YMDE,
    E,
    M,
    YM,
    Y,
}

impl Fields {
    const fn has_year(self) -> bool {
        matches!(self, Self::YMD | Self::YMDE | Self::YM | Self::Y)
    }

    /// Month and year alone cannot carry a time or a zone; they grow a day.
    const fn with_day(self) -> Self {
        match self {
            Self::M => Self::MD,
            Self::YM | Self::Y => Self::YMD,
            other => other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Precision {
    Hour,
    Minute,
    Second,
    Fraction(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Zone {
    SpecificLong,
    SpecificShort,
    GenericLong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Year {
    Auto,
    Full,
    WithEra,
}

/// Everything that influences the ICU field set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub(crate) struct Shape {
    width: Option<Width>,
    fields: Option<Fields>,
    precision: Option<Precision>,
    zone: Option<Zone>,
    year: Option<Year>,
}

impl Shape {
    /// Shape of resolved options. Styles win over components.
    pub(crate) fn from_options(options: &DateTimeOptions) -> Self {
        if options.has_style() {
            return Self::from_styles(options.date_style, options.time_style);
        }

        let fields = date_fields(options);
        let precision = precision(options);
        let zone = options.time_zone_name.map(|name| match name {
            TimeZoneName::Long => Zone::SpecificLong,
            TimeZoneName::Short => Zone::SpecificShort,
        });
        let fields =
            if precision.is_some() || zone.is_some() { fields.map(Fields::with_day) } else { fields };

        let year = fields.filter(|f| f.has_year()).map(|_| match (options.era, options.year) {
            (Some(_), _) => Year::WithEra,
            (None, Some(NumericWidth::TwoDigit)) => Year::Auto,
            (None, _) => Year::Full,
        });

        let width = match (options.month, options.weekday) {
            (Some(MonthWidth::Long), _) | (None, Some(TextWidth::Long)) => Width::Long,
            (Some(MonthWidth::Short | MonthWidth::Narrow), _)
            | (None, Some(TextWidth::Short | TextWidth::Narrow)) => Width::Medium,
            _ => Width::Short,
        };

        Self {
            width: (fields.is_some() || precision.is_some()).then_some(width),
            fields,
            precision,
            zone,
            year,
        }
    }

    fn from_styles(date: Option<Style>, time: Option<Style>) -> Self {
        let width = match date.or(time) {
            Some(Style::Full | Style::Long) => Width::Long,
            Some(Style::Medium) => Width::Medium,
            _ => Width::Short,
        };
        let fields = date.map(|style| if style == Style::Full { Fields::YMDE } else { Fields::YMD });
        let precision = time.map(|style| match style {
            Style::Short => Precision::Minute,
            _ => Precision::Second,
        });
        let zone = time.and_then(|style| match style {
            Style::Full => Some(Zone::SpecificLong),
            Style::Long => Some(Zone::SpecificShort),
            _ => None,
        });
        Self { width: Some(width), fields, precision, zone, year: None }
    }

    /// Only the zone, for display names.
    pub(crate) const fn zone_only(zone: Zone) -> Self {
        Self { width: None, fields: None, precision: None, zone: Some(zone), year: None }
    }

    /// The time part alone, used for the second half of a same-day range.
    pub(crate) const fn time_only(self) -> Option<Self> {
        match self.precision {
            Some(precision) if self.fields.is_some() => Some(Self {
                width: self.width,
                fields: None,
                precision: Some(precision),
                zone: None,
                year: None,
            }),
            _ => None,
        }
    }

    pub(crate) fn builder(self) -> FieldSetBuilder {
        let mut builder = FieldSetBuilder::new();
        builder.length = self.width.map(|width| match width {
            Width::Long => Length::Long,
            Width::Medium => Length::Medium,
            Width::Short => Length::Short,
        });
        builder.date_fields = self.fields.map(|fields| match fields {
            Fields::D => DateFields::D,
            Fields::MD => DateFields::MD,
            Fields::YMD => DateFields::YMD,
            Fields::DE => DateFields::DE,
            Fields::MDE => DateFields::MDE,
            Fields::YMDE => DateFields::YMDE,
            Fields::E => DateFields::E,
            Fields::M => DateFields::M,
            Fields::YM => DateFields::YM,
            Fields::Y => DateFields::Y,
        });
        builder.time_precision = self.precision.map(|precision| match precision {
            Precision::Hour => TimePrecision::Hour,
            Precision::Minute => TimePrecision::Minute,
            Precision::Second => TimePrecision::Second,
            Precision::Fraction(1) => TimePrecision::Subsecond(SubsecondDigits::S1),
            Precision::Fraction(2) => TimePrecision::Subsecond(SubsecondDigits::S2),
            Precision::Fraction(_) => TimePrecision::Subsecond(SubsecondDigits::S3),
        });
        builder.zone_style = self.zone.map(|zone| match zone {
            Zone::SpecificLong => ZoneStyle::SpecificLong,
            Zone::SpecificShort => ZoneStyle::SpecificShort,
            Zone::GenericLong => ZoneStyle::GenericLong,
        });
        builder.year_style = self.year.map(|year| match year {
            Year::Auto => YearStyle::Auto,
            Year::Full => YearStyle::Full,
            Year::WithEra => YearStyle::WithEra,
        });
        builder
    }
}

/// `(year, month, day, weekday)` presence to ICU date fields. A year and a day always pull
/// the month in between.
fn date_fields(options: &DateTimeOptions) -> Option<Fields> {
    let (y, m, d, e) = (
        options.year.is_some() || options.era.is_some(),
        options.month.is_some(),
        options.day.is_some(),
        options.weekday.is_some(),
    );
    let fields = match (y, m, d, e) {
        (false, false, false, false) => return None,
        (true, m, false, false) => {
            if m { Fields::YM } else { Fields::Y }
        }
        (true, _, _, false) => Fields::YMD,
        (true, _, _, true) => Fields::YMDE,
        (false, true, false, false) => Fields::M,
        (false, true, _, false) => Fields::MD,
        (false, true, _, true) => Fields::MDE,
        (false, false, false, true) => Fields::E,
        (false, false, true, false) => Fields::D,
        (false, false, true, true) => Fields::DE,
    };
    Some(fields)
}

fn precision(options: &DateTimeOptions) -> Option<Precision> {
    if let Some(digits) = options.fractional_second_digits {
        Some(Precision::Fraction(digits))
    } else if options.second.is_some() {
        Some(Precision::Second)
    } else if options.minute.is_some() {
        Some(Precision::Minute)
    } else if options.hour.is_some() || options.day_period.is_some() {
        Some(Precision::Hour)
    } else {
        None
    }
}

/// Formatter for `icu_locale` and `shape`, built once per pair.
pub(crate) fn formatter(
    icu_locale: &icu_locale::Locale,
    shape: Shape,
) -> Result<Arc<Formatter>, DateTimeError> {
    let key = (icu_locale.to_string(), shape);
    if let Some(formatter) = FORMATTERS.get(&key) {
        return Ok(formatter);
    }

    tracing::debug!(locale = %key.0, ?shape, "Building date formatter");
    let field_set = shape.builder().build_composite().map_err(|err| DateTimeError::Internal {
        message: err.to_string().into(),
        context: Some(format!("Field set for {shape:?}").into()),
    })?;
    let formatter = Arc::new(Formatter::try_new(icu_locale.into(), field_set)?);
    FORMATTERS.insert(key, Arc::clone(&formatter));
    Ok(formatter)
}
