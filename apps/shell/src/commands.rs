use crate::cli::{Command, DateArgs, Listing, NumberArgs, PhoneArgs, SystemAction, ZoneArgs};
use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Utc};
use glossa::i18n::{I18n, SortOptions};
use glossa::intl::{
    DateTimeFormat, DateTimeOptions, Locale, NumberFormat, NumberOptions, NumberStyle,
    PhoneFormatType, PhoneNumberFormat, PhoneOptions, Style, ZoneInfo,
};
use serde_json::json;
use std::io::Write;

pub(crate) async fn run(command: Command, i18n: &I18n, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Locale { tag } => locale(&tag, out),
        Command::DisplayLanguage { locale, display_locale, sentence_case } => {
            let name = i18n.get_display_language(locale, display_locale, sentence_case).await?;
            writeln!(out, "{name}").map_err(Into::into)
        }
        Command::DisplayCountry { locale, display_locale } => {
            let name = i18n.get_display_country(locale, display_locale).await?;
            writeln!(out, "{name}").map_err(Into::into)
        }
        Command::Languages(listing) => {
            let languages = i18n.get_system_languages().await?;
            if listing.info {
                let items = i18n.language_info_array(languages, sort_options(&listing)).await?;
                print_json(out, &items)
            } else {
                print_lines(out, &languages)
            }
        }
        Command::Countries { language, listing } => {
            let countries = i18n.get_system_countries(language).await?;
            if listing.info {
                let items = i18n.country_info_array(countries, sort_options(&listing)).await?;
                print_json(out, &items)
            } else {
                print_lines(out, &countries)
            }
        }
        Command::Suggested { language, region } => {
            let suggested = match region {
                Some(region) => i18n.is_suggested(language, region).await?,
                None => i18n.is_suggested_language(language).await?,
            };
            writeln!(out, "{suggested}").map_err(Into::into)
        }
        Command::System { action } => system(action, i18n, out).await,
        Command::Date(args) => date(args, i18n, out).await,
        Command::Number(args) => number(args, i18n, out).await,
        Command::Phone(args) => phone(args, i18n, out).await,
        Command::Zone(args) => zone(args, i18n, out).await,
    }
}

fn locale(tag: &str, out: &mut impl Write) -> Result<()> {
    let locale = Locale::try_new(tag)?;
    print_json(
        out,
        &json!({
            "locale": locale.to_string(),
            "baseName": locale.base_name(),
            "language": locale.language(),
            "script": locale.script(),
            "region": locale.region(),
            "calendar": locale.calendar(),
            "hourCycle": locale.hour_cycle().map(|hc| hc.to_string()),
            "numberingSystem": locale.numbering_system(),
            "maximized": locale.maximize().to_string(),
            "minimized": locale.minimize().to_string(),
        }),
    )
}

fn sort_options(listing: &Listing) -> SortOptions {
    SortOptions::builder()
        .locale(listing.display.clone().unwrap_or_default())
        .use_local_name(listing.local_names)
        .build()
}

async fn system(action: SystemAction, i18n: &I18n, out: &mut impl Write) -> Result<()> {
    match action {
        SystemAction::Get => {
            let state = json!({
                "language": i18n.get_system_language().await?,
                "region": i18n.get_system_region().await?,
                "locale": i18n.get_system_locale().await?,
                "preferredLanguages": i18n.preferred_languages().await?,
                "is24HourClock": i18n.is_24_hour_clock().await?,
                "usingLocalDigit": i18n.using_local_digit().await?,
            });
            return print_json(out, &state);
        }
        SystemAction::SetLanguage { language } => i18n.set_system_language(language).await?,
        SystemAction::SetRegion { region } => i18n.set_system_region(region).await?,
        SystemAction::SetLocale { locale } => i18n.set_system_locale(locale).await?,
    }
    writeln!(out, "{}", i18n.get_system_locale().await?).map_err(Into::into)
}

/// Candidate locales from the command line, else the system locale.
async fn candidates(locales: Vec<String>, i18n: &I18n) -> Result<Vec<String>> {
    if locales.is_empty() { Ok(vec![i18n.get_system_locale().await?]) } else { Ok(locales) }
}

async fn date(args: DateArgs, i18n: &I18n, out: &mut impl Write) -> Result<()> {
    let mut options: DateTimeOptions = match &args.options {
        Some(raw) => serde_json::from_str(raw).context("Malformed --options")?,
        None => DateTimeOptions::default(),
    };
    if let Some(style) = &args.date_style {
        options.date_style = Some(parse_style(style)?);
    }
    if let Some(style) = &args.time_style {
        options.time_style = Some(parse_style(style)?);
    }
    if args.time_zone.is_some() {
        options.time_zone = args.time_zone;
    }

    let instant = match &args.instant {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .with_context(|| format!("'{raw}' is not an RFC 3339 instant"))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };

    let format = DateTimeFormat::try_new(candidates(args.locales, i18n).await?, options)?;
    if args.resolved {
        return print_json(out, &format.resolved_options());
    }
    writeln!(out, "{}", format.format(&instant)).map_err(Into::into)
}

async fn number(args: NumberArgs, i18n: &I18n, out: &mut impl Write) -> Result<()> {
    let mut options: NumberOptions = match &args.options {
        Some(raw) => serde_json::from_str(raw).context("Malformed --options")?,
        None => NumberOptions::default(),
    };
    if let Some(style) = &args.style {
        let style = style
            .parse::<NumberStyle>()
            .map_err(|_| anyhow!("Unknown number style '{style}'"))?;
        options.style = Some(style);
    }
    if args.currency.is_some() {
        options.currency = args.currency;
    }
    if args.unit.is_some() {
        options.unit = args.unit;
    }

    let format = NumberFormat::try_new(candidates(args.locales, i18n).await?, options)?;
    if args.resolved {
        return print_json(out, &format.resolved_options());
    }
    writeln!(out, "{}", format.format(args.value)).map_err(Into::into)
}

async fn phone(args: PhoneArgs, i18n: &I18n, out: &mut impl Write) -> Result<()> {
    let country = match args.country {
        Some(country) => country,
        None => i18n.get_system_region().await?,
    };
    let format_type = args.format_type.as_deref().map(PhoneFormatType::from_name).unwrap_or_default();
    let format = PhoneNumberFormat::try_new(&country, PhoneOptions { format_type })?;

    if args.validate {
        return writeln!(out, "{}", format.is_valid_number(&args.number)).map_err(Into::into);
    }
    writeln!(out, "{}", format.try_format(&args.number)?).map_err(Into::into)
}

async fn zone(args: ZoneArgs, i18n: &I18n, out: &mut impl Write) -> Result<()> {
    if let Some(region) = &args.region {
        let zones: Vec<String> =
            ZoneInfo::zones_for_region(region).into_iter().map(str::to_owned).collect();
        return print_lines(out, &zones);
    }

    let zone = ZoneInfo::try_new(args.id.as_deref().unwrap_or_default())?;
    let locales = candidates(args.locales, i18n).await?;
    let now = Utc::now();
    print_json(
        out,
        &json!({
            "id": zone.id(),
            "displayName": zone.display_name(locales)?,
            "rawOffset": zone.raw_offset_at(&now),
            "dstOffset": zone.dst_offset_at(&now),
            "offset": zone.offset_at(&now),
        }),
    )
}

fn parse_style(style: &str) -> Result<Style> {
    style.parse::<Style>().map_err(|_| anyhow!("Unknown style '{style}'"))
}

fn print_lines(out: &mut impl Write, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn print_json(out: &mut impl Write, value: &impl serde::Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
