use chrono::{TimeZone, Utc};
use glossa::domain::config::GlossaConfig;
use glossa::intl::{DateTimeFormat, DateTimeOptions, Locale, NumberFormat, NumberOptions, Style};

#[test]
fn memory_backed_by_default() {
    let i18n = glossa::init(&GlossaConfig::default()).unwrap();
    i18n.config().set_system_locale("en-GB").unwrap();

    let again = glossa::init(&GlossaConfig::default()).unwrap();
    assert_eq!(again.config().get_system_locale(), "zh-Hans-CN");
}

#[tokio::test]
async fn file_backed_when_configured() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = GlossaConfig::default();
    config.system.parameters_path = Some(dir.path().join("params.json"));

    let i18n = glossa::init(&config).unwrap();
    i18n.set_system_region("FR").await.unwrap();
    drop(i18n);

    let i18n = glossa::init(&config).unwrap();
    assert_eq!(i18n.get_system_locale().await.unwrap(), "fr-Latn-FR");
}

#[test]
fn system_locale_drives_formatters() {
    let i18n = glossa::init(&GlossaConfig::default()).unwrap();
    i18n.config().set_system_locale("de-DE").unwrap();

    let locale = Locale::try_new(&i18n.config().get_system_locale()).unwrap();
    let number = NumberFormat::try_new(&locale, NumberOptions::default()).unwrap();
    assert_eq!(number.format(1234.5), "1.234,5");

    let options = DateTimeOptions::builder().date_style(Style::Short).time_zone("UTC").build();
    let date = DateTimeFormat::try_new(&locale, options).unwrap();
    let instant = Utc.with_ymd_and_hms(2021, 4, 14, 9, 0, 0).unwrap();
    assert_eq!(date.format(&instant), "14.04.21");
}
