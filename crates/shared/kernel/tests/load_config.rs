use glossa_kernel::config::{ConfigError, load_config};
use glossa_kernel::domain::config::GlossaConfig;
use std::fs;
use tempfile::tempdir;

#[test]
fn loads_toml_file_over_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("glossa.toml");
    fs::write(
        &path,
        r#"
        [system]
        default_locale = "en-GB"
        sim_region = "GB"

        [catalog]
        supported_locales = ["en-GB", "en-US"]
        blocked_regions = ["AQ"]

        [taboo.regions.en]
        TW = "Taiwan, China"
        "#,
    )
    .unwrap();

    let cfg: GlossaConfig = load_config(Some(&path)).unwrap();
    assert_eq!(cfg.system.default_locale, "en-GB");
    assert_eq!(cfg.system.default_language, "zh-Hans");
    assert_eq!(cfg.system.sim_region.as_deref(), Some("GB"));
    assert_eq!(cfg.catalog.supported_locales, ["en-GB", "en-US"]);
    assert_eq!(cfg.catalog.blocked_regions, ["AQ"]);
    assert!(
        cfg.taboo.regions["en"]
            .iter()
            .any(|(code, name)| code.eq_ignore_ascii_case("tw") && name == "Taiwan, China")
    );
}

#[test]
fn loads_json_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("glossa.json");
    fs::write(&path, r#"{ "format": { "default_time_zone": "Europe/Paris" } }"#).unwrap();

    let cfg: GlossaConfig = load_config(Some(&path)).unwrap();
    assert_eq!(cfg.format.default_time_zone, "Europe/Paris");
    assert_eq!(cfg.format.fallback_locale, "en-US");
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    let err = load_config::<GlossaConfig>(Some(dir.path().join("absent.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
}
