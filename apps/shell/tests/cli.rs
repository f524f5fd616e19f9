use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn glossa() -> Command {
    let mut cmd = Command::cargo_bin("glossa").unwrap();
    cmd.args(["--log-level", "off"]);
    cmd
}

#[test]
fn prints_display_names() {
    glossa()
        .args(["display-country", "zh-Hans-CN", "en-US"])
        .assert()
        .success()
        .stdout("China\n");

    glossa()
        .args(["display-language", "pt", "fr", "--sentence-case"])
        .assert()
        .success()
        .stdout("Portugais\n");
}

#[test]
fn parses_locales() {
    glossa()
        .args(["locale", "zh-u-hc-h12"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""maximized": "zh-Hans-CN-u-hc-h12""#))
        .stdout(predicate::str::contains(r#""hourCycle": "h12""#));

    glossa()
        .args(["locale", "@@"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid locale '@@'"));
}

#[test]
fn formats_numbers_and_dates() {
    glossa()
        .args(["number", "1234.5", "--locale", "de-DE", "--style", "currency", "--currency", "EUR"])
        .assert()
        .success()
        .stdout("1.234,50\u{a0}€\n");

    glossa()
        .args(["number", "-0.25", "--locale", "en-US", "--style", "percent"])
        .assert()
        .success()
        .stdout("-25%\n");

    glossa()
        .args([
            "date",
            "2021-04-14T14:05:00Z",
            "--locale",
            "en-US",
            "--date-style",
            "short",
            "--time-zone",
            "UTC",
        ])
        .assert()
        .success()
        .stdout("4/14/21\n");
}

#[test]
fn formats_phone_numbers() {
    glossa()
        .args(["phone", "+1 6502530000", "--country", "US", "--type", "INTERNATIONAL"])
        .assert()
        .success()
        .stdout("+1 650-253-0000\n");

    glossa()
        .args(["phone", "+1 2530000", "--country", "US", "--validate"])
        .assert()
        .success()
        .stdout("false\n");

    glossa()
        .args(["phone", "+1 6502530000", "--country", "USA"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown region 'USA'"));
}

#[test]
fn describes_time_zones() {
    glossa()
        .args(["zone", "Asia/Kolkata", "--locale", "en-US"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""rawOffset": 19800000"#))
        .stdout(predicate::str::contains(r#""dstOffset": 0"#))
        .stdout(predicate::str::contains(r#""displayName": "India"#));

    glossa()
        .args(["zone", "--region", "JP"])
        .assert()
        .success()
        .stdout("Asia/Tokyo\n");

    glossa().args(["zone", "Mars/Base"]).assert().failure();
}

#[test]
fn lists_catalogs_from_configuration() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("glossa.toml");
    fs::write(
        &config,
        r#"
[catalog]
supported_locales = ["en-US", "en-GB", "fr-FR"]
supported_regions = ["US", "GB", "FR"]
forbidden_regions = ["GB"]
"#,
    )
    .unwrap();
    let config = config.to_str().unwrap();

    glossa()
        .args(["--config", config, "languages"])
        .assert()
        .success()
        .stdout("en-US\nfr-FR\n");

    glossa()
        .args(["--config", config, "countries", "en"])
        .assert()
        .success()
        .stdout("US\nFR\n");
}

#[test]
fn system_state_persists_between_runs() {
    let dir = tempfile::tempdir().unwrap();
    let params = dir.path().join("params.json");
    let config = dir.path().join("glossa.toml");
    fs::write(&config, format!("[system]\nparameters_path = {:?}\n", params.to_str().unwrap()))
        .unwrap();
    let config = config.to_str().unwrap();

    glossa()
        .args(["--config", config, "system", "set-region", "TW"])
        .assert()
        .success()
        .stdout("zh-Hant-TW\n");

    glossa()
        .args(["--config", config, "system", "get"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""region": "TW""#));

    glossa()
        .args(["--config", config, "system", "set-region", "XX"])
        .assert()
        .failure();
}
