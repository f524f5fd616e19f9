use glossa_phone::{PhoneFormatType, PhoneNumberFormat, PhoneOptions};

#[test]
fn options_from_json_drive_the_layout() {
    let options: PhoneOptions = serde_json::from_str(r#"{"type":"INTERNATIONAL"}"#).unwrap();
    let format = PhoneNumberFormat::try_new("GB", options).unwrap();

    assert_eq!(format.format_type(), PhoneFormatType::International);
    assert_eq!(format.format("+44 2070313000"), "+44 20 7031 3000");
}

#[test]
fn region_only_matters_for_parsing() {
    let options = PhoneOptions::builder().format_type(PhoneFormatType::E164).build();
    let us = PhoneNumberFormat::try_new("US", options).unwrap();
    let gb = PhoneNumberFormat::try_new("GB", options).unwrap();

    assert_eq!(us.format("+44 2070313000"), gb.format("+44 2070313000"));
    assert_eq!(gb.format("+1 6502530000"), "+16502530000");
}
