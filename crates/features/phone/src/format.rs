use crate::error::{PhoneError, PhoneErrorExt};
use crate::options::{PhoneFormatType, PhoneOptions};
use phonenumber::{PhoneNumber, country};

/// Validates and formats numbers as dialled from one region.
///
/// ```rust
/// use glossa_phone::{PhoneFormatType, PhoneNumberFormat, PhoneOptions};
///
/// let options = PhoneOptions::builder().format_type(PhoneFormatType::International).build();
/// let format = PhoneNumberFormat::try_new("US", options).unwrap();
/// assert!(format.is_valid_number("+1 6502530000"));
/// assert_eq!(format.format("+1 6502530000"), "+1 650-253-0000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneNumberFormat {
    country: country::Id,
    format_type: PhoneFormatType,
}

impl PhoneNumberFormat {
    /// Creates a formatter for the two-letter `country` code, case-insensitive.
    ///
    /// # Errors
    /// [`PhoneError::InvalidCountry`] when the code is not a libphonenumber region.
    pub fn try_new(country: &str, options: PhoneOptions) -> Result<Self, PhoneError> {
        let id = country
            .trim()
            .to_ascii_uppercase()
            .parse::<country::Id>()
            .map_err(|_| PhoneError::InvalidCountry { country: country.to_owned(), context: None })?;

        Ok(Self { country: id, format_type: options.format_type })
    }

    /// Whether `number` parses and matches a number pattern of its region.
    #[must_use]
    pub fn is_valid_number(&self, number: &str) -> bool {
        self.parse(number).is_ok_and(|parsed| phonenumber::is_valid(&parsed))
    }

    /// Formats `number`, or returns an empty string when it cannot be parsed.
    ///
    /// Parseable but invalid numbers are still formatted.
    #[must_use]
    pub fn format(&self, number: &str) -> String {
        self.try_format(number).unwrap_or_else(|err| {
            tracing::debug!(%err, "Phone number left unformatted");
            String::new()
        })
    }

    /// Like [`Self::format`] but reports why a number could not be parsed.
    ///
    /// # Errors
    /// [`PhoneError::Parse`] when `number` is not a phone number.
    pub fn try_format(&self, number: &str) -> Result<String, PhoneError> {
        let parsed = self.parse(number)?;
        Ok(parsed.format().mode(self.format_type.mode()).to_string())
    }

    #[must_use]
    pub fn country(&self) -> &str {
        self.country.as_ref()
    }

    #[must_use]
    pub const fn format_type(&self) -> PhoneFormatType {
        self.format_type
    }

    fn parse(&self, number: &str) -> Result<PhoneNumber, PhoneError> {
        phonenumber::parse(Some(self.country), number).context(format!("'{number}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(country: &str, format_type: PhoneFormatType) -> PhoneNumberFormat {
        PhoneNumberFormat::try_new(country, PhoneOptions { format_type }).unwrap()
    }

    #[test]
    fn country_codes() {
        assert_eq!(format("us", PhoneFormatType::National).country(), "US");
        assert!(matches!(
            PhoneNumberFormat::try_new("USA", PhoneOptions::default()),
            Err(PhoneError::InvalidCountry { .. })
        ));
        assert!(PhoneNumberFormat::try_new("", PhoneOptions::default()).is_err());
    }

    #[test]
    fn every_type() {
        assert_eq!(format("US", PhoneFormatType::National).format("+1 6502530000"), "(650) 253-0000");
        assert_eq!(
            format("US", PhoneFormatType::International).format("+1 6502530000"),
            "+1 650-253-0000"
        );
        assert_eq!(format("US", PhoneFormatType::E164).format("+1 6502530000"), "+16502530000");
        assert_eq!(
            format("US", PhoneFormatType::Rfc3966).format("+1 9002530000"),
            "tel:+1-900-253-0000"
        );
        assert_eq!(format("GB", PhoneFormatType::National).format("+44 2070313000"), "020 7031 3000");
    }

    #[test]
    fn validity() {
        let us = format("US", PhoneFormatType::National);
        assert!(us.is_valid_number("+1 6502530000"));
        assert!(!us.is_valid_number("+1 2530000"));
        assert!(!us.is_valid_number("not a number"));

        let gb = format("GB", PhoneFormatType::National);
        assert!(gb.is_valid_number("+44 7912345678"));
        assert!(!gb.is_valid_number("+44 791234567"));
    }

    #[test]
    fn unparseable_numbers_format_empty() {
        let us = format("US", PhoneFormatType::E164);
        assert_eq!(us.format("x"), "");
        assert!(matches!(us.try_format("x"), Err(PhoneError::Parse { context: Some(_), .. })));
    }
}
