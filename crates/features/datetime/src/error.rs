use std::borrow::Cow;

#[glossa_derive::glossa_error]
pub enum DateTimeError {
    #[error("Invalid value '{value}' for option '{option}'{}", format_context(.context))]
    InvalidOption { option: &'static str, value: String, context: Option<Cow<'static, str>> },

    #[error("Unknown time zone '{zone}'{}", format_context(.context))]
    InvalidTimeZone { zone: String, context: Option<Cow<'static, str>> },

    /// Calendar or zone names for the locale could not be loaded.
    #[error("Locale data error{}: {source}", format_context(.context))]
    Data { source: icu_datetime::DateTimeFormatterLoadError, context: Option<Cow<'static, str>> },

    #[error("Internal date formatting error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl DateTimeError {
    pub(crate) fn invalid_option(option: &'static str, value: impl ToString) -> Self {
        Self::InvalidOption { option, value: value.to_string(), context: None }
    }
}
