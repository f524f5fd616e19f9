use std::borrow::Cow;

#[glossa_derive::glossa_error]
pub enum NumberError {
    #[error("Invalid value '{value}' for option '{option}'{}", format_context(.context))]
    InvalidOption { option: &'static str, value: String, context: Option<Cow<'static, str>> },

    /// The value does not fit a decimal.
    #[error("Decimal conversion error{}: {message}", format_context(.context))]
    Decimal { message: String, context: Option<Cow<'static, str>> },

    /// Decimal symbols for the locale could not be loaded.
    #[error("Locale data error{}: {source}", format_context(.context))]
    Data { source: icu_provider::DataError, context: Option<Cow<'static, str>> },

    #[error("Internal number formatting error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl NumberError {
    pub(crate) fn invalid_option(option: &'static str, value: impl ToString) -> Self {
        Self::InvalidOption { option, value: value.to_string(), context: None }
    }
}

impl From<fixed_decimal::LimitError> for NumberError {
    fn from(err: fixed_decimal::LimitError) -> Self {
        Self::Decimal { message: format!("{err:?}"), context: None }
    }
}
