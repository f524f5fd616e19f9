use std::borrow::Cow;

#[glossa_derive::glossa_error]
pub enum LocaleError {
    /// The input is not a well-formed BCP-47 language tag.
    #[error("Invalid locale '{tag}'{}", format_context(.context))]
    InvalidLocale { tag: String, context: Option<Cow<'static, str>> },

    /// The input is not an ISO 3166 region code.
    #[error("Invalid region '{region}'{}", format_context(.context))]
    InvalidRegion { region: String, context: Option<Cow<'static, str>> },

    /// An option value cannot be encoded as a Unicode extension keyword.
    #[error("Invalid value '{value}' for option '{option}'{}", format_context(.context))]
    InvalidOption { option: &'static str, value: String, context: Option<Cow<'static, str>> },

    #[error("Internal locale error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl LocaleError {
    pub(crate) fn invalid_locale(tag: impl Into<String>) -> Self {
        Self::InvalidLocale { tag: tag.into(), context: None }
    }

    pub(crate) fn invalid_region(region: impl Into<String>) -> Self {
        Self::InvalidRegion { region: region.into(), context: None }
    }
}
