use glossa_locale::LocaleError;
use std::borrow::Cow;

#[glossa_derive::glossa_error]
pub enum I18nError {
    /// A locale argument is malformed or invalid.
    #[error("Locale error{}: {source}", format_context(.context))]
    Locale { source: LocaleError, context: Option<Cow<'static, str>> },

    #[error("Invalid region '{region}'{}", format_context(.context))]
    InvalidRegion { region: String, context: Option<Cow<'static, str>> },

    /// The request is well-formed but the current state forbids it.
    #[error("Operation not allowed{}: {message}", format_context(.context))]
    NotAllowed { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Parameter store error{}: {message}", format_context(.context))]
    Store { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Serialization error{}: {source}", format_context(.context))]
    Serde { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Internal i18n error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl I18nError {
    pub(crate) fn invalid_region(region: impl Into<String>) -> Self {
        Self::InvalidRegion { region: region.into(), context: None }
    }

    pub(crate) fn not_allowed(message: impl Into<Cow<'static, str>>) -> Self {
        Self::NotAllowed { message: message.into(), context: None }
    }
}
