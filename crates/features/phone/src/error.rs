use std::borrow::Cow;

#[glossa_derive::glossa_error]
pub enum PhoneError {
    #[error("Unknown region '{country}'{}", format_context(.context))]
    InvalidCountry { country: String, context: Option<Cow<'static, str>> },

    #[error("Cannot parse phone number{}: {source}", format_context(.context))]
    Parse { source: phonenumber::ParseError, context: Option<Cow<'static, str>> },
}
