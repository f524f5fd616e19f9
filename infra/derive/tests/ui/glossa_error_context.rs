use glossa_derive::glossa_error;
use std::borrow::Cow;

#[glossa_error]
pub enum LookupError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Missing '{key}'{}", format_context(.context))]
    Missing { key: String, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), LookupError> {
    Err(std::io::Error::other("gone")).context("reading parameters")
}

fn lookup() -> Result<(), LookupError> {
    Err(LookupError::Missing { key: "locale".to_owned(), context: None }).context("system")
}

fn main() {
    assert_eq!(read().unwrap_err().to_string(), "IO error (reading parameters): gone");
    assert_eq!(lookup().unwrap_err().to_string(), "Missing 'locale' (system)");
}
