use glossa_derive::glossa_error;
use std::borrow::Cow;

#[glossa_error]
pub enum StoreError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Key '{key}' rejected{}", format_context(.context))]
    Rejected { key: String, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let from_str: StoreError = "broken".into();
    assert_eq!(from_str.to_string(), "Internal error: broken");

    let from_io: StoreError = std::io::Error::other("disk").into();
    assert!(matches!(from_io, StoreError::Io { context: None, .. }));
}
