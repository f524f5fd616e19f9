//! # System Locale
//!
//! The device-wide locale state: the system language, region and locale, the preferred
//! language list, digit and clock preferences, and the language and region catalogs offered
//! to the user.
//!
//! * [`LocaleConfig`]: the synchronous service, built from a
//!   [`GlossaConfig`](glossa_domain::config::GlossaConfig) and a [`ParameterStore`].
//! * [`I18n`]: a cheap-clone handle exposing each lookup as an `async fn` and as a
//!   callback-taking `*_with` variant.
//! * [`MemoryStore`] and [`FileStore`]: parameter persistence.
//!
//! Mutations publish a [`SystemSnapshot`] on a `tokio::sync::watch` channel.

mod builder;
mod config;
mod error;
mod handle;
mod info;
mod model;
mod preferred;
mod store;
mod taboo;

pub use crate::builder::{LocaleConfigBuilder, NoStore, WithStore};
pub use crate::config::LocaleConfig;
pub use crate::error::{I18nError, I18nErrorExt};
pub use crate::handle::I18n;
pub use crate::model::{LocaleItem, SortOptions, SuggestionType, SystemSnapshot};
pub use crate::store::{FileStore, MemoryStore, ParameterStore};
