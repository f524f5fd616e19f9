//! Kernel utilities shared across the Glossa crates.
//!
//! ## Config loading
//! ```rust,no_run
//! use glossa_kernel::config::load_config;
//! use glossa_kernel::domain::config::GlossaConfig;
//!
//! let cfg: GlossaConfig = load_config(Some("glossa.toml")).unwrap_or_default();
//! assert!(!cfg.format.fallback_locale.is_empty());
//! ```
pub mod config;

pub use glossa_domain as domain;
