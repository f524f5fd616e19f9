use config::{Config, Environment, File};
use glossa_domain::constants::ENV_PREFIX;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

const DEFAULT_CONFIG_FILE: &str = "glossa";

#[glossa_derive::glossa_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration file and overlays `GLOSSA__`-prefixed environment variables.
///
/// The file format follows the extension (`.toml`, `.json`, `.yaml`, ...). Without an
/// explicit path the loader looks for `glossa.*` in the working directory. Nested keys use
/// double underscores: `GLOSSA__FORMAT__DEFAULT_TIME_ZONE` maps to `format.default_time_zone`.
///
/// # Errors
/// Returns [`ConfigError::Config`] when the file is missing or the merged values do not
/// deserialize into `T`.
///
/// # Example
/// ```rust
/// use glossa_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct ShellConfig {
///     verbose: bool,
/// }
///
/// let cfg: ShellConfig = load_config(Some("config/local")).unwrap_or_default();
/// assert!(!cfg.verbose);
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let path = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    info!(path = %path.display(), "Loading configuration");

    let config = Config::builder()
        .add_source(File::from(path.as_path()).required(true))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__").convert_case(config::Case::Snake))
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
