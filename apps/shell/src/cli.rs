use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Locale resolution, display names and locale-aware formatting.
#[derive(Debug, Parser)]
#[command(name = "glossa", version, about)]
pub(crate) struct Cli {
    /// Configuration file (TOML, JSON or YAML); built-in defaults when omitted.
    #[arg(long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Log level written to stderr, overriding `logging.level`.
    #[arg(long, global = true)]
    pub(crate) log_level: Option<String>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Parse a language tag and print its subtags as JSON.
    Locale {
        tag: String,
    },
    /// Name of a language in a display locale.
    DisplayLanguage {
        locale: String,
        display_locale: String,
        #[arg(long)]
        sentence_case: bool,
    },
    /// Name of a region (tag or region code) in a display locale.
    DisplayCountry {
        locale: String,
        display_locale: String,
    },
    /// Languages offered by the system.
    Languages(Listing),
    /// Regions offered for a language.
    Countries {
        language: String,
        #[command(flatten)]
        listing: Listing,
    },
    /// Whether a language is suggested, in `region` or in the system and SIM regions.
    Suggested {
        language: String,
        region: Option<String>,
    },
    /// Read or change the persisted system locale state.
    System {
        #[command(subcommand)]
        action: SystemAction,
    },
    /// Format an instant (RFC 3339, now when omitted).
    Date(DateArgs),
    /// Format a number.
    Number(NumberArgs),
    /// Validate or format a phone number.
    Phone(PhoneArgs),
    /// Describe a time zone, or list the zones of a region.
    Zone(ZoneArgs),
}

#[derive(Debug, Args)]
pub(crate) struct Listing {
    /// Print display names and suggestion types as JSON.
    #[arg(long)]
    pub(crate) info: bool,
    /// Locale names are rendered in; the system locale when omitted.
    #[arg(long)]
    pub(crate) display: Option<String>,
    /// Include names in the language itself.
    #[arg(long)]
    pub(crate) local_names: bool,
}

#[derive(Debug, Subcommand)]
pub(crate) enum SystemAction {
    /// Print language, region, locale and preferences as JSON.
    Get,
    SetLanguage { language: String },
    SetRegion { region: String },
    SetLocale { locale: String },
}

#[derive(Debug, Args)]
pub(crate) struct DateArgs {
    pub(crate) instant: Option<String>,
    /// Candidate locales in order of preference; the system locale when omitted.
    #[arg(long = "locale")]
    pub(crate) locales: Vec<String>,
    /// Option bag as JSON, e.g. `{"dateStyle":"long","timeZone":"Asia/Tokyo"}`.
    #[arg(long)]
    pub(crate) options: Option<String>,
    #[arg(long)]
    pub(crate) date_style: Option<String>,
    #[arg(long)]
    pub(crate) time_style: Option<String>,
    #[arg(long)]
    pub(crate) time_zone: Option<String>,
    /// Print the resolved options instead of the formatted value.
    #[arg(long)]
    pub(crate) resolved: bool,
}

#[derive(Debug, Args)]
pub(crate) struct NumberArgs {
    #[arg(allow_hyphen_values = true)]
    pub(crate) value: f64,
    #[arg(long = "locale")]
    pub(crate) locales: Vec<String>,
    /// Option bag as JSON, e.g. `{"style":"currency","currency":"EUR"}`.
    #[arg(long)]
    pub(crate) options: Option<String>,
    #[arg(long)]
    pub(crate) style: Option<String>,
    #[arg(long)]
    pub(crate) currency: Option<String>,
    #[arg(long)]
    pub(crate) unit: Option<String>,
    #[arg(long)]
    pub(crate) resolved: bool,
}

#[derive(Debug, Args)]
pub(crate) struct PhoneArgs {
    pub(crate) number: String,
    /// Region the number is dialled from; the system region when omitted.
    #[arg(long)]
    pub(crate) country: Option<String>,
    /// `E164`, `RFC3966`, `INTERNATIONAL` or `NATIONAL`.
    #[arg(long = "type")]
    pub(crate) format_type: Option<String>,
    /// Print whether the number is valid instead of formatting it.
    #[arg(long)]
    pub(crate) validate: bool,
}

#[derive(Debug, Args)]
pub(crate) struct ZoneArgs {
    /// IANA zone id; UTC when omitted.
    pub(crate) id: Option<String>,
    #[arg(long = "locale")]
    pub(crate) locales: Vec<String>,
    /// List the zones of this region instead.
    #[arg(long, conflicts_with = "id")]
    pub(crate) region: Option<String>,
}
