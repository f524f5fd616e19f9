mod cli;
mod commands;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use glossa::domain::config::GlossaConfig;
use glossa::kernel::config::load_config;
use glossa_logger::Logger;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config: GlossaConfig = match &cli.config {
        Some(path) => load_config(Some(path)).context("Failed to load configuration")?,
        None => GlossaConfig::default(),
    };

    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    let logger = Logger::builder()
        .name(env!("CARGO_BIN_NAME"))
        .console(true)
        .ansi(false)
        .level(Logger::parse_level(level)?);
    let _logger = match &config.logging.path {
        Some(path) if config.logging.json => logger.path(path).json().init()?,
        Some(path) => logger.path(path).init()?,
        None => logger.init()?,
    };

    let i18n = glossa::init(&config)?;
    let mut stdout = std::io::stdout().lock();
    commands::run(cli.command, &i18n, &mut stdout).await
}
