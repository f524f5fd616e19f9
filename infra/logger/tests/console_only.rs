use glossa_logger::{LevelFilter, Logger};

#[test]
fn console_only_logger_has_no_guard() {
    let logger = Logger::builder()
        .name("glossa-console-only")
        .console(true)
        .ansi(false)
        .level(LevelFilter::INFO)
        .init()
        .expect("logger should initialize");

    tracing::info!(locale = "en-US", "console only");
    assert!(logger.guard().is_none());
}
