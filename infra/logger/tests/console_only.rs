use pgen_logger::{LevelFilter, Logger};

#[test]
fn console_only_logger_has_no_guard() {
    let logger = Logger::builder()
        .name("pgen-console-only")
        .console(true)
        .ansi(false)
        .level(LevelFilter::INFO)
        .init()
        .expect("logger should initialize");

    tracing::info!(length = 8, "console logging is live");
    assert!(logger.guard().is_none(), "console-only logger should not create a file guard");
}
