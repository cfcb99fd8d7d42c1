#![allow(clippy::print_stderr, clippy::print_stdout)]

mod args;
mod handlers;
mod runtime;

use crate::args::{Cli, Command};
use anyhow::Result;
use clap::Parser;
use pgen::domain::config::AppConfig;
use pgen::kernel::config::load_config;
use pgen_logger::{LevelFilter, Logger, parse_level};
use std::io::IsTerminal;
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings: AppConfig = load_config(cli.config.as_deref())?;
    let _logger = init_logger(&cli, &settings)?;
    debug!(settings = ?settings, "Settings loaded");

    let runtime = runtime::build_runtime()?;
    runtime.block_on(async move {
        match cli.command {
            Some(Command::Interactive { form }) => {
                handlers::interactive::run(&settings, &form).await
            },
            None => handlers::generate::run(&settings, &cli.generate),
        }
    })
}

fn init_logger(cli: &Cli, settings: &AppConfig) -> Result<Logger> {
    let level = parse_level(&settings.logging.level)?.max(verbosity_level(cli.verbose));

    let builder = Logger::builder()
        .name(env!("CARGO_BIN_NAME"))
        .level(level)
        .console(true)
        .ansi(std::io::stderr().is_terminal());

    let logger = match cli.log_dir.as_ref().or(settings.logging.directory.as_ref()) {
        Some(dir) => builder.path(dir).json(settings.logging.json).init()?,
        None => builder.init()?,
    };

    Ok(logger)
}

const fn verbosity_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::OFF,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
