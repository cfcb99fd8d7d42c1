use crate::args::GenerateArgs;
use anyhow::Result;
use pgen::domain::config::AppConfig;
use pgen::event_bus::EventBus;
use pgen::features::form::{CopyOutcome, Toaster, copy_to_clipboard, system_clipboard};
use pgen::features::generator::PasswordGenerator;
use std::io::{self, Write};
use tracing::info;

/// Prints `--count` passwords to stdout and optionally copies the last one.
///
/// The copy confirmation goes to stderr so stdout carries only passwords.
pub(crate) fn run(settings: &AppConfig, args: &GenerateArgs) -> Result<()> {
    let config = args.form.resolve(settings.generator);
    let mut generator =
        args.form.seed.map_or_else(PasswordGenerator::from_entropy, PasswordGenerator::seeded);

    let passwords = generator.generate_many(&config, args.count.get());
    info!(count = passwords.len(), length = config.length(), "Passwords generated");

    let mut out = io::stdout().lock();
    for password in &passwords {
        writeln!(out, "{password}")?;
    }
    out.flush()?;

    if let Some(last) = passwords.last().filter(|_| args.copy) {
        let toaster = Toaster::new(EventBus::new(), &settings.notification);
        let mut clipboard = system_clipboard();

        if let CopyOutcome::Copied(toast) = copy_to_clipboard(last, clipboard.as_mut(), &toaster) {
            eprintln!("{}", toast.message());
        }
    }

    Ok(())
}
