use super::render::{self, HELP};
use crate::args::FormArgs;
use anyhow::{Result, anyhow, bail};
use pgen::domain::config::AppConfig;
use pgen::domain::generator::parse_requested_length;
use pgen::features::form::{CopyOutcome, ToastEvent, system_clipboard};
use std::io::{self, IsTerminal, Write};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormCommand {
    Length(i128),
    Numbers(Option<bool>),
    Characters(Option<bool>),
    Generate,
    Copy,
    Show,
    Help,
    Quit,
}

/// Runs the interactive form until `quit` or end of input.
///
/// The form is redrawn whenever the watched snapshot changes. Toasts raised by
/// `copy` are printed as they are shown.
#[allow(clippy::future_not_send)]
pub(crate) async fn run(settings: &AppConfig, args: &FormArgs) -> Result<()> {
    let mut settings = settings.clone();
    settings.generator = args.resolve(settings.generator);

    let mut session = pgen::init(&settings, args.seed)?;
    let mut snapshots = session.form.subscribe()?;
    let mut toasts = session.toaster.subscribe()?;
    let mut clipboard = system_clipboard();
    let styled = io::stdout().is_terminal();
    info!(length = session.form.config().length(), "Interactive form opened");

    let mut out = io::stdout();
    render::form(&mut out, &session.form.snapshot(), styled)?;
    writeln!(out, "Type 'help' for commands.")?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            debug!("End of input");
            break;
        };

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            },
        };
        debug!(?command, "Command received");

        match command {
            FormCommand::Quit => break,
            FormCommand::Length(length) => {
                session.form.set_length(length)?;
            },
            FormCommand::Numbers(Some(enabled)) => {
                session.form.set_include_digits(enabled)?;
            },
            FormCommand::Numbers(None) => {
                session.form.toggle_digits()?;
            },
            FormCommand::Characters(Some(enabled)) => {
                session.form.set_include_symbols(enabled)?;
            },
            FormCommand::Characters(None) => {
                session.form.toggle_symbols()?;
            },
            FormCommand::Generate => session.form.regenerate()?,
            FormCommand::Copy => {
                if session.form.copy(clipboard.as_mut(), &session.toaster)
                    == CopyOutcome::ClipboardFailed
                {
                    writeln!(out, "Clipboard unavailable, nothing copied.")?;
                }
            },
            FormCommand::Show => render::form(&mut out, &session.form.snapshot(), styled)?,
            FormCommand::Help => writeln!(out, "{HELP}")?,
        }

        if snapshots.has_changed()? {
            let snapshot = snapshots.borrow_and_update().clone();
            render::form(&mut out, &snapshot, styled)?;
        }

        while let Ok(event) = toasts.try_recv() {
            if let ToastEvent::Shown(toast) = &*event {
                writeln!(out, ">> {}", toast.message())?;
            }
        }
    }

    session.toaster.dismiss();
    Ok(())
}

fn parse_command(line: &str) -> Result<Option<FormCommand>> {
    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
        return Ok(None);
    };
    let argument = words.next();
    if let Some(extra) = words.next() {
        bail!("Unexpected argument '{extra}'. Type 'help' for commands.");
    }

    let command = match name.to_ascii_lowercase().as_str() {
        "length" | "l" => {
            let value = argument.ok_or_else(|| anyhow!("Usage: length <n>"))?;
            let length = parse_requested_length(value)
                .ok_or_else(|| anyhow!("'{value}' is not a valid length"))?;
            FormCommand::Length(length)
        },
        "numbers" | "digits" | "n" => FormCommand::Numbers(switch(argument)?),
        "characters" | "symbols" | "c" => FormCommand::Characters(switch(argument)?),
        "generate" | "regenerate" | "g" => FormCommand::Generate,
        "copy" | "y" => FormCommand::Copy,
        "show" | "s" => FormCommand::Show,
        "help" | "h" | "?" => FormCommand::Help,
        "quit" | "exit" | "q" => FormCommand::Quit,
        other => bail!("Unknown command '{other}'. Type 'help' for commands."),
    };

    Ok(Some(command))
}

fn switch(argument: Option<&str>) -> Result<Option<bool>> {
    match argument.map(str::to_ascii_lowercase).as_deref() {
        None => Ok(None),
        Some("on" | "yes" | "true" | "1") => Ok(Some(true)),
        Some("off" | "no" | "false" | "0") => Ok(Some(false)),
        Some(other) => bail!("Expected 'on' or 'off', got '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("length 12").unwrap(), Some(FormCommand::Length(12)));
        assert_eq!(parse_command("length -3").unwrap(), Some(FormCommand::Length(-3)));
        assert_eq!(
            parse_command("l 99999999999999999999999").unwrap(),
            Some(FormCommand::Length(99_999_999_999_999_999_999_999))
        );
        assert_eq!(parse_command(" NUMBERS on ").unwrap(), Some(FormCommand::Numbers(Some(true))));
        assert_eq!(parse_command("characters").unwrap(), Some(FormCommand::Characters(None)));
        assert_eq!(
            parse_command("symbols off").unwrap(),
            Some(FormCommand::Characters(Some(false)))
        );
        assert_eq!(parse_command("q").unwrap(), Some(FormCommand::Quit));
        assert_eq!(parse_command("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_command("length").is_err());
        assert!(parse_command("length twelve").is_err());
        assert!(parse_command("length 1.5").is_err());
        assert!(parse_command("numbers maybe").is_err());
        assert!(parse_command("copy now please").is_err());
        assert!(parse_command("dance").is_err());
    }
}
