//! # CLI Argument Definitions
//!
//! The `pgen` command line: one-shot generation by default, or an interactive
//! form with the `interactive` subcommand.

use clap::{ArgAction, Args, Parser, Subcommand};
use pgen::domain::GeneratorConfig;
use pgen::domain::generator::{clamp_requested_length, parse_requested_length};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing::warn;

const SECURITY_NOTE: &str = "SECURITY: passwords come from a fast, non-cryptographic PRNG. \
They are a usability aid, not real secrets.";

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "pgen")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate random passwords from letters, digits and symbols")]
#[command(after_help = SECURITY_NOTE)]
#[command(args_conflicts_with_subcommands = true)]
pub(crate) struct Cli {
    /// Settings file (TOML). Environment overrides use the `PGEN__` prefix
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Raise the log level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Also write rolling log files into this directory
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(flatten)]
    pub generate: GenerateArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Open the interactive password form
    #[command(alias = "i", after_help = SECURITY_NOTE)]
    Interactive {
        #[command(flatten)]
        form: FormArgs,
    },
}

/// One-shot generation.
#[derive(Debug, Args)]
pub(crate) struct GenerateArgs {
    #[command(flatten)]
    pub form: FormArgs,

    /// Number of passwords to print, one per line
    #[arg(short = 'n', long, value_name = "N", default_value_t = NonZeroUsize::MIN)]
    pub count: NonZeroUsize,

    /// Copy the last password to the clipboard
    #[arg(short, long)]
    pub copy: bool,
}

/// Initial form state. Unset options fall back to the settings file.
#[derive(Debug, Clone, Default, Args)]
pub(crate) struct FormArgs {
    /// Password length, clamped to 6..=30
    #[arg(
        short,
        long,
        value_name = "N",
        allow_negative_numbers = true,
        value_parser = parse_length
    )]
    pub length: Option<i128>,

    /// Include digits (0-9)
    #[arg(short, long, overrides_with = "no_digits")]
    pub digits: bool,

    /// Letters without digits
    #[arg(long, overrides_with = "digits")]
    pub no_digits: bool,

    /// Include symbols (!@#$%^&*?><_+)
    #[arg(short, long, overrides_with = "no_symbols")]
    pub symbols: bool,

    /// Letters without symbols
    #[arg(long, overrides_with = "symbols")]
    pub no_symbols: bool,

    /// Seed for a reproducible password sequence
    #[arg(long, value_name = "U64")]
    pub seed: Option<u64>,
}

impl FormArgs {
    /// Overlays the given options on `base`, clamping the length with a warning.
    pub(crate) fn resolve(&self, base: GeneratorConfig) -> GeneratorConfig {
        let mut config = base;

        if let Some(length) = self.length {
            let applied = clamp_requested_length(length);
            if i128::try_from(applied).ok() != Some(length) {
                warn!(requested = length, applied, "Length out of range, clamped");
            }
            config = config.with_length(applied);
        }
        if let Some(enabled) = flag(self.digits, self.no_digits) {
            config = config.with_digits(enabled);
        }
        if let Some(enabled) = flag(self.symbols, self.no_symbols) {
            config = config.with_symbols(enabled);
        }

        config
    }
}

fn parse_length(value: &str) -> Result<i128, String> {
    parse_requested_length(value).ok_or_else(|| format!("'{value}' is not an integer"))
}

const fn flag(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_settings() {
        let cli = Cli::parse_from(["pgen", "-l", "12", "--digits", "--no-symbols"]);
        let base = GeneratorConfig::new(8, false, true);

        let config = cli.generate.form.resolve(base);
        assert_eq!(config, GeneratorConfig::new(12, true, false));
    }

    #[test]
    fn test_last_paired_flag_wins() {
        let cli = Cli::parse_from(["pgen", "--digits", "--no-digits"]);
        assert!(!cli.generate.form.resolve(GeneratorConfig::default()).include_digits());
    }

    #[test]
    fn test_unset_options_keep_settings() {
        let cli = Cli::parse_from(["pgen"]);
        let base = GeneratorConfig::new(20, true, true);
        assert_eq!(cli.generate.form.resolve(base), base);
        assert_eq!(cli.generate.count.get(), 1);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_interactive_subcommand() {
        let cli = Cli::parse_from(["pgen", "interactive", "-v", "--length", "99", "--seed", "3"]);
        let Some(Command::Interactive { form }) = cli.command else {
            panic!("expected interactive subcommand");
        };
        assert_eq!(cli.verbose, 1);
        assert_eq!(form.seed, Some(3));
        assert_eq!(form.resolve(GeneratorConfig::default()).length(), 30);
    }

    #[test]
    fn test_negative_and_huge_lengths_clamp() {
        let base = GeneratorConfig::default();

        let cli = Cli::parse_from(["pgen", "--length", "-3"]);
        assert_eq!(cli.generate.form.length, Some(-3));
        assert_eq!(cli.generate.form.resolve(base).length(), 6);

        let cli = Cli::parse_from(["pgen", "--length=99999999999999999999999"]);
        assert_eq!(cli.generate.form.resolve(base).length(), 30);

        assert!(Cli::try_parse_from(["pgen", "--length", "twelve"]).is_err());
    }
}
