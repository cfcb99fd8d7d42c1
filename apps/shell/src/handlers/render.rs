use pgen::domain::constants::{MAX_LENGTH, MIN_LENGTH};
use pgen::features::form::FormSnapshot;
use std::io::{self, Write};

const HIGHLIGHT_ON: &str = "\x1b[7m";
const HIGHLIGHT_OFF: &str = "\x1b[0m";

pub(crate) const HELP: &str = "\
Commands:
  length <n>              set the length (6-30)
  numbers [on|off]        toggle or set digits
  characters [on|off]     toggle or set symbols
  generate                new password with the same settings
  copy                    copy the password to the clipboard
  show                    print the form again
  help                    this list
  quit                    leave";

/// Draws the form. With `styled`, the selection highlight uses reverse video.
pub(crate) fn form(out: &mut impl Write, snapshot: &FormSnapshot, styled: bool) -> io::Result<()> {
    let (selected, rest) = snapshot.highlight();
    if styled {
        writeln!(out, "Password: {HIGHLIGHT_ON}{selected}{HIGHLIGHT_OFF}{rest}")?;
    } else {
        writeln!(out, "Password: {selected}{rest}")?;
    }

    let config = &snapshot.config;
    writeln!(out, "Length:   {} ({MIN_LENGTH}-{MAX_LENGTH})", config.length())?;
    writeln!(
        out,
        "{} Numbers   {} Characters",
        checkbox(config.include_digits()),
        checkbox(config.include_symbols())
    )
}

const fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pgen::domain::GeneratorConfig;
    use pgen::features::form::RegenerationReason;
    use pgen::features::generator::GeneratedPassword;

    fn snapshot(password: &str, config: GeneratorConfig) -> FormSnapshot {
        FormSnapshot {
            config,
            password: GeneratedPassword::from(password),
            revision: 1,
            reason: RegenerationReason::Requested,
        }
    }

    #[test]
    fn test_plain_form() {
        let mut out = Vec::new();
        form(&mut out, &snapshot("Ab3!xyz9", GeneratorConfig::new(8, true, false)), false).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Password: Ab3!xyz9\nLength:   8 (6-30)\n[x] Numbers   [ ] Characters\n");
    }

    #[test]
    fn test_styled_highlight_stops_at_twenty_chars() {
        let password = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcd";
        let mut out = Vec::new();
        form(&mut out, &snapshot(password, GeneratorConfig::new(30, false, false)), true).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Password: \x1b[7mABCDEFGHIJKLMNOPQRST\x1b[0mUVWXYZabcd\n"));
    }
}
