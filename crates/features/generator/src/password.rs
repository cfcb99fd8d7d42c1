use std::fmt;

/// An immutable generated password.
///
/// A new value replaces the old one on regeneration; nothing mutates it in place.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct GeneratedPassword(String);

impl GeneratedPassword {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }
}

impl From<String> for GeneratedPassword {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for GeneratedPassword {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl AsRef<str> for GeneratedPassword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Keeps the value out of logs that debug-print surrounding state.
impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GeneratedPassword").field(&format_args!("<{} chars>", self.len())).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_debug() {
        let password = GeneratedPassword::from("Ab3!xyz9");
        assert_eq!(password.to_string(), "Ab3!xyz9");
        assert_eq!(password.len(), 8);
        assert_eq!(format!("{password:?}"), "GeneratedPassword(<8 chars>)");
    }
}
