use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Wrapper for sensitive string data that zeroes its memory on drop.
///
/// Debug output is fully redacted; Display shows a masked form so the value
/// can be referenced in logs without leaking it.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Returns the inner value; avoid holding the reference longer than the
    /// call that needs it.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecureString {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SecureString")
            .field("value", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Display for SecureString {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", mask_sensitive(&self.0))
    }
}

impl From<String> for SecureString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SecureString {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

// Counts chars, not bytes: slicing a secret at byte offsets would panic on
// multi-byte characters near either end.
fn mask_sensitive(value: &str) -> String {
    let char_count = value.chars().count();
    if char_count <= 8 {
        "***".to_string()
    } else {
        let head: String = value.chars().take(4).collect();
        let tail: String = value.chars().skip(char_count - 4).collect();
        format!("{head}...{tail}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_redact_debug_output() {
        let secure = SecureString::new("secret-password".to_string());
        let debug = format!("{secure:?}");
        assert_eq!(debug, "SecureString { value: \"[REDACTED]\" }");
        assert!(!debug.contains("secret-password"));
    }

    #[test]
    fn should_mask_display_output() {
        let secure = SecureString::new("secret-password-12345".to_string());
        assert_eq!(secure.to_string(), "secr...2345");

        let short = SecureString::new("short".to_string());
        assert_eq!(short.to_string(), "***");
    }

    #[test]
    fn should_mask_multibyte_values_without_panicking() {
        let secure = SecureString::new("émeraude-sécrète-№42é".to_string());
        assert_eq!(secure.to_string(), "émer...№42é");

        let short = SecureString::new("héhé-caf".to_string());
        assert_eq!(short.to_string(), "***");
    }

    #[test]
    fn should_convert_from_str_and_string() {
        let secure: SecureString = "value".into();
        assert_eq!(secure.as_str(), "value");

        let secure: SecureString = String::from("value").into();
        assert_eq!(secure.as_str(), "value");
    }
}
