//! Common validation utilities

/// Common validation functions
pub mod validators {
    use once_cell::sync::Lazy;
    use regex::Regex;

    static USERNAME_PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.-]*$").expect("invalid username pattern"));

    /// Check if a string is not empty after trimming
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if a string length is within bounds
    pub fn length_between(value: &str, min: usize, max: usize) -> bool {
        let len = value.len();
        len >= min && len <= max
    }

    /// Check if a username uses only accepted characters and starts with
    /// a letter or digit
    pub fn is_valid_username(value: &str) -> bool {
        USERNAME_PATTERN.is_match(value)
    }

    /// Check if an email address is valid (basic check)
    pub fn is_valid_email(email: &str) -> bool {
        email.contains('@') && email.contains('.') && email.len() >= 5
    }
}

#[cfg(test)]
mod tests {
    use super::validators::*;

    #[test]
    fn test_not_empty() {
        assert!(not_empty("alice"));
        assert!(!not_empty("   "));
        assert!(!not_empty(""));
    }

    #[test]
    fn test_length_between() {
        assert!(length_between("alice", 3, 50));
        assert!(!length_between("al", 3, 50));
        assert!(!length_between(&"x".repeat(51), 3, 50));
    }

    #[test]
    fn test_valid_usernames() {
        assert!(is_valid_username("alice"));
        assert!(is_valid_username("alice.smith-42"));
        assert!(!is_valid_username(".alice"));
        assert!(!is_valid_username("alice smith"));
        assert!(!is_valid_username(""));
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("alice@example.com"));
        assert!(!is_valid_email("alice"));
        assert!(!is_valid_email("a@b"));
    }
}
