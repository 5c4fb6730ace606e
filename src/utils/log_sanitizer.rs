//! Log sanitization utilities for masking sensitive data.
//!
//! Usernames are PII; mask them before logging.

/// Mask a username for safe logging.
///
/// Shows only the first 3 characters followed by asterisks.
///
/// # Examples
/// ```ignore
/// assert_eq!(mask_username("johndoe"), "joh***");
/// assert_eq!(mask_username("ab"), "ab***");
/// ```
pub fn mask_username(username: &str) -> String {
    // Take characters, not bytes; usernames are validated in characters and
    // may be multi-byte.
    let visible: String = username.chars().take(3).collect();
    format!("{}***", visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_username() {
        assert_eq!(mask_username("johndoe"), "joh***");
        assert_eq!(mask_username("ab"), "ab***");
        assert_eq!(mask_username("a"), "a***");
    }

    #[test]
    fn test_mask_username_multibyte() {
        // A 3-character multi-byte username passes registration validation
        // and must mask without panicking on a char boundary.
        assert_eq!(mask_username("ééé"), "ééé***");
        assert_eq!(mask_username("éxample"), "éxa***");
        assert_eq!(mask_username("日本語のユーザー"), "日本語***");
    }
}
