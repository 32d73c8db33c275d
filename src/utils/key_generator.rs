//! Short key generation and prefix composition.
//!
//! Keys are random alphanumeric tokens, optionally namespaced by a path
//! prefix (`campaign/3fZk9QaLm2Xp`).

use rand::Rng;

/// Characters a generated key may contain.
const KEY_CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Length of a generated token. 62^12 gives roughly 71 bits of entropy.
pub const KEY_LENGTH: usize = 12;

/// Separator between a prefix and the random token.
pub const PREFIX_SEPARATOR: char = '/';

/// Generates a random URL-safe key token.
///
/// # Examples
///
/// ```ignore
/// let key = generate_key();
/// assert_eq!(key.len(), 12);
/// assert!(key.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_key() -> String {
    let mut rng = rand::rng();

    (0..KEY_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..KEY_CHARSET.len());
            KEY_CHARSET[idx] as char
        })
        .collect()
}

/// Strips all leading and trailing separators from a caller-supplied prefix.
///
/// Runs of separators are removed, not just one on each side, so
/// `"//campaign//"` becomes `"campaign"`. Returns `None` if nothing is left,
/// so `"/"` behaves like no prefix.
pub fn normalize_prefix(prefix: &str) -> Option<&str> {
    let trimmed = prefix.trim_matches(PREFIX_SEPARATOR);
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Joins an already-normalized prefix and a token into a full key.
pub fn compose_key(prefix: Option<&str>, token: &str) -> String {
    match prefix {
        Some(prefix) => format!("{prefix}{PREFIX_SEPARATOR}{token}"),
        None => token.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_key_has_correct_length() {
        assert_eq!(generate_key().len(), KEY_LENGTH);
    }

    #[test]
    fn test_generate_key_url_safe_characters() {
        let key = generate_key();
        assert!(key.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_key_produces_unique_keys() {
        let keys: HashSet<String> = (0..1000).map(|_| generate_key()).collect();
        assert_eq!(keys.len(), 1000);
    }

    #[test]
    fn test_normalize_prefix_strips_separators() {
        assert_eq!(normalize_prefix("/campaign/"), Some("campaign"));
        assert_eq!(normalize_prefix("campaign"), Some("campaign"));
        assert_eq!(normalize_prefix("//nested/path//"), Some("nested/path"));
    }

    #[test]
    fn test_normalize_prefix_empty() {
        assert_eq!(normalize_prefix(""), None);
        assert_eq!(normalize_prefix("/"), None);
        assert_eq!(normalize_prefix("///"), None);
    }

    #[test]
    fn test_compose_key_with_prefix() {
        assert_eq!(compose_key(Some("campaign"), "abc"), "campaign/abc");
    }

    #[test]
    fn test_compose_key_without_prefix() {
        assert_eq!(compose_key(None, "abc"), "abc");
    }
}
