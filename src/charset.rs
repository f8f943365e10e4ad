//! ASCII character class alphabets used for scoring, entropy and suggestions.

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";

/// The 32-symbol ASCII punctuation alphabet.
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_sizes() {
        assert_eq!(LOWERCASE.len(), 26);
        assert_eq!(UPPERCASE.len(), 26);
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(PUNCTUATION.len(), 32);
    }

    #[test]
    fn test_classes_are_disjoint() {
        for c in PUNCTUATION.chars() {
            assert!(!c.is_ascii_alphanumeric());
        }
        for c in LOWERCASE.chars() {
            assert!(!UPPERCASE.contains(c));
            assert!(!DIGITS.contains(c));
        }
    }
}
