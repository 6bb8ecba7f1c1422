// Minimum-content quality gate for batch extraction.

/// Extracted text shorter than this (in characters) is treated as
/// unusable and dropped from batch output.
pub const MIN_CONTENT_CHARS: usize = 100;

/// Does this text clear the quality bar? Threshold is `< 100` discarded,
/// so exactly 100 characters passes.
pub fn is_substantial(text: &str) -> bool {
    text.chars().count() >= MIN_CONTENT_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ninety_nine_chars_rejected() {
        assert!(!is_substantial(&"x".repeat(99)));
    }

    #[test]
    fn one_hundred_chars_accepted() {
        assert!(is_substantial(&"x".repeat(100)));
    }

    #[test]
    fn empty_rejected() {
        assert!(!is_substantial(""));
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 100 two-byte characters pass even though a byte count of the
        // same string would be 200.
        assert!(is_substantial(&"é".repeat(100)));
        assert!(!is_substantial(&"é".repeat(99)));
    }
}
