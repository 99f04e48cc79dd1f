//! Input validation for user-supplied text.
//!
//! Standalone helper, independent of the sentiment client: callers are
//! expected to validate first and only send text that passed.

/// Maximum accepted input length, counted on the untrimmed string
pub const MAX_INPUT_CHARS: usize = 500;

/// Check a text against the input constraints.
///
/// Returns a message describing the single most relevant violation, or
/// `None` when the input is acceptable. The emptiness check runs first
/// against the trimmed text; the length check runs against the original
/// string, so leading/trailing whitespace counts toward the limit.
pub fn validate_input(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        return Some("Text field cannot be empty.".to_string());
    }
    if text.chars().count() > MAX_INPUT_CHARS {
        return Some(format!("Maximum character limit is {}.", MAX_INPUT_CHARS));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert_eq!(
            validate_input("").as_deref(),
            Some("Text field cannot be empty.")
        );
    }

    #[test]
    fn test_whitespace_only_text() {
        assert_eq!(
            validate_input("   ").as_deref(),
            Some("Text field cannot be empty.")
        );
    }

    #[test]
    fn test_over_limit() {
        let text = "a".repeat(501);
        assert_eq!(
            validate_input(&text).as_deref(),
            Some("Maximum character limit is 500.")
        );
    }

    #[test]
    fn test_limit_is_inclusive() {
        let text = "a".repeat(500);
        assert_eq!(validate_input(&text), None);
    }

    #[test]
    fn test_valid_text() {
        assert_eq!(validate_input("Valid text"), None);
    }

    #[test]
    fn test_length_counts_untrimmed() {
        // 400 spaces of padding + 101 visible characters = 501 total
        let text = format!("{}{}", " ".repeat(400), "b".repeat(101));
        assert_eq!(
            validate_input(&text).as_deref(),
            Some("Maximum character limit is 500.")
        );
    }
}
