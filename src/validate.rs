//! Character-class predicates and text coercion used to vet untyped input
//! and to render values in diagnostics.
//!
//! Every predicate looks at the input with surrounding whitespace removed and
//! returns `false` for an empty string.

use std::fmt::Display;

/// Returns true if `s` parses as a finite number (`"60"`, `"-5"`, `"60.0"`, `"6e1"`).
pub fn is_numeric(s: &str) -> bool {
    let trimmed = s.trim();
    !trimmed.is_empty() && trimmed.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Returns true if `s` is an optionally signed run of ASCII digits.
pub fn is_integer_like(s: &str) -> bool {
    let trimmed = s.trim();
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true if every character of `s` is a letter or a digit.
pub fn is_alphanum(s: &str) -> bool {
    let trimmed = s.trim();
    !trimmed.is_empty() && trimmed.chars().all(char::is_alphanumeric)
}

/// Returns true if `s` contains at least one letter and no uppercase letters.
pub fn is_lowercase(s: &str) -> bool {
    let trimmed = s.trim();
    trimmed.chars().any(char::is_alphabetic) && !trimmed.chars().any(char::is_uppercase)
}

/// Renders any displayable value as text with surrounding whitespace removed.
pub fn strstr(value: impl Display) -> String {
    value.to_string().trim().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_numeric() {
        for s in ["60", " 60 ", "-5", "+7", "60.0", "0.5", "6e1"] {
            assert!(is_numeric(s), "{s:?} should be numeric");
        }
        for s in ["", "   ", "abc", "60a", "inf", "NaN", "1,000", "--5"] {
            assert!(!is_numeric(s), "{s:?} should not be numeric");
        }
    }

    #[test]
    fn test_is_integer_like() {
        for s in ["60", " 2004", "-5", "+7", "0"] {
            assert!(is_integer_like(s), "{s:?} should be integer-like");
        }
        for s in ["", "-", "+", "60.0", "6e1", "abc", "1 000"] {
            assert!(!is_integer_like(s), "{s:?} should not be integer-like");
        }
    }

    #[test]
    fn test_is_alphanum() {
        assert!(is_alphanum("abc123"));
        assert!(is_alphanum(" ABC "));
        assert!(!is_alphanum(""));
        assert!(!is_alphanum("abc-123"));
        assert!(!is_alphanum("a b"));
    }

    #[test]
    fn test_is_lowercase() {
        assert!(is_lowercase("abc"));
        assert!(is_lowercase("abc_123"));
        assert!(!is_lowercase("Abc"));
        assert!(!is_lowercase("123"));
        assert!(!is_lowercase(""));
    }

    #[test]
    fn test_strstr_trims_rendered_value() {
        assert_eq!(strstr("  abc\t"), "abc");
        assert_eq!(strstr(-5), "-5");
        assert_eq!(strstr(2004_u64), "2004");
        assert_eq!(strstr(60.5), "60.5");
    }
}
