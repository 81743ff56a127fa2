//! Input masks and per-kind validation rules for contact form fields

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum number of digits a WhatsApp number may carry (2 area + 9 local)
pub const MAX_PHONE_DIGITS: usize = 11;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex compiles")
});

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\([0-9]{2}\) [0-9]{5}-[0-9]{4}$").expect("phone regex compiles")
});

/// Kind of input a field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Tel,
    Email,
    /// Free text, only the required rule applies
    Message,
}

impl FieldKind {
    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Message)
    }
}

/// Count the ASCII digits in a raw input
pub fn digit_count(raw: &str) -> usize {
    raw.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Apply the progressive `(DD) DDDDD-DDDD` mask to a raw phone input.
///
/// Inputs carrying more than [`MAX_PHONE_DIGITS`] digits come back unchanged;
/// the field decides whether to keep them.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let len = digits.len();

    if len > MAX_PHONE_DIGITS {
        return raw.to_string();
    }

    // Digits are ASCII, so byte slicing lines up with characters
    if len > 7 {
        format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..])
    } else if len > 2 {
        format!("({}) {}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}

/// Whether a value has the `local@domain.tld` shape
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Whether a value is a complete canonical phone number
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Validate a field value against its kind's rule.
///
/// The dirty gate belongs to the caller: this always evaluates.
pub fn validate(kind: FieldKind, value: &str, required: bool, pattern: Option<&Regex>) -> bool {
    if required && value.is_empty() {
        return false;
    }

    let kind_ok = match kind {
        FieldKind::Email => is_valid_email(value),
        FieldKind::Tel => is_valid_phone(value),
        FieldKind::Text | FieldKind::Message => true,
    };
    if !kind_ok {
        return false;
    }

    pattern.map_or(true, |re| re.is_match(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    mod format_phone {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_two_digits_stay_bare() {
            assert_eq!(format_phone("1"), "1");
            assert_eq!(format_phone("11"), "11");
        }

        #[test]
        fn test_parentheses_after_two_digits() {
            assert_eq!(format_phone("119"), "(11) 9");
            assert_eq!(format_phone("1199999"), "(11) 99999");
        }

        #[test]
        fn test_hyphen_after_seven_digits() {
            assert_eq!(format_phone("11999999"), "(11) 99999-9");
            assert_eq!(format_phone("11988887777"), "(11) 98888-7777");
        }

        #[test]
        fn test_strips_non_digits() {
            assert_eq!(format_phone("(11) 9a8b8c8d8-7777"), "(11) 98888-7777");
            assert_eq!(format_phone("abc"), "");
        }

        #[test]
        fn test_non_ascii_digits_are_dropped() {
            assert_eq!(format_phone("١١9"), "9");
        }

        #[test]
        fn test_idempotent_and_digit_preserving_up_to_eleven() {
            let all = "12345678901";
            for len in 0..=all.len() {
                let digits = &all[..len];
                let once = format_phone(digits);
                assert_eq!(format_phone(&once), once, "input {digits:?}");
                assert_eq!(digit_count(&once), len, "input {digits:?}");
            }
        }

        #[test]
        fn test_more_than_eleven_digits_returned_unchanged() {
            assert_eq!(format_phone("(11) 98888-77771"), "(11) 98888-77771");
            assert_eq!(format_phone("123456789012"), "123456789012");
        }
    }

    mod validate {
        use super::*;

        #[test]
        fn test_required_and_empty_is_invalid() {
            assert!(!validate(FieldKind::Text, "", true, None));
            assert!(validate(FieldKind::Text, "", false, None));
        }

        #[test]
        fn test_text_only_checks_required() {
            assert!(validate(FieldKind::Text, "   ", true, None));
            assert!(validate(FieldKind::Message, "qualquer coisa", true, None));
        }

        #[test]
        fn test_email_shapes() {
            assert!(!validate(FieldKind::Email, "", true, None));
            assert!(!validate(FieldKind::Email, "a@b", true, None));
            assert!(validate(FieldKind::Email, "a@b.c", true, None));
            assert!(!validate(FieldKind::Email, "a.b@c", true, None));
            assert!(!validate(FieldKind::Email, "a b@c.d", true, None));
            assert!(validate(FieldKind::Email, "foo@bar.com", true, None));
        }

        #[test]
        fn test_email_accepts_loose_addresses() {
            // Same leniency as the site: several dots and odd characters pass
            assert!(validate(FieldKind::Email, "a@b..c", true, None));
            assert!(validate(FieldKind::Email, "#!@x.y", true, None));
        }

        #[test]
        fn test_optional_empty_email_still_checked() {
            assert!(!validate(FieldKind::Email, "", false, None));
        }

        #[test]
        fn test_phone_shapes() {
            assert!(validate(FieldKind::Tel, "(11) 99999-9999", true, None));
            assert!(!validate(FieldKind::Tel, "(11) 9999-9999", true, None));
            assert!(!validate(FieldKind::Tel, "11999999999", true, None));
            assert!(!validate(FieldKind::Tel, "(11) 99999-999", true, None));
            assert!(!validate(FieldKind::Tel, "(11) 99999-99999", true, None));
        }

        #[test]
        fn test_custom_pattern_extends_kind_rule() {
            let re = Regex::new("^Dr").unwrap();
            assert!(validate(FieldKind::Text, "Dra. Ana", true, Some(&re)));
            assert!(!validate(FieldKind::Text, "Ana", true, Some(&re)));
        }

        #[test]
        fn test_custom_pattern_is_unanchored_search() {
            let re = Regex::new("[0-9]").unwrap();
            assert!(validate(FieldKind::Text, "apto 12", true, Some(&re)));
        }

        #[test]
        fn test_custom_pattern_cannot_rescue_bad_email() {
            let re = Regex::new(".*").unwrap();
            assert!(!validate(FieldKind::Email, "nope", true, Some(&re)));
        }
    }

    #[test]
    fn test_only_message_is_multiline() {
        assert!(FieldKind::Message.is_multiline());
        assert!(!FieldKind::Text.is_multiline());
        assert!(!FieldKind::Tel.is_multiline());
        assert!(!FieldKind::Email.is_multiline());
    }
}
