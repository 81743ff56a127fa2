//! Form field controllers
//!
//! Each field owns its value and interaction state. Edits are reported to
//! the owning form as [`FieldChange`] messages; a field never reads its
//! siblings.

use super::format::{digit_count, format_phone, validate, FieldKind, MAX_PHONE_DIGITS};
use regex::Regex;

/// Identifies one slice of the contact form snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Phone,
    Email,
    Message,
}

/// A field's value changed; consumed once by the owning form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub field: FieldId,
    pub value: String,
}

/// Visual feedback derived from (dirty, valid)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Decoration {
    #[default]
    Neutral,
    Valid,
    Invalid,
}

/// Fallback error text for invalid fields
pub const DEFAULT_ERROR_MESSAGE: &str = "Campo inválido";

/// A single form field with its configuration and interaction state
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: FieldId,
    pub label: String,
    pub placeholder: String,
    pub kind: FieldKind,
    pub required: bool,
    pub error_message: String,
    pattern: Option<Regex>,
    value: String,
    is_dirty: bool,
    is_valid: bool,
}

impl FormField {
    /// Create a new field in the pristine state
    pub fn new(id: FieldId, kind: FieldKind, label: &str, placeholder: &str) -> Self {
        Self {
            id,
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            kind,
            required: false,
            error_message: DEFAULT_ERROR_MESSAGE.to_string(),
            pattern: None,
            value: String::new(),
            is_dirty: false,
            is_valid: true,
        }
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Override the error text shown when the field is invalid
    pub fn with_error_message(mut self, message: &str) -> Self {
        self.error_message = message.to_string();
        self
    }

    /// Add a custom pattern the value must also match
    #[allow(dead_code)]
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self, regex::Error> {
        self.pattern = Some(Regex::new(pattern)?);
        Ok(self)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn is_multiline(&self) -> bool {
        self.kind.is_multiline()
    }

    /// Accept a new raw input.
    ///
    /// Phone inputs are masked first. A phone input with more than
    /// [`MAX_PHONE_DIGITS`] digits is refused and the current value kept.
    pub fn on_change(&mut self, raw: &str) -> Option<FieldChange> {
        let value = if self.kind == FieldKind::Tel {
            if digit_count(raw) > MAX_PHONE_DIGITS {
                tracing::debug!(field = ?self.id, "phone input over {MAX_PHONE_DIGITS} digits ignored");
                return None;
            }
            format_phone(raw)
        } else {
            raw.to_string()
        };

        self.value = value;
        self.is_dirty = true;
        Some(FieldChange {
            field: self.id,
            value: self.value.clone(),
        })
    }

    /// Type a character at the end of the value
    pub fn push_char(&mut self, c: char) -> Option<FieldChange> {
        let mut raw = self.value.clone();
        raw.push(c);
        self.on_change(&raw)
    }

    /// Delete backwards from the end of the value.
    ///
    /// Phone fields drop the last digit so mask characters never pin the value.
    pub fn pop_char(&mut self) -> Option<FieldChange> {
        if self.value.is_empty() {
            return None;
        }

        let raw = if self.kind == FieldKind::Tel {
            let mut digits: String = self.value.chars().filter(|c| c.is_ascii_digit()).collect();
            digits.pop();
            digits
        } else {
            let mut raw = self.value.clone();
            raw.pop();
            raw
        };
        self.on_change(&raw)
    }

    /// Focus left the field: evaluate validity if it has been edited
    pub fn on_blur(&mut self) -> Decoration {
        if self.is_dirty {
            self.is_valid = validate(self.kind, &self.value, self.required, self.pattern.as_ref());
            tracing::debug!(field = ?self.id, valid = self.is_valid, "field blurred");
        }
        self.decoration()
    }

    /// Three-way visual state
    pub fn decoration(&self) -> Decoration {
        match (self.is_dirty, self.is_valid) {
            (false, _) => Decoration::Neutral,
            (true, true) => Decoration::Valid,
            (true, false) => Decoration::Invalid,
        }
    }

    /// Back to the pristine, empty state
    pub fn reset(&mut self) {
        self.value.clear();
        self.is_dirty = false;
        self.is_valid = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn phone_field() -> FormField {
        FormField::new(FieldId::Phone, FieldKind::Tel, "WhatsApp", "(11) 99999-9999").required()
    }

    fn email_field() -> FormField {
        FormField::new(FieldId::Email, FieldKind::Email, "E-mail", "seu@email.com").required()
    }

    mod lifecycle {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_is_pristine_and_neutral() {
            let field = email_field();
            assert_eq!(field.value(), "");
            assert!(!field.is_dirty());
            assert!(field.is_valid());
            assert_eq!(field.decoration(), Decoration::Neutral);
            assert_eq!(field.error_message, DEFAULT_ERROR_MESSAGE);
        }

        #[test]
        fn test_blur_without_change_stays_neutral() {
            let mut field = email_field();
            assert_eq!(field.on_blur(), Decoration::Neutral);
            assert!(field.is_valid());
        }

        #[test]
        fn test_change_marks_dirty_but_does_not_validate() {
            let mut field = email_field();
            field.on_change("nope");
            assert!(field.is_dirty());
            // Validity only moves on blur
            assert_eq!(field.decoration(), Decoration::Valid);
        }

        #[test]
        fn test_blur_after_change_decorates() {
            let mut field = email_field();
            field.on_change("nope");
            assert_eq!(field.on_blur(), Decoration::Invalid);

            field.on_change("foo@bar.com");
            assert_eq!(field.on_blur(), Decoration::Valid);
        }

        #[test]
        fn test_cleared_required_field_is_invalid_on_blur() {
            let mut field =
                FormField::new(FieldId::Name, FieldKind::Text, "Nome Completo", "").required();
            field.on_change("Ana");
            field.on_change("");
            assert_eq!(field.on_blur(), Decoration::Invalid);
        }

        #[test]
        fn test_reset_returns_to_pristine() {
            let mut field = email_field();
            field.on_change("x");
            field.on_blur();
            field.reset();
            assert_eq!(field.value(), "");
            assert_eq!(field.decoration(), Decoration::Neutral);
        }
    }

    mod events {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_change_emits_field_change() {
            let mut field = email_field();
            let change = field.on_change("a@b.c");
            assert_eq!(
                change,
                Some(FieldChange {
                    field: FieldId::Email,
                    value: "a@b.c".to_string()
                })
            );
        }

        #[test]
        fn test_phone_change_emits_formatted_value() {
            let mut field = phone_field();
            let change = field.on_change("11988887777").unwrap();
            assert_eq!(change.value, "(11) 98888-7777");
            assert_eq!(field.value(), "(11) 98888-7777");
        }

        #[test]
        fn test_phone_over_eleven_digits_keeps_value() {
            let mut field = phone_field();
            field.on_change("11988887777");
            assert_eq!(field.push_char('1'), None);
            assert_eq!(field.value(), "(11) 98888-7777");
        }

        #[test]
        fn test_phone_typing_builds_mask() {
            let mut field = phone_field();
            for c in "11988887777".chars() {
                field.push_char(c);
            }
            assert_eq!(field.value(), "(11) 98888-7777");
        }

        #[test]
        fn test_phone_letters_are_dropped() {
            let mut field = phone_field();
            field.push_char('1');
            field.push_char('x');
            assert_eq!(field.value(), "1");
        }

        #[test]
        fn test_phone_backspace_removes_digits() {
            let mut field = phone_field();
            field.on_change("119");
            assert_eq!(field.value(), "(11) 9");
            field.pop_char();
            assert_eq!(field.value(), "11");
            field.on_change("11999999");
            field.pop_char();
            assert_eq!(field.value(), "(11) 99999");
        }

        #[test]
        fn test_text_backspace_pops_last_char() {
            let mut field = email_field();
            field.on_change("ab");
            let change = field.pop_char().unwrap();
            assert_eq!(change.value, "a");
        }

        #[test]
        fn test_backspace_on_empty_is_noop() {
            let mut field = email_field();
            assert_eq!(field.pop_char(), None);
            assert!(!field.is_dirty());
        }
    }

    mod patterns {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_custom_pattern_applies_on_blur() {
            let mut field = FormField::new(FieldId::Name, FieldKind::Text, "Nome", "")
                .required()
                .with_pattern(r"\s")
                .unwrap();
            field.on_change("Ana");
            assert_eq!(field.on_blur(), Decoration::Invalid);
            field.on_change("Ana Oliveira");
            assert_eq!(field.on_blur(), Decoration::Valid);
        }

        #[test]
        fn test_invalid_pattern_is_rejected() {
            let result = FormField::new(FieldId::Name, FieldKind::Text, "Nome", "").with_pattern("(");
            assert!(result.is_err());
        }
    }

    #[test]
    fn test_with_error_message_overrides_default() {
        let field = email_field().with_error_message("Por favor, insira um e-mail válido");
        assert_eq!(field.error_message, "Por favor, insira um e-mail válido");
    }

    #[test]
    fn test_message_field_is_multiline() {
        let field = FormField::new(FieldId::Message, FieldKind::Message, "Mensagem", "");
        assert!(field.is_multiline());
    }
}
