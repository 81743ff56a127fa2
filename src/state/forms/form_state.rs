//! Contact form aggregate, snapshot and whole-form validation

use super::field::{FieldChange, FieldId, FormField};
use super::format::{is_valid_email, is_valid_phone, FieldKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Shown after the practice acknowledges a request
pub const SUCCESS_MESSAGE: &str = "Mensagem enviada com sucesso! Em breve entraremos em contato.";

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Whole-form rule that blocked a submission, in priority order
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Por favor, preencha todos os campos obrigatórios.")]
    MissingFields,
    #[error("Por favor, insira um e-mail válido.")]
    InvalidEmail,
    #[error("Por favor, insira um número de WhatsApp válido.")]
    InvalidPhone,
}

/// Aggregate of every field value, owned by the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl FormSnapshot {
    /// Write one slice
    pub fn apply(&mut self, change: FieldChange) {
        let slot = match change.field {
            FieldId::Name => &mut self.name,
            FieldId::Phone => &mut self.phone,
            FieldId::Email => &mut self.email,
            FieldId::Message => &mut self.message,
        };
        *slot = change.value;
    }

    /// Run the submit-time checks: missing fields, then email, then phone
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty()
            || self.phone.is_empty()
            || self.email.is_empty()
            || self.message.is_empty()
        {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if !is_valid_phone(&self.phone) {
            return Err(ValidationError::InvalidPhone);
        }
        Ok(())
    }
}

/// A validated request ready for the submission boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl ContactRequest {
    /// Stamp a snapshot with an id and submission time
    pub fn from_snapshot(snapshot: &FormSnapshot) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            name: snapshot.name.clone(),
            phone: snapshot.phone.clone(),
            email: snapshot.email.clone(),
            message: snapshot.message.clone(),
        }
    }
}

/// The "Agende sua Consulta Inicial" form
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub phone: FormField,
    pub email: FormField,
    pub message: FormField,
    /// 0-3 are fields, 4 is the submit button
    pub active_field_index: usize,
    snapshot: FormSnapshot,
}

impl ContactForm {
    /// Index of the submit button row
    pub const SUBMIT_INDEX: usize = 4;

    pub fn new() -> Self {
        Self {
            name: FormField::new(FieldId::Name, FieldKind::Text, "Nome Completo", "Seu nome completo")
                .required()
                .with_error_message("Por favor, insira seu nome completo"),
            phone: FormField::new(FieldId::Phone, FieldKind::Tel, "WhatsApp", "(11) 99999-9999")
                .required()
                .with_error_message("Por favor, insira um número de WhatsApp válido"),
            email: FormField::new(FieldId::Email, FieldKind::Email, "E-mail", "seu@email.com")
                .required()
                .with_error_message("Por favor, insira um e-mail válido"),
            message: FormField::new(
                FieldId::Message,
                FieldKind::Message,
                "Mensagem",
                "Conte-nos sobre seu caso e objetivos...",
            )
            .required(),
            active_field_index: 0,
            snapshot: FormSnapshot::default(),
        }
    }

    pub fn snapshot(&self) -> &FormSnapshot {
        &self.snapshot
    }

    /// Consume a field's change message
    pub fn apply(&mut self, change: FieldChange) {
        self.snapshot.apply(change);
    }

    /// Returns true if the submit button is focused
    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == Self::SUBMIT_INDEX
    }

    pub fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.phone),
            2 => Some(&self.email),
            3 => Some(&self.message),
            _ => None,
        }
    }

    pub fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.phone),
            2 => Some(&mut self.email),
            3 => Some(&mut self.message),
            _ => None,
        }
    }

    pub fn fields(&self) -> [&FormField; 4] {
        [&self.name, &self.phone, &self.email, &self.message]
    }

    /// Type into the focused field
    pub fn input_char(&mut self, c: char) {
        let change = self.get_active_field_mut().and_then(|f| f.push_char(c));
        if let Some(change) = change {
            self.apply(change);
        }
    }

    /// Backspace in the focused field
    pub fn backspace(&mut self) {
        let change = self.get_active_field_mut().and_then(|f| f.pop_char());
        if let Some(change) = change {
            self.apply(change);
        }
    }

    /// Replace the focused field's raw input, as a paste would
    pub fn set_active_input(&mut self, raw: &str) {
        let change = self.get_active_field_mut().and_then(|f| f.on_change(raw));
        if let Some(change) = change {
            self.apply(change);
        }
    }

    /// Blur whichever field currently has focus
    pub fn blur_active(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.on_blur();
        }
    }

    /// Focus a row, blurring the field being left
    pub fn focus(&mut self, index: usize) {
        let index = index.min(Self::SUBMIT_INDEX);
        if index != self.active_field_index {
            self.blur_active();
        }
        self.active_field_index = index;
    }

    /// Build a request if the current snapshot passes submit-time checks
    pub fn prepare_request(&self) -> Result<ContactRequest, ValidationError> {
        self.snapshot.validate()?;
        Ok(ContactRequest::from_snapshot(&self.snapshot))
    }

    /// Empty every field and return them to pristine
    pub fn clear(&mut self) {
        self.snapshot = FormSnapshot::default();
        self.name.reset();
        self.phone.reset();
        self.email.reset();
        self.message.reset();
        self.active_field_index = 0;
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        5 // name, phone, email, message, submit
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.focus(index);
    }
}
