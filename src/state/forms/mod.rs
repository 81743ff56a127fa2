//! Form domain layer
//!
//! - `format`: phone mask and per-kind validation rules
//! - `field`: per-field interaction state
//! - `form_state`: the contact form aggregate and whole-form validation
//! - `submission`: submission lifecycle

mod field;
mod form_state;
mod format;
mod submission;

pub use field::{Decoration, FormField};
pub use form_state::{
    ContactForm, ContactRequest, Form, FormSnapshot, ValidationError, SUCCESS_MESSAGE,
};
pub use format::is_valid_phone;
pub use submission::{Settlement, SubmissionController, SubmissionState, SubmitOutcome};
