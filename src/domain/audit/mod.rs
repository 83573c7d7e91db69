//! Audit module - form fields, typed answers and submitted records.

mod field;
mod form;
mod record;
mod value;

pub use field::{FieldKind, FormField, NumericRange, DEFAULT_CATEGORY};
pub use form::{AuditForm, FieldError, FieldGroup, FormErrors, REQUIRED_MESSAGE};
pub use record::AuditRecord;
pub use value::FieldValue;
