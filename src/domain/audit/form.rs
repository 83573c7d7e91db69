//! AuditForm - an auditor's in-progress answers for one visit.
//!
//! The form keeps values and inline errors side by side. Validation never
//! throws the input away: it records a message per failing field, and
//! the next `set_value` on that field clears its message again.

use serde::Serialize;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

use crate::domain::foundation::{
    AuditRecordId, DomainError, ErrorCode, FieldId, Timestamp, ValidationError, VisitId,
};

use super::{AuditRecord, FieldKind, FieldValue, FormField, NumericRange};

/// Message for a required field left empty.
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// One inline validation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field_id: FieldId,
    pub message: String,
}

/// Inline messages in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct FormErrors {
    errors: Vec<FieldError>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message for a field, if it failed.
    pub fn get(&self, field_id: &FieldId) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| &e.field_id == field_id)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    fn push(&mut self, field_id: FieldId, message: impl Into<String>) {
        self.errors.push(FieldError {
            field_id,
            message: message.into(),
        });
    }

    fn clear(&mut self, field_id: &FieldId) {
        self.errors.retain(|e| &e.field_id != field_id);
    }
}

/// Fields sharing a category heading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldGroup<'a> {
    pub category: &'a str,
    pub fields: Vec<&'a FormField>,
}

/// Answers being collected against a list of fields.
#[derive(Debug, Clone)]
pub struct AuditForm {
    fields: Vec<FormField>,
    values: HashMap<FieldId, FieldValue>,
    errors: FormErrors,
    expanded_category: Option<String>,
}

impl AuditForm {
    /// Starts an empty form with the first category expanded.
    pub fn new(fields: Vec<FormField>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(&field.id) {
                return Err(ValidationError::invalid_format(
                    "fields",
                    format!("duplicate field id '{}'", field.id),
                ));
            }
        }
        let expanded_category = fields.first().map(|f| f.category_name().to_string());
        Ok(Self {
            fields,
            values: HashMap::new(),
            errors: FormErrors::default(),
            expanded_category,
        })
    }

    /// The five-question retail shelf audit.
    pub fn standard() -> Self {
        let percent = NumericRange::new(0.0, 100.0).ok();
        let fields = vec![
            FormField::new(
                FieldId::from_static("f1"),
                "Availability (%)",
                FieldKind::Numeric { range: percent },
            )
            .required()
            .in_category("Availability"),
            FormField::new(
                FieldId::from_static("f2"),
                "Shelf Space (cm)",
                FieldKind::Numeric { range: None },
            )
            .required()
            .in_category("Share of Shelf"),
            FormField::new(
                FieldId::from_static("f3"),
                "Promotion Active?",
                FieldKind::Boolean,
            )
            .in_category("Promotion"),
            FormField::new(
                FieldId::from_static("f4"),
                "Competitor Brand Visible?",
                FieldKind::Boolean,
            )
            .in_category("Competition"),
            FormField::new(FieldId::from_static("f5"), "Shelf Photo", FieldKind::Photo)
                .required()
                .in_category("Evidence"),
        ];
        let expanded_category = Some("Availability".to_string());
        Self {
            fields,
            values: HashMap::new(),
            errors: FormErrors::default(),
            expanded_category,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, field_id: &FieldId) -> Option<&FormField> {
        self.fields.iter().find(|f| &f.id == field_id)
    }

    pub fn value(&self, field_id: &FieldId) -> Option<&FieldValue> {
        self.values.get(field_id)
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn expanded_category(&self) -> Option<&str> {
        self.expanded_category.as_deref()
    }

    /// Fields grouped by category, categories in first-appearance order.
    pub fn grouped_fields(&self) -> Vec<FieldGroup<'_>> {
        let mut groups: Vec<FieldGroup<'_>> = Vec::new();
        for field in &self.fields {
            let category = field.category_name();
            match groups.iter_mut().find(|g| g.category == category) {
                Some(group) => group.fields.push(field),
                None => groups.push(FieldGroup {
                    category,
                    fields: vec![field],
                }),
            }
        }
        groups
    }

    // ───────────────────────────────────────────────────────────────
    // Input
    // ───────────────────────────────────────────────────────────────

    /// Records an answer and clears that field's inline error.
    ///
    /// # Errors
    ///
    /// - `FieldNotFound` if the form has no such field
    pub fn set_value(&mut self, field_id: &FieldId, value: FieldValue) -> Result<(), DomainError> {
        if self.field(field_id).is_none() {
            return Err(DomainError::new(ErrorCode::FieldNotFound, "Field not found")
                .with_detail("field_id", field_id.as_str()));
        }
        self.values.insert(field_id.clone(), value);
        self.errors.clear(field_id);
        Ok(())
    }

    /// Stores a captured photo reference on a photo field.
    ///
    /// # Errors
    ///
    /// - `FieldNotFound` if the form has no such field
    /// - `ValidationFailed` if the field does not take photos
    pub fn attach_photo(
        &mut self,
        field_id: &FieldId,
        reference: impl Into<String>,
    ) -> Result<(), DomainError> {
        match self.field(field_id).map(|f| &f.kind) {
            Some(FieldKind::Photo) | None => {}
            Some(_) => {
                return Err(DomainError::validation(
                    field_id.as_str(),
                    "Field does not accept photos",
                ))
            }
        }
        self.set_value(field_id, FieldValue::PhotoRef(reference.into()))
    }

    /// Expands a category, or collapses it if it is already open.
    pub fn toggle_category(&mut self, category: &str) {
        if self.expanded_category.as_deref() == Some(category) {
            self.expanded_category = None;
        } else {
            self.expanded_category = Some(category.to_string());
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Validation
    // ───────────────────────────────────────────────────────────────

    /// Checks every field and replaces the inline errors with the result.
    pub fn validate(&mut self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        for field in &self.fields {
            match self.values.get(&field.id).filter(|v| !v.is_blank()) {
                None if field.required => errors.push(field.id.clone(), REQUIRED_MESSAGE),
                None => {}
                Some(value) => {
                    if let Err(message) = field.kind.check(value) {
                        errors.push(field.id.clone(), message);
                    }
                }
            }
        }
        self.errors = errors;
        if self.errors.is_empty() {
            Ok(())
        } else {
            tracing::debug!(failed = self.errors.len(), "Audit form failed validation");
            Err(self.errors.clone())
        }
    }

    /// Validates and, if clean, produces the record to submit.
    pub fn submit(&mut self, visit_id: VisitId, at: Timestamp) -> Result<AuditRecord, FormErrors> {
        self.validate()?;

        let mut data = std::collections::BTreeMap::new();
        let mut photos = Vec::new();
        for field in &self.fields {
            if let Some(value) = self.values.get(&field.id).filter(|v| !v.is_blank()) {
                if let Some(reference) = value.as_photo_ref() {
                    photos.push(reference.to_string());
                }
                data.insert(field.id.clone(), value.clone());
            }
        }
        Ok(AuditRecord {
            id: AuditRecordId::generate(),
            visit_id,
            data,
            photos,
            submitted_at: at,
        })
    }
}
