//! Audit questionnaires.

use serde::{Deserialize, Serialize};

use crate::domain::audit::{AuditForm, FormField};
use crate::domain::foundation::{TemplateId, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: TemplateId,
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FormField>,
}

impl Template {
    /// A blank form for this questionnaire.
    pub fn form(&self) -> Result<AuditForm, ValidationError> {
        AuditForm::new(self.fields.clone())
    }

    pub fn required_count(&self) -> usize {
        self.fields.iter().filter(|f| f.required).count()
    }
}
