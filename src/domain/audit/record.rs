//! Submitted audit data.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::foundation::{AuditRecordId, FieldId, Timestamp, VisitId};

use super::FieldValue;

/// The answers of one completed audit, as submitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditRecord {
    pub id: AuditRecordId,
    pub visit_id: VisitId,
    pub data: BTreeMap<FieldId, FieldValue>,
    pub photos: Vec<String>,
    pub submitted_at: Timestamp,
}

impl AuditRecord {
    pub fn value(&self, field_id: &FieldId) -> Option<&FieldValue> {
        self.data.get(field_id)
    }
}
