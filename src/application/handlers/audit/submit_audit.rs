//! SubmitAuditHandler - validates an auditor's answers and files the record.

use std::sync::Arc;

use crate::domain::audit::{AuditRecord, FieldValue, FormErrors};
use crate::domain::catalog::Catalog;
use crate::domain::foundation::{DomainError, FieldId, TemplateId, VisitId};
use crate::ports::{Clock, Notification, Notifier};

/// Message shown after a clean submission.
pub const SUBMITTED_MESSAGE: &str = "Audit Submitted Successfully!";

/// Command to submit an audit for a visit.
#[derive(Debug, Clone)]
pub struct SubmitAuditCommand {
    /// Visit being audited.
    pub visit_id: VisitId,
    /// Answers in entry order; later answers overwrite earlier ones.
    pub answers: Vec<(FieldId, FieldValue)>,
}

/// Error type for audit submission.
#[derive(Debug, Clone)]
pub enum SubmitAuditError {
    /// Visit not found.
    VisitNotFound(VisitId),
    /// The visit references a missing template.
    TemplateNotFound(TemplateId),
    /// The answers failed validation; nothing was submitted.
    Invalid(FormErrors),
    /// Domain error.
    Domain(DomainError),
}

impl std::fmt::Display for SubmitAuditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitAuditError::VisitNotFound(id) => write!(f, "Visit not found: {}", id),
            SubmitAuditError::TemplateNotFound(id) => write!(f, "Template not found: {}", id),
            SubmitAuditError::Invalid(errors) => write!(f, "{}", errors),
            SubmitAuditError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SubmitAuditError {}

impl From<DomainError> for SubmitAuditError {
    fn from(err: DomainError) -> Self {
        SubmitAuditError::Domain(err)
    }
}

impl From<FormErrors> for SubmitAuditError {
    fn from(errors: FormErrors) -> Self {
        SubmitAuditError::Invalid(errors)
    }
}

/// Handler for audit submission.
pub struct SubmitAuditHandler {
    catalog: Arc<Catalog>,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
}

impl SubmitAuditHandler {
    pub fn new(catalog: Arc<Catalog>, notifier: Arc<dyn Notifier>, clock: Arc<dyn Clock>) -> Self {
        Self {
            catalog,
            notifier,
            clock,
        }
    }

    pub async fn handle(&self, cmd: SubmitAuditCommand) -> Result<AuditRecord, SubmitAuditError> {
        let visit = self
            .catalog
            .visit(&cmd.visit_id)
            .ok_or_else(|| SubmitAuditError::VisitNotFound(cmd.visit_id.clone()))?;
        let template = self
            .catalog
            .template(&visit.template_id)
            .ok_or_else(|| SubmitAuditError::TemplateNotFound(visit.template_id.clone()))?;

        let mut form = template.form().map_err(DomainError::from)?;
        for (field_id, value) in cmd.answers {
            form.set_value(&field_id, value)?;
        }

        let record = match form.submit(cmd.visit_id.clone(), self.clock.now()) {
            Ok(record) => record,
            Err(errors) => {
                tracing::debug!(visit_id = %cmd.visit_id, failed = errors.len(), "Audit rejected");
                return Err(errors.into());
            }
        };

        tracing::info!(
            visit_id = %record.visit_id,
            record_id = %record.id,
            answers = record.data.len(),
            photos = record.photos.len(),
            "Audit submitted"
        );
        self.notifier
            .notify(Notification::success(SUBMITTED_MESSAGE))
            .await?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FixedClock, InMemoryNotifier};
    use crate::domain::audit::REQUIRED_MESSAGE;

    fn handler() -> (SubmitAuditHandler, InMemoryNotifier) {
        let notifier = InMemoryNotifier::new();
        let handler = SubmitAuditHandler::new(
            Arc::new(Catalog::seed().unwrap()),
            Arc::new(notifier.clone()),
            Arc::new(FixedClock::at("2024-03-20T10:15:00Z").unwrap()),
        );
        (handler, notifier)
    }

    fn answer(id: &str, value: FieldValue) -> (FieldId, FieldValue) {
        (FieldId::new(id).unwrap(), value)
    }

    #[tokio::test]
    async fn complete_answers_are_submitted() {
        let (handler, notifier) = handler();
        let record = handler
            .handle(SubmitAuditCommand {
                visit_id: VisitId::new("1").unwrap(),
                answers: vec![
                    answer("f1", FieldValue::Number(92.0)),
                    answer("f2", FieldValue::Number(140.0)),
                    answer("f4", FieldValue::Bool(false)),
                    answer("f5", FieldValue::PhotoRef("photo://walmart/1".into())),
                ],
            })
            .await
            .unwrap();

        assert_eq!(record.photos, vec!["photo://walmart/1"]);
        assert_eq!(record.submitted_at.date().to_string(), "2024-03-20");
        assert_eq!(notifier.messages().await, vec![SUBMITTED_MESSAGE]);
    }

    #[tokio::test]
    async fn missing_photo_is_reported_inline() {
        let (handler, notifier) = handler();
        let err = handler
            .handle(SubmitAuditCommand {
                visit_id: VisitId::new("3").unwrap(),
                answers: vec![
                    answer("f1", FieldValue::Number(92.0)),
                    answer("f2", FieldValue::Number(140.0)),
                ],
            })
            .await
            .unwrap_err();

        let errors = match err {
            SubmitAuditError::Invalid(errors) => errors,
            other => panic!("expected validation errors, got {other:?}"),
        };
        assert_eq!(errors.get(&FieldId::new("f5").unwrap()), Some(REQUIRED_MESSAGE));
        assert!(notifier.sent().await.is_empty());
    }

    #[tokio::test]
    async fn unknown_visit_is_rejected() {
        let (handler, _) = handler();
        let err = handler
            .handle(SubmitAuditCommand {
                visit_id: VisitId::new("404").unwrap(),
                answers: vec![],
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SubmitAuditError::VisitNotFound(_)));
    }
}
