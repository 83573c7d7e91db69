//! Audit handlers.

mod submit_audit;

pub use submit_audit::{
    SubmitAuditCommand, SubmitAuditError, SubmitAuditHandler, SUBMITTED_MESSAGE,
};
