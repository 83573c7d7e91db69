//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the FieldFlow domain.

mod channel_status;
mod cycle_status;
mod errors;
mod ids;
mod percentage;
mod role;
mod state_machine;
mod timestamp;

pub use channel_status::ChannelStatus;
pub use cycle_status::CycleStatus;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{
    AuditRecordId, ChannelId, ClientId, CycleId, FieldId, ReportId, StoreId, TemplateId, UserId,
    VisitId,
};
pub use percentage::Percentage;
pub use role::UserRole;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
