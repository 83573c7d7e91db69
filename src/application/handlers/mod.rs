//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod audit;
pub mod clients;
pub mod dashboard;
pub mod uploads;
pub mod visits;

pub use audit::{SubmitAuditCommand, SubmitAuditError, SubmitAuditHandler};
pub use clients::{SaveClientCommand, SaveClientError, SaveClientHandler, SaveClientResult};
pub use dashboard::{DashboardView, GetDashboardHandler, VisitSummary};
pub use uploads::{UploadTemplateCommand, UploadTemplateError, UploadTemplateHandler};
pub use visits::{
    ActivateNextVisitCommand, ActivateNextVisitError, ActivateNextVisitHandler, CloseCycleCommand,
    CloseCycleError, CloseCycleHandler, CloseCycleResult, CloseOutcome, CreateCycleCommand,
    CreateCycleError, CreateCycleHandler, CreateCycleResult, GetVisitBoardHandler,
    SelectCycleCommand, SelectCycleError, SelectCycleHandler, VisitBoardView,
};
