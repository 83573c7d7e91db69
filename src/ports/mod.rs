//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `VisitBoardRepository` - serialized access to the session's cycles
//! - `ConfirmationPrompt` - operator approval before irreversible actions
//! - `Notifier` - user-facing messages
//! - `FileUploadGateway` - simulated spreadsheet uploads
//! - `Clock` - current time

mod clock;
mod confirmation_prompt;
mod file_upload_gateway;
mod notifier;
mod visit_board_repository;

pub use clock::Clock;
pub use confirmation_prompt::ConfirmationPrompt;
pub use file_upload_gateway::{FileUploadGateway, UploadAcknowledgement, UploadKind};
pub use notifier::{Notification, NotificationLevel, Notifier};
pub use visit_board_repository::VisitBoardRepository;
