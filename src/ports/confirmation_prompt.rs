//! Confirmation prompt port.
//!
//! Irreversible actions ask the operator first. Adapters decide how: a
//! terminal prompt, a scripted answer in tests, or auto-approval when the
//! feature flag disables confirmation.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

#[async_trait]
pub trait ConfirmationPrompt: Send + Sync {
    /// Returns true if the operator approved.
    async fn confirm(&self, message: &str) -> Result<bool, DomainError>;
}
