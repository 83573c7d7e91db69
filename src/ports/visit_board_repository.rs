//! Visit board repository port.
//!
//! Owns the session's `CycleStore`. Every change goes through `apply`,
//! which implementations must run as one serialized transaction: two
//! callers activating the same channel can never both read the old count.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::visit::{CommandOutcome, CycleStore, VisitCommand};

#[async_trait]
pub trait VisitBoardRepository: Send + Sync {
    /// A consistent copy of the current store.
    async fn snapshot(&self) -> Result<CycleStore, DomainError>;

    /// Applies one command atomically.
    ///
    /// # Errors
    ///
    /// - `CycleNotFound` when selecting an unknown cycle
    async fn apply(&self, command: VisitCommand) -> Result<CommandOutcome, DomainError>;
}
