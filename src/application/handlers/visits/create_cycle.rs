//! CreateCycleHandler - starts a follow-up cycle.
//!
//! The new cycle copies channel names and quotas from the source cycle
//! with progress reset, starts today and becomes the selected cycle.

use std::sync::Arc;

use crate::domain::foundation::{CycleId, DomainError, ErrorCode};
use crate::domain::visit::{CommandOutcome, VisitCommand};
use crate::ports::{Clock, VisitBoardRepository};

/// Command to create a cycle; `None` copies the selected cycle.
#[derive(Debug, Clone, Default)]
pub struct CreateCycleCommand {
    /// Cycle whose channels are copied.
    pub from_cycle_id: Option<CycleId>,
}

/// Result of successful cycle creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCycleResult {
    /// The created cycle, now selected.
    pub cycle_id: CycleId,
    /// Its ordinal.
    pub cycle_no: u32,
}

/// Error type for cycle creation.
#[derive(Debug, Clone)]
pub enum CreateCycleError {
    /// Domain error.
    Domain(DomainError),
}

impl std::fmt::Display for CreateCycleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreateCycleError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CreateCycleError {}

impl From<DomainError> for CreateCycleError {
    fn from(err: DomainError) -> Self {
        CreateCycleError::Domain(err)
    }
}

/// Handler for creating cycles.
pub struct CreateCycleHandler {
    board: Arc<dyn VisitBoardRepository>,
    clock: Arc<dyn Clock>,
}

impl CreateCycleHandler {
    pub fn new(board: Arc<dyn VisitBoardRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { board, clock }
    }

    pub async fn handle(&self, cmd: CreateCycleCommand) -> Result<CreateCycleResult, CreateCycleError> {
        let from_cycle_id = match cmd.from_cycle_id {
            Some(id) => Some(id),
            None => self.board.snapshot().await?.selected_id().cloned(),
        };

        let outcome = self
            .board
            .apply(VisitCommand::CreateCycle {
                from_cycle_id: from_cycle_id.clone(),
                start_date: self.clock.today(),
            })
            .await?;
        let CommandOutcome::Created { cycle_id, cycle_no } = outcome else {
            return Err(DomainError::new(ErrorCode::InternalError, "Unexpected command outcome").into());
        };

        tracing::info!(%cycle_id, cycle_no, from = ?from_cycle_id, "Cycle created");
        Ok(CreateCycleResult { cycle_id, cycle_no })
    }
}
