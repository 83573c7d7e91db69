//! SelectCycleHandler - switches which cycle the board shows and acts on.

use std::sync::Arc;

use crate::domain::foundation::{CycleId, DomainError, ErrorCode};
use crate::domain::visit::VisitCommand;
use crate::ports::VisitBoardRepository;

/// Command to pick a cycle from the dropdown.
#[derive(Debug, Clone)]
pub struct SelectCycleCommand {
    /// Cycle to show.
    pub cycle_id: CycleId,
}

/// Error type for cycle selection.
#[derive(Debug, Clone)]
pub enum SelectCycleError {
    /// No cycle with this id.
    CycleNotFound(CycleId),
    /// Domain error.
    Domain(DomainError),
}

impl std::fmt::Display for SelectCycleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectCycleError::CycleNotFound(id) => write!(f, "Cycle not found: {}", id),
            SelectCycleError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SelectCycleError {}

impl From<DomainError> for SelectCycleError {
    fn from(err: DomainError) -> Self {
        SelectCycleError::Domain(err)
    }
}

/// Handler for cycle selection.
pub struct SelectCycleHandler {
    board: Arc<dyn VisitBoardRepository>,
}

impl SelectCycleHandler {
    pub fn new(board: Arc<dyn VisitBoardRepository>) -> Self {
        Self { board }
    }

    pub async fn handle(&self, cmd: SelectCycleCommand) -> Result<(), SelectCycleError> {
        match self
            .board
            .apply(VisitCommand::SelectCycle {
                cycle_id: cmd.cycle_id.clone(),
            })
            .await
        {
            Ok(_) => {
                tracing::debug!(cycle_id = %cmd.cycle_id, "Cycle selected");
                Ok(())
            }
            Err(err) if err.code == ErrorCode::CycleNotFound => {
                Err(SelectCycleError::CycleNotFound(cmd.cycle_id))
            }
            Err(err) => Err(err.into()),
        }
    }
}
