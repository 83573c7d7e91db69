//! CloseCycleHandler - closes a cycle after operator confirmation.
//!
//! Closing is irreversible, so the handler asks first unless
//! confirmation is switched off. A declined prompt changes nothing.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::foundation::{CycleId, DomainError, ErrorCode};
use crate::domain::visit::{CommandOutcome, VisitCommand};
use crate::ports::{ConfirmationPrompt, VisitBoardRepository};

/// Question put to the operator before closing.
pub const CLOSE_CYCLE_PROMPT: &str =
    "Are you sure you want to close this cycle? No further visits can be activated.";

/// Command to close a cycle; `None` targets the selected cycle.
#[derive(Debug, Clone, Default)]
pub struct CloseCycleCommand {
    /// Cycle to close.
    pub cycle_id: Option<CycleId>,
}

/// What a close request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseOutcome {
    /// The cycle is now closed.
    Closed,
    /// Already closed, unknown, or nothing selected.
    Unchanged,
    /// The operator answered no.
    Declined,
}

/// Result of a close request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseCycleResult {
    /// The cycle the request resolved to, if any.
    pub cycle_id: Option<CycleId>,
    /// What happened.
    pub outcome: CloseOutcome,
}

/// Error type for closing cycles.
#[derive(Debug, Clone)]
pub enum CloseCycleError {
    /// Domain error, including a failed prompt.
    Domain(DomainError),
}

impl std::fmt::Display for CloseCycleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CloseCycleError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CloseCycleError {}

impl From<DomainError> for CloseCycleError {
    fn from(err: DomainError) -> Self {
        CloseCycleError::Domain(err)
    }
}

/// Handler for closing cycles.
pub struct CloseCycleHandler {
    board: Arc<dyn VisitBoardRepository>,
    prompt: Arc<dyn ConfirmationPrompt>,
    require_confirmation: bool,
}

impl CloseCycleHandler {
    pub fn new(
        board: Arc<dyn VisitBoardRepository>,
        prompt: Arc<dyn ConfirmationPrompt>,
        require_confirmation: bool,
    ) -> Self {
        Self {
            board,
            prompt,
            require_confirmation,
        }
    }

    pub async fn handle(&self, cmd: CloseCycleCommand) -> Result<CloseCycleResult, CloseCycleError> {
        let snapshot = self.board.snapshot().await?;
        let cycle_id = cmd.cycle_id.or_else(|| snapshot.selected_id().cloned());
        let unchanged = |cycle_id| CloseCycleResult {
            cycle_id,
            outcome: CloseOutcome::Unchanged,
        };

        let Some(cycle_id) = cycle_id else {
            tracing::debug!("Close requested with no cycle selected");
            return Ok(unchanged(None));
        };
        match snapshot.cycle(&cycle_id) {
            Some(cycle) if cycle.can_close() => {}
            _ => {
                tracing::debug!(%cycle_id, "Cycle already closed or unknown");
                return Ok(unchanged(Some(cycle_id)));
            }
        }

        if self.require_confirmation && !self.prompt.confirm(CLOSE_CYCLE_PROMPT).await? {
            tracing::warn!(%cycle_id, "Cycle close declined");
            return Ok(CloseCycleResult {
                cycle_id: Some(cycle_id),
                outcome: CloseOutcome::Declined,
            });
        }

        let outcome = self
            .board
            .apply(VisitCommand::CloseCycle {
                cycle_id: cycle_id.clone(),
            })
            .await?;
        let CommandOutcome::Closed { changed, .. } = outcome else {
            return Err(DomainError::new(ErrorCode::InternalError, "Unexpected command outcome").into());
        };

        if changed {
            tracing::info!(%cycle_id, "Cycle closed");
        }
        Ok(CloseCycleResult {
            cycle_id: Some(cycle_id),
            outcome: if changed {
                CloseOutcome::Closed
            } else {
                CloseOutcome::Unchanged
            },
        })
    }
}
