//! ActivateNextVisitHandler - opens the next visit of a channel.
//!
//! Activation targets the selected cycle. Requests that cannot apply
//! (closed cycle, full channel, unknown channel) succeed as a skip.

use std::sync::Arc;

use crate::domain::foundation::{ChannelId, DomainError, ErrorCode};
use crate::domain::visit::{ActivationOutcome, CommandOutcome, VisitCommand};
use crate::ports::VisitBoardRepository;

/// Command to open the next visit on a channel of the selected cycle.
#[derive(Debug, Clone)]
pub struct ActivateNextVisitCommand {
    /// Channel whose card was clicked.
    pub channel_id: ChannelId,
}

/// Error type for visit activation.
#[derive(Debug, Clone)]
pub enum ActivateNextVisitError {
    /// Domain error.
    Domain(DomainError),
}

impl std::fmt::Display for ActivateNextVisitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivateNextVisitError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ActivateNextVisitError {}

impl From<DomainError> for ActivateNextVisitError {
    fn from(err: DomainError) -> Self {
        ActivateNextVisitError::Domain(err)
    }
}

/// Handler for opening visits.
pub struct ActivateNextVisitHandler {
    board: Arc<dyn VisitBoardRepository>,
}

impl ActivateNextVisitHandler {
    pub fn new(board: Arc<dyn VisitBoardRepository>) -> Self {
        Self { board }
    }

    pub async fn handle(
        &self,
        cmd: ActivateNextVisitCommand,
    ) -> Result<ActivationOutcome, ActivateNextVisitError> {
        let outcome = self
            .board
            .apply(VisitCommand::ActivateNextVisit {
                channel_id: cmd.channel_id.clone(),
            })
            .await?;

        let CommandOutcome::Activation(outcome) = outcome else {
            return Err(DomainError::new(ErrorCode::InternalError, "Unexpected command outcome").into());
        };
        match &outcome {
            ActivationOutcome::Activated {
                cycle_id,
                visit_number,
                ..
            } => tracing::info!(%cycle_id, channel_id = %cmd.channel_id, visit_number, "Visit opened"),
            ActivationOutcome::Skipped { reason } => {
                tracing::debug!(channel_id = %cmd.channel_id, ?reason, "Activation skipped")
            }
        }
        Ok(outcome)
    }
}
