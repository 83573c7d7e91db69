//! Commands accepted by the cycle store and the outcomes they report.
//!
//! Every command runs to completion against one store value, so an adapter
//! can apply it as a single serialized transaction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ChannelId, CycleId, CycleStatus};

/// A state change requested of the cycle store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum VisitCommand {
    ActivateNextVisit {
        channel_id: ChannelId,
    },
    CloseCycle {
        cycle_id: CycleId,
    },
    CreateCycle {
        from_cycle_id: Option<CycleId>,
        start_date: NaiveDate,
    },
    SelectCycle {
        cycle_id: CycleId,
    },
}

/// Why an activation request left the store unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationSkip {
    NoCycleSelected,
    CycleNotActive(CycleStatus),
    UnknownChannel,
    AllVisitsActivated,
}

/// Result of `activate_next_visit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ActivationOutcome {
    Activated {
        cycle_id: CycleId,
        channel_id: ChannelId,
        visit_number: u32,
    },
    Skipped {
        reason: ActivationSkip,
    },
}

impl ActivationOutcome {
    pub fn is_activated(&self) -> bool {
        matches!(self, ActivationOutcome::Activated { .. })
    }
}

/// Result of applying a [`VisitCommand`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CommandOutcome {
    Activation(ActivationOutcome),
    Closed { cycle_id: CycleId, changed: bool },
    Created { cycle_id: CycleId, cycle_no: u32 },
    Selected { cycle_id: CycleId },
}
