//! Visit-cycle domain events.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ChannelId, CycleId};

/// Events recorded by the cycle store as state changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CycleEvent {
    /// A new cycle was appended.
    Created {
        cycle_id: CycleId,
        cycle_no: u32,
        cloned_from: Option<CycleId>,
        start_date: NaiveDate,
    },

    /// The next visit of a channel was opened.
    VisitActivated {
        cycle_id: CycleId,
        channel_id: ChannelId,
        visit_number: u32,
    },

    /// A cycle was closed.
    Closed { cycle_id: CycleId },
}

impl CycleEvent {
    /// The cycle this event concerns.
    pub fn cycle_id(&self) -> &CycleId {
        match self {
            CycleEvent::Created { cycle_id, .. }
            | CycleEvent::VisitActivated { cycle_id, .. }
            | CycleEvent::Closed { cycle_id } => cycle_id,
        }
    }
}
