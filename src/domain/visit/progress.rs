//! ChannelProgress value object - display state derived from a channel.
//!
//! Nothing here is stored; every value is computed on read from the
//! channel and its parent cycle.

use serde::Serialize;

use crate::domain::foundation::{ChannelId, ChannelStatus, CycleStatus, Percentage};

use super::{Cycle, VirtualChannel};

/// What the channel card offers the administrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChannelAction {
    /// Button to open the given visit.
    OpenVisit { visit_number: u32 },
    /// Every required visit is open.
    AllVisitsCompleted,
    /// Parent cycle is closed; nothing can change.
    CycleClosed,
    /// Parent cycle has not started yet.
    CycleUpcoming,
}

impl ChannelAction {
    /// Button or banner text.
    pub fn caption(&self) -> String {
        match self {
            ChannelAction::OpenVisit { visit_number } => format!("Open Visit {}", visit_number),
            ChannelAction::AllVisitsCompleted => "All Visits Completed".to_string(),
            ChannelAction::CycleClosed => "Cycle Closed".to_string(),
            ChannelAction::CycleUpcoming => "Cycle Not Started".to_string(),
        }
    }
}

/// Read-only progress snapshot for one virtual channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelProgress {
    /// Channel the card belongs to.
    pub channel_id: ChannelId,
    /// Display name, e.g. `A`.
    pub name: String,
    /// Visits opened so far.
    pub activated_visit_count: u32,
    /// Quota for the period.
    pub required_visits: u32,
    /// Progress bar fill; 0% when the quota is 0.
    pub percent: Percentage,
    pub status: ChannelStatus,
    /// Button or banner under the bar.
    pub action: ChannelAction,
}

impl ChannelProgress {
    /// Computes the snapshot of `channel` under a cycle with `cycle_status`.
    pub fn of(channel: &VirtualChannel, cycle_status: CycleStatus) -> Self {
        let action = match cycle_status {
            CycleStatus::Closed => ChannelAction::CycleClosed,
            CycleStatus::Upcoming => ChannelAction::CycleUpcoming,
            CycleStatus::Active => match channel.next_visit_number() {
                Some(visit_number) => ChannelAction::OpenVisit { visit_number },
                None => ChannelAction::AllVisitsCompleted,
            },
        };

        Self {
            channel_id: channel.id().clone(),
            name: channel.name().to_string(),
            activated_visit_count: channel.activated_visit_count(),
            required_visits: channel.required_visits(),
            percent: Percentage::from_ratio(
                channel.activated_visit_count(),
                channel.required_visits(),
            ),
            status: channel.status(),
            action,
        }
    }

    /// Progress for every channel of a cycle, in channel order.
    pub fn for_cycle(cycle: &Cycle) -> Vec<Self> {
        cycle
            .virtual_channels()
            .iter()
            .map(|vc| Self::of(vc, cycle.status()))
            .collect()
    }

    /// True when all visits are open and the parent cycle is active.
    pub fn all_visits_completed(&self) -> bool {
        matches!(self.action, ChannelAction::AllVisitsCompleted)
    }

    /// Counter text, e.g. `1 / 2`.
    pub fn counter(&self) -> String {
        format!("{} / {}", self.activated_visit_count, self.required_visits)
    }
}
