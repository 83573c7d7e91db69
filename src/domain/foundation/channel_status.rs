//! ChannelStatus enum for virtual channels.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Whether any visit has been opened for a virtual channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChannelStatus {
    #[default]
    Inactive,
    Active,
}

impl ChannelStatus {
    /// Derives the status from an activated-visit count.
    pub fn from_activated_count(count: u32) -> Self {
        if count > 0 {
            ChannelStatus::Active
        } else {
            ChannelStatus::Inactive
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, ChannelStatus::Active)
    }
}

impl StateMachine for ChannelStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        matches!((self, target), (ChannelStatus::Inactive, ChannelStatus::Active))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            ChannelStatus::Inactive => vec![ChannelStatus::Active],
            ChannelStatus::Active => vec![],
        }
    }
}

impl fmt::Display for ChannelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChannelStatus::Inactive => "inactive",
            ChannelStatus::Active => "active",
        };
        write!(f, "{}", s)
    }
}
