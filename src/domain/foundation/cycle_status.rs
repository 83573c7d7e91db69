//! CycleStatus enum for tracking lifecycle of audit cycles.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle status of an audit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CycleStatus {
    #[default]
    Active,
    Closed,
    Upcoming,
}

impl CycleStatus {
    /// Returns true if visits can still be activated under this cycle.
    pub fn is_mutable(&self) -> bool {
        matches!(self, CycleStatus::Active)
    }

    /// Returns true once the cycle has been closed.
    pub fn is_closed(&self) -> bool {
        matches!(self, CycleStatus::Closed)
    }
}

impl StateMachine for CycleStatus {
    /// Valid transitions:
    /// - Upcoming -> Active
    /// - Upcoming -> Closed
    /// - Active -> Closed
    fn can_transition_to(&self, target: &Self) -> bool {
        use CycleStatus::*;
        matches!(
            (self, target),
            (Upcoming, Active) | (Upcoming, Closed) | (Active, Closed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use CycleStatus::*;
        match self {
            Upcoming => vec![Active, Closed],
            Active => vec![Closed],
            Closed => vec![],
        }
    }
}

impl fmt::Display for CycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CycleStatus::Active => "active",
            CycleStatus::Closed => "closed",
            CycleStatus::Upcoming => "upcoming",
        };
        write!(f, "{}", s)
    }
}
