//! Cycle entity - an audit period owning its virtual channels.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{ChannelId, CycleId, CycleStatus, StateMachine, ValidationError};

use super::VirtualChannel;

/// A bounded audit period.
///
/// Channels are exclusively owned by the cycle. Their visit counts only
/// move while the cycle is `Active`; closing the cycle freezes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CycleRecord")]
pub struct Cycle {
    id: CycleId,
    cycle_no: u32,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    status: CycleStatus,
    virtual_channels: Vec<VirtualChannel>,
}

#[derive(Debug, Deserialize)]
struct CycleRecord {
    id: CycleId,
    cycle_no: u32,
    start_date: NaiveDate,
    #[serde(default)]
    end_date: Option<NaiveDate>,
    #[serde(default)]
    status: CycleStatus,
    #[serde(default)]
    virtual_channels: Vec<VirtualChannel>,
}

impl TryFrom<CycleRecord> for Cycle {
    type Error = ValidationError;

    fn try_from(r: CycleRecord) -> Result<Self, Self::Error> {
        Cycle::restore(
            r.id,
            r.cycle_no,
            r.start_date,
            r.end_date,
            r.status,
            r.virtual_channels,
        )
    }
}

impl Cycle {
    /// Opens a new active cycle with no end date.
    pub fn open(
        id: CycleId,
        cycle_no: u32,
        start_date: NaiveDate,
        virtual_channels: Vec<VirtualChannel>,
    ) -> Result<Self, ValidationError> {
        Self::restore(
            id,
            cycle_no,
            start_date,
            None,
            CycleStatus::Active,
            virtual_channels,
        )
    }

    /// Opens a follow-up cycle from channels already owned by a valid cycle.
    pub(super) fn follow_up(
        id: CycleId,
        cycle_no: u32,
        start_date: NaiveDate,
        virtual_channels: Vec<VirtualChannel>,
    ) -> Self {
        Self {
            id,
            cycle_no,
            start_date,
            end_date: None,
            status: CycleStatus::Active,
            virtual_channels,
        }
    }

    /// Rebuilds a cycle from stored values.
    ///
    /// Channel ids must be unique within the cycle and the end date may not
    /// precede the start date.
    pub fn restore(
        id: CycleId,
        cycle_no: u32,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        status: CycleStatus,
        virtual_channels: Vec<VirtualChannel>,
    ) -> Result<Self, ValidationError> {
        if cycle_no == 0 {
            return Err(ValidationError::out_of_range(
                "cycle_no",
                1,
                i64::from(u32::MAX),
                0,
            ));
        }
        if let Some(end) = end_date {
            if end < start_date {
                return Err(ValidationError::invalid_format(
                    "end_date",
                    format!("{} is before start date {}", end, start_date),
                ));
            }
        }
        let mut seen = HashSet::new();
        for vc in &virtual_channels {
            if !seen.insert(vc.id().clone()) {
                return Err(ValidationError::invalid_format(
                    "virtual_channels",
                    format!("duplicate channel id '{}'", vc.id()),
                ));
            }
        }
        Ok(Self {
            id,
            cycle_no,
            start_date,
            end_date,
            status,
            virtual_channels,
        })
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn id(&self) -> &CycleId {
        &self.id
    }

    pub fn cycle_no(&self) -> u32 {
        self.cycle_no
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    pub fn status(&self) -> CycleStatus {
        self.status
    }

    pub fn virtual_channels(&self) -> &[VirtualChannel] {
        &self.virtual_channels
    }

    /// Looks up a channel owned by this cycle.
    pub fn channel(&self, id: &ChannelId) -> Option<&VirtualChannel> {
        self.virtual_channels.iter().find(|vc| vc.id() == id)
    }

    /// Whether a close request would change anything.
    ///
    /// True for `Active` and `Upcoming`; a closed cycle stays closed.
    pub fn can_close(&self) -> bool {
        self.status.can_transition_to(&CycleStatus::Closed)
    }

    /// Dropdown label, e.g. `Cycle 1 (active)`.
    pub fn label(&self) -> String {
        format!("Cycle {} ({})", self.cycle_no, self.status)
    }

    // ───────────────────────────────────────────────────────────────
    // Transitions
    // ───────────────────────────────────────────────────────────────

    /// Opens the next visit on a channel if the cycle is active.
    ///
    /// Returns the visit number that was opened. `None` covers every
    /// no-op case; the caller decides how to report it.
    pub(super) fn activate_next_visit(&mut self, channel_id: &ChannelId) -> Option<u32> {
        if !self.status.is_mutable() {
            return None;
        }
        self.virtual_channels
            .iter_mut()
            .find(|vc| vc.id() == channel_id)
            .and_then(VirtualChannel::activate_next)
    }

    /// Marks the cycle closed. Returns false if it already was.
    pub(super) fn close(&mut self) -> bool {
        match self.status.transition_to(CycleStatus::Closed) {
            Ok(next) => {
                self.status = next;
                true
            }
            Err(_) => false,
        }
    }

    /// Channel shapes for a follow-up cycle: same names and quotas, no progress.
    pub(super) fn reset_channels(&self) -> Vec<VirtualChannel> {
        self.virtual_channels
            .iter()
            .map(VirtualChannel::reset_copy)
            .collect()
    }
}
