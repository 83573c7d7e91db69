//! VirtualChannel entity - a named group of stores with a visit quota.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ChannelId, ChannelStatus, ValidationError};

/// A named grouping of stores inside one cycle.
///
/// Invariant: `activated_visit_count <= required_visits`, and `status` is
/// `Active` exactly when at least one visit has been activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ChannelRecord")]
pub struct VirtualChannel {
    id: ChannelId,
    name: String,
    required_visits: u32,
    activated_visit_count: u32,
    status: ChannelStatus,
}

/// Unvalidated wire shape used when loading fixtures.
#[derive(Debug, Deserialize)]
struct ChannelRecord {
    id: ChannelId,
    name: String,
    required_visits: u32,
    #[serde(default)]
    activated_visit_count: u32,
}

impl TryFrom<ChannelRecord> for VirtualChannel {
    type Error = ValidationError;

    fn try_from(record: ChannelRecord) -> Result<Self, Self::Error> {
        VirtualChannel::restore(
            record.id,
            record.name,
            record.required_visits,
            record.activated_visit_count,
        )
    }
}

impl VirtualChannel {
    /// Creates an inactive channel with no visits opened.
    pub fn new(
        id: ChannelId,
        name: impl Into<String>,
        required_visits: u32,
    ) -> Result<Self, ValidationError> {
        Self::restore(id, name, required_visits, 0)
    }

    /// Rebuilds a channel with existing progress.
    ///
    /// Fails if the name is blank or the count exceeds the quota.
    pub fn restore(
        id: ChannelId,
        name: impl Into<String>,
        required_visits: u32,
        activated_visit_count: u32,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("channel_name"));
        }
        if activated_visit_count > required_visits {
            return Err(ValidationError::out_of_range(
                "activated_visit_count",
                0,
                i64::from(required_visits),
                i64::from(activated_visit_count),
            ));
        }
        Ok(Self {
            id,
            name,
            required_visits,
            activated_visit_count,
            status: ChannelStatus::from_activated_count(activated_visit_count),
        })
    }

    pub fn id(&self) -> &ChannelId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn required_visits(&self) -> u32 {
        self.required_visits
    }

    pub fn activated_visit_count(&self) -> u32 {
        self.activated_visit_count
    }

    pub fn status(&self) -> ChannelStatus {
        self.status
    }

    /// Returns true when every required visit has been opened.
    pub fn is_fully_activated(&self) -> bool {
        self.activated_visit_count == self.required_visits
    }

    /// Number of the visit the next activation would open.
    pub fn next_visit_number(&self) -> Option<u32> {
        (!self.is_fully_activated()).then(|| self.activated_visit_count + 1)
    }

    /// Opens the next sequential visit.
    ///
    /// Returns the opened visit number, or `None` when the quota is reached.
    /// Callers are responsible for checking the parent cycle is active.
    pub(super) fn activate_next(&mut self) -> Option<u32> {
        let visit_number = self.next_visit_number()?;
        self.activated_visit_count = visit_number;
        self.status = ChannelStatus::Active;
        Some(visit_number)
    }

    /// Same name, id and quota with all progress cleared.
    pub(super) fn reset_copy(&self) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            required_visits: self.required_visits,
            activated_visit_count: 0,
            status: ChannelStatus::Inactive,
        }
    }
}
