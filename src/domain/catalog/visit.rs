//! Scheduled store visits.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{
    CycleId, StoreId, TemplateId, UserId, ValidationError, VisitId,
};

/// Lifecycle of a single visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisitStatus {
    Planned,
    InProgress,
    Completed,
    Validated,
    Rejected,
}

impl VisitStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisitStatus::Planned => "planned",
            VisitStatus::InProgress => "in-progress",
            VisitStatus::Completed => "completed",
            VisitStatus::Validated => "validated",
            VisitStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for VisitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tabs on the auditor's visit list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisitFilter {
    #[default]
    All,
    Planned,
    Completed,
}

impl VisitFilter {
    pub const ALL: [VisitFilter; 3] = [VisitFilter::All, VisitFilter::Planned, VisitFilter::Completed];

    pub fn matches(&self, status: VisitStatus) -> bool {
        match self {
            VisitFilter::All => true,
            VisitFilter::Planned => status == VisitStatus::Planned,
            VisitFilter::Completed => status == VisitStatus::Completed,
        }
    }

    /// Tab caption ("All", "Planned", "Completed").
    pub fn label(&self) -> &'static str {
        match self {
            VisitFilter::All => "All",
            VisitFilter::Planned => "Planned",
            VisitFilter::Completed => "Completed",
        }
    }
}

impl FromStr for VisitFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(VisitFilter::All),
            "planned" => Ok(VisitFilter::Planned),
            "completed" => Ok(VisitFilter::Completed),
            other => Err(ValidationError::invalid_format(
                "filter",
                format!("unknown visit filter '{}'", other),
            )),
        }
    }
}

/// One planned trip by an auditor to a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    pub id: VisitId,
    pub store_id: StoreId,
    pub auditor_id: UserId,
    pub date: NaiveDate,
    pub status: VisitStatus,
    pub template_id: TemplateId,
    pub cycle_id: CycleId,
    pub visit_number: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_kebab_case() {
        let status: VisitStatus = serde_yaml::from_str("in-progress").unwrap();
        assert_eq!(status, VisitStatus::InProgress);
        assert_eq!(status.to_string(), "in-progress");
    }

    #[test]
    fn filters_match_their_status_only() {
        assert!(VisitFilter::All.matches(VisitStatus::Rejected));
        assert!(VisitFilter::Planned.matches(VisitStatus::Planned));
        assert!(!VisitFilter::Planned.matches(VisitStatus::InProgress));
        assert!(VisitFilter::Completed.matches(VisitStatus::Completed));
        assert!(!VisitFilter::Completed.matches(VisitStatus::Validated));
    }

    #[test]
    fn filter_parses_tab_keys() {
        assert_eq!("Planned".parse::<VisitFilter>().unwrap(), VisitFilter::Planned);
        assert!("archived".parse::<VisitFilter>().is_err());
    }
}
