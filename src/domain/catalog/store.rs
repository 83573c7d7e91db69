//! Retail outlets.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StoreId;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A store auditors visit.
///
/// `virtual_channel` names the channel ("A", "B") whose quota the store
/// falls under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub id: StoreId,
    pub name: String,
    pub address: String,
    pub channel: String,
    pub virtual_channel: String,
    pub required_visits: u32,
    pub city: String,
    pub state: String,
    pub country: String,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

impl Store {
    /// Case-insensitive match on name, city or channel.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        [&self.name, &self.city, &self.channel]
            .iter()
            .any(|s| s.to_lowercase().contains(&term))
    }

    /// One-line address, e.g. `123 Main St, Bentonville, AR`.
    pub fn location(&self) -> String {
        format!("{}, {}, {}", self.address, self.city, self.state)
    }
}
