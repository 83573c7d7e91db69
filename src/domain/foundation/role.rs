//! UserRole enum - the closed set of portal roles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Role a user acts under in the portal.
///
/// The role only drives menus and labels; no operation is gated on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Admin,
    Supervisor,
    Auditor,
    Client,
}

impl UserRole {
    /// All roles in role-switcher order.
    pub const ALL: [UserRole; 4] = [
        UserRole::Admin,
        UserRole::Supervisor,
        UserRole::Auditor,
        UserRole::Client,
    ];

    /// Lowercase key used in paths and serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Supervisor => "supervisor",
            UserRole::Auditor => "auditor",
            UserRole::Client => "client",
        }
    }

    /// Capitalised label ("Admin", "Auditor", ...).
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Supervisor => "Supervisor",
            UserRole::Auditor => "Auditor",
            UserRole::Client => "Client",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserRole::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "role",
                    format!("expected one of admin, supervisor, auditor, client; got '{}'", s),
                )
            })
    }
}
