//! Strongly-typed identifier value objects.
//!
//! Identifiers are string-backed: fixtures use short keys such as `c1` or
//! `vc2`, while freshly generated identifiers carry a prefix followed by a
//! simple-format v4 UUID (`c3f2a...`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, field = $field:literal, prefix = $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier, returning error if empty or blank.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.trim().is_empty() {
                    return Err(ValidationError::empty_field($field));
                }
                Ok(Self(id))
            }

            /// Wraps a built-in key such as a seed fixture id.
            ///
            /// The key must be non-blank; use [`Self::new`] for input.
            pub fn from_static(id: &'static str) -> Self {
                debug_assert!(!id.trim().is_empty(), "blank {}", $field);
                Self(id.to_string())
            }

            /// Generates a fresh unique identifier.
            pub fn generate() -> Self {
                Self(format!("{}{}", $prefix, Uuid::new_v4().simple()))
            }

            /// Returns the inner string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

string_id!(
    /// Unique identifier for an audit cycle.
    CycleId,
    field = "cycle_id",
    prefix = "c"
);

string_id!(
    /// Unique identifier for a virtual channel within a cycle.
    ChannelId,
    field = "channel_id",
    prefix = "vc"
);

string_id!(
    /// Unique identifier for a client account.
    ClientId,
    field = "client_id",
    prefix = "cl"
);

string_id!(
    /// Unique identifier for a physical store.
    StoreId,
    field = "store_id",
    prefix = "s"
);

string_id!(
    /// Unique identifier for an audit template.
    TemplateId,
    field = "template_id",
    prefix = "t"
);

string_id!(
    /// Unique identifier for a planned store visit.
    VisitId,
    field = "visit_id",
    prefix = "v"
);

string_id!(
    /// Identifier of a field within an audit form.
    FieldId,
    field = "field_id",
    prefix = "f"
);

string_id!(
    /// Identifier of a submitted audit record.
    AuditRecordId,
    field = "audit_record_id",
    prefix = "ar"
);

string_id!(
    /// Identifier of a report configured for a client.
    ReportId,
    field = "report_id",
    prefix = "r"
);

string_id!(
    /// User identifier.
    UserId,
    field = "user_id",
    prefix = "u"
);
