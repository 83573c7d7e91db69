//! Typed answers to form fields.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An answer, one variant per field kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    Number(f64),
    Bool(bool),
    PhotoRef(String),
    Text(String),
    Date(NaiveDate),
    Choice(String),
}

impl FieldValue {
    /// True when the value does not count as an answer.
    ///
    /// `false` and `0` are answers; empty strings are not.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::PhotoRef(s) | FieldValue::Text(s) | FieldValue::Choice(s) => {
                s.trim().is_empty()
            }
            FieldValue::Number(_) | FieldValue::Bool(_) | FieldValue::Date(_) => false,
        }
    }

    pub fn as_photo_ref(&self) -> Option<&str> {
        match self {
            FieldValue::PhotoRef(reference) => Some(reference),
            _ => None,
        }
    }
}
