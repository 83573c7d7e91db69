//! Form field definitions.
//!
//! Fields deserialize from the flat template layout
//! (`{ id, label, type, required, options, range, category }`) and are
//! checked on the way in, so a `FormField` always carries a usable kind.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{FieldId, ValidationError};

use super::FieldValue;

/// Category used for fields that do not name one.
pub const DEFAULT_CATEGORY: &str = "General";

/// Inclusive bounds for a numeric field, written `min-max` (e.g. `1-100`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange {
    min: f64,
    max: f64,
}

impl NumericRange {
    pub fn new(min: f64, max: f64) -> Result<Self, ValidationError> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ValidationError::invalid_format(
                "range",
                format!("{} is not a valid range", Self { min, max }),
            ));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl fmt::Display for NumericRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

impl FromStr for NumericRange {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || ValidationError::invalid_format("range", format!("'{}' is not min-max", s));

        // Skip a leading sign so "-5-5" splits after the first bound.
        let split_at = s
            .char_indices()
            .skip(1)
            .find(|(_, c)| *c == '-')
            .map(|(i, _)| i)
            .ok_or_else(invalid)?;
        let min = s[..split_at].trim().parse::<f64>().map_err(|_| invalid())?;
        let max = s[split_at + 1..].trim().parse::<f64>().map_err(|_| invalid())?;
        Self::new(min, max)
    }
}

/// What a field collects, with the rules that go with it.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Numeric { range: Option<NumericRange> },
    Boolean,
    Photo,
    Text { max_len: Option<usize> },
    Date,
    Select { options: Vec<String> },
}

impl FieldKind {
    /// Template keyword for the kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            FieldKind::Numeric { .. } => "number",
            FieldKind::Boolean => "boolean",
            FieldKind::Photo => "photo",
            FieldKind::Text { .. } => "text",
            FieldKind::Date => "date",
            FieldKind::Select { .. } => "select",
        }
    }

    /// Whether `value` is the variant this kind collects.
    pub fn accepts(&self, value: &FieldValue) -> bool {
        matches!(
            (self, value),
            (FieldKind::Numeric { .. }, FieldValue::Number(_))
                | (FieldKind::Boolean, FieldValue::Bool(_))
                | (FieldKind::Photo, FieldValue::PhotoRef(_))
                | (FieldKind::Text { .. }, FieldValue::Text(_))
                | (FieldKind::Date, FieldValue::Date(_))
                | (FieldKind::Select { .. }, FieldValue::Choice(_))
        )
    }

    /// Per-kind rule check for a value of the right variant.
    ///
    /// Returns the inline message to show when the value is rejected.
    pub fn check(&self, value: &FieldValue) -> Result<(), String> {
        if !self.accepts(value) {
            return Err(format!("Expected a {} value", self.keyword()));
        }
        match (self, value) {
            (FieldKind::Numeric { .. }, FieldValue::Number(n)) if !n.is_finite() => {
                Err("Must be a number".to_string())
            }
            (FieldKind::Numeric { range: Some(range) }, FieldValue::Number(n))
                if !range.contains(*n) =>
            {
                Err(format!("Must be between {} and {}", range.min(), range.max()))
            }
            (FieldKind::Text { max_len: Some(max) }, FieldValue::Text(text))
                if text.chars().count() > *max =>
            {
                Err(format!("Must be at most {} characters", max))
            }
            (FieldKind::Select { options }, FieldValue::Choice(choice))
                if !options.iter().any(|o| o == choice) =>
            {
                Err(format!("Must be one of: {}", options.join(", ")))
            }
            _ => Ok(()),
        }
    }
}

/// One question on an audit form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FieldRecord", into = "FieldRecord")]
pub struct FormField {
    pub id: FieldId,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub category: Option<String>,
}

impl FormField {
    pub fn new(id: FieldId, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id,
            label: label.into(),
            kind,
            required: false,
            category: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Category heading, falling back to "General".
    pub fn category_name(&self) -> &str {
        self.category
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(DEFAULT_CATEGORY)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum FieldType {
    Text,
    Number,
    Select,
    Photo,
    Boolean,
    Date,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FieldRecord {
    id: FieldId,
    label: String,
    #[serde(rename = "type")]
    field_type: FieldType,
    #[serde(default)]
    required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_len: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
}

impl TryFrom<FieldRecord> for FormField {
    type Error = ValidationError;

    fn try_from(r: FieldRecord) -> Result<Self, Self::Error> {
        if r.label.trim().is_empty() {
            return Err(ValidationError::empty_field("label"));
        }
        let kind = match r.field_type {
            FieldType::Number => FieldKind::Numeric {
                range: r.range.as_deref().map(str::parse::<NumericRange>).transpose()?,
            },
            FieldType::Boolean => FieldKind::Boolean,
            FieldType::Photo => FieldKind::Photo,
            FieldType::Text => FieldKind::Text { max_len: r.max_len },
            FieldType::Date => FieldKind::Date,
            FieldType::Select => {
                if r.options.is_empty() {
                    return Err(ValidationError::empty_field("options"));
                }
                FieldKind::Select { options: r.options }
            }
        };
        Ok(Self {
            id: r.id,
            label: r.label,
            kind,
            required: r.required,
            category: r.category,
        })
    }
}

impl From<FormField> for FieldRecord {
    fn from(f: FormField) -> Self {
        let mut record = FieldRecord {
            id: f.id,
            label: f.label,
            field_type: FieldType::Text,
            required: f.required,
            options: Vec::new(),
            range: None,
            max_len: None,
            category: f.category,
        };
        record.field_type = match f.kind {
            FieldKind::Numeric { range } => {
                record.range = range.map(|r| r.to_string());
                FieldType::Number
            }
            FieldKind::Boolean => FieldType::Boolean,
            FieldKind::Photo => FieldType::Photo,
            FieldKind::Text { max_len } => {
                record.max_len = max_len;
                FieldType::Text
            }
            FieldKind::Date => FieldType::Date,
            FieldKind::Select { options } => {
                record.options = options;
                FieldType::Select
            }
        };
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_parses_min_max_notation() {
        let range: NumericRange = "1-100".parse().unwrap();
        assert_eq!(range.min(), 1.0);
        assert_eq!(range.max(), 100.0);
        assert!(range.contains(1.0));
        assert!(range.contains(100.0));
        assert!(!range.contains(100.5));
    }

    #[test]
    fn range_accepts_negative_lower_bound() {
        let range: NumericRange = "-5-5".parse().unwrap();
        assert_eq!(range.min(), -5.0);
        assert!(range.contains(0.0));
    }

    #[test]
    fn range_rejects_garbage_and_inverted_bounds() {
        assert!("100".parse::<NumericRange>().is_err());
        assert!("a-b".parse::<NumericRange>().is_err());
        assert!("10-1".parse::<NumericRange>().is_err());
    }

    #[test]
    fn numeric_check_enforces_range() {
        let kind = FieldKind::Numeric {
            range: Some(NumericRange::new(0.0, 100.0).unwrap()),
        };
        assert!(kind.check(&FieldValue::Number(55.0)).is_ok());
        assert_eq!(
            kind.check(&FieldValue::Number(120.0)),
            Err("Must be between 0 and 100".to_string())
        );
        assert!(kind.check(&FieldValue::Number(f64::NAN)).is_err());
    }

    #[test]
    fn check_rejects_mismatched_variant() {
        let err = FieldKind::Boolean
            .check(&FieldValue::Text("yes".into()))
            .unwrap_err();
        assert_eq!(err, "Expected a boolean value");
    }

    #[test]
    fn select_check_requires_listed_option() {
        let kind = FieldKind::Select {
            options: vec!["Low".into(), "High".into()],
        };
        assert!(kind.check(&FieldValue::Choice("High".into())).is_ok());
        assert_eq!(
            kind.check(&FieldValue::Choice("Medium".into())),
            Err("Must be one of: Low, High".to_string())
        );
    }

    #[test]
    fn text_check_counts_characters() {
        let kind = FieldKind::Text { max_len: Some(3) };
        assert!(kind.check(&FieldValue::Text("äöü".into())).is_ok());
        assert!(kind.check(&FieldValue::Text("abcd".into())).is_err());
    }

    #[test]
    fn missing_category_is_general() {
        let field = FormField::new(FieldId::from_static("f9"), "Notes", FieldKind::Date);
        assert_eq!(field.category_name(), "General");
        assert_eq!(field.in_category("Evidence").category_name(), "Evidence");
    }

    #[test]
    fn deserializes_template_layout() {
        let yaml = r#"
- { id: f1, label: "Availability (%)", type: number, required: true, range: "0-100", category: Availability }
- { id: f2, label: Facing, type: select, options: [Front, Back] }
"#;
        let fields: Vec<FormField> = serde_yaml::from_str(yaml).unwrap();
        assert!(fields[0].required);
        assert!(matches!(fields[0].kind, FieldKind::Numeric { range: Some(_) }));
        assert!(!fields[1].required);
        assert_eq!(fields[1].category_name(), "General");
    }

    #[test]
    fn select_without_options_is_rejected() {
        let yaml = "{ id: f2, label: Facing, type: select }";
        assert!(serde_yaml::from_str::<FormField>(yaml).is_err());
    }
}
