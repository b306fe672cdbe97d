//! Job record type definitions.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

/// A single field value of a job record.
///
/// Records come from scrapers and workflow tools with no enforced schema, so
/// a field may hold text, a number, a flag or anything else. Consumers that
/// need text ask for it explicitly and treat every other shape as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
    Other(Value),
}

impl FieldValue {
    /// Get the value as text, if it is a string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Whether the value counts as "set" for identifier fallbacks.
    ///
    /// Empty strings, zero, `false` and null are unset.
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Text(s) => !s.is_empty(),
            FieldValue::Number(n) => n.as_f64().map_or(false, |v| v != 0.0 && !v.is_nan()),
            FieldValue::Flag(b) => *b,
            FieldValue::Other(v) => !v.is_null(),
        }
    }

    /// Render the value as text when it is set.
    ///
    /// Strings, numbers and `true` render; unset values and nested JSON
    /// do not.
    pub fn display_text(&self) -> Option<String> {
        if !self.is_truthy() {
            return None;
        }
        match self {
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::Number(n) => Some(n.to_string()),
            FieldValue::Flag(b) => Some(b.to_string()),
            FieldValue::Other(_) => None,
        }
    }

    /// Convert to a JSON value for metadata.
    pub fn to_value(&self) -> Value {
        match self {
            FieldValue::Text(s) => Value::String(s.clone()),
            FieldValue::Number(n) => Value::Number(n.clone()),
            FieldValue::Flag(b) => Value::Bool(*b),
            FieldValue::Other(v) => v.clone(),
        }
    }
}

impl From<&Value> for FieldValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(s) => FieldValue::Text(s.clone()),
            Value::Number(n) => FieldValue::Number(n.clone()),
            Value::Bool(b) => FieldValue::Flag(*b),
            other => FieldValue::Other(other.clone()),
        }
    }
}

/// A job posting as received from the input stream.
///
/// Recognized fields are typed slots; anything else lands in `extra` in the
/// order it appeared in the input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_clearance: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<FieldValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifications: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsibilities: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefits: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<FieldValue>,

    /// Every field not listed above, in input order.
    #[serde(flatten)]
    pub extra: Map<String, Value>,

    /// Names of all input fields, recognized or not, in input order.
    #[serde(skip)]
    field_order: Vec<String>,
}

impl JobRecord {
    /// Build a record from an arbitrary JSON value.
    ///
    /// Non-object values produce an empty record.
    pub fn from_value(value: &Value) -> Self {
        let Value::Object(map) = value else {
            return Self::default();
        };

        match serde_json::from_value::<Self>(value.clone()) {
            Ok(mut job) => {
                job.field_order = map.keys().cloned().collect();
                job
            }
            Err(e) => {
                warn!(error = %e, "Unreadable job record, treating as empty");
                Self::default()
            }
        }
    }

    /// Recognized fields in declaration order, paired with their names.
    pub fn known_fields(&self) -> [(&'static str, Option<&FieldValue>); 16] {
        [
            ("job_id", self.job_id.as_ref()),
            ("title", self.title.as_ref()),
            ("location", self.location.as_ref()),
            ("posted_date", self.posted_date.as_ref()),
            ("job_type", self.job_type.as_ref()),
            ("url", self.url.as_ref()),
            ("security_clearance", self.security_clearance.as_ref()),
            ("experience_years", self.experience_years.as_ref()),
            ("salary_range", self.salary_range.as_ref()),
            ("description", self.description.as_ref()),
            ("qualifications", self.qualifications.as_ref()),
            ("responsibilities", self.responsibilities.as_ref()),
            ("requirements", self.requirements.as_ref()),
            ("benefits", self.benefits.as_ref()),
            ("experience_level", self.experience_level.as_ref()),
            ("department", self.department.as_ref()),
        ]
    }

    /// Look up a field by name, recognized fields first, then `extra`.
    ///
    /// Null values are reported as absent.
    pub fn get(&self, name: &str) -> Option<FieldValue> {
        let known = self
            .known_fields()
            .into_iter()
            .find(|(field, _)| *field == name);

        match known {
            Some((_, value)) => value.cloned(),
            None => self
                .extra
                .get(name)
                .filter(|v| !v.is_null())
                .map(FieldValue::from),
        }
    }

    /// Look up a field and return it only if it holds a string.
    pub fn text(&self, name: &str) -> Option<String> {
        self.get(name)
            .and_then(|v| v.as_text().map(String::from))
    }

    /// The identifier reported alongside emitted chunks: `job_id`, else `id`.
    pub fn original_id(&self) -> Option<Value> {
        self.job_id
            .as_ref()
            .filter(|v| v.is_truthy())
            .map(FieldValue::to_value)
            .or_else(|| {
                self.extra
                    .get("id")
                    .map(FieldValue::from)
                    .filter(FieldValue::is_truthy)
                    .map(|v| v.to_value())
            })
    }

    /// Borrow a field's string value, recognized fields first, then `extra`.
    fn text_ref(&self, name: &str) -> Option<&str> {
        match self.known_fields().into_iter().find(|(field, _)| *field == name) {
            Some((_, value)) => value.and_then(FieldValue::as_text),
            None => self.extra.get(name).and_then(Value::as_str),
        }
    }

    /// All fields that hold text, in input order.
    ///
    /// Records built without [`JobRecord::from_value`] have no input order;
    /// their recognized fields come first, then `extra`.
    pub fn text_fields(&self) -> Vec<(&str, &str)> {
        if !self.field_order.is_empty() {
            return self
                .field_order
                .iter()
                .filter_map(|name| self.text_ref(name).map(|t| (name.as_str(), t)))
                .collect();
        }

        let known = self
            .known_fields()
            .into_iter()
            .filter_map(|(name, value)| value.and_then(FieldValue::as_text).map(|t| (name, t)));

        let extra = self
            .extra
            .iter()
            .filter_map(|(name, value)| value.as_str().map(|t| (name.as_str(), t)));

        known.chain(extra).collect()
    }
}
