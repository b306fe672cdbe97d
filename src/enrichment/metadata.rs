//! Metadata extraction from job records.

use crate::types::{FieldValue, JobRecord, Metadata};

/// Copy the requested fields of a job into a flat metadata mapping.
///
/// Fields that are missing, null or an empty string are skipped.
pub fn extract_metadata<S: AsRef<str>>(job: &JobRecord, fields: &[S]) -> Metadata {
    fields
        .iter()
        .map(|field| field.as_ref())
        .filter_map(|field| {
            job.get(field)
                .filter(|value| !matches!(value, FieldValue::Text(s) if s.is_empty()))
                .map(|value| (field.to_string(), value.to_value()))
        })
        .collect::<Metadata>()
}
