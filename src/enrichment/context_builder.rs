//! Context builder for job-posting text.
//!
//! Produces the short descriptive sentence prepended to chunks and the
//! concatenated full-text view of a job used by the fixed-size strategies.

use crate::types::JobRecord;
use crate::DEFAULT_ORGANIZATION;

/// Content fields in the order they appear in the full-text view.
pub const CONTENT_FIELDS: [&str; 8] = [
    "title",
    "description",
    "qualifications",
    "responsibilities",
    "requirements",
    "experience_level",
    "benefits",
    "department",
];

/// Identifier and bookkeeping fields never used as fallback text.
pub const FALLBACK_DENYLIST: [&str; 4] = ["job_id", "url", "posted_date", "external_path"];

/// Fallback text values must be longer than this after trimming.
const MIN_FALLBACK_CHARS: usize = 10;

/// Get a field as trimmed text, if it is a string with visible content.
pub fn section_text(job: &JobRecord, field: &str) -> Option<String> {
    job.text(field)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Replace the first underscore of a field name with a space.
fn humanize(field: &str) -> String {
    field.replacen('_', " ", 1)
}

/// Builder for context prefixes and full-text content.
#[derive(Debug, Clone)]
pub struct ContextBuilder {
    /// Organization named in the context sentence.
    organization: String,
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self {
            organization: DEFAULT_ORGANIZATION.to_string(),
        }
    }
}

impl ContextBuilder {
    /// Create a new context builder with the default organization.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the organization name.
    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = organization.into();
        self
    }

    /// Build the sentence prepended to chunks.
    ///
    /// `"Job posting for {title} in {location} at {organization}. "`, with the
    /// location clause dropped when the job has none.
    pub fn context_prefix(&self, job: &JobRecord) -> String {
        let title = job
            .get("title")
            .and_then(|t| t.display_text())
            .unwrap_or_else(|| "Job Position".to_string());

        let location = job
            .get("location")
            .and_then(|l| l.display_text())
            .map(|l| format!(" in {}", l))
            .unwrap_or_default();

        format!("Job posting for {}{} at {}. ", title, location, self.organization)
    }

    /// Concatenate the job's content fields into one labelled document.
    ///
    /// Each present field becomes `"LABEL: value"`; pieces are separated by a
    /// blank line. When no content field is present the generic fallback is
    /// used instead.
    pub fn full_content(&self, job: &JobRecord, include_context: bool) -> String {
        let mut parts = Vec::new();

        if include_context {
            parts.push(self.context_prefix(job));
        }

        for field in CONTENT_FIELDS {
            if let Some(text) = section_text(job, field) {
                parts.push(format!("{}: {}", humanize(field).to_uppercase(), text));
            }
        }

        let header_parts = usize::from(include_context);
        if parts.len() <= header_parts {
            let fallback = self.fallback_content(job);
            if !fallback.is_empty() {
                parts.push(fallback);
            }
        }

        parts.join("\n\n")
    }

    /// Collect any substantial text from the job, one labelled line per field.
    pub fn fallback_content(&self, job: &JobRecord) -> String {
        job.text_fields()
            .into_iter()
            .filter(|(name, _)| !FALLBACK_DENYLIST.contains(name))
            .filter_map(|(name, value)| {
                let value = value.trim();
                (value.chars().count() > MIN_FALLBACK_CHARS)
                    .then(|| format!("{}: {}", humanize(name), value))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
