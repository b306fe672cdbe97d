//! Section splitter producing one chunk per job section.

use serde_json::json;
use tracing::debug;

use super::base::{context_builder, context_prefix, JobSplitter};
use crate::enrichment::section_text;
use crate::types::{merge_metadata, Chunk, JobRecord, Metadata, SplitterConfig};

/// A semantic section of a job posting.
#[derive(Debug, Clone, Copy)]
pub struct JobSection {
    /// Record field holding the section text
    pub key: &'static str,
    /// Human-readable label written in front of the text
    pub label: &'static str,
    /// Relative importance, carried as metadata only
    pub priority: u8,
}

/// Sections in emission order.
pub const JOB_SECTIONS: [JobSection; 8] = [
    JobSection { key: "title", label: "Job Title", priority: 1 },
    JobSection { key: "description", label: "Job Description", priority: 2 },
    JobSection { key: "qualifications", label: "Qualifications", priority: 3 },
    JobSection { key: "responsibilities", label: "Responsibilities", priority: 3 },
    JobSection { key: "requirements", label: "Requirements", priority: 3 },
    JobSection { key: "benefits", label: "Benefits", priority: 4 },
    JobSection { key: "experience_level", label: "Experience Level", priority: 2 },
    JobSection { key: "department", label: "Department", priority: 4 },
];

/// Splits a job into one chunk per non-empty section.
///
/// Chunks follow the order of [`JOB_SECTIONS`]; priority is not a sort key.
/// A job without any section text yields a single combined chunk built from
/// whatever text it does carry.
#[derive(Debug, Default)]
pub struct SectionSplitter;

impl SectionSplitter {
    /// Create a new section splitter.
    pub fn new() -> Self {
        Self
    }
}

impl JobSplitter for SectionSplitter {
    fn name(&self) -> &'static str {
        "bySection"
    }

    fn description(&self) -> &'static str {
        "Split each job into semantic sections (title, description, qualifications, etc.)"
    }

    fn split(&self, job: &JobRecord, metadata: &Metadata, config: &SplitterConfig) -> Vec<Chunk> {
        let prefix = context_prefix(job, config);

        let mut chunks: Vec<Chunk> = JOB_SECTIONS
            .iter()
            .filter_map(|section| {
                section_text(job, section.key).map(|text| {
                    Chunk::new(
                        format!("{}{}: {}", prefix, section.label, text),
                        merge_metadata(
                            metadata,
                            [
                                ("section", json!(section.key)),
                                ("section_label", json!(section.label)),
                                ("section_priority", json!(section.priority)),
                            ],
                        ),
                    )
                })
            })
            .collect();

        if chunks.is_empty() {
            let fallback = context_builder(config).fallback_content(job);
            if !fallback.is_empty() {
                debug!("No job sections found, using combined content");
                chunks.push(Chunk::new(
                    format!("{}{}", prefix, fallback),
                    merge_metadata(
                        metadata,
                        [
                            ("section", json!("combined")),
                            ("section_label", json!("Combined Content")),
                        ],
                    ),
                ));
            }
        }

        chunks
    }
}
