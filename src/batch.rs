//! Batch processing of host input items.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::enrichment::{annotate_chunk_indices, extract_metadata};
use crate::error::Result;
use crate::router::SplitterRouter;
use crate::types::{Chunk, JobRecord, Metadata, SplitRecord, SplitterConfig};

/// Counters for one processed batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchStats {
    pub total_items: usize,
    pub total_jobs: usize,
    pub total_chunks: usize,
}

/// Result of batch processing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchOutput {
    pub records: Vec<SplitRecord>,
    pub stats: BatchStats,
}

/// Jobs carried by one input item.
///
/// An item is a list of jobs, an object with a `jobs` list, or a bare job.
pub fn jobs_in_item(item: &Value) -> Vec<JobRecord> {
    let jobs = match item {
        Value::Array(jobs) => jobs.as_slice(),
        Value::Object(map) => match map.get("jobs") {
            Some(Value::Array(jobs)) => jobs.as_slice(),
            _ => std::slice::from_ref(item),
        },
        _ => std::slice::from_ref(item),
    };
    jobs.iter().map(JobRecord::from_value).collect()
}

/// Processor that turns host items into split records.
pub struct BatchProcessor {
    router: Arc<SplitterRouter>,
    config: SplitterConfig,
}

impl BatchProcessor {
    /// Create a new batch processor.
    pub fn new(router: Arc<SplitterRouter>, config: SplitterConfig) -> Self {
        Self { router, config }
    }

    /// Split one job with the configured strategy and annotate the result.
    pub fn split_job(&self, job: &JobRecord) -> Result<Vec<Chunk>> {
        let splitter = self.router.get_splitter_by_name(&self.config.strategy)?;

        let metadata = if self.config.include_metadata {
            extract_metadata(job, self.config.metadata_fields.as_slice())
        } else {
            Metadata::new()
        };

        let mut chunks = splitter.split(job, &metadata, &self.config);

        if self.config.add_chunk_index {
            annotate_chunk_indices(&mut chunks);
        }

        debug!(
            strategy = splitter.name(),
            job_id = ?job.original_id(),
            chunks = chunks.len(),
            "Split job"
        );

        Ok(chunks)
    }

    /// Process every item, stopping at the first failure.
    ///
    /// Errors carry the index of the item that produced them.
    pub fn process_items(&self, items: &[Value]) -> Result<BatchOutput> {
        let mut records = Vec::new();
        let mut total_jobs = 0;

        info!(total_items = items.len(), strategy = %self.config.strategy, "Starting batch processing");

        for (index, item) in items.iter().enumerate() {
            let jobs = jobs_in_item(item);
            total_jobs += jobs.len();

            let item_records = self.process_jobs(&jobs).map_err(|e| e.at_item(index))?;
            records.extend(item_records);
        }

        let stats = BatchStats {
            total_items: items.len(),
            total_jobs,
            total_chunks: records.len(),
        };

        info!(
            jobs = stats.total_jobs,
            chunks = stats.total_chunks,
            "Batch processing complete"
        );

        Ok(BatchOutput { records, stats })
    }

    /// Process the jobs of a single item into output records.
    fn process_jobs(&self, jobs: &[JobRecord]) -> Result<Vec<SplitRecord>> {
        let mut records = Vec::new();

        for job in jobs {
            let original_job_id = job.original_id();
            records.extend(
                self.split_job(job)?
                    .into_iter()
                    .map(|chunk| SplitRecord::from_chunk(chunk, original_job_id.clone())),
            );
        }

        Ok(records)
    }
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new(Arc::new(SplitterRouter::default()), SplitterConfig::default())
    }
}

impl From<SplitterConfig> for BatchProcessor {
    fn from(config: SplitterConfig) -> Self {
        Self::new(Arc::new(SplitterRouter::default()), config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SplitterError;
    use crate::types::Strategy;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample_jobs() -> Value {
        json!({
            "jobs": [
                {
                    "job_id": "R0123456",
                    "title": "Senior Software Engineer",
                    "location": "McLean, VA",
                    "job_type": "Full-time",
                    "description": "Design and build mission software. ".repeat(40),
                    "qualifications": "Five years of experience.",
                },
                {
                    "id": 789012,
                    "title": "Data Scientist",
                    "location": "Remote",
                    "description": "Build models.",
                }
            ]
        })
    }

    #[test]
    fn test_jobs_in_item_shapes() {
        assert_eq!(jobs_in_item(&json!([{"title": "A"}, {"title": "B"}])).len(), 2);
        assert_eq!(jobs_in_item(&sample_jobs()).len(), 2);
        assert_eq!(jobs_in_item(&json!({"title": "A"})).len(), 1);
        assert_eq!(jobs_in_item(&json!({"jobs": "not a list"})).len(), 1);
        assert_eq!(jobs_in_item(&json!(7)), vec![JobRecord::default()]);
    }

    #[test]
    fn test_section_example() {
        let config = SplitterConfig::default()
            .with_strategy(Strategy::BySection)
            .with_metadata(false)
            .with_context(false);
        let processor = BatchProcessor::from(config);

        let output = processor
            .process_items(&[json!({"title": "A", "description": "B"})])
            .unwrap();

        let contents: Vec<_> = output.records.iter().map(|r| r.content.as_str()).collect();
        assert_eq!(contents, vec!["Job Title: A", "Job Description: B"]);
        assert_eq!(output.records[0].metadata["section"], json!("title"));
        assert_eq!(output.records[0].metadata["chunk_index"], json!(1));
        assert_eq!(output.records[1].metadata["chunk_index"], json!(2));
        assert_eq!(output.records[1].metadata["total_chunks"], json!(2));
        assert_eq!(output.records[0].source, "job_text_splitter");
        assert_eq!(output.records[0].original_job_id, None);
    }

    #[test]
    fn test_indices_are_per_job() {
        let config = SplitterConfig::default().with_size(300, 50);
        let processor = BatchProcessor::from(config);
        let output = processor.process_items(&[sample_jobs()]).unwrap();

        assert_eq!(output.stats.total_items, 1);
        assert_eq!(output.stats.total_jobs, 2);
        assert_eq!(output.stats.total_chunks, output.records.len());

        for job_id in [json!("R0123456"), json!(789012)] {
            let job_records: Vec<_> = output
                .records
                .iter()
                .filter(|r| r.original_job_id.as_ref() == Some(&job_id))
                .collect();
            let n = job_records.len();
            assert!(n > 0);

            let indices: Vec<u64> = job_records
                .iter()
                .map(|r| r.metadata["chunk_index"].as_u64().unwrap())
                .collect();
            assert_eq!(indices, (1..=n as u64).collect::<Vec<_>>());
            assert!(job_records
                .iter()
                .all(|r| r.metadata["total_chunks"] == json!(n)));
        }
    }

    #[test]
    fn test_metadata_fields_applied() {
        let processor = BatchProcessor::default();
        let output = processor.process_items(&[sample_jobs()]).unwrap();

        let first = &output.records[0].metadata;
        assert_eq!(first["job_id"], json!("R0123456"));
        assert_eq!(first["title"], json!("Senior Software Engineer"));
        assert_eq!(first["location"], json!("McLean, VA"));
        assert_eq!(first["job_type"], json!("Full-time"));

        let last = &output.records.last().unwrap().metadata;
        assert!(last.get("job_id").is_none());
        assert!(last.get("job_type").is_none());
    }

    #[test]
    fn test_chunk_index_disabled() {
        let config = SplitterConfig::default().with_chunk_index(false);
        let output = BatchProcessor::from(config)
            .process_items(&[json!({"title": "A"})])
            .unwrap();
        assert!(output.records[0].metadata.get("chunk_index").is_none());
    }

    #[test]
    fn test_unknown_strategy_reports_item() {
        let config = SplitterConfig {
            strategy: "bySentence".to_string(),
            ..SplitterConfig::default()
        };
        let err = BatchProcessor::from(config)
            .process_items(&[json!({"title": "A"})])
            .unwrap_err();

        assert_eq!(err.item_index(), Some(0));
        assert!(matches!(
            &err,
            SplitterError::Item { source, .. }
                if matches!(source.as_ref(), SplitterError::UnsupportedStrategy(name) if name == "bySentence")
        ));
        assert_eq!(
            err.to_string(),
            "Error processing item 0: Unknown splitting strategy: bySentence"
        );
    }

    #[test]
    fn test_empty_batch() {
        let output = BatchProcessor::default().process_items(&[]).unwrap();
        assert!(output.records.is_empty());
        assert_eq!(output.stats, BatchStats::default());
    }
}
