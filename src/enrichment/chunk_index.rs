//! Chunk index annotation.

use serde_json::json;

use crate::types::Chunk;

/// Annotate every chunk with its 1-based position and the sequence length.
///
/// Needs the whole sequence up front, so it runs after a strategy has
/// produced all chunks for a job.
pub fn annotate_chunk_indices(chunks: &mut [Chunk]) {
    let total = chunks.len();
    for (i, chunk) in chunks.iter_mut().enumerate() {
        chunk.annotate([
            ("chunk_index", json!(i + 1)),
            ("total_chunks", json!(total)),
        ]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Metadata;

    #[test]
    fn test_indices_are_one_based_and_unique() {
        let mut chunks: Vec<Chunk> = (0..4)
            .map(|i| Chunk::new(format!("chunk {}", i), Metadata::new()))
            .collect();

        annotate_chunk_indices(&mut chunks);

        let indices: Vec<u64> = chunks
            .iter()
            .map(|c| c.metadata["chunk_index"].as_u64().unwrap())
            .collect();
        assert_eq!(indices, vec![1, 2, 3, 4]);
        assert!(chunks.iter().all(|c| c.metadata["total_chunks"] == json!(4)));
    }

    #[test]
    fn test_overrides_existing_keys() {
        let mut metadata = Metadata::new();
        metadata.insert("chunk_index".into(), json!("stale"));
        metadata.insert("section".into(), json!("title"));
        let mut chunks = vec![Chunk::new("a", metadata)];

        annotate_chunk_indices(&mut chunks);

        assert_eq!(chunks[0].metadata["chunk_index"], json!(1));
        assert_eq!(chunks[0].metadata["section"], json!("title"));
    }

    #[test]
    fn test_empty_sequence() {
        let mut chunks: Vec<Chunk> = Vec::new();
        annotate_chunk_indices(&mut chunks);
        assert!(chunks.is_empty());
    }
}
