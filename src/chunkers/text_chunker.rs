//! Fixed-size chunker that prefers sentence and paragraph boundaries.

use serde_json::json;

use crate::types::{merge_metadata, Chunk, Metadata};

/// Find the last occurrence of `pattern` starting at or before `from` and at
/// or after `floor`.
fn last_index_of(chars: &[char], pattern: &[char], from: usize, floor: usize) -> Option<usize> {
    if pattern.is_empty() || pattern.len() > chars.len() {
        return None;
    }
    let last_start = from.min(chars.len() - pattern.len());
    if last_start < floor {
        return None;
    }
    (floor..=last_start)
        .rev()
        .find(|&i| chars[i..i + pattern.len()] == *pattern)
}

/// Split `text` into overlapping windows of at most `max_size` characters.
///
/// Text that already fits is returned as a single chunk carrying `metadata`
/// unchanged. Longer text is cut into windows; each window end snaps back to
/// the last period or paragraph break when that boundary lies in the second
/// half of the window. Every emitted window is trimmed and tagged with
/// `chunk_size` and `sub_chunk_index`. Consecutive windows share `overlap`
/// characters, and each step advances at least one character, so any
/// `overlap` terminates.
pub fn chunk_text(text: &str, max_size: usize, overlap: usize, metadata: &Metadata) -> Vec<Chunk> {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();

    if len <= max_size {
        return vec![Chunk::new(text, metadata.clone())];
    }

    let mut chunks = Vec::new();
    let mut start = 0;
    let mut sub_chunk_index = 0usize;

    while start < len {
        let mut end = start + max_size;

        if end < len {
            let sentence_end = last_index_of(&chars, &['.'], end, start);
            let paragraph_end = last_index_of(&chars, &['\n', '\n'], end, start);

            // boundary must sit past the window midpoint
            if let Some(break_point) = sentence_end.max(paragraph_end) {
                if 2 * break_point > 2 * start + max_size {
                    end = break_point + 1;
                }
            }
        }

        let window: String = chars[start..end.min(len)].iter().collect();
        let trimmed = window.trim();
        if !trimmed.is_empty() {
            let chunk_size = trimmed.chars().count();
            chunks.push(Chunk::new(
                trimmed,
                merge_metadata(
                    metadata,
                    [
                        ("chunk_size", json!(chunk_size)),
                        ("sub_chunk_index", json!(sub_chunk_index)),
                    ],
                ),
            ));
        }

        start = (start + 1).max(end.saturating_sub(overlap));
        sub_chunk_index += 1;
    }

    chunks
}
