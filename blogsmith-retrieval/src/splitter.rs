use std::collections::VecDeque;

use blogsmith_core::Document;
use thiserror::Error;

const DEFAULT_CHUNK_SIZE: usize = 1_000;
const DEFAULT_CHUNK_OVERLAP: usize = 100;
const DEFAULT_SEPARATORS: [&str; 4] = ["\n\n", "\n", " ", ""];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SplitterConfigError {
    #[error("chunk_size must be greater than zero")]
    ChunkSizeMustBeGreaterThanZero,
}

/// Splits documents into bounded, possibly overlapping chunks.
pub trait DocumentSplitter: Send + Sync {
    fn split_documents(&self, documents: &[Document]) -> Vec<Document>;
}

/// Splits on the highest-priority separator present, merges the pieces
/// greedily up to `chunk_size` characters and carries up to `chunk_overlap`
/// trailing characters into the next chunk.
///
/// Separators stay attached to the piece that precedes them, so with zero
/// overlap the chunks concatenate back to the input. Sizes are counted in
/// `char`s, never bytes.
#[derive(Clone, Debug)]
pub struct RecursiveCharacterTextSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
    separators: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct RecursiveCharacterTextSplitterBuilder {
    chunk_size: usize,
    chunk_overlap: usize,
    separators: Vec<String>,
}

impl Default for RecursiveCharacterTextSplitterBuilder {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            separators: DEFAULT_SEPARATORS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl RecursiveCharacterTextSplitterBuilder {
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn chunk_overlap(mut self, chunk_overlap: usize) -> Self {
        self.chunk_overlap = chunk_overlap;
        self
    }

    pub fn separators<I, S>(mut self, separators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.separators = separators.into_iter().map(Into::into).collect();
        self
    }

    /// Overlap is clamped to `chunk_size - 1` so every chunk makes progress.
    pub fn build(self) -> Result<RecursiveCharacterTextSplitter, SplitterConfigError> {
        if self.chunk_size == 0 {
            return Err(SplitterConfigError::ChunkSizeMustBeGreaterThanZero);
        }
        Ok(RecursiveCharacterTextSplitter {
            chunk_size: self.chunk_size,
            chunk_overlap: self.chunk_overlap.min(self.chunk_size - 1),
            separators: self.separators,
        })
    }
}

impl RecursiveCharacterTextSplitter {
    pub fn builder() -> RecursiveCharacterTextSplitterBuilder {
        RecursiveCharacterTextSplitterBuilder::default()
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn chunk_overlap(&self) -> usize {
        self.chunk_overlap
    }

    pub fn split_text(&self, text: &str) -> Vec<String> {
        let mut chunks = Vec::new();
        self.split_into(text, &self.separators, &mut chunks);
        chunks
    }

    fn split_into(&self, text: &str, separators: &[String], out: &mut Vec<String>) {
        if text.is_empty() {
            return;
        }
        if char_len(text) <= self.chunk_size {
            out.push(text.to_string());
            return;
        }

        let position = separators
            .iter()
            .position(|sep| sep.is_empty() || text.contains(sep.as_str()));
        let (pieces, remaining): (Vec<&str>, &[String]) = match position {
            Some(index) if !separators[index].is_empty() => (
                text.split_inclusive(separators[index].as_str()).collect(),
                &separators[index + 1..],
            ),
            _ => (split_chars(text), &[]),
        };

        let mut window: VecDeque<&str> = VecDeque::new();
        let mut window_len = 0usize;

        for piece in pieces {
            let piece_len = char_len(piece);
            if piece_len > self.chunk_size {
                if !window.is_empty() {
                    out.push(window.iter().copied().collect());
                    window.clear();
                    window_len = 0;
                }
                self.split_into(piece, remaining, out);
                continue;
            }

            if !window.is_empty() && window_len + piece_len > self.chunk_size {
                out.push(window.iter().copied().collect());
                while window_len > self.chunk_overlap
                    || (window_len > 0 && window_len + piece_len > self.chunk_size)
                {
                    match window.pop_front() {
                        Some(front) => window_len -= char_len(front),
                        None => break,
                    }
                }
            }

            window.push_back(piece);
            window_len += piece_len;
        }

        if !window.is_empty() {
            out.push(window.iter().copied().collect());
        }
    }
}

impl DocumentSplitter for RecursiveCharacterTextSplitter {
    /// Each chunk inherits its source document's metadata plus a
    /// `chunk_index` counted per source document.
    fn split_documents(&self, documents: &[Document]) -> Vec<Document> {
        let mut chunks = Vec::new();
        for document in documents {
            for (index, content) in self.split_text(&document.content).into_iter().enumerate() {
                let mut metadata = document.metadata.clone();
                metadata.insert("chunk_index".to_string(), serde_json::json!(index));
                chunks.push(Document {
                    id: format!("{}-{}", document.id, index),
                    content,
                    metadata,
                });
            }
        }
        chunks
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn split_chars(text: &str) -> Vec<&str> {
    text.char_indices()
        .map(|(start, ch)| &text[start..start + ch.len_utf8()])
        .collect()
}
