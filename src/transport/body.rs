//! Fragmented raw message body buffer.

use bytes::{Bytes, BytesMut};

/// Raw transport body: an append-only sequence of byte chunks.
///
/// Chunks accumulate as the transport receives them; [`flatten`](Self::flatten)
/// coalesces them into one contiguous buffer for parsing, and
/// [`complete`](Self::complete) marks the body finished after a write.
#[derive(Debug, Default, Clone)]
pub struct MessageBody {
    chunks: Vec<Bytes>,
    complete: bool,
}

impl MessageBody {
    /// Create an empty body.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a body holding one initial chunk.
    #[must_use]
    pub fn from_bytes(contents: impl Into<Bytes>) -> Self {
        let mut body = Self::new();
        body.append(contents);
        body
    }

    /// Append a chunk of raw bytes.
    pub fn append(&mut self, chunk: impl Into<Bytes>) {
        let chunk = chunk.into();
        if !chunk.is_empty() {
            self.chunks.push(chunk);
        }
    }

    /// Drop all buffered chunks and clear the completion mark.
    pub fn truncate(&mut self) {
        self.chunks.clear();
        self.complete = false;
    }

    /// Mark the body as complete.
    pub fn complete(&mut self) {
        self.complete = true;
    }

    /// Whether the body has been marked complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Total buffered length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chunks.iter().map(Bytes::len).sum()
    }

    /// Whether no bytes are buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Coalesce all chunks into one contiguous buffer and return it.
    ///
    /// The flattened buffer replaces the fragmented chunks, so repeated
    /// calls are cheap.
    pub fn flatten(&mut self) -> Bytes {
        match self.chunks.len() {
            0 => Bytes::new(),
            1 => self.chunks[0].clone(),
            _ => {
                let mut joined = BytesMut::with_capacity(self.len());
                for chunk in &self.chunks {
                    joined.extend_from_slice(chunk);
                }
                let joined = joined.freeze();
                self.chunks = vec![joined.clone()];
                joined
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_joins_chunks() {
        let mut body = MessageBody::new();
        body.append("hello ");
        body.append("world");

        assert_eq!(body.len(), 11);
        assert_eq!(body.flatten().as_ref(), b"hello world");
        // Flattening replaced the fragments with one chunk.
        assert_eq!(body.flatten().as_ref(), b"hello world");
        assert_eq!(body.len(), 11);
    }

    #[test]
    fn test_empty_chunks_ignored() {
        let mut body = MessageBody::new();
        body.append("");
        assert!(body.is_empty());
        assert_eq!(body.flatten().as_ref(), b"");
    }

    #[test]
    fn test_truncate_resets() {
        let mut body = MessageBody::from_bytes("data");
        body.complete();
        assert!(body.is_complete());

        body.truncate();
        assert!(body.is_empty());
        assert!(!body.is_complete());
    }
}
