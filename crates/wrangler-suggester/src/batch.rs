use std::num::NonZeroUsize;

/// The ordered, duplicate-free result of one `suggest` call.
///
/// Once `len() == capacity()` the batch is complete and rejects further
/// pushes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionBatch {
    suggestions: Vec<String>,
    capacity: NonZeroUsize,
}

impl SuggestionBatch {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            suggestions: Vec::with_capacity(capacity.get()),
            capacity,
        }
    }

    /// Case-sensitive membership test.
    pub fn contains(&self, username: &str) -> bool {
        self.suggestions.iter().any(|suggestion| suggestion == username)
    }

    /// Appends `username` unless the batch is full or already holds it.
    /// Returns whether it was appended.
    pub fn push(&mut self, username: String) -> bool {
        if self.is_full() || self.contains(&username) {
            return false;
        }
        self.suggestions.push(username);
        true
    }

    pub fn len(&self) -> usize {
        self.suggestions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.suggestions.len() >= self.capacity.get()
    }

    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    pub fn as_slice(&self) -> &[String] {
        &self.suggestions
    }

    pub fn into_vec(self) -> Vec<String> {
        self.suggestions
    }
}
