//! Single-entry completion cache.
//!
//! Hosts ask for completions and then, for the same position, for details of
//! individual entries. Caching the last computed list lets the details query
//! reuse it instead of recomputing.

use std::sync::Arc;

use tower_lsp::lsp_types::{CompletionItem, Position};

#[derive(Debug, Clone)]
struct CacheEntry {
    file_name: String,
    position: Position,
    text: String,
    items: Arc<Vec<CompletionItem>>,
}

impl CacheEntry {
    fn matches(&self, file_name: &str, position: Position, text: &str) -> bool {
        self.position == position && self.file_name == file_name && self.text == text
    }
}

/// Holds the completion items of the most recent query.
#[derive(Debug, Default)]
pub struct CompletionsCache {
    entry: Option<CacheEntry>,
}

impl CompletionsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items cached for exactly this file, position and text.
    pub fn get(
        &self,
        file_name: &str,
        position: Position,
        text: &str,
    ) -> Option<Arc<Vec<CompletionItem>>> {
        self.entry
            .as_ref()
            .filter(|entry| entry.matches(file_name, position, text))
            .map(|entry| Arc::clone(&entry.items))
    }

    /// Replace the cached entry.
    pub fn insert(
        &mut self,
        file_name: &str,
        position: Position,
        text: &str,
        items: Arc<Vec<CompletionItem>>,
    ) {
        self.entry = Some(CacheEntry {
            file_name: file_name.to_string(),
            position,
            text: text.to_string(),
            items,
        });
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }
}
