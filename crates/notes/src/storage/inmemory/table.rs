//! In-memory table implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use notes_core::storage::{ItemKey, NoteItem, NoteTable, Result, ScanFilter};

/// In-memory table for testing.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access. Clones
/// share the same records. Data is lost when the last clone is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTable {
    items: Arc<RwLock<HashMap<ItemKey, NoteItem>>>,
}

impl InMemoryTable {
    /// Creates a new empty in-memory table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently stored.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    /// Returns true if no records are stored.
    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl NoteTable for InMemoryTable {
    async fn get_item(&self, key: &ItemKey) -> Result<Option<NoteItem>> {
        let items = self.items.read().await;
        Ok(items.get(key).cloned())
    }

    async fn scan(&self, filter: &ScanFilter) -> Result<Vec<NoteItem>> {
        let items = self.items.read().await;
        Ok(items
            .values()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect())
    }

    async fn put_item(&self, item: NoteItem) -> Result<NoteItem> {
        let mut items = self.items.write().await;
        items.insert(item.key(), item.clone());
        Ok(item)
    }

    async fn delete_item(&self, key: &ItemKey) -> Result<()> {
        let mut items = self.items.write().await;
        items.remove(key);
        Ok(())
    }
}
