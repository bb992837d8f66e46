use async_trait::async_trait;

use super::{ItemKey, NoteItem, Result, ScanFilter};

/// Key-value table holding note records.
///
/// Each method is a single request against the store. Implementations do not
/// retry.
#[async_trait]
pub trait NoteTable: Send + Sync {
    /// Point lookup by composite key.
    async fn get_item(&self, key: &ItemKey) -> Result<Option<NoteItem>>;

    /// Full-table scan returning every record that passes the filter.
    async fn scan(&self, filter: &ScanFilter) -> Result<Vec<NoteItem>>;

    /// Unconditional upsert. Returns the record as persisted.
    async fn put_item(&self, item: NoteItem) -> Result<NoteItem>;

    /// Unconditional delete. Absent keys are a no-op.
    async fn delete_item(&self, key: &ItemKey) -> Result<()>;
}

/// Source of globally unique, opaque note ids.
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh id.
    fn new_id(&self) -> String;
}
