//! Note repository.
//!
//! Maps the four note operations onto a [`NoteTable`]. Every call is a single
//! request against the table; failures are logged and returned unchanged.

use std::sync::Arc;

use notes_core::note::{
    build_note_item, item_to_note, item_to_summary, CreateNoteRequest, Note, NoteSummary,
};
use notes_core::storage::{note_key, IdGenerator, NoteTable, Result, ScanFilter, UuidIdGenerator};

/// Create/read/list/delete access to user-owned notes.
///
/// Holds shared handles only, so clones are cheap and can be used from
/// concurrent tasks.
#[derive(Clone)]
pub struct NoteRepository {
    table: Arc<dyn NoteTable>,
    ids: Arc<dyn IdGenerator>,
}

impl NoteRepository {
    /// Creates a repository over the given table using UUID v4 note ids.
    pub fn new(table: Arc<dyn NoteTable>) -> Self {
        Self::with_id_generator(table, Arc::new(UuidIdGenerator))
    }

    /// Creates a repository with a custom id generator.
    pub fn with_id_generator(table: Arc<dyn NoteTable>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { table, ids }
    }

    /// Gets a note by id, scoped to its owner.
    ///
    /// Returns `Ok(None)` when no note with this id belongs to `user_id`.
    pub async fn get(&self, id: &str, user_id: &str) -> Result<Option<Note>> {
        let item = self
            .table
            .get_item(&note_key(id, user_id))
            .await
            .inspect_err(|e| {
                tracing::warn!(note_id = %id, user_id = %user_id, error = %e, "Failed to get note")
            })?;

        match item {
            Some(item) => {
                tracing::debug!(note_id = %id, user_id = %user_id, "Note found");
                Ok(Some(item_to_note(&item)?))
            }
            None => {
                tracing::debug!(note_id = %id, user_id = %user_id, "Note not found");
                Ok(None)
            }
        }
    }

    /// Lists the id and title of every note owned by `user_id`.
    ///
    /// Scans the whole table. Order is unspecified.
    pub async fn list(&self, user_id: &str) -> Result<Vec<NoteSummary>> {
        let items = self
            .table
            .scan(&ScanFilter::SortKeyEquals(user_id.to_string()))
            .await
            .inspect_err(|e| {
                tracing::warn!(user_id = %user_id, error = %e, "Failed to list notes")
            })?;

        tracing::debug!(user_id = %user_id, count = items.len(), "Listed notes");

        items.iter().map(item_to_summary).collect()
    }

    /// Creates a note with a freshly generated id.
    ///
    /// The write is unconditional. The returned note is rebuilt from the
    /// record the table reports as persisted.
    pub async fn create(&self, request: CreateNoteRequest) -> Result<Note> {
        let id = self.ids.new_id();
        let item = build_note_item(&id, &request);

        let persisted = self
            .table
            .put_item(item)
            .await
            .inspect_err(|e| {
                tracing::warn!(note_id = %id, user_id = %request.user_id, error = %e, "Failed to create note")
            })?;

        let note = item_to_note(&persisted)?;
        tracing::debug!(note_id = %note.id, user_id = %note.user_id, "Created note");
        Ok(note)
    }

    /// Deletes a note. Deleting a note that does not exist succeeds.
    pub async fn delete(&self, id: &str, user_id: &str) -> Result<()> {
        self.table
            .delete_item(&note_key(id, user_id))
            .await
            .inspect_err(|e| {
                tracing::warn!(note_id = %id, user_id = %user_id, error = %e, "Failed to delete note")
            })?;

        tracing::debug!(note_id = %id, user_id = %user_id, "Deleted note");
        Ok(())
    }
}
