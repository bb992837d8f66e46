//! Conversions between notes and their stored records.
//!
//! Pure functions, no I/O.

use crate::storage::{note_id_from_pk, note_pk, note_sk, NoteItem, RepositoryError, Result};

use super::{CreateNoteRequest, Note, NoteSummary};

/// Builds the record to persist for a new note with the given id.
pub fn build_note_item(note_id: &str, request: &CreateNoteRequest) -> NoteItem {
    NoteItem {
        pk: note_pk(note_id),
        sk: note_sk(&request.user_id),
        title: request.title.clone(),
        body: request.body.clone(),
    }
}

/// Reconstructs a note from its stored record.
pub fn item_to_note(item: &NoteItem) -> Result<Note> {
    Ok(Note {
        id: id_from_item(item)?,
        user_id: item.sk.clone(),
        title: item.title.clone(),
        body: item.body.clone(),
    })
}

/// Projects a stored record to its list summary.
pub fn item_to_summary(item: &NoteItem) -> Result<NoteSummary> {
    Ok(NoteSummary {
        id: id_from_item(item)?,
        title: item.title.clone(),
    })
}

fn id_from_item(item: &NoteItem) -> Result<String> {
    note_id_from_pk(&item.pk)
        .map(str::to_string)
        .ok_or_else(|| RepositoryError::InvalidData(format!("Not a note key: {}", item.pk)))
}
