//! Input types for note operations.

use serde::{Deserialize, Serialize};

/// Request payload for creating a new note.
///
/// Empty titles and bodies are accepted; no length limits are applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteRequest {
    pub title: String,
    pub body: String,
    pub user_id: String,
}

impl CreateNoteRequest {
    /// Create a new request for the given owner.
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            user_id: user_id.into(),
        }
    }
}
