use serde::{Deserialize, Serialize};

/// A user-owned text record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    /// Id of the owning user. Never dereferenced by this crate.
    pub user_id: String,
    pub title: String,
    pub body: String,
}

/// The projection of a note returned when listing a user's notes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteSummary {
    pub id: String,
    pub title: String,
}

impl From<&Note> for NoteSummary {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id.clone(),
            title: note.title.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_serializes_camel_case() {
        let note = Note {
            id: "abc".to_string(),
            user_id: "user_1".to_string(),
            title: "Groceries".to_string(),
            body: "milk, eggs".to_string(),
        };

        let json = serde_json::to_value(&note).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "abc",
                "userId": "user_1",
                "title": "Groceries",
                "body": "milk, eggs",
            })
        );
    }

    #[test]
    fn test_summary_from_note() {
        let note = Note {
            id: "abc".to_string(),
            user_id: "user_1".to_string(),
            title: "Groceries".to_string(),
            body: "milk, eggs".to_string(),
        };

        let summary = NoteSummary::from(&note);

        assert_eq!(summary.id, "abc");
        assert_eq!(summary.title, "Groceries");
    }
}
