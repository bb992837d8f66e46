//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O.

/// SQL statement to create the notes table.
///
/// The index on `sk` serves filtered scans by owner.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS notes (
    pk TEXT NOT NULL,
    sk TEXT NOT NULL,
    title TEXT NOT NULL,
    body TEXT NOT NULL,
    PRIMARY KEY (pk, sk)
);

CREATE INDEX IF NOT EXISTS idx_notes_sk ON notes(sk);
"#;

pub const SELECT_NOTE_BY_KEY: &str = r#"
SELECT pk, sk, title, body
FROM notes
WHERE pk = ?1 AND sk = ?2
"#;

pub const SELECT_ALL_NOTES: &str = r#"
SELECT pk, sk, title, body
FROM notes
"#;

pub const SELECT_NOTES_BY_SK: &str = r#"
SELECT pk, sk, title, body
FROM notes
WHERE sk = ?1
"#;

pub const UPSERT_NOTE: &str = r#"
INSERT OR REPLACE INTO notes (pk, sk, title, body)
VALUES (?1, ?2, ?3, ?4)
"#;

pub const DELETE_NOTE: &str = r#"
DELETE FROM notes
WHERE pk = ?1 AND sk = ?2
"#;
