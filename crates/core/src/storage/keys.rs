//! Key encoding for note records.
//!
//! Pure functions mapping a note's identity onto the table's composite key.
//! The note id lives in `pk` behind a `note#` prefix and the owner lives in
//! `sk`, verbatim.

use super::ItemKey;

pub const NOTE_PREFIX: &str = "note#";

/// Generate the partition key for a note.
///
/// Pattern: `note#<note_id>`
pub fn note_pk(note_id: &str) -> String {
    format!("{NOTE_PREFIX}{note_id}")
}

/// Generate the sort key for a note.
///
/// Pattern: `<user_id>`
pub fn note_sk(user_id: &str) -> String {
    user_id.to_string()
}

/// Generate the composite key addressing one note of one user.
pub fn note_key(note_id: &str, user_id: &str) -> ItemKey {
    ItemKey {
        pk: note_pk(note_id),
        sk: note_sk(user_id),
    }
}

/// Recover the note id from a partition key.
///
/// Strips exactly one leading prefix. Returns `None` if the key is not a note key.
pub fn note_id_from_pk(pk: &str) -> Option<&str> {
    pk.strip_prefix(NOTE_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_pk() {
        assert_eq!(
            note_pk("550e8400-e29b-41d4-a716-446655440003"),
            "note#550e8400-e29b-41d4-a716-446655440003"
        );
    }

    #[test]
    fn test_note_sk_is_user_id() {
        assert_eq!(note_sk("user_1"), "user_1");
    }

    #[test]
    fn test_note_key() {
        let key = note_key("abc", "user_1");
        assert_eq!(key.pk, "note#abc");
        assert_eq!(key.sk, "user_1");
    }

    #[test]
    fn test_note_id_round_trip() {
        for id in ["abc", "", "ckx9a1b2c0000", "with#hash", "note"] {
            assert_eq!(note_id_from_pk(&note_pk(id)), Some(id));
        }
    }

    #[test]
    fn test_note_id_from_pk_strips_single_prefix() {
        assert_eq!(note_id_from_pk("note#note#abc"), Some("note#abc"));
    }

    #[test]
    fn test_note_id_from_pk_without_prefix() {
        assert_eq!(note_id_from_pk("user_1"), None);
        assert_eq!(note_id_from_pk("NOTE#abc"), None);
    }
}
