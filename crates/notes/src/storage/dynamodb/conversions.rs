//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and note records.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use notes_core::storage::{ItemKey, NoteItem, RepositoryError};

pub const ATTR_PK: &str = "pk";
pub const ATTR_SK: &str = "sk";
pub const ATTR_TITLE: &str = "title";
pub const ATTR_BODY: &str = "body";

/// Convert a NoteItem to a DynamoDB item.
pub fn note_item_to_attributes(item: &NoteItem) -> HashMap<String, AttributeValue> {
    let mut attributes = key_to_attributes(&item.key());
    attributes.insert(ATTR_TITLE.to_string(), AttributeValue::S(item.title.clone()));
    attributes.insert(ATTR_BODY.to_string(), AttributeValue::S(item.body.clone()));
    attributes
}

/// Convert a composite key to the DynamoDB key map.
pub fn key_to_attributes(key: &ItemKey) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (ATTR_PK.to_string(), AttributeValue::S(key.pk.clone())),
        (ATTR_SK.to_string(), AttributeValue::S(key.sk.clone())),
    ])
}

/// Convert a DynamoDB item to a NoteItem.
pub fn attributes_to_note_item(
    attributes: &HashMap<String, AttributeValue>,
) -> Result<NoteItem, RepositoryError> {
    Ok(NoteItem {
        pk: get_string(attributes, ATTR_PK)?,
        sk: get_string(attributes, ATTR_SK)?,
        title: get_string(attributes, ATTR_TITLE)?,
        body: get_string(attributes, ATTR_BODY)?,
    })
}

/// Get a required string attribute.
fn get_string(
    attributes: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    attributes
        .get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> NoteItem {
        NoteItem {
            pk: "note#550e8400-e29b-41d4-a716-446655440003".to_string(),
            sk: "user_1".to_string(),
            title: "Groceries".to_string(),
            body: "milk, eggs".to_string(),
        }
    }

    #[test]
    fn test_note_item_round_trip() {
        let item = sample_item();
        let attributes = note_item_to_attributes(&item);
        let parsed = attributes_to_note_item(&attributes).unwrap();

        assert_eq!(item, parsed);
    }

    #[test]
    fn test_note_item_has_correct_keys() {
        let attributes = note_item_to_attributes(&sample_item());

        assert_eq!(
            attributes.get("pk").unwrap().as_s().unwrap(),
            "note#550e8400-e29b-41d4-a716-446655440003"
        );
        assert_eq!(attributes.get("sk").unwrap().as_s().unwrap(), "user_1");
        assert_eq!(attributes.len(), 4);
    }

    #[test]
    fn test_key_to_attributes_only_has_key_fields() {
        let attributes = key_to_attributes(&sample_item().key());

        assert_eq!(attributes.len(), 2);
        assert!(attributes.contains_key("pk"));
        assert!(attributes.contains_key("sk"));
    }

    #[test]
    fn test_missing_field_is_invalid_data() {
        let mut attributes = note_item_to_attributes(&sample_item());
        attributes.remove("body");

        assert!(matches!(
            attributes_to_note_item(&attributes),
            Err(RepositoryError::InvalidData(_))
        ));
    }

    #[test]
    fn test_non_string_field_is_invalid_data() {
        let mut attributes = note_item_to_attributes(&sample_item());
        attributes.insert("title".to_string(), AttributeValue::N("42".to_string()));

        assert!(matches!(
            attributes_to_note_item(&attributes),
            Err(RepositoryError::InvalidData(_))
        ));
    }
}
