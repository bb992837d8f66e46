use uuid::Uuid;

use super::IdGenerator;

/// Generates random UUID v4 ids in lowercase hyphenated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn new_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
