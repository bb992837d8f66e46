mod error;
mod ids;
pub mod keys;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use ids::UuidIdGenerator;
pub use keys::{note_id_from_pk, note_key, note_pk, note_sk, NOTE_PREFIX};
pub use traits::{IdGenerator, NoteTable};
pub use types::{ItemKey, NoteItem, ScanFilter};
