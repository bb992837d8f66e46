mod operations;
mod requests;
mod types;

pub use operations::{build_note_item, item_to_note, item_to_summary};
pub use requests::CreateNoteRequest;
pub use types::{Note, NoteSummary};
