//! Notes - user-owned notes on a key-value table.
//!
//! The [`NoteRepository`] maps get/list/create/delete onto a [`NoteTable`]
//! whose records are keyed by (`note#<id>`, `<user_id>`). Table backends live
//! in [`storage`] and are selected through [`config::Config`].

pub mod config;
mod repository;
pub mod storage;

pub use notes_core::note::{CreateNoteRequest, Note, NoteSummary};
pub use notes_core::storage::{IdGenerator, NoteTable, RepositoryError, Result, UuidIdGenerator};
pub use repository::NoteRepository;
