//! SQLite table backend implementation.
//!
//! This module provides a SQLite-based implementation of the `NoteTable` trait
//! using `rusqlite` for synchronous operations and `tokio-rusqlite` for async wrapping.

mod error;
mod schema;
mod table;

pub use table::SqliteTable;
