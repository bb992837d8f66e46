//! In-memory table backend for testing.
//!
//! This module provides an in-memory implementation of the `NoteTable` trait
//! that stores all records in a HashMap wrapped in `Arc<RwLock<_>>`. This is
//! useful for testing and development scenarios where persistence is not
//! required.
//!
//! # Example
//!
//! ```rust,ignore
//! use notes::storage::inmemory::InMemoryTable;
//!
//! let table = InMemoryTable::new();
//! // Use table for testing...
//! ```

mod table;

pub use table::InMemoryTable;
