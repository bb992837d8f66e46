//! Functional core for the notes workspace.
//!
//! Holds the note entity, the physical record layout and its key encoding,
//! and the storage contracts implemented by the backends in the `notes` crate.
//! Nothing in this crate performs I/O.

pub mod note;
pub mod storage;
