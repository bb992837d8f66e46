//! DynamoDB table backend implementation.
//!
//! This module provides a DynamoDB-based implementation of the `NoteTable`
//! trait using `aws-sdk-dynamodb`.

mod conversions;
mod error;
mod table;

pub use table::DynamoDbTable;
