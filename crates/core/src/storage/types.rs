use serde::{Deserialize, Serialize};

/// The composite key of a stored note record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemKey {
    pub pk: String,
    pub sk: String,
}

/// A note record as persisted in the table.
///
/// `pk` carries the note id (`note#<id>`) and `sk` the owning user id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteItem {
    pub pk: String,
    pub sk: String,
    pub title: String,
    pub body: String,
}

impl NoteItem {
    /// Returns the composite key of this record.
    pub fn key(&self) -> ItemKey {
        ItemKey {
            pk: self.pk.clone(),
            sk: self.sk.clone(),
        }
    }
}

/// Predicate applied to a full-table scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanFilter {
    /// Every record in the table.
    All,
    /// Records whose sort key equals the given value.
    SortKeyEquals(String),
}

impl ScanFilter {
    /// Returns true if the record passes the filter.
    pub fn matches(&self, item: &NoteItem) -> bool {
        match self {
            ScanFilter::All => true,
            ScanFilter::SortKeyEquals(sk) => item.sk == *sk,
        }
    }
}
