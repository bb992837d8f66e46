//! SQLite table implementation.

use async_trait::async_trait;
use rusqlite::Row;
use tokio_rusqlite::Connection;

use notes_core::storage::{ItemKey, NoteItem, NoteTable, RepositoryError, Result, ScanFilter};

use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Convert a SQLite row to a NoteItem.
///
/// Expected columns: pk, sk, title, body
fn row_to_item(row: &Row) -> rusqlite::Result<NoteItem> {
    Ok(NoteItem {
        pk: row.get(0)?,
        sk: row.get(1)?,
        title: row.get(2)?,
        body: row.get(3)?,
    })
}

/// SQLite-backed note table.
///
/// Filtered scans by owner go through the `sk` index instead of a full table
/// walk; the returned records are the same.
pub struct SqliteTable {
    conn: Connection,
}

impl SqliteTable {
    /// Opens a file-based database, creating it and its schema if needed.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        tracing::info!(path = %path, "Opened SQLite note table");
        Ok(Self { conn })
    }

    /// Opens an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_tokio_rusqlite_error)
    }
}

#[async_trait]
impl NoteTable for SqliteTable {
    async fn get_item(&self, key: &ItemKey) -> Result<Option<NoteItem>> {
        let ItemKey { pk, sk } = key.clone();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_NOTE_BY_KEY).map_err(wrap_err)?;
                match stmt.query_row([&pk, &sk], row_to_item) {
                    Ok(item) => Ok(Some(item)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn scan(&self, filter: &ScanFilter) -> Result<Vec<NoteItem>> {
        let filter = filter.clone();

        self.conn
            .call(move |conn| {
                let (sql, params): (&str, Vec<String>) = match filter {
                    ScanFilter::All => (schema::SELECT_ALL_NOTES, Vec::new()),
                    ScanFilter::SortKeyEquals(sk) => (schema::SELECT_NOTES_BY_SK, vec![sk]),
                };

                let mut stmt = conn.prepare(sql).map_err(wrap_err)?;
                let rows = stmt
                    .query_map(rusqlite::params_from_iter(params), row_to_item)
                    .map_err(wrap_err)?;

                let mut items = Vec::new();
                for row_result in rows {
                    items.push(row_result.map_err(wrap_err)?);
                }
                Ok(items)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn put_item(&self, item: NoteItem) -> Result<NoteItem> {
        let persisted = item.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::UPSERT_NOTE,
                    [&item.pk, &item.sk, &item.title, &item.body],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)?;

        Ok(persisted)
    }

    async fn delete_item(&self, key: &ItemKey) -> Result<()> {
        let ItemKey { pk, sk } = key.clone();

        self.conn
            .call(move |conn| {
                conn.execute(schema::DELETE_NOTE, [&pk, &sk])
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notes_core::storage::note_key;

    fn item(id: &str, user_id: &str, title: &str) -> NoteItem {
        let key = note_key(id, user_id);
        NoteItem {
            pk: key.pk,
            sk: key.sk,
            title: title.to_string(),
            body: format!("body of {title}"),
        }
    }

    #[tokio::test]
    async fn test_put_and_get() {
        let table = SqliteTable::new_in_memory().await.unwrap();
        let record = item("a", "user_1", "Groceries");

        let persisted = table.put_item(record.clone()).await.unwrap();
        assert_eq!(persisted, record);

        let retrieved = table.get_item(&note_key("a", "user_1")).await.unwrap();
        assert_eq!(retrieved, Some(record));
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let table = SqliteTable::new_in_memory().await.unwrap();
        let retrieved = table.get_item(&note_key("a", "user_1")).await.unwrap();
        assert!(retrieved.is_none());
    }

    #[tokio::test]
    async fn test_get_with_wrong_owner() {
        let table = SqliteTable::new_in_memory().await.unwrap();
        table.put_item(item("a", "user_1", "Groceries")).await.unwrap();

        let retrieved = table.get_item(&note_key("a", "user_2")).await.unwrap();
        assert!(retrieved.is_none());
    }

    #[tokio::test]
    async fn test_put_overwrites_existing_key() {
        let table = SqliteTable::new_in_memory().await.unwrap();
        table.put_item(item("a", "user_1", "Original")).await.unwrap();
        table.put_item(item("a", "user_1", "Replaced")).await.unwrap();

        let all = table.scan(&ScanFilter::All).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Replaced");
    }

    #[tokio::test]
    async fn test_delete_and_delete_nonexistent() {
        let table = SqliteTable::new_in_memory().await.unwrap();
        table.put_item(item("a", "user_1", "Groceries")).await.unwrap();

        table.delete_item(&note_key("a", "user_1")).await.unwrap();
        table.delete_item(&note_key("a", "user_1")).await.unwrap();

        assert!(table
            .get_item(&note_key("a", "user_1"))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_scan_by_owner() {
        let table = SqliteTable::new_in_memory().await.unwrap();
        table.put_item(item("a", "user_1", "A")).await.unwrap();
        table.put_item(item("b", "user_1", "B")).await.unwrap();
        table.put_item(item("c", "user_2", "C")).await.unwrap();

        let mut owned = table
            .scan(&ScanFilter::SortKeyEquals("user_1".to_string()))
            .await
            .unwrap();
        owned.sort_by(|a, b| a.pk.cmp(&b.pk));

        let titles: Vec<&str> = owned.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);

        let none = table
            .scan(&ScanFilter::SortKeyEquals("user_3".to_string()))
            .await
            .unwrap();
        assert!(none.is_empty());
    }
}
