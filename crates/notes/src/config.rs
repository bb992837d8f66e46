use std::{env, fmt, str::FromStr};

/// Table backend selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    #[default]
    InMemory,
    Sqlite,
    DynamoDb,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inmemory" | "memory" => Ok(StorageBackend::InMemory),
            "sqlite" => Ok(StorageBackend::Sqlite),
            "dynamodb" => Ok(StorageBackend::DynamoDb),
            other => Err(format!("Unknown storage backend: {other}")),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StorageBackend::InMemory => "inmemory",
            StorageBackend::Sqlite => "sqlite",
            StorageBackend::DynamoDb => "dynamodb",
        };
        f.write_str(name)
    }
}

/// Storage configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Table backend (default: inmemory)
    pub storage: StorageBackend,
    /// Path to SQLite database file (default: "notes.db")
    pub sqlite_path: String,
    /// DynamoDB table name (default: "notes")
    pub dynamodb_table_name: String,
    /// Custom DynamoDB endpoint, e.g. a local DynamoDB container
    pub aws_endpoint_url: Option<String>,
    /// AWS region (default: "us-east-1")
    pub aws_region: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `NOTES_STORAGE` - `inmemory`, `sqlite` or `dynamodb` (default: inmemory)
    /// - `SQLITE_PATH` - SQLite database path (default: "notes.db")
    /// - `DYNAMODB_TABLE_NAME` - DynamoDB table name (default: "notes")
    /// - `AWS_ENDPOINT_URL` - Custom DynamoDB endpoint (default: unset)
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let storage = match lookup("NOTES_STORAGE") {
            Some(value) => value.parse().unwrap_or_else(|err: String| {
                tracing::warn!(error = %err, "Falling back to in-memory storage");
                StorageBackend::default()
            }),
            None => StorageBackend::default(),
        };

        Self {
            storage,
            sqlite_path: lookup("SQLITE_PATH").unwrap_or_else(|| "notes.db".to_string()),
            dynamodb_table_name: lookup("DYNAMODB_TABLE_NAME")
                .unwrap_or_else(|| "notes".to_string()),
            aws_endpoint_url: lookup("AWS_ENDPOINT_URL").filter(|url| !url.is_empty()),
            aws_region: lookup("AWS_REGION").unwrap_or_else(|| "us-east-1".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = config_from(&[]);

        assert_eq!(config.storage, StorageBackend::InMemory);
        assert_eq!(config.sqlite_path, "notes.db");
        assert_eq!(config.dynamodb_table_name, "notes");
        assert_eq!(config.aws_endpoint_url, None);
        assert_eq!(config.aws_region, "us-east-1");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("NOTES_STORAGE", "dynamodb"),
            ("DYNAMODB_TABLE_NAME", "notes-staging"),
            ("AWS_ENDPOINT_URL", "http://localhost:8000"),
            ("AWS_REGION", "eu-west-1"),
        ]);

        assert_eq!(config.storage, StorageBackend::DynamoDb);
        assert_eq!(config.dynamodb_table_name, "notes-staging");
        assert_eq!(
            config.aws_endpoint_url.as_deref(),
            Some("http://localhost:8000")
        );
        assert_eq!(config.aws_region, "eu-west-1");
    }

    #[test]
    fn test_unknown_backend_falls_back_to_default() {
        let config = config_from(&[("NOTES_STORAGE", "postgres")]);
        assert_eq!(config.storage, StorageBackend::InMemory);
    }

    #[test]
    fn test_empty_endpoint_is_ignored() {
        let config = config_from(&[("AWS_ENDPOINT_URL", "")]);
        assert_eq!(config.aws_endpoint_url, None);
    }

    #[test]
    fn test_backend_parsing() {
        assert_eq!("SQLite".parse::<StorageBackend>(), Ok(StorageBackend::Sqlite));
        assert_eq!(" memory ".parse::<StorageBackend>(), Ok(StorageBackend::InMemory));
        assert!("redis".parse::<StorageBackend>().is_err());
        assert_eq!(StorageBackend::DynamoDb.to_string(), "dynamodb");
    }
}
