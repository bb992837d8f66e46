//! DynamoDB table implementation.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use notes_core::storage::{ItemKey, NoteItem, NoteTable, Result, ScanFilter};

use super::conversions::{
    attributes_to_note_item, key_to_attributes, note_item_to_attributes, ATTR_SK,
};
use super::error::{map_delete_item_error, map_get_item_error, map_put_item_error, map_scan_error};
use crate::config::Config;

/// DynamoDB-backed note table.
///
/// Records are stored under the attributes `pk`, `sk`, `title` and `body`.
pub struct DynamoDbTable {
    client: Client,
    table_name: String,
}

impl DynamoDbTable {
    /// Creates a new table handle with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new table handle from configuration.
    ///
    /// Uses the AWS SDK default credential chain with the configured region
    /// and, when set, a custom endpoint such as a local DynamoDB container.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.aws_region.clone()));

        if let Some(endpoint) = &config.aws_endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;

        tracing::info!(
            table = %config.dynamodb_table_name,
            region = %config.aws_region,
            endpoint = ?config.aws_endpoint_url,
            "Opened DynamoDB note table"
        );

        Ok(Self::new(
            Client::new(&sdk_config),
            config.dynamodb_table_name.clone(),
        ))
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl NoteTable for DynamoDbTable {
    async fn get_item(&self, key: &ItemKey) -> Result<Option<NoteItem>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(key_to_attributes(key)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(attributes) => Ok(Some(attributes_to_note_item(&attributes)?)),
            None => Ok(None),
        }
    }

    async fn scan(&self, filter: &ScanFilter) -> Result<Vec<NoteItem>> {
        let mut request = self.client.scan().table_name(&self.table_name);

        if let ScanFilter::SortKeyEquals(sk) = filter {
            request = request
                .filter_expression(format!("{ATTR_SK} = :userId"))
                .expression_attribute_values(":userId", AttributeValue::S(sk.clone()));
        }

        // Follows LastEvaluatedKey until the whole table has been read.
        let items = request
            .into_paginator()
            .items()
            .send()
            .try_collect()
            .await
            .map_err(map_scan_error)?;

        items.iter().map(attributes_to_note_item).collect()
    }

    async fn put_item(&self, item: NoteItem) -> Result<NoteItem> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(note_item_to_attributes(&item)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(item)
    }

    async fn delete_item(&self, key: &ItemKey) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(key_to_attributes(key)))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}
