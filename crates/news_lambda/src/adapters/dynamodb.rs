use std::collections::HashMap;
use std::future::Future;

use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::config::Region;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::primitives::Blob;
use aws_sdk_dynamodb::types::AttributeValue;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use news_core::contract::{StoredAttribute, StoredRecord};

use crate::adapters::news_store::{NewsStore, StoreError};
use crate::config::NewsTableConfig;

type SdkItem = HashMap<String, AttributeValue>;

/// Items of one scan page and the key to resume from, if any.
pub type ScanPage = (Vec<SdkItem>, Option<SdkItem>);

/// `NewsStore` backed by a single DynamoDB table.
///
/// Calls block on the current Tokio runtime, which must be multi-threaded.
#[derive(Debug, Clone)]
pub struct DynamoDbNewsStore {
    table_name: String,
    client: aws_sdk_dynamodb::Client,
}

impl DynamoDbNewsStore {
    pub fn new(table_name: impl Into<String>, client: aws_sdk_dynamodb::Client) -> Self {
        Self {
            table_name: table_name.into(),
            client,
        }
    }

    /// Builds the process-wide client for the configured table and region.
    pub async fn connect(config: &NewsTableConfig) -> Self {
        let aws_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;
        Self::new(
            config.table_name.clone(),
            aws_sdk_dynamodb::Client::new(&aws_config),
        )
    }
}

impl NewsStore for DynamoDbNewsStore {
    fn scan_all(&self) -> Result<Vec<StoredRecord>, StoreError> {
        let client = self.client.clone();
        let table_name = self.table_name.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(collect_scan_pages(|start_key| {
                let client = client.clone();
                let table_name = table_name.clone();
                async move {
                    let output = client
                        .scan()
                        .table_name(table_name)
                        .set_exclusive_start_key(start_key)
                        .send()
                        .await
                        .map_err(|error| {
                            StoreError::Scan(DisplayErrorContext(&error).to_string())
                        })?;
                    Ok::<_, StoreError>((
                        output.items().to_vec(),
                        output.last_evaluated_key().cloned(),
                    ))
                }
            }))
        })
    }

    fn put_item(&self, record: &StoredRecord) -> Result<(), StoreError> {
        let client = self.client.clone();
        let table_name = self.table_name.clone();
        let item = to_sdk_item(record)?;

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .put_item()
                    .table_name(table_name)
                    .set_item(Some(item))
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| StoreError::Put(DisplayErrorContext(&error).to_string()))
            })
        })
    }
}

/// Reads pages until the resume key is missing or empty, keeping page order.
pub async fn collect_scan_pages<F, Fut>(
    mut fetch_page: F,
) -> Result<Vec<StoredRecord>, StoreError>
where
    F: FnMut(Option<SdkItem>) -> Fut,
    Fut: Future<Output = Result<ScanPage, StoreError>>,
{
    let mut records = Vec::new();
    let mut start_key = None;

    loop {
        let (items, last_key) = fetch_page(start_key.take()).await?;
        for item in &items {
            records.push(from_sdk_item(item)?);
        }

        match last_key {
            Some(key) if !key.is_empty() => start_key = Some(key),
            _ => return Ok(records),
        }
    }
}

pub fn from_sdk_item(item: &SdkItem) -> Result<StoredRecord, StoreError> {
    item.iter()
        .map(|(name, value)| Ok((name.clone(), from_sdk_attribute(name, value)?)))
        .collect()
}

pub fn to_sdk_item(record: &StoredRecord) -> Result<SdkItem, StoreError> {
    record
        .iter()
        .map(|(name, value)| Ok((name.clone(), to_sdk_attribute(name, value)?)))
        .collect()
}

fn from_sdk_attribute(name: &str, value: &AttributeValue) -> Result<StoredAttribute, StoreError> {
    let converted = match value {
        AttributeValue::S(text) => StoredAttribute::S(text.clone()),
        AttributeValue::N(number) => StoredAttribute::N(number.clone()),
        AttributeValue::Bool(flag) => StoredAttribute::Bool(*flag),
        AttributeValue::Null(flag) => StoredAttribute::Null(*flag),
        AttributeValue::Ss(values) => StoredAttribute::Ss(values.clone()),
        AttributeValue::Ns(values) => StoredAttribute::Ns(values.clone()),
        AttributeValue::L(values) => StoredAttribute::L(
            values
                .iter()
                .map(|value| from_sdk_attribute(name, value))
                .collect::<Result<_, _>>()?,
        ),
        AttributeValue::M(fields) => StoredAttribute::M(
            fields
                .iter()
                .map(|(key, value)| Ok((key.clone(), from_sdk_attribute(name, value)?)))
                .collect::<Result<_, StoreError>>()?,
        ),
        AttributeValue::B(blob) => StoredAttribute::B(STANDARD.encode(blob.as_ref())),
        AttributeValue::Bs(blobs) => StoredAttribute::Bs(
            blobs
                .iter()
                .map(|blob| STANDARD.encode(blob.as_ref()))
                .collect(),
        ),
        _ => {
            return Err(StoreError::UnsupportedAttribute {
                name: name.to_string(),
                kind: "unknown".to_string(),
            })
        }
    };
    Ok(converted)
}

fn to_sdk_attribute(name: &str, value: &StoredAttribute) -> Result<AttributeValue, StoreError> {
    let converted = match value {
        StoredAttribute::S(text) => AttributeValue::S(text.clone()),
        StoredAttribute::N(number) => AttributeValue::N(number.clone()),
        StoredAttribute::Bool(flag) => AttributeValue::Bool(*flag),
        StoredAttribute::Null(flag) => AttributeValue::Null(*flag),
        StoredAttribute::Ss(values) => AttributeValue::Ss(values.clone()),
        StoredAttribute::Ns(values) => AttributeValue::Ns(values.clone()),
        StoredAttribute::B(encoded) => AttributeValue::B(decode_blob(name, encoded)?),
        StoredAttribute::Bs(encoded) => AttributeValue::Bs(
            encoded
                .iter()
                .map(|value| decode_blob(name, value))
                .collect::<Result<_, _>>()?,
        ),
        StoredAttribute::L(values) => AttributeValue::L(
            values
                .iter()
                .map(|value| to_sdk_attribute(name, value))
                .collect::<Result<_, _>>()?,
        ),
        StoredAttribute::M(fields) => AttributeValue::M(
            fields
                .iter()
                .map(|(key, value)| Ok((key.clone(), to_sdk_attribute(name, value)?)))
                .collect::<Result<_, StoreError>>()?,
        ),
    };
    Ok(converted)
}

fn decode_blob(name: &str, encoded: &str) -> Result<Blob, StoreError> {
    STANDARD
        .decode(encoded)
        .map(Blob::new)
        .map_err(|error| StoreError::InvalidBinary {
            name: name.to_string(),
            reason: error.to_string(),
        })
}
