use news_core::contract::StoredRecord;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{0}")]
    Scan(String),
    #[error("{0}")]
    Put(String),
    #[error("attribute '{name}' has unsupported type {kind}")]
    UnsupportedAttribute { name: String, kind: String },
    #[error("attribute '{name}' holds invalid base64: {reason}")]
    InvalidBinary { name: String, reason: String },
}

/// Table access used by the handlers: one full read and one unconditional insert.
pub trait NewsStore: Send + Sync {
    fn scan_all(&self) -> Result<Vec<StoredRecord>, StoreError>;
    fn put_item(&self, record: &StoredRecord) -> Result<(), StoreError>;
}
