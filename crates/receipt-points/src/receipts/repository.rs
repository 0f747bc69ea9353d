use serde::{Deserialize, Serialize};

use super::domain::{Receipt, ReceiptId};

/// Repository record binding an issued identifier to its immutable receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptRecord {
    pub id: ReceiptId,
    pub receipt: Receipt,
}

/// Storage abstraction so the service module can be exercised in isolation.
///
/// Records are write-once: there is no update or delete, and entries live for
/// the lifetime of the process.
pub trait ReceiptRepository: Send + Sync {
    fn insert(&self, record: ReceiptRecord) -> Result<ReceiptRecord, RepositoryError>;
    fn fetch(&self, id: &ReceiptId) -> Result<Option<ReceiptRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
///
/// `fetch` signals an absent entry with `Ok(None)`, not `NotFound`; the
/// variant exists so callers can surface a lookup miss as an error once they
/// have decided it is one.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("receipt already stored under that id")]
    Conflict,
    #[error("no receipt found for that id")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
