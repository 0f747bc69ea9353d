use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::domain::{Receipt, ReceiptId};
use super::repository::{ReceiptRecord, ReceiptRepository, RepositoryError};
use super::scoring::{PointsOutcome, ScoringConfig, ScoringEngine};

/// Service composing the identifier source, repository, and scoring rubric.
pub struct ReceiptService<R> {
    repository: Arc<R>,
    engine: Arc<ScoringEngine>,
}

static RECEIPT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_receipt_id() -> ReceiptId {
    let id = RECEIPT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ReceiptId(format!("receipt-{id:06}"))
}

impl<R> ReceiptService<R>
where
    R: ReceiptRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: ScoringConfig) -> Self {
        Self {
            repository,
            engine: Arc::new(ScoringEngine::new(config)),
        }
    }

    /// Accept a receipt, assign it a fresh identifier, and persist it.
    ///
    /// A repository refusal leaves no partial state behind; the identifier is
    /// simply never handed out.
    pub fn submit(&self, receipt: Receipt) -> Result<ReceiptRecord, ReceiptServiceError> {
        let record = ReceiptRecord {
            id: next_receipt_id(),
            receipt,
        };

        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    /// Score a stored receipt. Read-only and idempotent: records are
    /// immutable, so repeated calls return identical totals.
    pub fn score(&self, id: &ReceiptId) -> Result<PointsOutcome, ReceiptServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;

        Ok(self.engine.score(&record))
    }
}

/// Error raised by the receipt service.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
