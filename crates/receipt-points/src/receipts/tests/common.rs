use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::receipts::domain::{Item, Receipt, ReceiptId};
use crate::receipts::repository::{ReceiptRecord, ReceiptRepository, RepositoryError};
use crate::receipts::router::receipt_router;
use crate::receipts::scoring::{ScoringConfig, ScoringEngine};
use crate::receipts::service::ReceiptService;

pub(super) fn item(short_description: &str, price: f64) -> Item {
    Item {
        short_description: short_description.to_string(),
        price,
    }
}

/// Morning receipt from the acceptance examples; worth 28 points.
pub(super) fn target_receipt() -> Receipt {
    Receipt {
        retailer: "Target".to_string(),
        purchase_date: "2022-01-01".to_string(),
        purchase_time: "13:01".to_string(),
        items: vec![
            item("Mountain Dew 12PK", 6.49),
            item("Emils Cheese Pizza", 12.25),
            item("Knorr Creamy Chicken", 1.26),
            item("Doritos Nacho Cheese", 3.35),
            item("   Klarbrunn 12-PK 12 FL OZ  ", 12.00),
        ],
        total: "35.35".to_string(),
    }
}

/// Afternoon receipt from the acceptance examples; worth 109 points.
pub(super) fn corner_market_receipt() -> Receipt {
    Receipt {
        retailer: "M&M Corner Market".to_string(),
        purchase_date: "2022-03-20".to_string(),
        purchase_time: "14:33".to_string(),
        items: vec![
            item("Gatorade", 2.25),
            item("Gatorade", 2.25),
            item("Gatorade", 2.25),
            item("Gatorade", 2.25),
        ],
        total: "9.00".to_string(),
    }
}

/// Receipt whose other fields are neutral so a single rule can be isolated.
/// Even purchase day, morning time, no items, total that earns nothing.
pub(super) fn neutral_receipt() -> Receipt {
    Receipt {
        retailer: String::new(),
        purchase_date: "2022-01-02".to_string(),
        purchase_time: "13:01".to_string(),
        items: Vec::new(),
        total: "10.10".to_string(),
    }
}

pub(super) fn record(receipt: Receipt) -> ReceiptRecord {
    ReceiptRecord {
        id: ReceiptId("receipt-test".to_string()),
        receipt,
    }
}

pub(super) fn scoring_engine() -> ScoringEngine {
    ScoringEngine::new(ScoringConfig::default())
}

pub(super) fn build_service() -> (ReceiptService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = ReceiptService::new(repository.clone(), ScoringConfig::default());
    (service, repository)
}

pub(super) fn receipt_router_with_service(
    service: ReceiptService<MemoryRepository>,
) -> axum::Router {
    receipt_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<ReceiptId, ReceiptRecord>>>,
}

impl ReceiptRepository for MemoryRepository {
    fn insert(&self, record: ReceiptRecord) -> Result<ReceiptRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ReceiptId) -> Result<Option<ReceiptRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct ConflictRepository;

impl ReceiptRepository for ConflictRepository {
    fn insert(&self, _record: ReceiptRecord) -> Result<ReceiptRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &ReceiptId) -> Result<Option<ReceiptRecord>, RepositoryError> {
        Ok(None)
    }
}

pub(super) struct UnavailableRepository;

impl ReceiptRepository for UnavailableRepository {
    fn insert(&self, _record: ReceiptRecord) -> Result<ReceiptRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _id: &ReceiptId) -> Result<Option<ReceiptRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}
