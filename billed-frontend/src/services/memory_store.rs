//! In-process bill store with injectable failures.

use crate::error::AppError;
use crate::models::Bill;
use crate::services::resource_client::{CreateBill, ResourceClient};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::RwLock;
use uuid::Uuid;

const FILE_URL_BASE: &str = "https://test.storage.tld/v0/b/billable/o";

#[derive(Default)]
pub struct MemoryResourceClient {
    bills: RwLock<Vec<Bill>>,
    failure: Mutex<Option<String>>,
    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
    update_calls: AtomicUsize,
}

impl MemoryResourceClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bills(bills: Vec<Bill>) -> Self {
        Self {
            bills: RwLock::new(bills),
            ..Self::default()
        }
    }

    /// Make every following call reject with `message` until [`Self::recover`].
    pub fn fail_with(&self, message: impl Into<String>) {
        if let Ok(mut failure) = self.failure.lock() {
            *failure = Some(message.into());
        }
    }

    pub fn recover(&self) {
        if let Ok(mut failure) = self.failure.lock() {
            *failure = None;
        }
    }

    pub async fn snapshot(&self) -> Vec<Bill> {
        self.bills.read().await.clone()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    fn check_failure(&self) -> Result<(), AppError> {
        let failure = self
            .failure
            .lock()
            .map_err(|_| AppError::Internal(anyhow::anyhow!("store failure switch poisoned")))?;
        match failure.as_ref() {
            Some(message) => Err(AppError::Fetch(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ResourceClient for MemoryResourceClient {
    async fn list(&self) -> Result<Vec<Bill>, AppError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok(self.bills.read().await.clone())
    }

    async fn create(&self, request: CreateBill) -> Result<Bill, AppError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;

        let id = Uuid::new_v4().simple().to_string();
        let file_url = request
            .receipt
            .as_ref()
            .map(|receipt| format!("{}/{}-{}", FILE_URL_BASE, id, receipt.file_name))
            .unwrap_or_default();

        let bill = Bill::from_draft(id, file_url, request.draft);
        self.bills.write().await.push(bill.clone());
        Ok(bill)
    }

    async fn update(&self, bill: &Bill) -> Result<Bill, AppError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;

        let mut bills = self.bills.write().await;
        let stored = bills
            .iter_mut()
            .find(|stored| stored.id == bill.id)
            .ok_or_else(|| AppError::Fetch("Erreur 404".to_string()))?;
        *stored = bill.clone();
        Ok(bill.clone())
    }
}
