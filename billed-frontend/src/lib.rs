pub mod config;
pub mod containers;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

use containers::{BillReview, BillsList, NewBillSubmission};
use services::{IdentityProvider, Navigator, ReceiptPreview, ResourceClient};
use std::sync::Arc;

/// Collaborators shared by every container.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ResourceClient>,
    pub identity: Arc<dyn IdentityProvider>,
    pub navigator: Arc<dyn Navigator>,
    pub preview: Arc<dyn ReceiptPreview>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn ResourceClient>,
        identity: Arc<dyn IdentityProvider>,
        navigator: Arc<dyn Navigator>,
        preview: Arc<dyn ReceiptPreview>,
    ) -> Self {
        Self {
            store,
            identity,
            navigator,
            preview,
        }
    }

    pub fn bills_list(&self) -> BillsList {
        BillsList::new(
            self.store.clone(),
            self.identity.clone(),
            self.navigator.clone(),
            self.preview.clone(),
        )
    }

    pub fn new_bill(&self) -> NewBillSubmission {
        NewBillSubmission::new(
            self.store.clone(),
            self.identity.clone(),
            self.navigator.clone(),
        )
    }

    pub fn bill_review(&self) -> BillReview {
        BillReview::new(self.store.clone(), self.identity.clone())
    }
}
