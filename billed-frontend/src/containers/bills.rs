//! The employee's list of submitted bills.

use crate::error::AppError;
use crate::models::{DisplayBill, IconElement, RoutePath};
use crate::services::{IdentityProvider, Navigator, ReceiptPreview, ResourceClient};
use crate::utils::format::{to_display, to_display_raw};
use std::sync::Arc;

/// What the bills view renders.
#[derive(Debug, Clone, PartialEq)]
pub enum BillsPage {
    Loaded(Vec<DisplayBill>),
    /// Remote failure, carrying the store's message as-is.
    Error(String),
}

pub struct BillsList {
    store: Arc<dyn ResourceClient>,
    identity: Arc<dyn IdentityProvider>,
    navigator: Arc<dyn Navigator>,
    preview: Arc<dyn ReceiptPreview>,
}

impl BillsList {
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

    /// Fetch, format and order the signed-in user's bills, most recent first.
    ///
    /// Records that cannot be formatted are kept with their stored values.
    /// Bills sharing a date keep the order the store returned them in.
    pub async fn get_bills(&self) -> Result<Vec<DisplayBill>, AppError> {
        let user = self.identity.current_user()?;

        let stored = self.store.list().await.map_err(|e| {
            tracing::error!(email = %user.email_or_empty(), error = %e, "Failed to fetch bills");
            e
        })?;

        let mut bills: Vec<DisplayBill> = stored
            .iter()
            .map(|bill| {
                to_display(bill).unwrap_or_else(|e| {
                    tracing::warn!(bill_id = %bill.id, error = %e, "Keeping unformatted bill");
                    to_display_raw(bill)
                })
            })
            .collect();

        // Stored dates are ISO, so string order is chronological.
        bills.sort_by(|a, b| b.iso_date.cmp(&a.iso_date));

        tracing::debug!(count = bills.len(), "Bills loaded");
        Ok(bills)
    }

    pub async fn load_page(&self) -> BillsPage {
        match self.get_bills().await {
            Ok(bills) => BillsPage::Loaded(bills),
            Err(e) => BillsPage::Error(e.display_message()),
        }
    }

    pub fn handle_click_new_bill(&self) {
        self.navigator.navigate(RoutePath::NewBill);
    }

    pub fn handle_click_icon_eye(&self, icon: &IconElement) {
        match icon.get_attribute(IconElement::BILL_URL_ATTRIBUTE) {
            Some(url) => self.preview.show(url),
            None => tracing::warn!("Eye icon has no receipt URL"),
        }
    }
}
