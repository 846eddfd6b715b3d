//! Admin review of submitted bills.

use crate::error::AppError;
use crate::models::{Bill, BillStatus, DisplayBill};
use crate::services::{IdentityProvider, ResourceClient};
use crate::utils::format::{to_display, to_display_raw};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Refuse,
}

impl Decision {
    pub fn status(&self) -> BillStatus {
        match self {
            Decision::Accept => BillStatus::Accepted,
            Decision::Refuse => BillStatus::Refused,
        }
    }
}

pub struct BillReview {
    store: Arc<dyn ResourceClient>,
    identity: Arc<dyn IdentityProvider>,
}

impl BillReview {
    pub fn new(store: Arc<dyn ResourceClient>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self { store, identity }
    }

    fn require_admin(&self) -> Result<(), AppError> {
        let user = self.identity.current_user()?;
        if !user.is_admin() {
            tracing::warn!(email = %user.email_or_empty(), "Review attempted without admin role");
            return Err(AppError::Forbidden("bill review requires an admin".to_string()));
        }
        Ok(())
    }

    /// Bills currently in `status`, in store order.
    pub async fn bills_with_status(&self, status: BillStatus) -> Result<Vec<DisplayBill>, AppError> {
        self.require_admin()?;

        let bills = self.store.list().await?;
        Ok(bills
            .iter()
            .filter(|bill| bill.status == status.as_str())
            .map(|bill| to_display(bill).unwrap_or_else(|_| to_display_raw(bill)))
            .collect())
    }

    /// Record the admin's decision and optional comment on `bill`.
    pub async fn decide(
        &self,
        bill: &Bill,
        decision: Decision,
        comment: Option<String>,
    ) -> Result<Bill, AppError> {
        self.require_admin()?;

        let reviewed = Bill {
            status: decision.status().as_str().to_string(),
            comment_admin: comment,
            ..bill.clone()
        };

        let updated = self.store.update(&reviewed).await.map_err(|e| {
            tracing::error!(bill_id = %bill.id, error = %e, "Failed to record review");
            e
        })?;
        tracing::info!(bill_id = %updated.id, status = %updated.status, "Bill reviewed");
        Ok(updated)
    }
}
