//! HTTP client for the remote bill store.

use crate::config::StoreSettings;
use crate::error::AppError;
use crate::models::Bill;
use crate::services::resource_client::{CreateBill, ResourceClient};
use async_trait::async_trait;
use billed_core::observability::{TracedClientExt, TracedRequest};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use uuid::Uuid;

pub struct HttpResourceClient {
    client: Client,
    settings: StoreSettings,
}

impl HttpResourceClient {
    pub fn new(settings: StoreSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    pub fn collection_url(&self) -> String {
        format!(
            "{}/{}",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.collection
        )
    }

    fn prepare(&self, request: TracedRequest) -> TracedRequest {
        let request = request.timeout(Duration::from_secs(self.settings.timeout_secs));
        match &self.settings.api_token {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: TracedRequest, url: &str) -> Result<T, AppError> {
        let request_id = Uuid::new_v4().to_string();

        let response = self
            .prepare(request)
            .send_with_request_id(&request_id)
            .await
            .map_err(|e| {
                tracing::error!(request_id = %request_id, url = %url, error = %e, "Store request failed");
                AppError::Fetch(e.to_string())
            })?;

        decode(response, &request_id).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response, request_id: &str) -> Result<T, AppError> {
    let status = response.status();
    if !status.is_success() {
        tracing::error!(request_id = %request_id, status = %status, "Store rejected request");
        return Err(AppError::Fetch(format!("Erreur {}", status.as_u16())));
    }

    response.json::<T>().await.map_err(|e| {
        tracing::error!(request_id = %request_id, error = %e, "Malformed store response");
        AppError::Fetch(e.to_string())
    })
}

/// Decode list entries one by one; entries that are not bill objects are
/// skipped so the rest of the list still loads.
fn decode_records(records: Vec<Value>) -> Vec<Bill> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Bill>(record) {
            Ok(bill) => Some(bill),
            Err(e) => {
                tracing::warn!(index, error = %e, "Skipping undecodable bill record");
                None
            }
        })
        .collect()
}

#[async_trait]
impl ResourceClient for HttpResourceClient {
    async fn list(&self) -> Result<Vec<Bill>, AppError> {
        let url = self.collection_url();
        let records: Vec<Value> = self.send(self.client.traced_get(&url), &url).await?;
        Ok(decode_records(records))
    }

    async fn create(&self, request: CreateBill) -> Result<Bill, AppError> {
        let url = self.collection_url();

        let mut form = Form::new().text("bill", serde_json::to_string(&request.draft)?);
        if let Some(receipt) = request.receipt {
            let part = Part::bytes(receipt.data)
                .file_name(receipt.file_name)
                .mime_str(&receipt.content_type)
                .map_err(|e| AppError::Fetch(e.to_string()))?;
            form = form.part("file", part);
        }

        let bill: Bill = self
            .send(self.client.traced_post(&url).multipart(form), &url)
            .await?;
        tracing::info!(bill_id = %bill.id, "Bill created");
        Ok(bill)
    }

    async fn update(&self, bill: &Bill) -> Result<Bill, AppError> {
        let url = format!("{}/{}", self.collection_url(), bill.id);
        self.send(self.client.traced_put(&url).json(bill), &url).await
    }
}
