use billed_core::observability::init_tracing;
use billed_frontend::config::get_configuration;
use billed_frontend::containers::BillsPage;
use billed_frontend::models::RoutePath;
use billed_frontend::services::{
    FnNavigator, FnReceiptPreview, HttpResourceClient, LocalStorage, StoredIdentity,
};
use billed_frontend::AppState;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let configuration = get_configuration().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing("billed-frontend", &configuration.telemetry)?;

    let storage = LocalStorage::from_json_file(&configuration.identity.storage_path)?;
    let state = AppState::new(
        Arc::new(HttpResourceClient::new(configuration.store.clone())),
        Arc::new(StoredIdentity::new(Arc::new(storage))),
        Arc::new(FnNavigator(|path: RoutePath| info!(path = %path, "Navigate"))),
        Arc::new(FnReceiptPreview(|url: &str| info!(url = %url, "Show receipt"))),
    );

    info!(store = %configuration.store.base_url, "Fetching bills");
    match state.bills_list().load_page().await {
        BillsPage::Loaded(bills) => {
            println!("{}", serde_json::to_string_pretty(&bills)?);
            Ok(())
        }
        BillsPage::Error(message) => {
            tracing::error!(message = %message, "Bills could not be loaded");
            Err(anyhow::anyhow!(message))
        }
    }
}
