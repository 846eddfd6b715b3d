//! Shared fixtures for billed-frontend integration tests.
#![allow(dead_code)]

use billed_frontend::models::{Bill, RoutePath, User};
use billed_frontend::services::{
    MemoryResourceClient, Navigator, ReceiptPreview, ResourceClient, StaticIdentity,
};
use billed_frontend::AppState;
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex};

#[derive(Default)]
pub struct RecordingNavigator {
    paths: Mutex<Vec<RoutePath>>,
}

impl RecordingNavigator {
    pub fn paths(&self) -> Vec<RoutePath> {
        self.paths.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: RoutePath) {
        self.paths.lock().unwrap().push(path);
    }
}

#[derive(Default)]
pub struct RecordingPreview {
    urls: Mutex<Vec<String>>,
}

impl RecordingPreview {
    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

impl ReceiptPreview for RecordingPreview {
    fn show(&self, url: &str) {
        self.urls.lock().unwrap().push(url.to_string());
    }
}

pub struct TestApp {
    pub store: Arc<MemoryResourceClient>,
    pub navigator: Arc<RecordingNavigator>,
    pub preview: Arc<RecordingPreview>,
    pub state: AppState,
}

impl TestApp {
    pub fn with_user(user: User, bills: Vec<Bill>) -> Self {
        let store = Arc::new(MemoryResourceClient::with_bills(bills));
        let navigator = Arc::new(RecordingNavigator::default());
        let preview = Arc::new(RecordingPreview::default());

        let state = AppState::new(
            store.clone() as Arc<dyn ResourceClient>,
            Arc::new(StaticIdentity(user)),
            navigator.clone(),
            preview.clone(),
        );

        Self {
            store,
            navigator,
            preview,
            state,
        }
    }

    pub fn employee(bills: Vec<Bill>) -> Self {
        Self::with_user(User::employee("a@a"), bills)
    }
}

#[allow(clippy::too_many_arguments)]
pub fn bill(
    id: &str,
    expense_type: &str,
    name: &str,
    amount: i64,
    date: &str,
    status: &str,
    file_name: &str,
    comment_admin: &str,
) -> Bill {
    Bill {
        id: id.to_string(),
        email: "a@a".to_string(),
        expense_type: expense_type.to_string(),
        name: name.to_string(),
        amount: Some(Decimal::from(amount)),
        date: date.to_string(),
        vat: "20".to_string(),
        pct: 20,
        commentary: String::new(),
        file_url: format!("https://test.storage.tld/v0/b/billable-677b6.appspot.com/o/{}", file_name),
        file_name: file_name.to_string(),
        status: status.to_string(),
        comment_admin: Some(comment_admin.to_string()),
    }
}

/// The four bills of the reference data set, in store order.
pub fn fixture_bills() -> Vec<Bill> {
    vec![
        bill(
            "47qAXb6fIm2zOKkLzMro",
            "Hôtel et logement",
            "encore",
            400,
            "2004-04-04",
            "pending",
            "preview-facture-free-201801-pdf-1.jpg",
            "ok",
        ),
        bill(
            "qcCK3SzECmaZAGRrHjaC",
            "Restaurants et bars",
            "test2",
            200,
            "2002-02-02",
            "refused",
            "preview-facture-free-201801-pdf-1.jpg",
            "pas la bonne facture",
        ),
        bill(
            "UIUZtnPQvnbFnB0ozvJh",
            "Services en ligne",
            "test3",
            300,
            "2003-03-03",
            "accepted",
            "facture-client-php-exportee-dans-document-pdf-enregistre-sur-disque-dur.png",
            "bon bah d'accord",
        ),
        bill(
            "BeKy5Mo4jkmdfPGYpTxZ",
            "Transports",
            "test1",
            100,
            "2001-01-01",
            "refused",
            "1592770761.jpeg",
            "en fait non",
        ),
    ]
}
