//! HTTP resource client tests against a mock store.

use billed_frontend::config::StoreSettings;
use billed_frontend::error::AppError;
use billed_frontend::models::{Bill, BillDraft, BillStatus};
use billed_frontend::services::{CreateBill, HttpResourceClient, ReceiptUpload, ResourceClient};
use secrecy::Secret;
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, api_token: Option<&str>) -> HttpResourceClient {
    HttpResourceClient::new(StoreSettings {
        base_url: server.uri(),
        collection: "bills".to_string(),
        api_token: api_token.map(|t| Secret::new(t.to_string())),
        timeout_secs: 5,
    })
}

fn stored_bill() -> serde_json::Value {
    json!({
        "id": "47qAXb6fIm2zOKkLzMro",
        "email": "a@a",
        "type": "Services en ligne",
        "name": "testValid",
        "amount": 300,
        "date": "2003-03-03",
        "vat": "100",
        "pct": 100,
        "commentary": "",
        "fileUrl": "https://test.storage.tld/v0/b/billable-677b6.appspot.com/o/facture.png",
        "fileName": "facture.png",
        "status": "pending"
    })
}

fn draft() -> BillDraft {
    BillDraft {
        email: "a@a".to_string(),
        expense_type: "Services en ligne".to_string(),
        name: "testValid".to_string(),
        amount: None,
        date: "2003-03-03".to_string(),
        vat: "100".to_string(),
        pct: 100,
        commentary: String::new(),
        file_name: "facture.png".to_string(),
        status: BillStatus::Pending,
    }
}

#[tokio::test]
async fn list_decodes_store_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bills"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([stored_bill()])))
        .expect(1)
        .mount(&server)
        .await;

    let bills = client_for(&server, None).list().await.unwrap();

    assert_eq!(bills.len(), 1);
    assert_eq!(bills[0].id, "47qAXb6fIm2zOKkLzMro");
    assert_eq!(bills[0].file_name, "facture.png");
}

#[tokio::test]
async fn one_malformed_record_does_not_fail_the_list() {
    let server = MockServer::start().await;
    let mut null_date = stored_bill();
    null_date["id"] = json!("null-date");
    null_date["date"] = json!(null);
    let mut text_pct = stored_bill();
    text_pct["id"] = json!("text-pct");
    text_pct["pct"] = json!("20");
    let mut no_id = stored_bill();
    no_id.as_object_mut().unwrap().remove("id");

    Mock::given(method("GET"))
        .and(path("/bills"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            stored_bill(),
            null_date,
            text_pct,
            no_id
        ])))
        .mount(&server)
        .await;

    let bills = client_for(&server, None).list().await.unwrap();

    assert_eq!(bills.len(), 4);
    assert_eq!(bills[1].id, "null-date");
    assert!(bills[1].date.is_empty());
    assert_eq!(bills[2].pct, 20);
    assert!(bills[3].id.is_empty());
    assert_eq!(bills[3].date, "2003-03-03");
}

#[tokio::test]
async fn non_object_entries_are_skipped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bills"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([stored_bill(), 42, "oops"])),
        )
        .mount(&server)
        .await;

    let bills = client_for(&server, None).list().await.unwrap();

    assert_eq!(bills.len(), 1);
    assert_eq!(bills[0].id, "47qAXb6fIm2zOKkLzMro");
}

#[tokio::test]
async fn error_statuses_become_displayable_messages() {
    for status in [404u16, 500] {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/bills"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let err = client_for(&server, None).list().await.unwrap_err();
        assert!(matches!(err, AppError::Fetch(_)));
        assert_eq!(err.to_string(), format!("Erreur {}", status));
    }
}

#[tokio::test]
async fn create_posts_to_collection_and_returns_persisted_bill() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bills"))
        .and(body_string_contains(r#"name="bill""#))
        .and(body_string_contains(r#""fileName":"facture.png""#))
        .and(body_string_contains(r#""type":"Services en ligne""#))
        .and(body_string_contains(r#"name="file"; filename="facture.png""#))
        .and(body_string_contains("fake-png-bytes"))
        .respond_with(ResponseTemplate::new(201).set_body_json(stored_bill()))
        .expect(1)
        .mount(&server)
        .await;

    let bill = client_for(&server, None)
        .create(CreateBill {
            draft: draft(),
            receipt: Some(ReceiptUpload {
                file_name: "facture.png".to_string(),
                content_type: "image/png".to_string(),
                data: b"fake-png-bytes".to_vec(),
            }),
        })
        .await
        .unwrap();

    assert_eq!(bill.id, "47qAXb6fIm2zOKkLzMro");
    assert!(!bill.file_url.is_empty());
}

#[tokio::test]
async fn update_puts_to_the_bill_resource() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/bills/47qAXb6fIm2zOKkLzMro"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored_bill()))
        .expect(1)
        .mount(&server)
        .await;

    let bill: Bill = serde_json::from_value(stored_bill()).unwrap();
    let updated = client_for(&server, None).update(&bill).await.unwrap();

    assert_eq!(updated, bill);
}

#[tokio::test]
async fn api_token_is_sent_as_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bills"))
        .and(header("authorization", "Bearer store-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let bills = client_for(&server, Some("store-token")).list().await.unwrap();
    assert!(bills.is_empty());
}

#[tokio::test]
async fn unreachable_store_is_a_fetch_error() {
    let server = MockServer::start().await;
    let client = client_for(&server, None);
    drop(server);

    assert!(matches!(client.list().await, Err(AppError::Fetch(_))));
}

#[tokio::test]
async fn malformed_body_is_a_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bills"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    assert!(matches!(
        client_for(&server, None).list().await,
        Err(AppError::Fetch(_))
    ));
}
