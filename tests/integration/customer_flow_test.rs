// Integration tests for the customer CRUD flow against a temp-file store.

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};
use tempfile::TempDir;

use debtwatch::core::error::json_error_handler;
use debtwatch::modules::customers;
use debtwatch::modules::customers::repositories::CustomerRepository;
use debtwatch::modules::customers::services::CustomerService;
use debtwatch::storage::JsonStore;

macro_rules! spawn_app {
    ($dir:expr) => {{
        let store = Arc::new(JsonStore::open($dir.path().join("customers.json")).unwrap());
        let service = web::Data::new(CustomerService::new(CustomerRepository::new(store)));
        test::init_service(
            App::new()
                .app_data(service)
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .service(web::scope("/api").configure(customers::controllers::configure)),
        )
        .await
    }};
}

fn customer_payload(name: &str, cpf: &str, email: &str) -> Value {
    json!({
        "name": name,
        "cpf": cpf,
        "email": email,
        "phone": "(11) 98888-7777",
        "address": {
            "street": "Rua das Flores",
            "number": "52",
            "district": "Centro",
            "city": "São Paulo",
            "state": "SP",
            "postal_code": "01234-567"
        }
    })
}

fn purchase_payload() -> Value {
    json!({
        "amount": 500,
        "date": "2020-01-10",
        "contract_id": "0480000000000000199111669920190508",
        "installments": [
            {
                "due_amount": 100,
                "due_date": "2020-02-10",
                "last_payment_date": "2020-02-10",
                "amount_paid": 100,
                "open_capital": 0
            }
        ]
    })
}

#[actix_web::test]
async fn customer_crud_flow() {
    let dir = TempDir::new().unwrap();
    let app = spawn_app!(dir);

    // Create
    let req = test::TestRequest::post()
        .uri("/api/customers")
        .set_json(customer_payload("Ana Souza", "12345678901", "ana@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["id"], json!(1));
    assert_eq!(body["data"]["purchase_history"], json!([]));

    // List strips address and history
    let req = test::TestRequest::get().uri("/api/customers").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert!(body["data"][0].get("address").is_none());

    // Fetch by id returns the full record
    let req = test::TestRequest::get().uri("/api/customers/1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["address"]["city"], json!("São Paulo"));

    // Partial update merges address fields
    let req = test::TestRequest::put()
        .uri("/api/customers/1")
        .set_json(json!({
            "phone": "(21) 99999-0000",
            "address": { "city": "Campinas" }
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["phone"], json!("(21) 99999-0000"));
    assert_eq!(body["data"]["address"]["city"], json!("Campinas"));
    assert_eq!(body["data"]["address"]["street"], json!("Rua das Flores"));

    // Delete returns the removed record, then fetch is a 404
    let req = test::TestRequest::delete().uri("/api/customers/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/customers/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!("customer not found"));
}

#[actix_web::test]
async fn duplicate_cpf_is_a_conflict() {
    let dir = TempDir::new().unwrap();
    let app = spawn_app!(dir);

    let req = test::TestRequest::post()
        .uri("/api/customers")
        .set_json(customer_payload("Ana Souza", "12345678901", "ana@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/customers")
        .set_json(customer_payload("Beto Lima", "12345678901", "beto@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], json!("CPF already registered"));
}

#[actix_web::test]
async fn invalid_payloads_are_rejected() {
    let dir = TempDir::new().unwrap();
    let app = spawn_app!(dir);

    // Malformed CPF fails field validation
    let req = test::TestRequest::post()
        .uri("/api/customers")
        .set_json(customer_payload("Ana Souza", "123", "ana@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(false));

    // Missing required fields fail at deserialization, same envelope
    let req = test::TestRequest::post()
        .uri("/api/customers")
        .set_json(json!({ "name": "Ana Souza" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(false));
}

#[actix_web::test]
async fn purchase_history_flow() {
    let dir = TempDir::new().unwrap();
    let app = spawn_app!(dir);

    let req = test::TestRequest::post()
        .uri("/api/customers")
        .set_json(customer_payload("Ana Souza", "12345678901", "ana@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    // History starts empty
    let req = test::TestRequest::get()
        .uri("/api/customers/1/purchases")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"], json!([]));

    // Append a purchase
    let req = test::TestRequest::post()
        .uri("/api/customers/1/purchases")
        .set_json(purchase_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["id"], json!(1));
    assert_eq!(body["data"]["amount"], json!("500"));

    let req = test::TestRequest::get()
        .uri("/api/customers/1/purchases")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    // Appending to an unknown customer is a 404
    let req = test::TestRequest::post()
        .uri("/api/customers/99/purchases")
        .set_json(purchase_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn data_survives_a_store_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("customers.json");

    {
        let store = Arc::new(JsonStore::open(&path).unwrap());
        let service = web::Data::new(CustomerService::new(CustomerRepository::new(store)));
        let app = test::init_service(
            App::new()
                .app_data(service)
                .service(web::scope("/api").configure(customers::controllers::configure)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/customers")
            .set_json(customer_payload("Ana Souza", "12345678901", "ana@example.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    // A fresh store sees the record written by the first one
    let reopened = JsonStore::open(&path).unwrap();
    let names = reopened
        .read(|db| db.customers.iter().map(|c| c.name.clone()).collect::<Vec<_>>())
        .await;
    assert_eq!(names, ["Ana Souza"]);
}
