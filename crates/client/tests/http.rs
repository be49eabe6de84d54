use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{get, post, put},
};
use serde_json::{Value, json};

use api_types::{
    SplitMode, SplitType,
    expense::ExpenseNew,
    settle::SettleUp,
};
use client::{Client, ClientError};

fn expense_record(id: i64, body: &Value) -> Value {
    json!({
        "id": id,
        "description": body["description"],
        "currency": body["currency"],
        "amount": body["amount"],
        "splitType": body["splitType"],
        "group_id": body["group_id"],
        "payer_id": body["payer_id"],
        "created_at": "2026-08-29T10:00:00+05:30",
    })
}

fn stub_router() -> Router {
    Router::new()
        .route(
            "/expenses",
            post(|Json(body): Json<Value>| async move { Json(expense_record(501, &body)) }),
        )
        .route(
            "/expenses/{id}",
            put(|Path(id): Path<i64>, Json(body): Json<Value>| async move {
                Json(expense_record(id, &body))
            }),
        )
        .route(
            "/api/friends/7",
            get(|| async { Json(json!([{"id": 3, "name": "Ana"}, {"id": 9, "name": "Bo"}])) }),
        )
        .route(
            "/api/groups/7",
            get(|| async {
                Json(json!([{
                    "group_id": 11,
                    "group_name": "Flat",
                    "members": [{"id": 3, "name": "Ana"}],
                }]))
            }),
        )
        .route(
            "/expense-summary/7",
            get(|| async {
                Json(json!([{
                    "friend_id": 3,
                    "friend_name": "Ana",
                    "amount_owed": 30.0,
                    "is_debtor": false,
                    "groups": [],
                }]))
            }),
        )
        .route(
            "/settle-up",
            post(|Json(body): Json<Value>| async move {
                if body["settle_up_amount"].as_f64() == Some(0.0) {
                    return (
                        StatusCode::UNPROCESSABLE_ENTITY,
                        Json(json!({"error": "amount must be positive"})),
                    );
                }
                (StatusCode::OK, Json(json!({})))
            }),
        )
        .route(
            "/users/7/activities",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "boom"})),
                )
            }),
        )
}

async fn spawn_stub() -> Client {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, stub_router()).await.unwrap();
    });
    Client::new(&format!("http://{addr}/")).unwrap()
}

fn expense_payload() -> ExpenseNew {
    ExpenseNew {
        user_id: 7,
        description: "Dinner".to_string(),
        currency: "INR".to_string(),
        amount: 90.0,
        split_type: SplitType::Equal,
        group_id: None,
        participants: vec![7, 3],
        payer_id: 7,
        custom_splits: Default::default(),
        split_mode: SplitMode::Amount,
    }
}

#[tokio::test]
async fn create_and_update_echo_the_expense() {
    let client = spawn_stub().await;

    let created = client.expense_create(&expense_payload()).await.unwrap();
    assert_eq!(created.id, 501);
    assert_eq!(created.description, "Dinner");
    assert_eq!(created.payer_id, 7);

    let updated = client.expense_update(501, &expense_payload()).await.unwrap();
    assert_eq!(updated.id, 501);
}

#[tokio::test]
async fn list_endpoints_return_rows() {
    let client = spawn_stub().await;

    let friends = client.friends(7).await.unwrap();
    assert_eq!(friends.len(), 2);
    assert_eq!(friends[0].name, "Ana");

    let groups = client.groups(7).await.unwrap();
    assert_eq!(groups[0].group_name, "Flat");
    assert_eq!(groups[0].members.len(), 1);

    let summary = client.expense_summary(7).await.unwrap();
    assert_eq!(summary[0].friend_id, 3);
    assert!(!summary[0].is_debtor);
}

#[tokio::test]
async fn missing_lists_are_empty_not_errors() {
    let client = spawn_stub().await;

    // User 8 has no routes: the backend answers 404 for every list.
    assert!(client.friends(8).await.unwrap().is_empty());
    assert!(client.groups(8).await.unwrap().is_empty());
    assert!(client.expense_summary(8).await.unwrap().is_empty());
    assert!(client.activities(8).await.unwrap().is_empty());
}

#[tokio::test]
async fn settle_up_maps_validation_errors() {
    let client = spawn_stub().await;

    let mut payload = SettleUp {
        user_id: 7,
        creditor_id: 3,
        debtor_id: 7,
        settle_up_amount: 25.0,
        group_id: Some(11),
    };
    client.settle_up(&payload).await.unwrap();

    payload.settle_up_amount = 0.0;
    let err = client.settle_up(&payload).await.unwrap_err();
    match err {
        ClientError::Validation(message) => assert_eq!(message, "amount must be positive"),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn server_errors_carry_the_backend_message() {
    let client = spawn_stub().await;

    let err = client.activities(7).await.unwrap_err();
    match err {
        ClientError::Server(message) => assert_eq!(message, "boom"),
        other => panic!("expected server error, got {other:?}"),
    }
}
