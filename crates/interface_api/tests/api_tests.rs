//! HTTP API tests for interface_api

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use domain_split::ExpenseBook;
use interface_api::{create_router, AppState};
use test_utils::{ExpenseBuilder, TestBookBuilder};

fn app_with(book: ExpenseBook) -> (Router, AppState) {
    let state = AppState::new(book);
    (create_router(state.clone()), state)
}

fn app() -> Router {
    app_with(ExpenseBook::new()).0
}

fn app_with_pair() -> Router {
    let book = TestBookBuilder::new()
        .with_participants(&["Ana", "Ben"])
        .build();
    app_with(book).0
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

// ============================================================================
// Health
// ============================================================================

mod health {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        let (status, body) = send(&app(), Method::GET, "/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }
}

// ============================================================================
// Participants
// ============================================================================

mod participants {
    use super::*;

    #[tokio::test]
    async fn test_add_participant() {
        let app = app();
        let (status, body) =
            send(&app, Method::POST, "/api/participants", Some(json!({"name": "Ana"}))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"participants": ["Ana"]}));
    }

    #[tokio::test]
    async fn test_duplicate_participant_rejected() {
        let app = app_with_pair();
        let (status, body) =
            send(&app, Method::POST, "/api/participants", Some(json!({"name": "ANA"}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad_request");
    }

    #[tokio::test]
    async fn test_missing_name_rejected() {
        let app = app();
        let (status, body) = send(&app, Method::POST, "/api/participants", Some(json!({}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Name cannot be empty");
    }

    #[tokio::test]
    async fn test_malformed_body_rejected() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/participants")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_remove_participant() {
        let app = app_with_pair();
        let (status, body) = send(&app, Method::DELETE, "/api/participants/Ana", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"participants": ["Ben"]}));
    }

    #[tokio::test]
    async fn test_remove_unknown_participant() {
        let app = app_with_pair();
        let (status, body) = send(&app, Method::DELETE, "/api/participants/Zed", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }
}

// ============================================================================
// Expenses
// ============================================================================

mod expenses {
    use super::*;

    fn dinner() -> Value {
        json!({
            "description": "Dinner",
            "amount": 100,
            "paidBy": "Ana",
            "splitAmong": ["Ana", "Ben"]
        })
    }

    #[tokio::test]
    async fn test_add_expense() {
        let app = app_with_pair();
        let (status, body) = send(&app, Method::POST, "/api/expenses", Some(dinner())).await;

        assert_eq!(status, StatusCode::OK);
        let expense = &body["expense"];
        assert_eq!(expense["description"], "Dinner");
        assert_eq!(expense["amount"], 100.0);
        assert_eq!(expense["paidBy"], "Ana");
        assert_eq!(expense["splitAmong"], json!(["Ana", "Ben"]));
        assert!(expense["id"].as_str().unwrap().starts_with("EXP-"));
    }

    #[tokio::test]
    async fn test_amount_as_string_accepted() {
        let app = app_with_pair();
        let mut body = dinner();
        body["amount"] = json!("12.50");

        let (status, body) = send(&app, Method::POST, "/api/expenses", Some(body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["expense"]["amount"], 12.5);
    }

    #[tokio::test]
    async fn test_invalid_expense_rejected() {
        let app = app_with_pair();
        let mut body = dinner();
        body["splitAmong"] = json!([]);

        let (status, body) = send(&app, Method::POST, "/api/expenses", Some(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Must select at least one person to split between");
    }

    #[tokio::test]
    async fn test_missing_amount_rejected() {
        let app = app_with_pair();
        let mut body = dinner();
        body.as_object_mut().unwrap().remove("amount");

        let (status, body) = send(&app, Method::POST, "/api/expenses", Some(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Amount must be a positive number");
    }

    #[tokio::test]
    async fn test_delete_expense() {
        let app = app_with_pair();
        let (_, created) = send(&app, Method::POST, "/api/expenses", Some(dinner())).await;
        let id = created["expense"]["id"].as_str().unwrap().to_string();

        let (status, body) =
            send(&app, Method::DELETE, &format!("/api/expenses/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true}));

        let (status, _) = send(&app, Method::DELETE, &format!("/api/expenses/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_unknown_expense() {
        let uri = format!("/api/expenses/{}", uuid::Uuid::new_v4());
        let (status, _) = send(&app_with_pair(), Method::DELETE, &uri, None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_unparsable_id() {
        let (status, _) =
            send(&app_with_pair(), Method::DELETE, "/api/expenses/1718000000000", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_data_lists_everything() {
        let app = app_with_pair();
        send(&app, Method::POST, "/api/expenses", Some(dinner())).await;

        let (status, body) = send(&app, Method::GET, "/api/data", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["participants"], json!(["Ana", "Ben"]));
        assert_eq!(body["expenses"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_clear_keeps_participants() {
        let app = app_with_pair();
        send(&app, Method::POST, "/api/expenses", Some(dinner())).await;

        let (status, body) = send(&app, Method::POST, "/api/clear", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true}));

        let (_, data) = send(&app, Method::GET, "/api/data", None).await;
        assert_eq!(data["expenses"], json!([]));
        assert_eq!(data["participants"], json!(["Ana", "Ben"]));
    }
}

// ============================================================================
// Balances and Stats
// ============================================================================

mod balances {
    use super::*;
    use rust_decimal_macros::dec;
    use core_kernel::Money;

    #[tokio::test]
    async fn test_pair_balances() {
        let app = app_with_pair();
        send(
            &app,
            Method::POST,
            "/api/expenses",
            Some(json!({
                "description": "Dinner",
                "amount": 100,
                "paidBy": "Ana",
                "splitAmong": ["Ana", "Ben"]
            })),
        )
        .await;

        let (status, body) = send(&app, Method::GET, "/api/balances", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["balances"]["Ana"], 50.0);
        assert_eq!(body["balances"]["Ben"], -50.0);
        assert_eq!(
            body["settlements"],
            json!([{"from": "Ben", "to": "Ana", "amount": 50.0}])
        );
    }

    #[tokio::test]
    async fn test_uneven_split_balances_are_whole_cents() {
        let book = TestBookBuilder::new()
            .with_participants(&["Ana", "Ben", "Cy"])
            .with_expense(
                ExpenseBuilder::new()
                    .with_amount(Money::new(dec!(100)))
                    .paid_by("Ana")
                    .split_among(&["Ana", "Ben", "Cy"])
                    .build_request(),
            )
            .build();
        let (app, _) = app_with(book);

        let (_, body) = send(&app, Method::GET, "/api/balances", None).await;

        // Ana carries the leftover cent of her own share
        assert_eq!(body["balances"]["Ana"], 66.66);
        assert_eq!(body["balances"]["Ben"], -33.33);
        assert_eq!(body["balances"]["Cy"], -33.33);
        assert_eq!(body["settlements"][0]["amount"], 33.33);
        assert_eq!(body["settlements"][1]["amount"], 33.33);
    }

    #[tokio::test]
    async fn test_balance_order_follows_registration() {
        let book = TestBookBuilder::new()
            .with_participants(&["Zoe", "Ana"])
            .build();
        let (app, _) = app_with(book);

        let request = Request::builder().uri("/api/balances").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();

        assert!(text.find("Zoe").unwrap() < text.find("Ana").unwrap());
    }

    #[tokio::test]
    async fn test_stats() {
        let book = TestBookBuilder::new()
            .with_participants(&["Ana", "Ben"])
            .with_expense(
                ExpenseBuilder::new()
                    .with_amount(Money::new(dec!(90)))
                    .paid_by("Ana")
                    .split_among(&["Ana", "Ben"])
                    .build_request(),
            )
            .with_expense(
                ExpenseBuilder::new()
                    .with_amount(Money::new(dec!(30)))
                    .paid_by("Ben")
                    .split_among(&["Ben"])
                    .build_request(),
            )
            .build();
        let (app, _) = app_with(book);

        let (status, body) = send(&app, Method::GET, "/api/stats", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 120.0);
        assert_eq!(body["average"], 60.0);
        assert_eq!(body["byPayer"]["Ben"], 30.0);
        assert_eq!(body["participants"]["Ben"]["owes"], 75.0);
        assert_eq!(body["participants"]["Ana"]["balance"], 45.0);
    }

    #[tokio::test]
    async fn test_requests_share_one_book() {
        let (app, state) = app_with(ExpenseBook::new());
        send(&app, Method::POST, "/api/participants", Some(json!({"name": "Ana"}))).await;

        let book = state.book.read().await;
        assert!(book.has_participant("Ana"));
    }
}
