mod common;

use chrono::Duration;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

fn generic_failure() -> serde_json::Value {
    json!({
        "error type": "Bad Request",
        "code": "400",
        "message": "에러 발생"
    })
}

#[tokio::test]
async fn test_sign_up_success() {
    let app = TestApp::spawn().await;

    let response = app.sign_up("flature", "pass_word!", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "success": true, "code": 0, "msg": "Success" }));
}

#[tokio::test]
async fn test_sign_up_duplicate_id() {
    let app = TestApp::spawn().await;
    app.sign_up("flature", "pass_word!", None).await;

    let response = app.sign_up("flature", "other", None).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, generic_failure());
}

#[tokio::test]
async fn test_sign_up_blank_field() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/sign-api/sign-up")
        .json(&json!({ "id": "flature", "password": "pw", "name": "" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_sign_in_success() {
    let app = TestApp::spawn().await;
    app.sign_up("flature", "pass_word!", None).await;

    let response = app.sign_in("flature", "pass_word!").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
    assert_eq!(body["code"], 0);
    assert_eq!(body["msg"], "Success");
    assert_eq!(body["token"].as_str().unwrap().split('.').count(), 3);
}

#[tokio::test]
async fn test_sign_in_wrong_password() {
    let app = TestApp::spawn().await;
    app.sign_up("flature", "pass_word!", None).await;

    let response = app.sign_in("flature", "wrong").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, generic_failure());
}

#[tokio::test]
async fn test_sign_in_unknown_id() {
    let app = TestApp::spawn().await;

    let response = app.sign_in("ghost", "pass_word!").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, generic_failure());
}

#[tokio::test]
async fn test_exception_endpoint() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/sign-api/exception")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, generic_failure());
}

#[tokio::test]
async fn test_get_product_anonymous() {
    let app = TestApp::spawn().await;
    let number = app.seed_product("pen").await;

    let response = app
        .get(&format!("/product/{number}"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body,
        json!({ "number": number, "name": "pen", "price": 1000, "stock": 10 })
    );
}

#[tokio::test]
async fn test_get_product_not_found() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/product/999")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_product_anonymous_is_unauthenticated() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/product")
        .json(&json!({ "name": "pen", "price": 1000, "stock": 10 }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers()["content-type"],
        "application/json;charset=UTF-8"
    );
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "msg": "인증이 실패핬습니다." }));
}

#[tokio::test]
async fn test_create_product_as_user_is_forbidden() {
    let app = TestApp::spawn().await;
    let token = app.token_for("flature", Some("user")).await;

    let response = TestApp::with_token(app.post("/product"), &token)
        .json(&json!({ "name": "pen", "price": 1000, "stock": 10 }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "msg": "접근이 금지되었습니다." }));
}

#[tokio::test]
async fn test_create_product_as_admin() {
    let app = TestApp::spawn().await;
    let token = app.token_for("admin", Some("ADMIN")).await;

    let response = TestApp::with_token(app.post("/product"), &token)
        .json(&json!({ "name": "pen", "price": 1000, "stock": 10 }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["number"].is_i64());
    assert_eq!(body["name"], "pen");
    assert_eq!(body["price"], 1000);
    assert_eq!(body["stock"], 10);
}

#[tokio::test]
async fn test_create_product_negative_price() {
    let app = TestApp::spawn().await;
    let token = app.token_for("admin", Some("admin")).await;

    let response = TestApp::with_token(app.post("/product"), &token)
        .json(&json!({ "name": "pen", "price": -1, "stock": 10 }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_change_product_name_as_admin() {
    let app = TestApp::spawn().await;
    let number = app.seed_product("pen").await;
    let token = app.token_for("admin", Some("admin")).await;

    let response = TestApp::with_token(app.put("/product"), &token)
        .json(&json!({ "number": number, "name": "pencil" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["name"], "pencil");
}

#[tokio::test]
async fn test_delete_product() {
    let app = TestApp::spawn().await;
    let number = app.seed_product("pen").await;
    let user_token = app.token_for("flature", None).await;
    let admin_token = app.token_for("admin", Some("admin")).await;

    let response = TestApp::with_token(app.delete(&format!("/product/{number}")), &user_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = TestApp::with_token(app.delete(&format!("/product/{number}")), &admin_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "Delete product successfully");

    let response = app
        .get(&format!("/product/{number}"))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_token_is_treated_as_anonymous() {
    let app = TestApp::spawn().await;
    let number = app.seed_product("pen").await;

    // Public route still works with a garbage token
    let response = TestApp::with_token(app.get(&format!("/product/{number}")), "invalid.token.here")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    // Protected route reports the caller as unauthenticated
    let response = TestApp::with_token(app.post("/product"), "invalid.token.here")
        .json(&json!({ "name": "pen", "price": 1000, "stock": 10 }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_treated_as_anonymous() {
    let app = TestApp::spawn().await;
    let token = app.token_for("admin", Some("admin")).await;

    app.clock.advance(Duration::seconds(3600));
    let response = TestApp::with_token(app.post("/product"), &token)
        .json(&json!({ "name": "pen", "price": 1000, "stock": 10 }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    app.clock.advance(Duration::seconds(1));
    let response = TestApp::with_token(app.post("/product"), &token)
        .json(&json!({ "name": "pen", "price": 1000, "stock": 10 }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_route_requires_admin() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/orders")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_api_docs_are_public() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api-docs")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["paths"]["/sign-api/sign-in"].is_object());
}

#[tokio::test]
async fn test_sign_up_missing_field() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/sign-api/sign-up")
        .json(&json!({ "password": "pw", "name": "Flature" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, generic_failure());
}

#[tokio::test]
async fn test_sign_up_malformed_json() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/sign-api/sign-up")
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, generic_failure());
}

#[tokio::test]
async fn test_sign_in_missing_field() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/sign-api/sign-in")
        .json(&json!({ "id": "flature" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, generic_failure());
}

#[tokio::test]
async fn test_sign_in_malformed_json() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/sign-api/sign-in")
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, generic_failure());
}

#[tokio::test]
async fn test_sign_in_without_content_type() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/sign-api/sign-in")
        .body(r#"{"id":"flature","password":"pass_word!"}"#)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, generic_failure());
}
