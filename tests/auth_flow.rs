mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, TestContext, ADMIN_PASSWORD};
use sea_orm::EntityTrait;
use serde_json::json;

#[actix_web::test]
async fn test_login_issues_verifiable_token() {
    println!("\n\n[+] Running test: test_login_issues_verifiable_token");
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;
    ctx.db.ensure_admin(ADMIN_PASSWORD).await.unwrap();

    println!("[>] Sending POST /token as admin");
    let req = test::TestRequest::post()
        .uri("/token")
        .set_form([("username", "admin"), ("password", ADMIN_PASSWORD), ("grant_type", "password")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["role"], "admin");
    assert_eq!(body["username"], "admin");

    let claims = ctx.tokens.verify(body["access_token"].as_str().unwrap()).unwrap();
    assert_eq!(claims.sub, "admin");
    println!("[/] Test passed: token issued and verified.");
}

#[actix_web::test]
async fn test_login_rejects_bad_credentials() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;
    ctx.db.ensure_admin(ADMIN_PASSWORD).await.unwrap();

    for (username, password) in [("admin", "wrong"), ("nobody", ADMIN_PASSWORD)] {
        let req = test::TestRequest::post()
            .uri("/token")
            .set_form([("username", username), ("password", password)])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{username}/{password}");
    }
}

#[actix_web::test]
async fn test_register_then_login() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(json!({ "username": "alice", "password": "s3cret" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["username"], "alice");
    assert_eq!(body["role"], "user");
    assert!(body.get("hashed_password").is_none());

    let req = test::TestRequest::post()
        .uri("/token")
        .set_form([("username", "alice"), ("password", "s3cret")])
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["role"], "user");
}

#[actix_web::test]
async fn test_register_duplicate_username_is_rejected() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;
    client.create_test_user("bob").await.unwrap();

    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(json!({ "username": "bob", "password": "other" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_me_requires_valid_token() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/me").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/me")
        .insert_header(("Authorization", "Bearer invalid_token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_me_returns_current_user() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;
    let (user, token) = client.create_test_user("carol").await.unwrap();

    let req = test::TestRequest::get()
        .uri("/me")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["id"], user.id);
    assert_eq!(body["username"], "carol");
    assert_eq!(body["role"], "user");
    assert!(body["driver_id"].is_null());
    assert_eq!(body["reported_stolen_cars"], json!([]));
}

#[actix_web::test]
async fn test_token_of_deleted_user_is_rejected() {
    println!("\n\n[+] Running test: test_token_of_deleted_user_is_rejected");
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;
    let (user, token) = client.create_test_user("ghost").await.unwrap();

    // Still structurally valid after the account is gone.
    entity::user::Entity::delete_by_id(user.id)
        .exec(ctx.db.connection())
        .await
        .unwrap();
    assert!(ctx.tokens.verify(&token).is_ok());

    let req = test::TestRequest::get()
        .uri("/me")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    println!("[/] Test passed: deleted user's token refused.");
}

#[actix_web::test]
async fn test_token_signed_elsewhere_is_rejected() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;
    client.create_test_user("dave").await.unwrap();

    let forged = smart_traffic::utils::token::TokenService::new("some-other-secret", 30)
        .issue("dave", entity::Role::Admin)
        .unwrap();

    let req = test::TestRequest::get()
        .uri("/me")
        .insert_header(("Authorization", format!("Bearer {}", forged)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_driver_profile_missing_for_generic_user() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;
    let (_user, token) = client.create_test_user("erin").await.unwrap();

    let req = test::TestRequest::get()
        .uri("/my-driver-profile")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_admin_routes_forbid_regular_users() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;
    let (_user, token) = client.create_test_user("frank").await.unwrap();

    let req = test::TestRequest::get()
        .uri("/drivers/")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let fields = common::test_data::driver_form("555", "PLATE-555", "LIC-555");
    let (content_type, payload) = common::multipart_body(&fields, None);
    let req = test::TestRequest::post()
        .uri("/drivers/")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .insert_header(("Content-Type", content_type))
        .set_payload(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    assert!(!ctx.db.national_id_taken("555").await.unwrap());
}

#[actix_web::test]
async fn test_admin_routes_require_a_token() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/drivers/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_password_reset_changes_login() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;
    ctx.db.ensure_admin(ADMIN_PASSWORD).await.unwrap();

    ctx.db.reset_password("admin", "n3w-pass").await.unwrap();

    let req = test::TestRequest::post()
        .uri("/token")
        .set_form([("username", "admin"), ("password", ADMIN_PASSWORD)])
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/token")
        .set_form([("username", "admin"), ("password", "n3w-pass")])
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    // Bootstrapping again must not clobber the new password.
    assert!(!ctx.db.ensure_admin(ADMIN_PASSWORD).await.unwrap());
}
