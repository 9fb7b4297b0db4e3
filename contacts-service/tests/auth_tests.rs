mod common;

use auth::TokenScope;
use chrono::Duration;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_signup_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/signup")
        .json(&json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "s3cret-password"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["user"]["username"], "alice");
    assert_eq!(body["data"]["user"]["email"], "alice@example.com");
    assert_eq!(body["data"]["user"]["confirmed"], false);
    assert!(body["data"]["user"]["id"].is_string());
    assert_eq!(
        body["data"]["detail"],
        "User successfully created. Check your email for confirmation."
    );

    // Credential material never leaves the service.
    assert!(body["data"]["user"].get("password_hash").is_none());
    assert!(body["data"]["user"].get("refresh_token").is_none());
}

#[tokio::test]
async fn test_signup_duplicate_email_conflicts() {
    let app = TestApp::spawn().await;

    let payload = json!({
        "username": "alice",
        "email": "alice@example.com",
        "password": "s3cret-password"
    });

    let response = app
        .post("/api/auth/signup")
        .json(&payload)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .post("/api/auth/signup")
        .json(&payload)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Account already exists");
}

#[tokio::test]
async fn test_signup_rejects_invalid_email() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/signup")
        .json(&json!({
            "username": "alice",
            "email": "not-an-email",
            "password": "s3cret-password"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_login_before_confirmation_is_generic_401() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/signup")
        .json(&json!({
            "username": "bob",
            "email": "bob@example.com",
            "password": "s3cret-password"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "bob@example.com",
            "password": "s3cret-password"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Indistinguishable from a wrong password or an unknown account.
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_unknown_account_is_generic_401() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "nobody@example.com",
            "password": "whatever-password"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_confirm_email_then_repeat_is_idempotent() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/signup")
        .json(&json!({
            "username": "carol",
            "email": "carol@example.com",
            "password": "s3cret-password"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let token = app.create_confirmation_token("carol@example.com");

    let response = app
        .get(&format!("/api/auth/confirmed_email/{}", token))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Email confirmed");

    let response = app
        .get(&format!("/api/auth/confirmed_email/{}", token))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Your email is already confirmed");
}

#[tokio::test]
async fn test_confirm_email_with_garbage_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/auth/confirmed_email/not-a-real-token")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Invalid token for email verification");
}

#[tokio::test]
async fn test_confirm_email_for_unknown_account() {
    let app = TestApp::spawn().await;

    let token = app.create_confirmation_token("ghost@example.com");

    let response = app
        .get(&format!("/api/auth/confirmed_email/{}", token))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Verification error");
}

#[tokio::test]
async fn test_login_after_confirmation_returns_bearer_pair() {
    let app = TestApp::spawn().await;
    app.signup_confirmed_user("dave", "dave@example.com", "s3cret-password")
        .await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "dave@example.com",
            "password": "s3cret-password"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["access_token"].is_string());
    assert!(body["data"]["refresh_token"].is_string());
    assert_eq!(body["data"]["token_type"], "bearer");
}

#[tokio::test]
async fn test_current_user_with_access_token() {
    let app = TestApp::spawn().await;
    let (access, _refresh) = app
        .create_logged_in_user("erin", "erin@example.com", "s3cret-password")
        .await;

    let response = app
        .get_authenticated("/api/users/me", &access)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["username"], "erin");
    assert_eq!(body["data"]["email"], "erin@example.com");
    assert_eq!(body["data"]["confirmed"], true);
}

#[tokio::test]
async fn test_protected_route_without_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/users/me")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Guard rejections share the standard response envelope.
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status_code"], 401);
    assert_eq!(body["data"]["message"], "Missing Authorization header");
}

#[tokio::test]
async fn test_protected_route_with_garbage_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get_authenticated("/api/users/me", "not-a-real-token")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status_code"], 401);
    assert_eq!(body["data"]["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_refresh_token_rejected_on_protected_route() {
    let app = TestApp::spawn().await;
    let (_access, refresh) = app
        .create_logged_in_user("frank", "frank@example.com", "s3cret-password")
        .await;

    // Scope tagging: a refresh token must not pass as an access token.
    let response = app
        .get_authenticated("/api/users/me", &refresh)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_access_token_rejected_on_refresh_route() {
    let app = TestApp::spawn().await;
    let (access, _refresh) = app
        .create_logged_in_user("grace", "grace@example.com", "s3cret-password")
        .await;

    let response = app
        .get_authenticated("/api/auth/refresh_token", &access)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_rotates_token_pair() {
    let app = TestApp::spawn().await;
    let (_access, refresh) = app
        .create_logged_in_user("heidi", "heidi@example.com", "s3cret-password")
        .await;

    // Tokens embed issuance time at second granularity; wait so the
    // rotated pair is observably different.
    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;

    let response = app
        .get_authenticated("/api/auth/refresh_token", &refresh)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let new_refresh = body["data"]["refresh_token"]
        .as_str()
        .expect("missing refresh_token");
    assert_ne!(new_refresh, refresh);

    // The rotated pair is immediately usable.
    let new_access = body["data"]["access_token"]
        .as_str()
        .expect("missing access_token");
    let response = app
        .get_authenticated("/api/users/me", new_access)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_refresh_replay_revokes_session() {
    let app = TestApp::spawn().await;
    let (_access, old_refresh) = app
        .create_logged_in_user("ivan", "ivan@example.com", "s3cret-password")
        .await;

    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;

    let response = app
        .get_authenticated("/api/auth/refresh_token", &old_refresh)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let new_refresh = body["data"]["refresh_token"]
        .as_str()
        .expect("missing refresh_token")
        .to_string();

    // Replaying the superseded token fails...
    let response = app
        .get_authenticated("/api/auth/refresh_token", &old_refresh)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // ...and revokes the whole session: the current token dies with it.
    let response = app
        .get_authenticated("/api/auth/refresh_token", &new_refresh)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_with_expired_token() {
    let app = TestApp::spawn().await;
    app.signup_confirmed_user("judy", "judy@example.com", "s3cret-password")
        .await;

    let expired = app.create_token(
        "judy@example.com",
        TokenScope::Refresh,
        Duration::seconds(-60),
    );

    let response = app
        .get_authenticated("/api/auth/refresh_token", &expired)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_request_email_for_unconfirmed_account() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/signup")
        .json(&json!({
            "username": "kate",
            "email": "kate@example.com",
            "password": "s3cret-password"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .post("/api/auth/request_email")
        .json(&json!({ "email": "kate@example.com" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Check your email for confirmation.");
}

#[tokio::test]
async fn test_request_email_does_not_reveal_account_existence() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/request_email")
        .json(&json!({ "email": "unknown@example.com" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Check your email for confirmation.");
}

#[tokio::test]
async fn test_request_email_for_confirmed_account() {
    let app = TestApp::spawn().await;
    app.signup_confirmed_user("liam", "liam@example.com", "s3cret-password")
        .await;

    let response = app
        .post("/api/auth/request_email")
        .json(&json!({ "email": "liam@example.com" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Your email is already confirmed");
}

#[tokio::test]
async fn test_update_avatar() {
    let app = TestApp::spawn().await;
    let (access, _refresh) = app
        .create_logged_in_user("mona", "mona@example.com", "s3cret-password")
        .await;

    let response = app
        .patch_authenticated("/api/users/avatar", &access)
        .json(&json!({ "avatar": "https://cdn.example.com/mona.png" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["avatar"], "https://cdn.example.com/mona.png");
}
