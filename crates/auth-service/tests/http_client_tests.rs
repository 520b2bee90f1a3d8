//! HTTP collaborator tests against a mock auth API served by axum on an
//! ephemeral port.

use auth_service::http::UNREACHABLE_MESSAGE;
use auth_service::{AuthService, HttpAuthService};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{AppErrorKind, Role, SignInRequest, SignUpRequest, GENERIC_ERROR_MESSAGE};

const GOOD_TOKEN: &str = "tok-valid";
const STALE_TOKEN: &str = "tok-stale";

fn profile_json() -> Value {
    json!({"firstName": "Nadia", "lastName": "Roux", "role": "doctor", "isOnline": true})
}

async fn signin(Json(body): Json<Value>) -> Response {
    if body["password"] != "correct" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "Identifiants invalides"})),
        )
            .into_response();
    }
    let token = if body["email"] == "stale@clinique.test" {
        STALE_TOKEN
    } else {
        GOOD_TOKEN
    };
    Json(json!({"accessToken": token, "profile": profile_json()})).into_response()
}

async fn signup(Json(body): Json<Value>) -> Response {
    if body["email"] == "taken@clinique.test" {
        return (
            StatusCode::CONFLICT,
            Json(json!({"error": {"message": "Email déjà utilisé"}})),
        )
            .into_response();
    }
    let profile = json!({
        "firstName": body["firstName"],
        "lastName": body["lastName"],
        "role": body["role"],
        "isOnline": true,
    });
    Json(json!({"accessToken": GOOD_TOKEN, "profile": profile})).into_response()
}

async fn recover(Json(body): Json<Value>) -> Response {
    match body["email"].as_str() {
        Some("ghost@clinique.test") => (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "Utilisateur introuvable"})),
        )
            .into_response(),
        Some("proxy@clinique.test") => {
            (StatusCode::BAD_GATEWAY, "<html>502 Bad Gateway</html>").into_response()
        }
        _ => StatusCode::NO_CONTENT.into_response(),
    }
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

async fn signout(headers: HeaderMap) -> StatusCode {
    match bearer(&headers) {
        Some(_) => StatusCode::NO_CONTENT,
        None => StatusCode::UNAUTHORIZED,
    }
}

async fn profile(headers: HeaderMap) -> Response {
    match bearer(&headers) {
        Some(GOOD_TOKEN) => Json(profile_json()).into_response(),
        _ => StatusCode::UNAUTHORIZED.into_response(),
    }
}

/// Start the mock API and return its base URL.
async fn spawn_api() -> String {
    let app = Router::new()
        .route("/auth/signin", post(signin))
        .route("/auth/signup", post(signup))
        .route("/auth/recover", post(recover))
        .route("/auth/signout", post(signout))
        .route("/auth/profile", get(profile));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn credentials(email: &str, password: &str) -> SignInRequest {
    SignInRequest {
        email: email.into(),
        password: password.into(),
    }
}

#[tokio::test]
async fn sign_in_opens_session_and_profile_is_fetchable() {
    let svc = HttpAuthService::new(spawn_api().await);

    let profile = svc
        .sign_in(&credentials("nadia@clinique.test", "correct"))
        .await
        .unwrap();
    assert_eq!(profile.role, Role::Doctor);
    assert!(svc.has_session());

    let current = svc.current_profile().await.unwrap();
    assert_eq!(current, Some(profile));
}

#[tokio::test]
async fn sign_in_failure_surfaces_api_message() {
    let svc = HttpAuthService::new(spawn_api().await);

    let err = svc
        .sign_in(&credentials("nadia@clinique.test", "wrong"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::SignInFailed);
    assert_eq!(err.message, "Identifiants invalides");
    assert!(!svc.has_session());
}

#[tokio::test]
async fn sign_up_returns_profile_from_request() {
    let svc = HttpAuthService::new(spawn_api().await);

    let profile = svc
        .sign_up(&SignUpRequest {
            email: "new@clinique.test".into(),
            password: "pw".into(),
            first_name: "Inès".into(),
            last_name: "Garnier".into(),
            role: Role::Patient,
        })
        .await
        .unwrap();
    assert_eq!(profile.full_name(), "Inès Garnier");
    assert_eq!(profile.role, Role::Patient);
    assert!(svc.has_session());
}

#[tokio::test]
async fn sign_up_conflict_reads_nested_error_message() {
    let svc = HttpAuthService::new(spawn_api().await);

    let err = svc
        .sign_up(&SignUpRequest {
            email: "taken@clinique.test".into(),
            password: "pw".into(),
            first_name: "A".into(),
            last_name: "B".into(),
            role: Role::Patient,
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::SignUpFailed);
    assert_eq!(err.message, "Email déjà utilisé");
}

#[tokio::test]
async fn reset_password_succeeds_on_no_content() {
    let svc = HttpAuthService::new(spawn_api().await);
    assert!(svc.reset_password("nadia@clinique.test").await.is_ok());
}

#[tokio::test]
async fn reset_password_failure_keeps_message_verbatim() {
    let svc = HttpAuthService::new(spawn_api().await);

    let err = svc.reset_password("ghost@clinique.test").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ResetFailed);
    assert_eq!(err.message, "Utilisateur introuvable");
}

#[tokio::test]
async fn reset_password_non_json_error_uses_generic_message() {
    let svc = HttpAuthService::new(spawn_api().await);

    let err = svc.reset_password("proxy@clinique.test").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ResetFailed);
    assert_eq!(err.message, GENERIC_ERROR_MESSAGE);
}

#[tokio::test]
async fn unreachable_api_is_reported_as_reset_failure() {
    let svc = HttpAuthService::new("http://127.0.0.1:1");

    let err = svc.reset_password("nadia@clinique.test").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ResetFailed);
    assert_eq!(err.message, UNREACHABLE_MESSAGE);
}

#[tokio::test]
async fn expired_session_yields_no_profile_and_drops_token() {
    let svc = HttpAuthService::new(spawn_api().await);

    svc.sign_in(&credentials("stale@clinique.test", "correct"))
        .await
        .unwrap();
    assert!(svc.has_session());

    assert_eq!(svc.current_profile().await.unwrap(), None);
    assert!(!svc.has_session());
}

#[tokio::test]
async fn sign_out_ends_session() {
    let svc = HttpAuthService::new(spawn_api().await);

    svc.sign_in(&credentials("nadia@clinique.test", "correct"))
        .await
        .unwrap();
    svc.sign_out().await.unwrap();

    assert!(!svc.has_session());
    assert_eq!(svc.current_profile().await.unwrap(), None);
}
