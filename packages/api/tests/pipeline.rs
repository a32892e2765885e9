//! Pipeline behavior against a live local server.
//!
//! Each test spins up its own axum router on an ephemeral port and points an
//! [`ApiClient`] at it, so header attachment and the 401 side effect are
//! exercised over real HTTP rather than mocked plumbing.

use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::json;

use api::{ApiClient, ApiConfig, ApiError, LessonCategory, LessonDraft, LessonLevel};
use store::{MemoryBackend, Role, Session, SessionStore};

/// Serve `app` on an ephemeral port, returning the base URL.
async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Client plus a handle onto its (shared) session store.
fn client_for(base_url: &str) -> (ApiClient, SessionStore) {
    let session = SessionStore::new(MemoryBackend::new());
    let client = ApiClient::new(ApiConfig::new(base_url), session.clone());
    (client, session)
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers.get(header::AUTHORIZATION)?.to_str().ok()
}

fn sample_lessons() -> serde_json::Value {
    json!([
        {"id": 1, "title": "Grip Basics", "category": "TECHNIQUE", "level": "BEGINNER", "published": true},
        {"id": 2, "title": "Wind Play", "category": "COURSE_MANAGEMENT", "level": "ADVANCED", "published": false}
    ])
}

#[tokio::test]
async fn authenticated_call_attaches_exactly_the_stored_credential() {
    let app = Router::new().route(
        "/api/lessons/instructor",
        get(|headers: HeaderMap| async move {
            if bearer(&headers) == Some("Bearer tok-123") {
                Json(sample_lessons()).into_response()
            } else {
                StatusCode::UNAUTHORIZED.into_response()
            }
        }),
    );
    let base = spawn(app).await;
    let (client, session) = client_for(&base);
    session.login("tok-123", "pro_jane", Role::Instructor);

    let lessons = client.instructor_lessons().await.unwrap();
    assert_eq!(lessons.len(), 2);
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn authenticated_pipeline_dispatches_bare_when_no_credential_is_held() {
    // The server decides whether the endpoint needed one.
    let app = Router::new().route(
        "/api/golf-rounds",
        get(|headers: HeaderMap| async move {
            if bearer(&headers).is_some() {
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            } else {
                Json(json!([])).into_response()
            }
        }),
    );
    let base = spawn(app).await;
    let (client, _session) = client_for(&base);

    let rounds = client.golf_rounds().await.unwrap();
    assert!(rounds.is_empty());
}

#[tokio::test]
async fn public_pipeline_never_attaches_a_credential() {
    let app = Router::new().route(
        "/api/lessons",
        get(|headers: HeaderMap| async move {
            if bearer(&headers).is_some() {
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            } else {
                Json(sample_lessons()).into_response()
            }
        }),
    );
    let base = spawn(app).await;
    let (client, session) = client_for(&base);
    session.login("tok-abc", "alice", Role::Student);

    // Logged in, yet the public path stays bare.
    let lessons = client.lessons().await.unwrap();
    assert_eq!(lessons.len(), 2);
}

#[tokio::test]
async fn rejection_clears_the_session_and_is_idempotent() {
    let app = Router::new().route(
        "/api/lessons/instructor",
        get(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({"message": "Full authentication is required"})),
            )
        }),
    );
    let base = spawn(app).await;
    let (client, session) = client_for(&base);
    session.login("stale-tok", "alice", Role::Instructor);

    let err = client.instructor_lessons().await.unwrap_err();
    assert!(err.is_auth_expired());
    assert!(!session.is_authenticated());
    assert_eq!(session.session(), Session::default());

    // A second rejected call (as two concurrent in-flight requests would
    // produce) leaves the store in the same cleared state.
    let err = client.instructor_lessons().await.unwrap_err();
    assert!(err.is_auth_expired());
    assert_eq!(session.session(), Session::default());
}

#[tokio::test]
async fn public_401_does_not_imply_an_invalid_session() {
    let app = Router::new().route(
        "/api/lessons",
        get(|| async { StatusCode::UNAUTHORIZED }),
    );
    let base = spawn(app).await;
    let (client, session) = client_for(&base);
    session.login("tok-abc", "alice", Role::Student);

    let err = client.lessons().await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert!(!err.is_auth_expired());
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn forbidden_not_found_and_server_errors_pass_through() {
    let app = Router::new()
        .route("/api/lessons/instructor", get(|| async { StatusCode::FORBIDDEN }))
        .route("/api/golf-rounds/7", get(|| async { StatusCode::NOT_FOUND }))
        .route(
            "/api/golf-rounds",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
    let base = spawn(app).await;
    let (client, session) = client_for(&base);
    session.login("tok-abc", "alice", Role::Student);

    assert!(matches!(
        client.instructor_lessons().await.unwrap_err(),
        ApiError::Forbidden
    ));
    assert!(matches!(
        client.golf_round(7).await.unwrap_err(),
        ApiError::NotFound
    ));
    assert!(matches!(
        client.golf_rounds().await.unwrap_err(),
        ApiError::Server
    ));

    // None of those touched the session.
    assert!(session.is_authenticated());
    assert_eq!(session.credential().as_deref(), Some("tok-abc"));
}

#[tokio::test]
async fn login_round_trip_and_rejected_login_message() {
    let app = Router::new().route(
        "/api/auth/login",
        post(|Json(body): Json<serde_json::Value>| async move {
            if body["password"] == "s3cret" {
                Json(json!({
                    "token": "tok-issued",
                    "username": body["username"],
                    "role": "INSTRUCTOR",
                    "message": null
                }))
                .into_response()
            } else {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"message": "Invalid username or password"})),
                )
                    .into_response()
            }
        }),
    );
    let base = spawn(app).await;
    let (client, _session) = client_for(&base);

    let resp = client.login("pro_jane", "s3cret").await.unwrap();
    assert_eq!(resp.token, "tok-issued");
    assert_eq!(resp.username, "pro_jane");
    assert_eq!(resp.role, Role::Instructor);

    let err = client.login("pro_jane", "wrong").await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid username or password");
    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn delete_accepts_an_empty_response_body() {
    let app = Router::new().route(
        "/api/lessons/5",
        delete(|| async { StatusCode::NO_CONTENT }),
    );
    let base = spawn(app).await;
    let (client, session) = client_for(&base);
    session.login("tok-abc", "pro_jane", Role::Instructor);

    client.delete_lesson(5).await.unwrap();
}

#[tokio::test]
async fn editing_a_lesson_puts_the_draft_through_the_authenticated_pipeline() {
    let app = Router::new().route(
        "/api/lessons/4",
        put(
            |headers: HeaderMap, Json(body): Json<serde_json::Value>| async move {
                if bearer(&headers) != Some("Bearer tok-123") {
                    return StatusCode::UNAUTHORIZED.into_response();
                }
                // Echo the draft back the way the backend returns the updated
                // lesson, checking the wire casing on the way in.
                if body["videoUrl"] != "https://youtu.be/abc" {
                    return StatusCode::INTERNAL_SERVER_ERROR.into_response();
                }
                Json(json!({
                    "id": 4,
                    "title": body["title"],
                    "description": body["description"],
                    "videoUrl": body["videoUrl"],
                    "category": body["category"],
                    "level": body["level"],
                    "published": true
                }))
                .into_response()
            },
        ),
    );
    let base = spawn(app).await;
    let (client, session) = client_for(&base);
    session.login("tok-123", "pro_jane", Role::Instructor);

    let draft = LessonDraft {
        title: "Wind Play, revised".to_string(),
        description: Some("Club up, swing easy".to_string()),
        content: None,
        video_url: Some("https://youtu.be/abc".to_string()),
        category: LessonCategory::CourseManagement,
        level: LessonLevel::Advanced,
    };
    let updated = client.update_lesson(4, &draft).await.unwrap();

    assert_eq!(updated.id, Some(4));
    assert_eq!(updated.title, "Wind Play, revised");
    assert_eq!(updated.description.as_deref(), Some("Club up, swing easy"));
    assert_eq!(updated.category, LessonCategory::CourseManagement);
    assert_eq!(updated.level, LessonLevel::Advanced);
    assert!(updated.published);
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn unreachable_server_surfaces_as_a_network_error() {
    // Port 9 (discard) is not listening.
    let (client, _session) = client_for("http://127.0.0.1:9");
    let err = client.lessons().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn public_browse_survives_a_later_authenticated_rejection() {
    let app = Router::new()
        .route(
            "/api/lessons",
            get(|headers: HeaderMap| async move {
                if bearer(&headers).is_some() {
                    StatusCode::INTERNAL_SERVER_ERROR.into_response()
                } else {
                    Json(sample_lessons()).into_response()
                }
            }),
        )
        .route(
            "/api/lessons/instructor",
            get(|| async { StatusCode::UNAUTHORIZED }),
        );
    let base = spawn(app).await;
    let (client, session) = client_for(&base);

    // Anonymous browse: no credential on the wire, no session mutation.
    let lessons = client.lessons().await.unwrap();
    assert_eq!(lessons.len(), 2);
    assert!(lessons[0].published);
    assert!(!lessons[1].published);
    assert_eq!(session.session(), Session::default());

    // Now sign in with a credential the server no longer honours.
    session.login("stale-tok", "alice", Role::Instructor);
    let err = client.instructor_lessons().await.unwrap_err();
    assert!(err.is_auth_expired());
    assert!(!session.is_authenticated());

    // The already-fetched public list is unaffected by the session clearing.
    assert_eq!(lessons.len(), 2);
    assert_eq!(lessons[0].title, "Grip Basics");
}
