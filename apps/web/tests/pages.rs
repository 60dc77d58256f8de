//! End-to-end page tests against in-memory repositories.
//!
//! The app router is composed with a test-only login route sharing the
//! session layer, so tests can open a real cookie session without driving
//! the OAuth flow.

use axum::{Json, Router, body::Body, http::StatusCode, routing::post};
use core_config::{Environment, app_info};
use database::postgres::PostgresConfig;
use domain_comments::{CommentService, CreateComment, InMemoryCommentRepository};
use domain_tasks::{CreateTask, InMemoryTaskRepository, TaskService};
use domain_users::{AuthState, GoogleProvider, SessionUser};
use http_body_util::BodyExt;
use std::sync::Arc;
use std::time::Duration;
use tower::util::ServiceExt;
use tower_sessions::Session;
use uuid::Uuid;

use taskplus_web::{AppState, AuthConfig, Config, routes};

type TestTaskService = TaskService<InMemoryTaskRepository>;
type TestCommentService = CommentService<InMemoryCommentRepository>;

struct TestApp {
    app: Router,
    tasks: TestTaskService,
    comments: TestCommentService,
}

fn test_config() -> Config {
    Config {
        app: app_info!(),
        database: PostgresConfig::new("postgres://unused"),
        server: core_config::server::ServerConfig::default(),
        environment: Environment::Development,
        auth: AuthConfig {
            google_client_id: "test-client".to_string(),
            google_client_secret: "test-secret".to_string(),
        },
        public_url: "http://localhost:8080".to_string(),
    }
}

async fn test_login(session: Session, Json(user): Json<SessionUser>) -> StatusCode {
    domain_users::session::sign_in(&session, &user).await.unwrap();
    StatusCode::NO_CONTENT
}

fn spawn_app() -> TestApp {
    let tasks = TaskService::new(InMemoryTaskRepository::new());
    let comments = CommentService::new(InMemoryCommentRepository::new());

    let state = AppState::new(test_config(), tasks.clone(), comments.clone());
    let auth = AuthState::new(
        Arc::new(GoogleProvider::new(
            "test-client".to_string(),
            "test-secret".to_string(),
        )),
        "http://localhost:8080",
    );

    let app = routes(state, auth)
        .route("/test/login", post(test_login))
        .layer(axum_helpers::create_session_layer(&Environment::Development));

    TestApp {
        app,
        tasks,
        comments,
    }
}

fn request(method: &str, uri: &str) -> axum::http::request::Builder {
    axum::http::Request::builder().method(method).uri(uri)
}

async fn sign_in(app: &Router, email: &str, name: &str) -> String {
    let user = SessionUser {
        email: email.to_string(),
        name: name.to_string(),
        avatar_url: None,
    };

    let response = app
        .clone()
        .oneshot(
            request("POST", "/test/login")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&user).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    response
        .headers()
        .get("set-cookie")
        .expect("login must set a session cookie")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> axum::http::Response<Body> {
    let mut builder = request("GET", uri);
    if let Some(cookie) = cookie {
        builder = builder.header("cookie", cookie);
    }
    app.clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_form(
    app: &Router,
    uri: &str,
    cookie: Option<&str>,
    form: &str,
) -> axum::http::Response<Body> {
    let mut builder = request("POST", uri).header("content-type", "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header("cookie", cookie);
    }
    app.clone()
        .oneshot(builder.body(Body::from(form.to_string())).unwrap())
        .await
        .unwrap()
}

async fn body_string(response: axum::http::Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn location(response: &axum::http::Response<Body>) -> &str {
    response
        .headers()
        .get("location")
        .expect("redirect must carry a location")
        .to_str()
        .unwrap()
}

async fn seed_task(tasks: &TestTaskService, owner: &str, body: &str, is_public: bool) -> Uuid {
    tasks
        .create_task(
            owner,
            CreateTask {
                body: body.to_string(),
                is_public,
            },
        )
        .await
        .unwrap()
        .id
}

#[tokio::test]
async fn home_renders_aggregate_counters() {
    let harness = spawn_app();

    let id = seed_task(&harness.tasks, "a@example.com", "Buy milk", true).await;
    seed_task(&harness.tasks, "b@example.com", "Study Go", false).await;
    harness
        .comments
        .create_comment(
            id,
            domain_comments::CommentAuthor {
                email: "b@example.com".to_string(),
                name: "B".to_string(),
            },
            CreateComment {
                body: "Nice!".to_string(),
            },
        )
        .await
        .unwrap();

    let response = get(&harness.app, "/", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("+2 tasks"));
    assert!(body.contains("+1 comments"));
}

#[tokio::test]
async fn dashboard_redirects_unauthenticated_visitors() {
    let harness = spawn_app();

    let response = get(&harness.app, "/dashboard", None).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn dashboard_renders_for_signed_in_user() {
    let harness = spawn_app();
    let cookie = sign_in(&harness.app, "a@example.com", "Alice").await;

    let response = get(&harness.app, "/dashboard", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Alice"));
    assert!(body.contains("/dashboard/events"));
}

#[tokio::test]
async fn create_task_from_form_is_owner_scoped() {
    let harness = spawn_app();
    let cookie = sign_in(&harness.app, "a@example.com", "Alice").await;

    let response = post_form(
        &harness.app,
        "/dashboard/tasks",
        Some(&cookie),
        "body=Buy+milk&is_public=true",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dashboard");

    let listed = harness.tasks.list_tasks("a@example.com").await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].owner, "a@example.com");
    assert_eq!(listed[0].body, "Buy milk");
    assert!(listed[0].is_public);

    // Checkbox omitted means private
    post_form(
        &harness.app,
        "/dashboard/tasks",
        Some(&cookie),
        "body=Secret+errand",
    )
    .await;
    let listed = harness.tasks.list_tasks("a@example.com").await.unwrap();
    assert!(!listed[0].is_public);
}

#[tokio::test]
async fn create_task_requires_session() {
    let harness = spawn_app();

    let response = post_form(&harness.app, "/dashboard/tasks", None, "body=nope").await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/");
    assert_eq!(harness.tasks.count_tasks().await.unwrap(), 0);
}

#[tokio::test]
async fn events_stream_snapshots_only_own_tasks() {
    let harness = spawn_app();

    seed_task(&harness.tasks, "a@example.com", "Buy milk", false).await;
    seed_task(&harness.tasks, "b@example.com", "Not yours", false).await;

    let cookie = sign_in(&harness.app, "a@example.com", "Alice").await;
    let response = get(&harness.app, "/dashboard/events", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("text/event-stream")
    );

    let mut body = response.into_body();
    let frame = tokio::time::timeout(Duration::from_secs(5), body.frame())
        .await
        .expect("initial snapshot should arrive immediately")
        .unwrap()
        .unwrap();
    let snapshot = String::from_utf8(frame.into_data().unwrap().to_vec()).unwrap();

    assert!(snapshot.contains("event: tasks"));
    assert!(snapshot.contains("Buy milk"));
    assert!(!snapshot.contains("Not yours"));
}

#[tokio::test]
async fn events_stream_requires_session() {
    let harness = spawn_app();

    let response = get(&harness.app, "/dashboard/events", None).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn private_task_redirects_every_requester() {
    let harness = spawn_app();
    let id = seed_task(&harness.tasks, "a@example.com", "Buy milk", false).await;

    // Anonymous visitor
    let response = get(&harness.app, &format!("/task/{}", id), None).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/");

    // Even the owner
    let cookie = sign_in(&harness.app, "a@example.com", "Alice").await;
    let response = get(&harness.app, &format!("/task/{}", id), Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn unknown_or_malformed_task_ids_redirect() {
    let harness = spawn_app();

    let response = get(&harness.app, &format!("/task/{}", Uuid::now_v7()), None).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);

    let response = get(&harness.app, "/task/not-a-uuid", None).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn public_task_renders_and_collects_comments() {
    let harness = spawn_app();
    let id = seed_task(&harness.tasks, "a@example.com", "Study Go", true).await;
    let uri = format!("/task/{}", id);

    // Anonymous render: task text, no comments, no comment form
    let response = get(&harness.app, &uri, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Study Go"));
    assert!(!body.contains("Leave a comment"));

    // Signed-in visitor posts a comment
    let bob = sign_in(&harness.app, "b@example.com", "Bob").await;
    let response = post_form(
        &harness.app,
        &format!("{}/comments", uri),
        Some(&bob),
        "body=Nice%21",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), uri);

    // Next load lists the comment under Bob's display name
    let response = get(&harness.app, &uri, None).await;
    let body = body_string(response).await;
    assert!(body.contains("Nice!"));
    assert!(body.contains("Bob"));
}

#[tokio::test]
async fn comment_delete_control_is_author_only() {
    let harness = spawn_app();
    let id = seed_task(&harness.tasks, "a@example.com", "Study Go", true).await;
    let uri = format!("/task/{}", id);

    let bob = sign_in(&harness.app, "b@example.com", "Bob").await;
    post_form(
        &harness.app,
        &format!("{}/comments", uri),
        Some(&bob),
        "body=Nice%21",
    )
    .await;
    let comment_id = harness.comments.list_comments(id).await.unwrap()[0].id;
    let delete_action = format!("{}/comments/{}/delete", uri, comment_id);

    // The author sees the delete control
    let body = body_string(get(&harness.app, &uri, Some(&bob)).await).await;
    assert!(body.contains(&delete_action));

    // Another signed-in user does not
    let alice = sign_in(&harness.app, "a@example.com", "Alice").await;
    let body = body_string(get(&harness.app, &uri, Some(&alice)).await).await;
    assert!(!body.contains(&delete_action));

    // And the storage boundary holds even if the form is forged
    let response = post_form(&harness.app, &delete_action, Some(&alice), "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(harness.comments.list_comments(id).await.unwrap().len(), 1);

    post_form(&harness.app, &delete_action, Some(&bob), "").await;
    assert!(harness.comments.list_comments(id).await.unwrap().is_empty());
}

#[tokio::test]
async fn deleting_a_task_orphans_its_comments() {
    let harness = spawn_app();
    let id = seed_task(&harness.tasks, "a@example.com", "Study Go", true).await;

    let bob = sign_in(&harness.app, "b@example.com", "Bob").await;
    post_form(
        &harness.app,
        &format!("/task/{}/comments", id),
        Some(&bob),
        "body=Nice%21",
    )
    .await;

    // A non-owner's delete is refused at the service boundary
    let response = post_form(
        &harness.app,
        &format!("/dashboard/tasks/{}/delete", id),
        Some(&bob),
        "",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(harness.tasks.count_tasks().await.unwrap(), 1);

    // The owner's delete removes the task but not its comments
    let alice = sign_in(&harness.app, "a@example.com", "Alice").await;
    post_form(
        &harness.app,
        &format!("/dashboard/tasks/{}/delete", id),
        Some(&alice),
        "",
    )
    .await;
    assert_eq!(harness.tasks.count_tasks().await.unwrap(), 0);
    assert_eq!(harness.comments.list_comments(id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn logout_ends_the_session() {
    let harness = spawn_app();
    let cookie = sign_in(&harness.app, "a@example.com", "Alice").await;

    let response = get(&harness.app, "/auth/logout", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let response = get(&harness.app, "/dashboard", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
}
