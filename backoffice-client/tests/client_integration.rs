// backoffice-client/tests/client_integration.rs
// Integration tests against a local fixture server

use std::sync::{Arc, Mutex};

use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use backoffice_client::{
    BackofficeClient, ClientConfig, ClientError, Navigator, Notice, NoticeKind, Notifier,
    PageRequest, LOGIN_PAGE,
};
use shared::models::MemberListRequest;

#[derive(Default)]
struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    fn error_count(&self) -> usize {
        self.notices
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.kind == NoticeKind::Error)
            .count()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }

    fn dismiss_all(&self) {
        self.notices.lock().unwrap().clear();
    }
}

#[derive(Default)]
struct RecordingNavigator {
    current: Mutex<Option<String>>,
    visits: Mutex<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn current_location(&self) -> Option<String> {
        self.current.lock().unwrap().clone()
    }

    fn goto(&self, path: &str) {
        *self.current.lock().unwrap() = Some(path.to_string());
        self.visits.lock().unwrap().push(path.to_string());
    }
}

async fn echo_auth(headers: HeaderMap) -> Json<Value> {
    let token = headers
        .get("x-auth-token")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    Json(json!({"code": 200, "message": "success", "data": {"token": token}}))
}

async fn expired() -> Json<Value> {
    Json(json!({"code": 401, "message": "session expired"}))
}

async fn missing() -> Json<Value> {
    Json(json!({"code": 404, "message": "not found", "data": null}))
}

async fn ok() -> Json<Value> {
    Json(json!({"code": 200, "message": "success", "data": {"value": 1}}))
}

async fn plain_401() -> StatusCode {
    StatusCode::UNAUTHORIZED
}

async fn login_ok() -> Json<Value> {
    Json(json!({"code": 200, "message": "success", "data": "fresh-token"}))
}

/// Start the fixture server on an ephemeral port, return its base URL
async fn start_fixture() -> String {
    let app = Router::new()
        .route("/echo-auth", post(echo_auth))
        .route("/expired", post(expired))
        .route("/missing", post(missing))
        .route("/ok", post(ok))
        .route("/plain-401", post(plain_401))
        .route("/auth/login", post(login_ok))
        .route("/member/page", post(expired));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

struct Harness {
    client: BackofficeClient,
    notifier: Arc<RecordingNotifier>,
    navigator: Arc<RecordingNavigator>,
}

async fn harness() -> Harness {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let base_url = start_fixture().await;
    let notifier = Arc::new(RecordingNotifier::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let client = BackofficeClient::new(&ClientConfig::new(base_url))
        .unwrap()
        .with_notifier(notifier.clone())
        .with_navigator(navigator.clone());
    Harness {
        client,
        notifier,
        navigator,
    }
}

#[tokio::test]
async fn test_token_header_attached_when_set() {
    let h = harness().await;

    let env: shared::ApiEnvelope<Value> = h.client.post("/echo-auth", &()).await.unwrap();
    assert_eq!(
        env.data.unwrap()["token"],
        Value::Null,
        "header must be absent without a token"
    );

    h.client.session().set("tok-123").unwrap();
    let env: shared::ApiEnvelope<Value> = h.client.post("/echo-auth", &()).await.unwrap();
    assert_eq!(env.data.unwrap()["token"], json!("tok-123"));
}

#[tokio::test]
async fn test_success_emits_no_notification() {
    let h = harness().await;

    let env: shared::ApiEnvelope<Value> = h.client.post("/ok", &()).await.unwrap();
    assert!(env.is_success());
    assert_eq!(h.notifier.notices.lock().unwrap().len(), 0);
}

#[tokio::test]
async fn test_business_error_notifies_and_returns_envelope_unchanged() {
    let h = harness().await;

    let env: shared::ApiEnvelope<Value> = h.client.post("/missing", &()).await.unwrap();
    assert_eq!(env.code, 404);
    assert_eq!(env.message, "not found");
    assert!(env.data.is_none() || env.data == Some(Value::Null));

    let notices = h.notifier.notices.lock().unwrap();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Error);
    assert_eq!(notices[0].message, "not found");
    // no redirect for plain business errors
    assert!(h.navigator.visits.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_concurrent_unauthorized_handled_once() {
    let h = harness().await;
    h.client.session().set("stale").unwrap();

    let (a, b) = tokio::join!(
        h.client.post::<Value, _>("/expired", &()),
        h.client.post::<Value, _>("/expired", &()),
    );
    assert!(matches!(a, Err(ClientError::Unauthorized)));
    assert!(matches!(b, Err(ClientError::Unauthorized)));

    assert_eq!(h.notifier.error_count(), 1, "one notification for both failures");
    assert_eq!(*h.navigator.visits.lock().unwrap(), vec![LOGIN_PAGE.to_string()]);
    assert!(!h.client.session().has(), "token must be cleared");
}

#[tokio::test]
async fn test_transport_401_runs_unauthorized_sequence() {
    let h = harness().await;
    h.client.session().set("stale").unwrap();

    let result = h.client.post::<Value, _>("/plain-401", &()).await;
    assert!(matches!(result, Err(ClientError::Unauthorized)));
    assert_eq!(h.notifier.error_count(), 1);
    assert_eq!(*h.navigator.visits.lock().unwrap(), vec![LOGIN_PAGE.to_string()]);
    assert!(!h.client.session().has());
}

#[tokio::test]
async fn test_no_redirect_when_already_on_login_page() {
    let h = harness().await;
    *h.navigator.current.lock().unwrap() = Some(LOGIN_PAGE.to_string());
    h.client.session().set("stale").unwrap();

    let result = h.client.post::<Value, _>("/expired", &()).await;
    assert!(matches!(result, Err(ClientError::Unauthorized)));
    assert_eq!(h.notifier.error_count(), 1);
    assert!(h.navigator.visits.lock().unwrap().is_empty());
    assert!(!h.client.session().has());
}

#[tokio::test]
async fn test_latch_rearms_after_fresh_login() {
    let h = harness().await;
    h.client.session().set("stale").unwrap();

    let _ = h.client.post::<Value, _>("/expired", &()).await;
    assert_eq!(h.notifier.error_count(), 1);

    let env = h.client.login("cashier", "secret").await.unwrap();
    assert!(env.is_success());
    assert_eq!(h.client.session().get().as_deref(), Some("fresh-token"));
    // the shell navigates back into the app after a successful login
    *h.navigator.current.lock().unwrap() = Some("/memberManagement".to_string());

    let result = h.client.post::<Value, _>("/expired", &()).await;
    assert!(matches!(result, Err(ClientError::Unauthorized)));
    assert_eq!(h.notifier.error_count(), 2, "second 401 handled after re-login");
    assert_eq!(h.navigator.visits.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_members_without_token_forces_login() {
    let h = harness().await;
    assert!(!h.client.session().has());

    let request = MemberListRequest {
        keyword: None,
        search_page: PageRequest::first(20),
    };
    let result = h.client.list_members(&request).await;
    assert!(matches!(result, Err(ClientError::Unauthorized)));
    assert!(!h.client.session().has());
    assert_eq!(*h.navigator.visits.lock().unwrap(), vec![LOGIN_PAGE.to_string()]);
}
