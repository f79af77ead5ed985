use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use lmpk_core::RedirectStore;
use lmpk_gateway::{App, AppState, GatewayConfig};
use lmpk_storage::{FlatFileRepository, InMemoryRepository};
use lmpk_store::StoreService;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

const TOKEN: &str = "s3cret";
const INDEX: &str = "<html><body>lmpk</body></html>";

struct Fixture {
    dir: TempDir,
    router: Router,
}

impl Fixture {
    fn with_store(dir: TempDir, store: Arc<dyn RedirectStore>) -> Self {
        let template = dir.path().join("index.html");
        std::fs::write(&template, INDEX).expect("write template");
        let static_dir = dir.path().join("static");
        std::fs::create_dir(&static_dir).expect("create static dir");
        std::fs::write(static_dir.join("style.css"), "body {}").expect("write asset");

        let config = GatewayConfig::builder()
            .auth_token(TOKEN)
            .template_path(template)
            .static_dir(static_dir)
            .build();

        Self {
            router: App::router(AppState::new(store, config)),
            dir,
        }
    }

    fn in_memory() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        Self::with_store(
            dir,
            Arc::new(StoreService::with_defaults(InMemoryRepository::new())),
        )
    }

    async fn file_backed() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let repo = FlatFileRepository::open(dir.path().join("redirects.txt"))
            .await
            .expect("open repository");
        Self::with_store(dir, Arc::new(StoreService::with_defaults(repo)))
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, body.to_vec())
    }

    async fn manage(&self, uri: &str, auth: Option<&str>) -> (StatusCode, Value) {
        let mut request = Request::builder().uri(uri);
        if let Some(auth) = auth {
            request = request.header("Auth", auth);
        }
        let (status, headers, body) = self.send(request.body(Body::empty()).unwrap()).await;
        assert_eq!(headers[header::CONTENT_TYPE], "application/json");
        (status, serde_json::from_slice(&body).unwrap())
    }

    async fn code(&self, uri: &str) -> u64 {
        let (status, body) = self.manage(uri, Some(TOKEN)).await;
        assert_eq!(status, StatusCode::OK);
        body["code"].as_u64().unwrap()
    }

    async fn location(&self, uri: &str) -> String {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let (status, headers, _) = self.send(request).await;
        assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
        headers[header::LOCATION].to_str().unwrap().to_string()
    }
}

#[tokio::test]
async fn management_requires_auth_first() {
    let fixture = Fixture::in_memory();

    let (status, body) = fixture.manage("/create", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "code": 200, "status": "No Auth header provided" }));

    let (_, body) = fixture.manage("/delete?name=abc", Some("wrong")).await;
    assert_eq!(body, json!({ "code": 201, "status": "Wrong Auth header" }));

    let (_, body) = fixture.manage("/modify?name=abc", Some("")).await;
    assert_eq!(body["code"], 200);
}

#[tokio::test]
async fn missing_parameters() {
    let fixture = Fixture::in_memory();

    assert_eq!(fixture.code("/create").await, 211);
    assert_eq!(fixture.code("/create?link=https://example.com").await, 211);
    assert_eq!(fixture.code("/create?name=abc").await, 212);
    assert_eq!(fixture.code("/create?name=abc&link=").await, 212);
    assert_eq!(fixture.code("/delete").await, 211);
    assert_eq!(fixture.code("/modify?name=abc").await, 212);
}

#[tokio::test]
async fn create_then_redirect() {
    let fixture = Fixture::in_memory();

    let (_, body) = fixture
        .manage("/create?name=abc&link=https://example.com", Some(TOKEN))
        .await;
    assert_eq!(body, json!({ "code": 100, "status": "Done" }));

    assert_eq!(fixture.location("/abc").await, "https://example.com");
    assert_eq!(fixture.location("/abc/extra/segments").await, "https://example.com");
}

#[tokio::test]
async fn create_refusals() {
    let fixture = Fixture::in_memory();

    assert_eq!(
        fixture.code("/create?name=abc&link=https://example.com").await,
        100
    );
    assert_eq!(
        fixture.code("/create?name=abc&link=https://other.com").await,
        405
    );
    assert_eq!(
        fixture.code("/create?name=admin&link=https://example.com").await,
        205
    );
    assert_eq!(
        fixture.code("/create?name=a%20b&link=https://example.com").await,
        401
    );
    assert_eq!(
        fixture.code("/create?name=ok&link=http://example.com").await,
        402
    );
    assert_eq!(fixture.code("/create?name=a%20b&link=ftp://x").await, 403);
}

#[tokio::test]
async fn pattern_errors_carry_the_pattern() {
    let fixture = Fixture::in_memory();

    let (_, body) = fixture
        .manage("/create?name=bad!&link=https://example.com", Some(TOKEN))
        .await;
    assert_eq!(body["code"], 401);
    assert!(body["status"]
        .as_str()
        .unwrap()
        .ends_with("Name pattern: ^[a-zA-Z0-9_.-]*$"));
}

#[tokio::test]
async fn unknown_name_goes_to_default_link() {
    let fixture = Fixture::in_memory();

    assert_eq!(fixture.location("/nonexistent").await, "https://lmpk.tk");
    assert_eq!(fixture.location("/lmpk").await, "https://lmpk.tk");
}

#[tokio::test]
async fn undecodable_path_goes_to_default_link() {
    let fixture = Fixture::in_memory();

    assert_eq!(fixture.location("/%FF").await, "https://lmpk.tk");
    assert_eq!(fixture.location("/%FF%FE/rest").await, "https://lmpk.tk");
}

#[tokio::test]
async fn redirect_accepts_any_method() {
    let fixture = Fixture::in_memory();
    fixture.code("/create?name=abc&link=https://example.com").await;

    for method in ["POST", "PUT", "DELETE"] {
        let request = Request::builder()
            .method(method)
            .uri("/abc")
            .body(Body::empty())
            .unwrap();
        let (status, headers, _) = fixture.send(request).await;
        assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(headers[header::LOCATION], "https://example.com");
    }
}

#[tokio::test]
async fn delete_and_not_found() {
    let fixture = Fixture::in_memory();

    fixture.code("/create?name=abc&link=https://example.com").await;
    assert_eq!(fixture.code("/delete?name=abc").await, 100);
    assert_eq!(fixture.code("/delete?name=abc").await, 204);
    assert_eq!(fixture.location("/abc").await, "https://lmpk.tk");
}

#[tokio::test]
async fn modify_replaces_link() {
    let fixture = Fixture::in_memory();

    fixture.code("/create?name=abc&link=https://example.com").await;
    assert_eq!(fixture.code("/modify?name=abc&link=https://other.com").await, 100);
    assert_eq!(fixture.location("/abc").await, "https://other.com");
}

#[tokio::test]
async fn rejected_modify_keeps_previous_link() {
    let fixture = Fixture::in_memory();

    fixture.code("/create?name=abc&link=https://example.com").await;
    assert_eq!(fixture.code("/modify?name=abc&link=http://insecure.com").await, 402);
    assert_eq!(fixture.location("/abc").await, "https://example.com");
    assert_eq!(fixture.code("/modify?name=missing&link=https://x.com").await, 204);
}

#[tokio::test]
async fn management_accepts_any_method() {
    let fixture = Fixture::in_memory();

    let request = Request::builder()
        .method("POST")
        .uri("/create?name=abc&link=https://example.com")
        .header("Auth", TOKEN)
        .body(Body::empty())
        .unwrap();
    let (status, _, body) = fixture.send(request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<Value>(&body).unwrap()["code"], 100);
}

#[tokio::test]
async fn root_serves_index_template() {
    let fixture = Fixture::in_memory();

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, headers, body) = fixture.send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert_eq!(body, INDEX.as_bytes());
}

#[tokio::test]
async fn missing_template_is_a_server_error() {
    let fixture = Fixture::in_memory();
    std::fs::remove_file(fixture.dir.path().join("index.html")).unwrap();

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, _, _) = fixture.send(request).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn static_assets_are_served() {
    let fixture = Fixture::in_memory();

    let request = Request::builder()
        .uri("/static/style.css")
        .body(Body::empty())
        .unwrap();
    let (status, _, body) = fixture.send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"body {}");
}

#[tokio::test]
async fn health_reports_record_count() {
    let fixture = Fixture::in_memory();
    fixture.code("/create?name=abc&link=https://example.com").await;

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, _, body) = fixture.send(request).await;
    let body: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["records"], 1);
    assert!(body["started_at"].is_string());
}

#[tokio::test]
async fn file_backed_round_trip() {
    let fixture = Fixture::file_backed().await;

    assert_eq!(
        fixture.code("/create?name=abc&link=https://example.com").await,
        100
    );
    let content = std::fs::read_to_string(fixture.dir.path().join("redirects.txt")).unwrap();
    assert_eq!(content, "abc > https://example.com\n");
    assert_eq!(fixture.location("/abc").await, "https://example.com");
}

#[tokio::test]
async fn storage_failure_is_reported_not_fatal() {
    let fixture = Fixture::file_backed().await;
    std::fs::remove_file(fixture.dir.path().join("redirects.txt")).unwrap();

    let (status, body) = fixture
        .manage("/create?name=abc&link=https://example.com", Some(TOKEN))
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "code": 206, "status": "Storage unavailable" }));

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, _, body) = fixture.send(request).await;
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "degraded");
    assert!(body.get("records").is_none());
}
