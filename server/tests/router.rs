use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use social_media_generation_lib::app::SharedState;
use social_media_generation_lib::config::{AppConfig, SettingsManager};
use social_media_generation_lib::server::router::create_router;

fn router_with(extra: &[(&str, &str)]) -> Router {
    let mut pairs = vec![
        ("AZURE_OPENAI_ENDPOINT", "https://test.openai.azure.com"),
        ("AZURE_OPENAI_KEY", "openai-key"),
        ("AZURE_OPENAI_CHAT_DEPLOYMENT", "gpt-4o"),
        ("VISION_SERVICE_ENDPOINT", "https://test.cognitiveservices.azure.com"),
        ("VISION_SERVICE_KEY", "vision-key"),
        (
            "BLOB_STORAGE_CONNECTION_STRING",
            "AccountName=devacct;AccountKey=dGVzdC1hY2NvdW50LWtleS0wMTIzNDU2Nzg5YWJjZGVm",
        ),
        ("AZURE_BLOB_UPLOAD_CONTAINER", "uploads"),
    ];
    pairs.extend_from_slice(extra);
    let config = AppConfig::load(&SettingsManager::from_pairs(pairs)).unwrap();
    create_router(SharedState::new(config).unwrap())
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, json: &str) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

#[tokio::test]
async fn status_reports_color_theme_source() {
    let (status, body) = send(router_with(&[]), get("/status")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["colorThemeSource"], "palette");

    let (_, body) = send(router_with(&[("COLOR_THEME_SOURCE", "vision")]), get("/status")).await;
    assert_eq!(body["colorThemeSource"], "vision");
}

#[tokio::test]
async fn missing_inputs_are_rejected_before_any_upstream_call() {
    let cases = [
        ("/createcopy", r#"{"Copy":"","PostType":"twitter"}"#, "Copy is required"),
        ("/getbackgrounddescription", r#"{"Copy":"Summer sale"}"#, "Colors or ImageUrl is required"),
        ("/generatebackgrounds", r#"{"Description":"  "}"#, "Description is required"),
        ("/getcolortheme", r#"{}"#, "ForegroundImageUri is required"),
        ("/removebackgroundandcrop", r#"{"ForegroundImageUri":""}"#, "ForegroundImageUri is required"),
        (
            "/combineimages",
            r#"{"ForegroundImage":"https://x.blob.core.windows.net/uploads/a.png","BackgroundImages":[]}"#,
            "BackgroundImages must not be empty",
        ),
        ("/generatepost", r#"{"Copy":"Sale","PostType":"instagram"}"#, "ForegroundImageUri is required"),
    ];
    for (uri, json, message) in cases {
        let (status, body) = send(router_with(&[]), post_json(uri, json)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["status"], "error", "{uri}");
        assert_eq!(body["error"], message, "{uri}");
    }
}

#[tokio::test]
async fn camel_case_requests_are_accepted() {
    let (status, body) = send(
        router_with(&[]),
        post_json("/createcopy", r#"{"copy":"","postType":"facebook"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Copy is required");
}

#[tokio::test]
async fn prepare_blob_signs_a_unique_name() {
    let (status, body) = send(router_with(&[]), get("/prepareblob")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "filename is required");

    let (status, body) = send(router_with(&[]), get("/prepareblob?filename=shot.png")).await;
    assert_eq!(status, StatusCode::OK);
    let sas = body["sasUri"].as_str().unwrap();
    assert!(sas.starts_with("https://devacct.blob.core.windows.net/uploads/"));
    assert!(sas.contains(".png?"));
    assert!(sas.contains("sp=rcw"));
    assert!(!sas.contains("shot"));
}

#[tokio::test]
async fn unknown_paths_get_json_404() {
    let (status, body) = send(router_with(&[]), get("/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
    assert_eq!(body["path"], "/nope");
}

#[tokio::test]
async fn route_prefix_nests_every_route() {
    let router = || router_with(&[("ROUTE_PREFIX", "/api")]);

    let (status, body) = send(router(), get("/api/status")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, _) = send(router(), get("/status")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(router(), get("/api/missing")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["path"], "/api/missing");
}

#[tokio::test]
async fn static_dir_serves_client_with_spa_fallback() {
    let dir = std::env::temp_dir().join(format!("smg-static-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), "<html>client</html>").unwrap();
    let dir_str = dir.to_string_lossy().to_string();
    let router = || router_with(&[("STATIC_DIR", dir_str.as_str()), ("ROUTE_PREFIX", "/api")]);

    for uri in ["/", "/index.html", "/create/post"] {
        let response = router().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"<html>client</html>", "{uri}");
    }

    let (status, body) = send(router(), get("/api/unknown")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");

    let _ = std::fs::remove_dir_all(&dir);
}
