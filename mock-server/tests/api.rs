use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::app;
use tower::ServiceExt;

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

#[tokio::test]
async fn hi_returns_hello() {
    let resp = app().oneshot(get("/hi")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(&body_bytes(resp).await[..], b"hello");
}

#[tokio::test]
async fn missing_returns_404_with_body() {
    let resp = app().oneshot(get("/missing")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(&body_bytes(resp).await[..], b"not found");
}

#[tokio::test]
async fn moved_points_at_hi() {
    let resp = app().oneshot(get("/moved")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(resp.headers()[header::LOCATION], "/hi");
    assert_eq!(&body_bytes(resp).await[..], b"moved");
}

#[tokio::test(start_paused = true)]
async fn slow_answers_after_delay() {
    let started = tokio::time::Instant::now();
    let resp = app().oneshot(get("/slow")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(started.elapsed() >= mock_server::SLOW_DELAY);
    assert_eq!(&body_bytes(resp).await[..], b"late");
}

#[tokio::test]
async fn unknown_route_returns_404_empty() {
    let resp = app().oneshot(get("/nope")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn post_to_hi_is_rejected() {
    let req = Request::builder()
        .method("POST")
        .uri("/hi")
        .body(String::new())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn large_body_has_advertised_length() {
    let resp = app().oneshot(get("/large")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await.len(), mock_server::LARGE_BODY_LEN);
}
