mod common;

use common::TestApp;

const ORIGIN: &str = "http://localhost:5173";

#[tokio::test]
async fn simple_requests_echo_the_origin_with_credentials() {
    let app = TestApp::spawn().await;
    let res = app.http.get(app.url("/")).header("origin", ORIGIN).send().await.unwrap();

    assert_eq!(res.status(), 200);
    assert_eq!(res.headers()["access-control-allow-origin"], ORIGIN);
    assert_eq!(res.headers()["access-control-allow-credentials"], "true");
}

#[tokio::test]
async fn errors_carry_cors_headers_too() {
    let app = TestApp::spawn().await;
    let res = app.http.get(app.url("/nope")).header("origin", ORIGIN).send().await.unwrap();

    assert_eq!(res.status(), 404);
    assert_eq!(res.headers()["access-control-allow-origin"], ORIGIN);
}

#[tokio::test]
async fn preflight_is_answered_for_any_route() {
    let app = TestApp::spawn().await;
    let res = app
        .http
        .request(reqwest::Method::OPTIONS, app.url("/mars/photos"))
        .header("origin", ORIGIN)
        .header("access-control-request-method", "GET")
        .header("access-control-request-headers", "x-custom")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let headers = res.headers();
    assert_eq!(headers["access-control-allow-origin"], ORIGIN);
    assert!(headers["access-control-allow-methods"].to_str().unwrap().contains("GET"));
    assert_eq!(headers["access-control-allow-headers"], "x-custom");
}

#[tokio::test]
async fn requests_without_origin_get_no_cors_headers() {
    let app = TestApp::spawn().await;
    let res = app.get("/").await;
    assert!(res.headers().get("access-control-allow-origin").is_none());
}
