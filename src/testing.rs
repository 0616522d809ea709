//! Helpers for driving the full router in handler tests.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use crate::{app::build_app, state::AppState};

pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            router: build_app(AppState::fake()),
        }
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub set_cookie: Option<String>,
    pub body: Value,
}

pub async fn send_raw(
    router: &Router,
    method: &str,
    uri: &str,
    cookie: Option<&str>,
    content_type: Option<&str>,
    body: String,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    if let Some(ct) = content_type {
        builder = builder.header(header::CONTENT_TYPE, ct);
    }
    let request = builder.body(Body::from(body)).unwrap();

    let res = router.clone().oneshot(request).await.unwrap();
    let status = res.status();
    let set_cookie = res
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    TestResponse {
        status,
        set_cookie,
        body,
    }
}

pub async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    cookie: Option<&str>,
    json: Option<Value>,
) -> TestResponse {
    match json {
        Some(json) => {
            send_raw(
                router,
                method,
                uri,
                cookie,
                Some("application/json"),
                json.to_string(),
            )
            .await
        }
        None => send_raw(router, method, uri, cookie, None, String::new()).await,
    }
}

/// Registers `name` and returns the `name=value` pair to send back as `Cookie`.
pub async fn register(router: &Router, name: &str) -> String {
    let res = send(
        router,
        "POST",
        "/users",
        None,
        Some(serde_json::json!({ "name": name })),
    )
    .await;
    assert_eq!(res.status, StatusCode::CREATED);
    let set_cookie = res.set_cookie.expect("registration sets a cookie");
    set_cookie
        .split(';')
        .next()
        .unwrap_or_default()
        .to_string()
}
