// SPDX-License-Identifier: Apache-2.0

use serde_json::{json, Value};
use stmark_server::{build_router, ApiConfig, AppState};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

async fn post_raw(addr: std::net::SocketAddr, path: &str, body: &[u8]) -> (u16, String) {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let mut req = format!(
        "POST {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n",
        body.len()
    )
    .into_bytes();
    req.extend_from_slice(body);
    stream.write_all(&req).await.expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response must have separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("http status");
    (status, body.to_string())
}

async fn spawn_app(api: ApiConfig) -> std::net::SocketAddr {
    let base = AppState::standard().expect("state");
    let app = build_router(AppState::with_config(base.registry, base.store, api));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    addr
}

async fn post_json(addr: std::net::SocketAddr, path: &str, body: &[u8]) -> (u16, Value) {
    let (status, body) = post_raw(addr, path, body).await;
    (status, serde_json::from_str(&body).expect("json body"))
}

#[tokio::test]
async fn hero_navigation_echoes_destination_on_both_paths() {
    let addr = spawn_app(ApiConfig::default()).await;
    for path in ["/api/hero-navigation/", "/api/hero-content/"] {
        let (status, body) =
            post_json(addr, path, br#"{"destination": "/admissions", "timestamp": "T1"}"#).await;
        assert_eq!(status, 200);
        assert_eq!(
            body,
            json!({
                "status": "success",
                "data": {"destination": "/admissions", "timestamp": "T1"},
                "message": "Navigation request processed"
            })
        );
    }
    let (_, body) = post_json(addr, "/api/hero-navigation/", b"{}").await;
    assert_eq!(body["data"], json!({"destination": "", "timestamp": ""}));
}

#[tokio::test]
async fn quick_link_click_echoes_subset_only() {
    let addr = spawn_app(ApiConfig::default()).await;
    let (status, body) = post_json(
        addr,
        "/api/quick-links-click/",
        br#"{"title": "Library", "url": "/library", "timestamp": "T", "userAgent": "UA", "referrer": "/"}"#,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["message"], "Click tracked successfully");
    assert_eq!(
        body["data"],
        json!({"title": "Library", "url": "/library", "timestamp": "T"})
    );
}

#[tokio::test]
async fn welcome_actions_dispatch() {
    let addr = spawn_app(ApiConfig::default()).await;

    let (status, body) = post_json(
        addr,
        "/api/welcome-section/",
        br#"{"action":"navigate","target":"admissions","timestamp":"T"}"#,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(
        body["data"],
        json!({"target": "admissions", "url": "/admissions", "timestamp": "T"})
    );

    let (_, body) = post_json(
        addr,
        "/api/welcome-section/",
        br#"{"action":"navigate","target":"library"}"#,
    )
    .await;
    assert_eq!(body["data"]["url"], "/");
    assert_eq!(body["data"]["timestamp"], "");

    let (status, body) = post_json(
        addr,
        "/api/welcome-section/",
        br#"{"action":"highlight_interaction","highlightIndex":2,"timestamp":"T"}"#,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"], json!({"highlightIndex": 2, "timestamp": "T"}));

    let (_, body) = post_json(
        addr,
        "/api/welcome-section/",
        br#"{"action":"highlight_interaction"}"#,
    )
    .await;
    assert_eq!(body["data"]["highlightIndex"], -1);
}

#[tokio::test]
async fn unknown_or_missing_welcome_action_is_400() {
    let addr = spawn_app(ApiConfig::default()).await;
    let bodies: [&[u8]; 2] = [br#"{"action":"bogus"}"#, b"{}"];
    for raw in bodies {
        let (status, body) = post_json(addr, "/api/welcome-section/", raw).await;
        assert_eq!(status, 400);
        assert_eq!(body["status"], "error");
        assert!(body.get("data").is_none());
        assert!(body["message"]
            .as_str()
            .is_some_and(|m| m.starts_with("Invalid action")));
    }
}

#[tokio::test]
async fn malformed_json_is_400_on_every_write_endpoint() {
    let addr = spawn_app(ApiConfig::default()).await;
    for path in [
        "/api/hero-navigation/",
        "/api/hero-content/",
        "/api/quick-links-click/",
        "/api/welcome-section/",
        "/api/blog/click/",
    ] {
        let (status, body) = post_json(addr, path, b"{not json").await;
        assert_eq!(status, 400, "{path}");
        assert_eq!(
            body,
            json!({"status": "error", "message": "Invalid JSON data"}),
            "{path}"
        );
    }
}

#[tokio::test]
async fn non_object_bodies_are_500_with_endpoint_specific_wording() {
    let addr = spawn_app(ApiConfig::default()).await;
    let (status, body) = post_json(addr, "/api/hero-navigation/", b"[1]").await;
    assert_eq!(status, 500);
    assert_eq!(
        body["message"],
        "An error occurred: expected a JSON object body, got array"
    );

    let (status, body) = post_json(addr, "/api/blog/click/", b"\"x\"").await;
    assert_eq!(status, 500);
    assert_eq!(body["message"], "expected a JSON object body, got string");
}

#[tokio::test]
async fn undecodable_bodies_are_500_on_every_write_endpoint() {
    let addr = spawn_app(ApiConfig::default()).await;
    for path in [
        "/api/hero-navigation/",
        "/api/hero-content/",
        "/api/quick-links-click/",
        "/api/welcome-section/",
    ] {
        let (status, body) = post_json(addr, path, b"\xff\xfe{}").await;
        assert_eq!(status, 500, "{path}");
        assert_eq!(body["status"], "error", "{path}");
        let message = body["message"].as_str().expect("message");
        assert!(
            message.starts_with("An error occurred: body is not valid UTF-8"),
            "{path}: {message}"
        );
    }

    let (status, body) = post_json(addr, "/api/blog/click/", b"\xff").await;
    assert_eq!(status, 500);
    let message = body["message"].as_str().expect("message");
    assert!(message.starts_with("body is not valid UTF-8"), "{message}");
}

#[tokio::test]
async fn blog_click_echoes_post_fields() {
    let addr = spawn_app(ApiConfig::default()).await;
    let (status, body) = post_json(
        addr,
        "/api/blog/click/",
        br#"{"post_url": "/blog/open-day/", "post_title": "Open Day"}"#,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({
            "status": "success",
            "message": "Click tracked successfully",
            "data": {"post_url": "/blog/open-day/", "post_title": "Open Day"}
        })
    );
}

#[tokio::test]
async fn oversized_bodies_are_rejected_with_an_error_envelope() {
    let addr = spawn_app(ApiConfig {
        max_body_bytes: 64,
        ..ApiConfig::default()
    })
    .await;
    let big = format!("{{\"title\": \"{}\"}}", "x".repeat(256));
    for path in ["/api/quick-links-click/", "/api/blocks/highlight/validate/"] {
        let (status, body) = post_raw(addr, path, big.as_bytes()).await;
        assert_eq!(status, 413, "{path}");
        let body: Value = serde_json::from_str(&body).expect("envelope json");
        assert_eq!(
            body,
            json!({"status": "error", "message": "Request body too large"}),
            "{path}"
        );
    }
}
