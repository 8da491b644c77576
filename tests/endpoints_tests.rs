//! Integration tests exercising the full router over HTTP.
//!
//! Each test binds the router to an ephemeral port and talks to it with a
//! real HTTP client, so tests run in parallel without interfering with each
//! other.

use std::net::SocketAddr;

use docker_test_server::routes::create_router;

/// Bind the router to an ephemeral port and serve it in the background.
async fn spawn_server() -> SocketAddr {
    let app = create_router();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server failed");
    });

    addr
}

#[tokio::test]
async fn healthz_returns_fixed_payload() {
    let addr = spawn_server().await;

    let response = reqwest::get(format!("http://{addr}/healthz")).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({"status": "healthy", "message": "Server is running"})
    );
}

#[tokio::test]
async fn healthz_ignores_request_headers() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("http://{addr}/healthz"))
        .header("X-Anything", "whatever")
        .header("Accept", "text/plain")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_endpoint_returns_fixed_payload() {
    let addr = spawn_server().await;

    let response = reqwest::get(format!("http://{addr}/test")).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "message": "Hello from Docker!",
            "status": "success",
            "container": "running",
            "framework": "Axum",
        })
    );
}

#[tokio::test]
async fn welcome_page_is_html_and_lists_endpoints() {
    let addr = spawn_server().await;

    let response = reqwest::get(format!("http://{addr}/")).await.unwrap();
    assert_eq!(response.status(), 200);

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"), "got {content_type}");

    let body = response.text().await.unwrap();
    assert!(body.contains("Docker Test Server Running"));
    assert!(body.contains(r#"href="/healthz""#));
    assert!(body.contains(r#"href="/info""#));
}

#[tokio::test]
async fn info_reports_process_metadata() {
    let addr = spawn_server().await;

    let response = reqwest::get(format!("http://{addr}/info")).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Docker Test Server");
    assert_eq!(body["platform"], std::env::consts::OS);
    assert_eq!(body["architecture"], std::env::consts::ARCH);
    assert!(!body["rust_version"].as_str().unwrap().is_empty());

    // The server inherits this process's environment
    match std::env::var("USER") {
        Ok(user) => assert_eq!(body["user"], user),
        Err(_) => assert_eq!(body["user"], "unknown"),
    }

    let reported = body["environment_variables"]["PATH"].as_str().unwrap();
    let real = std::env::var("PATH").unwrap_or_default();
    if real.chars().count() > 100 {
        assert!(reported.ends_with("..."));
        assert_eq!(reported.chars().count(), 103);
        assert!(real.starts_with(reported.trim_end_matches("...")));
    } else {
        assert_eq!(reported, real);
    }
}

#[tokio::test]
async fn info_is_stable_while_environment_is_unchanged() {
    let addr = spawn_server().await;

    let first: serde_json::Value = reqwest::get(format!("http://{addr}/info"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let second: serde_json::Value = reqwest::get(format!("http://{addr}/info"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let addr = spawn_server().await;

    let response = reqwest::get(format!("http://{addr}/nonexistent"))
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn openapi_document_is_served() {
    let addr = spawn_server().await;

    let response = reqwest::get(format!("http://{addr}/api-docs/openapi.json"))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    let paths = body["paths"].as_object().unwrap();
    for path in ["/", "/healthz", "/info", "/test"] {
        assert!(paths.contains_key(path), "{path} missing from spec");
    }
}

#[tokio::test]
async fn probe_responses_are_not_cached() {
    let addr = spawn_server().await;

    for route in ["/healthz", "/info", "/test"] {
        let response = reqwest::get(format!("http://{addr}{route}")).await.unwrap();
        let cache_control = response
            .headers()
            .get("cache-control")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert_eq!(cache_control, "no-store", "route {route}");
    }
}

#[tokio::test]
async fn concurrent_requests_do_not_interfere() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let requests = (0..16).map(|i| {
        let client = client.clone();
        let route = match i % 4 {
            0 => "/",
            1 => "/healthz",
            2 => "/info",
            _ => "/test",
        };
        async move {
            let response = client
                .get(format!("http://{addr}{route}"))
                .send()
                .await
                .unwrap();
            (route, response.status().as_u16(), response.text().await.unwrap())
        }
    });

    for (route, status, body) in futures::future::join_all(requests).await {
        assert_eq!(status, 200, "route {route} failed");
        match route {
            "/" => assert!(body.contains("Docker Test Server Running")),
            "/healthz" => assert!(body.contains("\"status\":\"healthy\"")),
            "/info" => assert!(body.contains("\"working_directory\"")),
            _ => assert!(body.contains("Hello from Docker!")),
        }
    }
}
