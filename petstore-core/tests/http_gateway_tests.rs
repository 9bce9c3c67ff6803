#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! `HttpGateway` against a one-shot local HTTP server

use petstore_core::{ClientConfig, FetchError, FetchGateway, HttpGateway};
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serve a single canned response; the handle yields the request line
async fn serve_once(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let response = format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&request)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string()
    });

    (base_url, handle)
}

fn gateway(base_url: String) -> HttpGateway {
    HttpGateway::new(&ClientConfig::new(base_url)).unwrap()
}

#[tokio::test]
async fn ok_response_parses_json() {
    let (base_url, server) = serve_once("200 OK", r#"[{"id":1,"name":"Buddy"}]"#).await;

    let value = gateway(base_url).fetch("/api/pets/random/10").await.unwrap();

    assert_eq!(value, json!([{ "id": 1, "name": "Buddy" }]));
    assert_eq!(server.await.unwrap(), "GET /api/pets/random/10 HTTP/1.1");
}

#[tokio::test]
async fn non_ok_response_uses_status_text() {
    let (base_url, server) = serve_once("404 Not Found", "").await;

    let err = gateway(base_url).fetch("/api/pets/10").await.unwrap_err();

    assert_eq!(err, FetchError::status(404, "Not Found"));
    assert_eq!(err.to_string(), "Not Found");
    server.await.unwrap();
}

#[tokio::test]
async fn non_ok_response_keeps_custom_reason() {
    let (base_url, server) = serve_once("404 Pet Gone", "").await;

    let err = gateway(base_url).fetch("/api/pets/10").await.unwrap_err();

    assert_eq!(err, FetchError::status(404, "Pet Gone"));
    assert_eq!(err.to_string(), "Pet Gone");
    server.await.unwrap();
}

#[tokio::test]
async fn empty_ok_body_is_null() {
    let (base_url, server) = serve_once("200 OK", "").await;

    let value = gateway(base_url).fetch("/api/pets/10").await.unwrap();

    assert_eq!(value, Value::Null);
    server.await.unwrap();
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let (base_url, server) = serve_once("200 OK", "<html>").await;

    let err = gateway(base_url).fetch("/api/pets/10").await.unwrap_err();

    assert!(matches!(err, FetchError::Decode { .. }));
    server.await.unwrap();
}

#[tokio::test]
async fn refused_connection_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = gateway(base_url).fetch("/api/pets/10").await.unwrap_err();

    assert!(matches!(err, FetchError::Network { .. }));
}
