use dashboard_charts::api::{fetch_series, try_fetch_series};
use dashboard_charts::error::ChartError;
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serves one canned HTTP response on a loopback port and returns the
/// endpoint URL to fetch.
async fn spawn_one_shot_server(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept connection");
        let mut request = [0u8; 1024];
        let _ = stream.read(&mut request).await;

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream
            .write_all(response.as_bytes())
            .await
            .expect("write response");
    });

    format!("http://{addr}/api/chart-data")
}

#[tokio::test]
async fn successful_fetch_resolves_to_parsed_json() {
    let endpoint =
        spawn_one_shot_server("200 OK", r#"{"dates":["2024-01-01"],"sales":[10.5]}"#).await;

    let value = fetch_series(&endpoint).await.expect("dataset present");
    assert_eq!(value, json!({"dates": ["2024-01-01"], "sales": [10.5]}));
}

#[tokio::test]
async fn http_500_resolves_to_none_not_an_error() {
    let endpoint = spawn_one_shot_server("500 Internal Server Error", "{}").await;
    assert_eq!(fetch_series(&endpoint).await, None);
}

#[tokio::test]
async fn typed_fetch_surfaces_the_status_code() {
    let endpoint = spawn_one_shot_server("404 Not Found", "{}").await;

    let err = try_fetch_series(&endpoint).await.expect_err("404 must fail");
    assert!(matches!(err, ChartError::HttpStatus { status: 404 }));
}

#[tokio::test]
async fn non_json_body_resolves_to_none() {
    let endpoint = spawn_one_shot_server("200 OK", "<html>not json</html>").await;
    assert_eq!(fetch_series(&endpoint).await, None);
}

#[tokio::test]
async fn non_json_body_is_a_malformed_response_for_typed_fetch() {
    let endpoint = spawn_one_shot_server("200 OK", "sales: lots").await;

    let err = try_fetch_series(&endpoint).await.expect_err("body must fail");
    assert!(matches!(err, ChartError::MalformedResponse(_)));
}

#[tokio::test]
async fn unreachable_endpoint_resolves_to_none() {
    // Bind to grab a free port, then drop the listener so the connect is
    // refused.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    assert_eq!(fetch_series(&format!("http://{addr}/api/chart-data")).await, None);
}
