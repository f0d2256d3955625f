//! Tests for fetching and printing an exchange-rate summary.
//!
//! Live tests hit open.er-api.com and only run with `--features api`.

use relay_core::RateSummary;
use relay_error::RelayErrorKind;
use relay_rates::{RateFetcher, TARGET_CURRENCY, parse_response, render_summary};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serves one canned HTTP reply on a local port and returns its address.
async fn serve_once(status: &'static str, body: &'static str) -> std::net::SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind local port");
    let addr = listener.local_addr().expect("local address");
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept connection");
        let mut request = vec![0u8; 8192];
        let _ = socket.read(&mut request).await;
        let reply = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(reply.as_bytes()).await.expect("write reply");
        let _ = socket.shutdown().await;
    });
    addr
}

fn render_body(body: &str) -> String {
    let response = parse_response(body).expect("body parses");
    let summary = RateSummary::from_response(&response, TARGET_CURRENCY);
    let mut out = Vec::new();
    render_summary(&summary, &mut out).expect("render succeeds");
    String::from_utf8(out).expect("utf-8 output")
}

#[test]
fn test_prints_base_timestamp_and_inr_rate() {
    let output = render_body(
        r#"{
            "base_code": "USD",
            "time_last_update_utc": "2024-01-01 00:00:01+00:00",
            "rates": {"USD": 1, "EUR": 0.91, "INR": 83.5}
        }"#,
    );

    assert!(output.contains("Base Currency: USD\n"));
    assert!(output.contains("Last Updated: 2024-01-01 00:00:01+00:00\n"));
    assert!(output.contains("INR Exchange Rate: 83.5\n"));
    assert!(output.contains("Live API Response from open.er-api.com\n"));
}

#[test]
fn test_missing_rates_prints_placeholder() {
    let output = render_body(
        r#"{
            "base_code": "USD",
            "time_last_update_utc": "2024-01-01 00:00:01+00:00"
        }"#,
    );

    assert!(output.contains("Base Currency: USD\n"));
    assert!(output.contains("INR Exchange Rate: None\n"));
}

#[test]
fn test_every_field_missing_still_prints() {
    let output = render_body(r#"{"result": "error", "error-type": "unsupported-code"}"#);

    assert!(output.contains("Base Currency: None\n"));
    assert!(output.contains("Last Updated: None\n"));
    assert!(output.contains("INR Exchange Rate: None\n"));
}

#[test]
fn test_output_layout() {
    let output = render_body(
        r#"{"base_code": "USD", "time_last_update_utc": "t", "rates": {"INR": 83.5}}"#,
    );
    let rule = "=".repeat(50);
    let expected = format!(
        "{rule}\nLive API Response from open.er-api.com\n{rule}\n\
         Base Currency: USD\nLast Updated: t\n\nINR Exchange Rate: 83.5\n{rule}\n"
    );
    assert_eq!(output, expected);
}

#[tokio::test]
async fn test_unreachable_endpoint_is_http_error() {
    // Nothing listens on the discard port locally
    let fetcher = RateFetcher::with_endpoint("http://127.0.0.1:9/v6/latest/USD");

    let err = fetcher.fetch().await.expect_err("closed port must fail");
    assert!(matches!(err.kind(), RelayErrorKind::Http(_)));
}

#[tokio::test]
async fn test_error_status_is_http_error_with_status() {
    let addr = serve_once("503 Service Unavailable", "down").await;
    let fetcher = RateFetcher::with_endpoint(format!("http://{addr}/v6/latest/USD"));

    let err = fetcher.fetch().await.expect_err("503 must fail");
    match err.kind() {
        RelayErrorKind::Http(e) => {
            assert_eq!(e.status, Some(503));
            assert_eq!(e.message, "down");
        }
        other => panic!("expected Http error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_non_json_body_is_json_error() {
    let addr = serve_once("200 OK", "<html>").await;
    let fetcher = RateFetcher::with_endpoint(format!("http://{addr}/v6/latest/USD"));

    let err = fetcher.fetch().await.expect_err("html must not parse");
    assert!(matches!(err.kind(), RelayErrorKind::Json(_)));
}

#[tokio::test]
async fn test_integer_rate_from_server_prints_as_integer() -> anyhow::Result<()> {
    let addr = serve_once(
        "200 OK",
        r#"{"base_code": "USD", "time_last_update_utc": "t", "rates": {"INR": 83}}"#,
    )
    .await;
    let response = RateFetcher::with_endpoint(format!("http://{addr}/v6/latest/USD"))
        .fetch()
        .await?;

    let summary = RateSummary::from_response(&response, TARGET_CURRENCY);
    let mut out = Vec::new();
    render_summary(&summary, &mut out)?;
    assert!(String::from_utf8(out)?.contains("INR Exchange Rate: 83\n"));
    Ok(())
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_live_endpoint() -> anyhow::Result<()> {
    let response = RateFetcher::new().fetch().await?;

    assert_eq!(response.base_code().as_deref(), Some("USD"));
    assert!(response.rate(TARGET_CURRENCY).is_some());
    Ok(())
}
