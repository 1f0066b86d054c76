//! Shared fixtures and a minimal HTTP stub for the in-module tests.

use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// A forecast response with three hourly entries on a single date.
pub(crate) fn forecast_fixture() -> serde_json::Value {
    json!({
        "latitude": 51.5,
        "longitude": -0.120000124,
        "generationtime_ms": 0.23603439331054688,
        "utc_offset_seconds": 0,
        "timezone": "GMT",
        "timezone_abbreviation": "GMT",
        "elevation": 23.0,
        "hourly_units": {
            "time": "iso8601",
            "temperature_2m": "°C",
            "rain": "mm",
            "showers": "mm",
            "visibility": "m"
        },
        "hourly": {
            "time": ["2024-06-01T00:00", "2024-06-01T01:00", "2024-06-01T02:00"],
            "temperature_2m": [10.0, 12.0, 14.0],
            "rain": [0.0, 0.2, 0.4],
            "showers": [0.0, 0.0, 0.1],
            "visibility": [24140.0, 22300.0, 19880.0]
        }
    })
}

/// Serves `body` with `status_line` (e.g. `"200 OK"`) to the next
/// `connections` requests on a fresh local port, then stops listening.
/// Returns the URL to request.
pub(crate) async fn stub_forecast_server(
    status_line: &'static str,
    body: String,
    connections: usize,
) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub server");
    let addr = listener.local_addr().expect("stub server addr");

    tokio::spawn(async move {
        for _ in 0..connections {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            // Read until the end of the request headers; GETs carry no body.
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                match socket.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => {
                        request.extend_from_slice(&buf[..n]);
                        if request.windows(4).any(|w| w == b"\r\n\r\n") {
                            break;
                        }
                    }
                }
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{addr}/v1/forecast")
}
