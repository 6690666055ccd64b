use std::time::Duration;

use reqwest::Client;

/// Build the HTTP client used for synthesis calls
///
/// Keep-alive and pooling settings favor repeated calls to the same
/// backend over the process lifetime.
pub fn http_client(timeout: Duration) -> anyhow::Result<Client> {
    let mut headers = http::HeaderMap::new();
    headers.insert(http::header::CONNECTION, http::HeaderValue::from_static("keep-alive"));

    Client::builder()
        .timeout(timeout)
        .pool_idle_timeout(Some(Duration::from_secs(5)))
        .tcp_nodelay(true)
        .tcp_keepalive(Some(Duration::from_secs(60)))
        .default_headers(headers)
        .build()
        .map_err(|e| anyhow::anyhow!("failed to build synthesis HTTP client: {e}"))
}
