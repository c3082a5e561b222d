use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONNECTION};

/// Clients for probes never keep a connection around after the request, so every probe owns exactly one connection.
pub(crate) fn build_client(timeout: Duration, system_proxy: bool, reuse_connections: bool) -> reqwest::Result<reqwest::Client> {
  let mut builder = reqwest::Client::builder()
    .timeout(timeout)
    .user_agent(format!("mirror-checker ({})", env!("CARGO_PKG_VERSION")));
  if !reuse_connections {
    let mut headers = HeaderMap::new();
    headers.insert(CONNECTION, HeaderValue::from_static("close"));
    builder = builder
      .pool_max_idle_per_host(0)
      .default_headers(headers);
  }
  if !system_proxy {
    builder = builder.no_proxy();
  }
  builder.build()
}
