use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ProbeConfig {
  /// Covers connecting, the TLS handshake and receiving the response headers.
  pub timeout: Duration,
  /// `None` spawns every probe at once.
  pub max_concurrent_probes: Option<usize>,
  /// Honour the proxy environment variables.
  pub system_proxy: bool,
}
