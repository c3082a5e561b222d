use reqwest::StatusCode;
use tracing::{debug, instrument, Level};

use crate::functions::build_client;
use crate::structures::{ProbeConfig, ProbeResult};

/// HEADs `url` on its own connection. Never fails, every error ends up as an unreachable result.
#[instrument(level = Level::DEBUG, skip(config))]
pub async fn probe_url(url: String, config: &ProbeConfig) -> ProbeResult {
  match head(&url, config).await {
    Ok(StatusCode::OK) => ProbeResult::reachable(url),
    Ok(status) => {
      debug!("{} responded with {}", url, status);
      ProbeResult::unreachable(url)
    },
    Err(error) => {
      debug!("Probing {} failed: {}", url, error);
      ProbeResult::unreachable(url)
    },
  }
}

async fn head(url: &str, config: &ProbeConfig) -> reqwest::Result<StatusCode> {
  let client = build_client(config.timeout, config.system_proxy, false)?;
  let response = client.head(url).send().await?;
  let status = response.status();
  // release the connection before reporting
  response.bytes().await?;
  Ok(status)
}
