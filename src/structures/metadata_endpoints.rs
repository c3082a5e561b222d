use std::time::Duration;

/// Fetches the release and mirror documents over http.
#[derive(Debug, Clone)]
pub struct MetadataEndpoints {
  pub releases_url: String,
  pub mirrors_url: String,
  pub timeout: Duration,
  pub system_proxy: bool,
}
