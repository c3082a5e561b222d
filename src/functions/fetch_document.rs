use tracing::{debug, instrument};

use crate::structures::Error;

/// GETs `url` and parses the body as json, any non-2xx status is an error.
#[instrument(skip(client))]
pub(crate) async fn fetch_document(client: &reqwest::Client, url: &str) -> Result<json::JsonValue, Error> {
  let parsed = url::Url::parse(url)?;
  let response = client.get(parsed).send().await?;
  let status = response.status();
  if !status.is_success() {
    return Err(Error::InvalidStatus(url.to_string(), status.as_u16()));
  }
  let body = response.bytes().await?;
  debug!("Received {} bytes from {}", body.len(), url);
  let text = String::from_utf8(body.to_vec())?;
  Ok(json::parse(&text)?)
}
