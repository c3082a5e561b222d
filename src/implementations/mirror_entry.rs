use tracing::debug;

use crate::structures::{Error, MirrorEntry};
use crate::traits::AsString;

impl MirrorEntry {
  /// Returns `None` when one of the fields is absent or has the wrong type.
  pub fn from_json(entry: &json::JsonValue) -> Option<Self> {
    Some(Self {
      protocol: entry["protocol"].as_string_option()?,
      base_url: entry["url"].as_string_option()?,
      active: entry["active"].as_bool()?,
      hosts_isos: entry["isos"].as_bool()?,
    })
  }

  /// Reads the `urls` array of the mirror status document, skipping malformed entries.
  pub fn list_from_json(document: &json::JsonValue, url: &str) -> Result<Vec<Self>, Error> {
    let entries = &document["urls"];
    if !entries.is_array() {
      return Err(Error::MissingField("urls", url.to_string()));
    }
    let mut mirrors = Vec::with_capacity(entries.len());
    for entry in entries.members() {
      match Self::from_json(entry) {
        Some(mirror) => mirrors.push(mirror),
        None => debug!("Skipping malformed mirror entry: {}", entry.dump()),
      }
    }
    Ok(mirrors)
  }
}
