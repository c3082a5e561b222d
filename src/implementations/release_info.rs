use crate::structures::{Error, ReleaseInfo};
use crate::traits::AsString;

impl ReleaseInfo {
  pub fn new(latest_version: impl Into<String>) -> Self {
    Self {
      latest_version: latest_version.into(),
    }
  }

  /// Reads `latest_version` out of the releng release document.
  pub fn from_json(document: &json::JsonValue, url: &str) -> Result<Self, Error> {
    Ok(Self {
      latest_version: document["latest_version"].require_string("latest_version", url)?,
    })
  }

  /// Location of this release's x86_64 iso below a mirror's base url.
  pub fn iso_url(&self, base_url: &str) -> String {
    format!("{base}iso/{version}/archlinux-{version}-x86_64.iso", base = base_url, version = self.latest_version)
  }
}
