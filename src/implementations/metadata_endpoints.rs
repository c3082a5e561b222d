use std::time::Duration;

use async_trait::async_trait;

use crate::functions::{build_client, fetch_document};
use crate::structures::{Error, MetadataEndpoints, MirrorEntry, ReleaseInfo};
use crate::traits::MetadataSource;

impl MetadataEndpoints {
  pub const RELEASES_URL: &'static str = "https://archlinux.org/releng/releases/json/";
  pub const MIRRORS_URL: &'static str = "https://archlinux.org/mirrors/status/json/";

  pub fn new(releases_url: impl Into<String>, mirrors_url: impl Into<String>) -> Self {
    Self {
      releases_url: releases_url.into(),
      mirrors_url: mirrors_url.into(),
      timeout: Duration::from_secs(30),
      system_proxy: true,
    }
  }

  async fn fetch(&self, url: &str) -> Result<json::JsonValue, Error> {
    let client = build_client(self.timeout, self.system_proxy, true)?;
    fetch_document(&client, url).await
  }
}

impl Default for MetadataEndpoints {
  fn default() -> Self {
    Self::new(Self::RELEASES_URL, Self::MIRRORS_URL)
  }
}

#[async_trait]
impl MetadataSource for MetadataEndpoints {
  async fn fetch_release_info(&self) -> Result<ReleaseInfo, Error> {
    let document = self.fetch(&self.releases_url).await?;
    ReleaseInfo::from_json(&document, &self.releases_url)
  }

  async fn fetch_mirror_list(&self) -> Result<Vec<MirrorEntry>, Error> {
    let document = self.fetch(&self.mirrors_url).await?;
    MirrorEntry::list_from_json(&document, &self.mirrors_url)
  }
}
