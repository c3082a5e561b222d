use async_trait::async_trait;

use crate::structures::{Error, MirrorEntry, ReleaseInfo};

pub trait AsString {
  fn as_string_option(&self) -> Option<String>;
  fn require_string(&self, field: &'static str, document: &str) -> Result<String, Error>;
}

impl AsString for json::JsonValue {
  fn as_string_option(&self) -> Option<String> {
    match *self {
      json::JsonValue::Short(ref value)  => Some(value.as_str().to_string()),
      json::JsonValue::String(ref value) => Some(value.clone()),
      _                                  => None
    }
  }

  fn require_string(&self, field: &'static str, document: &str) -> Result<String, Error> {
    self.as_string_option().ok_or_else(|| Error::MissingField(field, document.to_string()))
  }
}

/// Where the release version and the mirror list come from.
#[async_trait]
pub trait MetadataSource: Send + Sync {
  async fn fetch_release_info(&self) -> Result<ReleaseInfo, Error>;
  async fn fetch_mirror_list(&self) -> Result<Vec<MirrorEntry>, Error>;
}
