#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseInfo {
  pub latest_version: String,
}
