/// One entry of the mirror status document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorEntry {
  pub protocol: String,
  pub base_url: String,
  pub active: bool,
  pub hosts_isos: bool,
}
