use crate::structures::ProbeResult;

impl ProbeResult {
  pub fn reachable(url: String) -> Self {
    Self { url, ok: true }
  }

  pub fn unreachable(url: String) -> Self {
    Self { url, ok: false }
  }
}
