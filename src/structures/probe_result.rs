#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
  pub url: String,
  pub ok: bool,
}
