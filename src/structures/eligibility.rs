/// Which mirrors get probed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Eligibility {
  /// https only, and the mirror has to be active and carry the iso images.
  #[default]
  SecureActiveIsos,
  /// http or https, the status flags are ignored.
  AnyTransport,
}
