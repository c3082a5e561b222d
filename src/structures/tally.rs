/// Running count of probe outcomes, owned by the consumer of the result channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
  pub succeeded: usize,
  pub failed: usize,
  pub total: usize,
}
