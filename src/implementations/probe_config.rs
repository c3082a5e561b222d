use std::time::Duration;

use tokio::sync::Semaphore;

use crate::structures::ProbeConfig;

impl ProbeConfig {
  pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

  /// Permits for the probe semaphore, a limit of zero still lets one probe through and
  /// anything above what a semaphore can hold is capped.
  pub(crate) fn permits(&self) -> Option<usize> {
    self.max_concurrent_probes.map(|limit| limit.clamp(1, Semaphore::MAX_PERMITS))
  }
}

impl Default for ProbeConfig {
  fn default() -> Self {
    Self {
      timeout: Self::DEFAULT_TIMEOUT,
      max_concurrent_probes: None,
      system_proxy: true,
    }
  }
}
