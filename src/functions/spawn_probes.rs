use std::sync::Arc;

use futures::channel::mpsc::{self, UnboundedReceiver};
use tokio::sync::Semaphore;
use tracing::{debug, info};

use crate::functions::probe_url;
use crate::structures::{ProbeConfig, ProbeResult};

/// Starts one task per url and returns right away with the channel the results arrive on, and how many will arrive.
///
/// Every task sends exactly one `ProbeResult`. Must be called from within a tokio runtime.
pub fn spawn_probes(urls: Vec<String>, config: &ProbeConfig) -> (UnboundedReceiver<ProbeResult>, usize) {
  let total = urls.len();
  let (sender, receiver) = mpsc::unbounded();
  let config = Arc::new(config.clone());
  let semaphore = config.permits().map(|permits| Arc::new(Semaphore::new(permits)));
  info!("Spawning {} probes, limit: {:?}", total, config.permits());

  for url in urls {
    let sender = sender.clone();
    let config = config.clone();
    let semaphore = semaphore.clone();
    tokio::spawn(async move {
      let _permit = match semaphore {
        Some(semaphore) => semaphore.acquire_owned().await.ok(),
        None => None,
      };
      let result = probe_url(url, &config).await;
      if sender.unbounded_send(result).is_err() {
        debug!("Nobody is listening for probe results anymore");
      }
    });
  }
  (receiver, total)
}
