use futures::channel::mpsc::UnboundedReceiver;
use futures::StreamExt;
use tracing::{trace, warn};

use crate::structures::{ProbeResult, Tally};

/// Consumes exactly `total` results in the order they complete, calling `on_progress` after each one.
pub async fn collect_results(mut receiver: UnboundedReceiver<ProbeResult>, total: usize, mut on_progress: impl FnMut(&Tally)) -> Tally {
  let mut tally = Tally::new(total);
  while !tally.is_complete() {
    match receiver.next().await {
      Some(result) => {
        trace!("{} ok: {}", result.url, result.ok);
        tally.record(&result);
      },
      None => {
        warn!("Result channel closed after {} of {} probes, counting the rest as failed", tally.done(), total);
        tally.failed = total - tally.succeeded;
      },
    }
    on_progress(&tally);
  }
  tally
}
