use crate::structures::{ProbeResult, Tally};

impl Tally {
  pub fn new(total: usize) -> Self {
    Self {
      succeeded: 0,
      failed: 0,
      total,
    }
  }

  pub fn record(&mut self, result: &ProbeResult) {
    if result.ok {
      self.succeeded += 1;
    } else {
      self.failed += 1;
    }
  }

  pub fn done(&self) -> usize {
    self.succeeded + self.failed
  }

  pub fn is_complete(&self) -> bool {
    self.done() == self.total
  }
}

impl std::fmt::Display for Tally {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "Testing {} of {} servers - OK: {}, Failure: {}", self.done(), self.total, self.succeeded, self.failed)
  }
}

#[cfg(test)]
mod tests {
  use crate::structures::{ProbeResult, Tally};

  #[test]
  fn records_and_renders_progress() {
    let mut tally = Tally::new(3);
    tally.record(&ProbeResult::reachable("a".to_string()));
    tally.record(&ProbeResult::unreachable("b".to_string()));
    assert!(!tally.is_complete());
    assert_eq!(tally.to_string(), "Testing 2 of 3 servers - OK: 1, Failure: 1");
    tally.record(&ProbeResult::reachable("c".to_string()));
    assert!(tally.is_complete());
    assert_eq!(tally.to_string(), "Testing 3 of 3 servers - OK: 2, Failure: 1");
  }

  #[test]
  fn empty_tally_is_complete() {
    assert!(Tally::new(0).is_complete());
    assert_eq!(Tally::new(0), Tally::default());
  }
}
