use crate::structures::{ReleaseInfo, Tally};

/// Events emitted by `check_mirrors` while it runs.
#[derive(Debug)]
pub enum Report<'a> {
  LatestVersion(&'a ReleaseInfo),
  Candidates(usize),
  Progress(&'a Tally),
}
